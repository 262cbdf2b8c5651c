use crate::decl::{StoreError, TypeId};
use crate::graph::GraphError;
use crate::parser::ParseError;
use crate::pipeline::InvalidStageError;
use crate::review::CheckError;
use thiserror::Error;

/// Result type for hierc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the hierarchy resolver
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("declaration error: {0}")]
    Store(#[from] StoreError),

    #[error("hierarchy error: {0}")]
    Graph(#[from] GraphError),

    #[error("check error: {0}")]
    Check(#[from] CheckError),

    #[error("{0}")]
    Stage(#[from] InvalidStageError),

    #[error("unknown type '{0}'")]
    UnknownType(TypeId),

    #[error("{count} signature conflict(s) found in strict mode")]
    StrictConflicts { count: usize },

    #[error("internal resolver error: {message}")]
    Internal { message: String },
}
