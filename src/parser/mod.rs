//! Declaration front end.
//!
//! Lexes and parses the Java declaration subset (type headers and method
//! signatures) into `TypeDeclaration` records for the store. Method bodies
//! are structurally skipped; resolution never looks inside them.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::ParseError;
pub use lexer::{Lexer, LexicalToken, Token};
pub use parser::Parser;
pub use span::Location;

use crate::decl::TypeDeclaration;

/// Parse declaration source into records
pub fn parse_decls(source: &str) -> Result<Vec<TypeDeclaration>, ParseError> {
    parser::parse(source)
}
