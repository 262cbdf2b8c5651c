use super::span::Location;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unexpected token encountered
    #[error("unexpected token '{found}' at {location}: expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    /// Unexpected end of input
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    /// Invalid syntax
    #[error("invalid syntax at {location}: {message}")]
    InvalidSyntax {
        message: String,
        location: Location,
    },

    /// Lexical error
    #[error("lexical error at {location}")]
    Lexical { location: Location },
}

pub type Result<T> = std::result::Result<T, ParseError>;
