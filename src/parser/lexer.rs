use super::error::ParseError;
use super::span::Location;
use logos::Logos;

/// Token types for the Java declaration subset
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Keywords
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("throws")]
    Throws,

    // Modifiers
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("static")]
    Static,
    #[token("final")]
    Final,
    #[token("default")]
    Default,
    #[token("native")]
    Native,
    #[token("synchronized")]
    Synchronized,
    #[token("strictfp")]
    Strictfp,
    #[token("transient")]
    Transient,
    #[token("volatile")]
    Volatile,

    // Primitive type names
    #[token("void")]
    Void,
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("float")]
    Float,
    #[token("double")]
    Double,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Literals and operator runs only occur inside skipped method bodies
    // and field initializers; they are lexed loosely and never inspected.
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[regex(r"'([^'\\]|\\.)+'")]
    CharLiteral,
    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    NumberLiteral,
    #[regex(r"[+\-*/%=!&|^~?:]+", priority = 1)]
    Operator,

    // Identifiers
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,

    // Comments and whitespace (skipped by the lexer wrapper)
    #[regex(r"//[^\n]*", priority = 3)]
    LineComment,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 3)]
    BlockComment,
    #[regex(r"[ \t\r\n\u{FEFF}]+", priority = 3)]
    Whitespace,
}

impl Token {
    /// Check if this token is a declaration modifier
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Token::Public
                | Token::Protected
                | Token::Private
                | Token::Abstract
                | Token::Static
                | Token::Final
                | Token::Default
                | Token::Native
                | Token::Synchronized
                | Token::Strictfp
                | Token::Transient
                | Token::Volatile
        )
    }

    /// Canonical name of a primitive type token
    pub fn primitive_name(&self) -> Option<&'static str> {
        match self {
            Token::Void => Some("void"),
            Token::Boolean => Some("boolean"),
            Token::Byte => Some("byte"),
            Token::Short => Some("short"),
            Token::Int => Some("int"),
            Token::Long => Some("long"),
            Token::Char => Some("char"),
            Token::Float => Some("float"),
            Token::Double => Some("double"),
            _ => None,
        }
    }

    fn is_trivia(&self) -> bool {
        matches!(
            self,
            Token::LineComment | Token::BlockComment | Token::Whitespace
        )
    }
}

/// Lexical token with location information
#[derive(Debug, Clone)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub location: Location,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, location: Location) -> Self {
        Self { token, lexeme, location }
    }

    pub fn token_type(&self) -> &Token {
        &self.token
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is(&self, token_type: &Token) -> bool {
        &self.token == token_type
    }
}

/// Lexer for the Java declaration subset
pub struct Lexer<'a> {
    lexer: logos::Lexer<'a, Token>,
    line: usize,
    column: usize,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Token::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Tokenize the whole input, dropping comments and whitespace.
    pub fn tokenize(mut self) -> Result<Vec<LexicalToken>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.lexer.next() {
            let location = Location::new(self.line, self.column, self.offset);
            let lexeme = self.lexer.slice();
            match token {
                Ok(token) => {
                    if !token.is_trivia() {
                        tokens.push(LexicalToken::new(token, lexeme.to_string(), location));
                    }
                    self.update_position(lexeme);
                }
                Err(()) => return Err(ParseError::Lexical { location }),
            }
        }
        Ok(tokens)
    }

    fn update_position(&mut self, lexeme: &str) {
        for ch in lexeme.chars() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}
