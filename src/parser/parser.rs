//! Recursive descent parser for the Java declaration subset.
//!
//! Produces `TypeDeclaration` records directly: only type headers and method
//! signatures matter to hierarchy resolution. Method bodies are skipped by
//! brace matching; fields, constructors and initializer blocks are skipped
//! entirely. Generic syntax is rejected.

use super::error::{ParseError, Result};
use super::lexer::{Lexer, LexicalToken, Token};
use crate::decl::{MethodSignature, TypeDeclaration, TypeId};

pub struct Parser {
    tokens: Vec<LexicalToken>,
    current: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self { tokens, current: 0 })
    }

    /// Parse the source into declaration records.
    pub fn parse(mut self) -> Result<Vec<TypeDeclaration>> {
        if self.check(&Token::Package) {
            self.skip_statement()?;
        }
        while self.check(&Token::Import) {
            self.skip_statement()?;
        }

        let mut decls = Vec::new();
        while !self.is_at_end() {
            if self.eat(&Token::Semicolon) {
                continue;
            }
            decls.push(self.parse_type_decl()?);
        }
        Ok(decls)
    }

    fn parse_type_decl(&mut self) -> Result<TypeDeclaration> {
        self.skip_annotations_and_modifiers()?;
        if self.eat(&Token::Interface) {
            self.parse_interface()
        } else if self.eat(&Token::Class) {
            self.parse_class()
        } else {
            Err(self.unexpected("'class' or 'interface'"))
        }
    }

    fn parse_interface(&mut self) -> Result<TypeDeclaration> {
        let name = self.expect_identifier("interface name")?;
        self.reject_generics()?;
        let mut decl = TypeDeclaration::interface(name.as_str());
        if self.eat(&Token::Extends) {
            for sup in self.parse_type_list()? {
                decl.interfaces.push(TypeId::new(sup));
            }
        }
        self.parse_body(&mut decl)?;
        Ok(decl)
    }

    fn parse_class(&mut self) -> Result<TypeDeclaration> {
        let name = self.expect_identifier("class name")?;
        self.reject_generics()?;
        let mut decl = TypeDeclaration::class(name.as_str());
        if self.eat(&Token::Extends) {
            decl.super_class = Some(TypeId::new(self.parse_type_ref()?));
        }
        if self.eat(&Token::Implements) {
            for sup in self.parse_type_list()? {
                decl.interfaces.push(TypeId::new(sup));
            }
        }
        self.parse_body(&mut decl)?;
        Ok(decl)
    }

    fn parse_body(&mut self, decl: &mut TypeDeclaration) -> Result<()> {
        self.expect(&Token::LBrace, "'{'")?;
        loop {
            if self.is_at_end() {
                return Err(ParseError::UnexpectedEndOfInput {
                    expected: "'}'".to_string(),
                });
            }
            if self.eat(&Token::RBrace) {
                return Ok(());
            }
            if let Some(signature) = self.parse_member(decl.id.as_str())? {
                decl.methods.push(signature);
            }
        }
    }

    /// Parses one member. Returns a signature for methods; fields,
    /// constructors and initializer blocks yield `None`.
    fn parse_member(&mut self, type_name: &str) -> Result<Option<MethodSignature>> {
        self.skip_annotations_and_modifiers()?;
        if self.eat(&Token::Semicolon) {
            return Ok(None);
        }
        if self.check(&Token::LBrace) {
            self.skip_block()?;
            return Ok(None);
        }
        if self.check_identifier_lexeme(type_name) && self.next_is(&Token::LParen) {
            self.advance();
            self.skip_constructor_tail()?;
            return Ok(None);
        }

        let return_type = self.parse_type_ref()?;
        let name = self.expect_identifier("member name")?;
        if self.check(&Token::LParen) {
            let param_types = self.parse_params()?;
            if self.eat(&Token::Throws) {
                let _ = self.parse_type_list()?;
            }
            if !self.eat(&Token::Semicolon) {
                self.skip_block()?;
            }
            Ok(Some(MethodSignature::new(name, param_types, return_type)))
        } else {
            self.skip_field_tail()?;
            Ok(None)
        }
    }

    fn parse_params(&mut self) -> Result<Vec<String>> {
        self.expect(&Token::LParen, "'('")?;
        let mut params = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(params);
        }
        loop {
            let mut ty = self.parse_type_ref()?;
            if self.eat(&Token::Ellipsis) {
                ty.push_str("[]");
            }
            let _ = self.expect_identifier("parameter name")?;
            // C-style array suffix attaches to the type
            while self.eat(&Token::LBracket) {
                self.expect(&Token::RBracket, "']'")?;
                ty.push_str("[]");
            }
            params.push(ty);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::RParen, "')'")?;
            return Ok(params);
        }
    }

    /// A primitive name or a (possibly qualified) reference type, with any
    /// `[]` suffixes folded into the name.
    fn parse_type_ref(&mut self) -> Result<String> {
        let mut name = match self.peek() {
            Some(tok) => {
                if let Some(primitive) = tok.token_type().primitive_name() {
                    self.advance();
                    primitive.to_string()
                } else if tok.is(&Token::Identifier) {
                    let mut qualified = tok.lexeme().to_string();
                    self.advance();
                    while self.eat(&Token::Dot) {
                        qualified.push('.');
                        qualified.push_str(&self.expect_identifier("type name")?);
                    }
                    qualified
                } else {
                    return Err(self.unexpected("type name"));
                }
            }
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    expected: "type name".to_string(),
                })
            }
        };
        self.reject_generics()?;
        while self.eat(&Token::LBracket) {
            self.expect(&Token::RBracket, "']'")?;
            name.push_str("[]");
        }
        Ok(name)
    }

    fn parse_type_list(&mut self) -> Result<Vec<String>> {
        let mut names = vec![self.parse_type_ref()?];
        while self.eat(&Token::Comma) {
            names.push(self.parse_type_ref()?);
        }
        Ok(names)
    }

    fn reject_generics(&mut self) -> Result<()> {
        match self.peek() {
            Some(tok) if tok.is(&Token::Lt) => Err(ParseError::InvalidSyntax {
                message: "generic types are not supported".to_string(),
                location: tok.location(),
            }),
            _ => Ok(()),
        }
    }

    fn skip_annotations_and_modifiers(&mut self) -> Result<()> {
        loop {
            if self.eat(&Token::At) {
                self.expect_identifier("annotation name")?;
                if self.check(&Token::LParen) {
                    self.skip_parens()?;
                }
            } else if self.peek().map(|t| t.token_type().is_modifier()).unwrap_or(false) {
                self.advance();
            } else {
                return Ok(());
            }
        }
    }

    /// Consume tokens through the terminating semicolon.
    fn skip_statement(&mut self) -> Result<()> {
        while let Some(tok) = self.peek() {
            let done = tok.is(&Token::Semicolon);
            self.advance();
            if done {
                return Ok(());
            }
        }
        Err(ParseError::UnexpectedEndOfInput {
            expected: "';'".to_string(),
        })
    }

    /// Field tail: everything up to the semicolon, allowing brace-delimited
    /// array initializers on the way.
    fn skip_field_tail(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(tok) if tok.is(&Token::Semicolon) => {
                    self.advance();
                    return Ok(());
                }
                Some(tok) if tok.is(&Token::LBrace) => self.skip_block()?,
                Some(_) => {
                    self.advance();
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        expected: "';'".to_string(),
                    })
                }
            }
        }
    }

    fn skip_constructor_tail(&mut self) -> Result<()> {
        self.skip_parens()?;
        if self.eat(&Token::Throws) {
            let _ = self.parse_type_list()?;
        }
        if !self.eat(&Token::Semicolon) {
            self.skip_block()?;
        }
        Ok(())
    }

    fn skip_block(&mut self) -> Result<()> {
        self.skip_balanced(&Token::LBrace, &Token::RBrace, "'}'")
    }

    fn skip_parens(&mut self) -> Result<()> {
        self.skip_balanced(&Token::LParen, &Token::RParen, "')'")
    }

    fn skip_balanced(&mut self, open: &Token, close: &Token, what: &str) -> Result<()> {
        self.expect(open, what)?;
        let mut depth = 1usize;
        while let Some(tok) = self.peek() {
            if tok.is(open) {
                depth += 1;
            } else if tok.is(close) {
                depth -= 1;
            }
            self.advance();
            if depth == 0 {
                return Ok(());
            }
        }
        Err(ParseError::UnexpectedEndOfInput {
            expected: what.to_string(),
        })
    }

    // Cursor helpers

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&LexicalToken> {
        self.tokens.get(self.current)
    }

    fn next_is(&self, token_type: &Token) -> bool {
        self.tokens
            .get(self.current + 1)
            .map(|t| t.is(token_type))
            .unwrap_or(false)
    }

    fn check(&self, token_type: &Token) -> bool {
        self.peek().map(|t| t.is(token_type)).unwrap_or(false)
    }

    fn check_identifier_lexeme(&self, lexeme: &str) -> bool {
        self.peek()
            .map(|t| t.is(&Token::Identifier) && t.lexeme() == lexeme)
            .unwrap_or(false)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn eat(&mut self, token_type: &Token) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token_type: &Token, what: &str) -> Result<()> {
        if self.eat(token_type) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        match self.peek() {
            Some(tok) if tok.is(&Token::Identifier) => {
                let name = tok.lexeme().to_string();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: tok.lexeme().to_string(),
                location: tok.location(),
            },
            None => ParseError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
        }
    }
}

/// Parse declaration source into records.
pub fn parse(source: &str) -> Result<Vec<TypeDeclaration>> {
    Parser::new(source)?.parse()
}
