//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a sequence of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It skips
//! separating spaces, reads lowercase variable names and matches the
//! operator keywords literally, each with its mandatory trailing space.
//!
//! RECOGNIZED INPUT:
//! - Keywords: "NOT ", "AND ", "OR ", "-> " (the space is not part of the token)
//! - Variables: [a-z]+, followed by a space, ')' or end of input
//! - Parentheses: ( )

use crate::error::TokenizeError;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            cursor: 0,
            failed: false,
        }
    }

    /// Advances the lexer and returns the next token, `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, TokenizeError> {
        self.skip_whitespace();

        // The cursor only ever moves over ASCII, so it stays on a char boundary
        // and equals the character offset.
        let token = match self.rest().chars().next() {
            None => return Ok(None),
            Some('(') => Token::new(TokenKind::LeftParen, self.cursor),
            Some(')') => Token::new(TokenKind::RightParen, self.cursor),
            Some('N') => self.read_keyword(TokenKind::Negation)?,
            Some('A') => self.read_keyword(TokenKind::Conjunction)?,
            Some('O') => self.read_keyword(TokenKind::Disjunction)?,
            Some('-') => self.read_keyword(TokenKind::Implication)?,
            Some(ch) if ch.is_ascii_lowercase() => self.read_variable()?,
            Some(_) => return Err(self.error_at(self.cursor)),
        };

        log::trace!("lexed {:?} at {}..{}", token.value(), token.span.start, token.span.end);
        self.cursor = token.span.end;
        Ok(Some(token))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    fn skip_whitespace(&mut self) {
        while self.rest().starts_with(' ') {
            self.cursor += 1;
        }
    }

    /// Matches a keyword plus its trailing space at the cursor.
    fn read_keyword(&self, kind: TokenKind) -> Result<Token, TokenizeError> {
        let keyword = kind.value();
        let rest = self.rest();
        if rest.starts_with(keyword) && rest[keyword.len()..].starts_with(' ') {
            Ok(Token::new(kind, self.cursor))
        } else {
            Err(self.error_at(self.cursor))
        }
    }

    fn read_variable(&self) -> Result<Token, TokenizeError> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_lowercase).count();

        // A name glued to anything but a separator ("aaaAND b") is rejected
        // rather than split into two tokens.
        match rest.as_bytes().get(len) {
            None | Some(b' ') | Some(b')') => Ok(Token::variable(&rest[..len], self.cursor)),
            Some(_) => Err(self.error_at(self.cursor + len)),
        }
    }

    fn error_at(&self, cursor: usize) -> TokenizeError {
        TokenizeError { cursor }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, TokenizeError>;

    /// Yields tokens until end of input; stops for good after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Scans the whole formula. Empty input yields an empty sequence.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    log::debug!("tokenized {} tokens from {:?}", tokens.len(), input);
    Ok(tokens)
}
