pub use token::{Token, TokenKind};

use crate::diagnostics::DiagnosticSink;
use crate::error::ScanError;

pub mod token;


/// Scans `source` to completion with a fresh scanner.
pub fn scan<'source>(source: &'source str, sink: &mut impl DiagnosticSink) -> Vec<Token<'source>> {
    Scanner::new(source).scan_tokens(sink)
}

pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Runs the scanner over the whole source. The returned tokens always end
    /// with exactly one `Eof`.
    pub fn scan_tokens(mut self, sink: &mut impl DiagnosticSink) -> Vec<Token<'source>> {
        loop {
            self.start = self.current;
            let Some(c) = self.advance() else {
                break;
            };
            self.scan_token(c, sink);
        }
        self.tokens.push(Token::new("", self.line, TokenKind::Eof));
        self.tokens
    }

    fn scan_token(&mut self, c: char, sink: &mut impl DiagnosticSink) {
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => match self.is_match('=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            '=' => match self.is_match('=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            '<' => match self.is_match('=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            '>' => match self.is_match('=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            '/' => match self.is_match('/') {
                true => self.skip_line_comment(),
                false => self.add_token(TokenKind::Slash),
            },
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            c => sink.report(self.line, &ScanError::UnexpectedCharacter(c).to_string()),
        }
    }

    // The newline is left for `scan_token` so the line counter sees it.
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(self.lexeme(), self.line, kind);
        #[cfg(feature = "debug_trace")]
        eprintln!("{token:?}");
        self.tokens.push(token);
    }

    fn is_match(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
