//! Reader for the JavaScript array literals a documentation generator writes.
//!
//! Only the subset those files use is accepted: an optional
//! `var name =` binding, nested arrays, single- or double-quoted strings with
//! backslash escapes, integers, `true`/`false`/`null`, trailing commas, and
//! comments. The result is a [`serde_json::Value`] tree.

use docdex_core::{IndexError, Result};
use serde_json::Value;

const MAX_DEPTH: usize = 64;

/// Parse a whole file: optional binding, one literal, optional `;`.
pub fn parse_literal(text: &str) -> Result<Value> {
    let mut parser = Parser::new(text);
    parser.skip_trivia();
    parser.skip_binding()?;
    let value = parser.value(0)?;
    parser.skip_trivia();
    parser.eat(';');
    parser.skip_trivia();
    if parser.peek().is_some() {
        return Err(parser.error("unexpected trailing content"));
    }
    Ok(value)
}

struct Parser<'a> {
    rest: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            rest: text.strip_prefix('\u{feff}').unwrap_or(text),
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> IndexError {
        IndexError::Syntax {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            if self.rest.starts_with("//") {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if self.rest.starts_with("/*") {
                self.bump();
                self.bump();
                while !self.rest.is_empty() && !self.rest.starts_with("*/") {
                    self.bump();
                }
                self.bump();
                self.bump();
            } else if self.peek().is_some_and(char::is_whitespace) {
                self.bump();
            } else {
                return;
            }
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.rest;
        let mut len = 0;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                len += c.len_utf8();
                self.bump();
            } else {
                break;
            }
        }
        &start[..len]
    }

    /// `var searchData =`, `let x=`, `const x =`.
    fn skip_binding(&mut self) -> Result<()> {
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Ok(());
        }
        let keyword = self.identifier();
        if !matches!(keyword, "var" | "let" | "const") {
            return Err(self.error(format!("unexpected identifier `{keyword}`")));
        }
        self.skip_trivia();
        if self.identifier().is_empty() {
            return Err(self.error("expected a variable name"));
        }
        self.skip_trivia();
        if !self.eat('=') {
            return Err(self.error("expected `=`"));
        }
        self.skip_trivia();
        Ok(())
    }

    fn value(&mut self, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(self.error("arrays nested too deeply"));
        }
        match self.peek() {
            Some('[') => self.array(depth),
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                self.string(quote).map(Value::String)
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() => match self.identifier() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "null" => Ok(Value::Null),
                other => Err(self.error(format!("unexpected identifier `{other}`"))),
            },
            Some(c) => Err(self.error(format!("unexpected character `{c}`"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn array(&mut self, depth: usize) -> Result<Value> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            items.push(self.value(depth + 1)?);
            self.skip_trivia();
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            return Err(self.error("expected `,` or `]`"));
        }
    }

    fn string(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char> {
        let c = self.bump().ok_or_else(|| self.error("unterminated escape"))?;
        Ok(match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            '0' => '\0',
            'x' => self.hex_char(2)?,
            'u' => self.unicode_escape()?,
            other => other,
        })
    }

    fn hex_char(&mut self, digits: usize) -> Result<char> {
        let code = self.hex_code(digits)?;
        char::from_u32(code).ok_or_else(|| self.error("escape is not a valid character"))
    }

    /// `\uXXXX`, joining a UTF-16 surrogate pair written as two escapes.
    fn unicode_escape(&mut self) -> Result<char> {
        let high = self.hex_code(4)?;
        if !(0xD800..0xDC00).contains(&high) {
            return char::from_u32(high)
                .ok_or_else(|| self.error("unpaired low surrogate in escape"));
        }
        if !self.rest.starts_with("\\u") {
            return Err(self.error("unpaired high surrogate in escape"));
        }
        self.bump();
        self.bump();
        let low = self.hex_code(4)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(self.error("unpaired high surrogate in escape"));
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        char::from_u32(code).ok_or_else(|| self.error("escape is not a valid character"))
    }

    fn hex_code(&mut self, digits: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid hex escape"))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn number(&mut self) -> Result<Value> {
        let start = self.rest;
        let mut len = 0;
        while let Some(c) = self.peek() {
            if c == '-' || c == '.' || c.is_ascii_digit() {
                len += 1;
                self.bump();
            } else {
                break;
            }
        }
        let literal = &start[..len];
        if let Ok(n) = literal.parse::<i64>() {
            return Ok(Value::from(n));
        }
        literal
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.error(format!("invalid number `{literal}`")))
    }
}
