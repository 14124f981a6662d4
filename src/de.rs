//! Composite literal parsing.
//!
//! This module provides the [`Parser`], a lazy iterator over the fields of a
//! composite literal.
//!
//! ## Overview
//!
//! - **Single-pass**: Each call to `next` scans only as far as the next field
//! - **Lazy errors**: A malformed construct is reported when iteration reaches
//!   it, so a caller that stops early may never see it
//! - **Fused**: After the closing `)` or the first error, the parser yields `None`
//!
//! ## Usage
//!
//! ```rust
//! use pg_composite::{parse, Field};
//!
//! let mut fields = parse(r#"(1,,"a b")"#);
//! assert_eq!(fields.next(), Some(Ok(Field::from("1"))));
//! assert_eq!(fields.next(), Some(Ok(Field::Null)));
//! assert_eq!(fields.next(), Some(Ok(Field::from("a b"))));
//! assert_eq!(fields.next(), None);
//! ```
//!
//! Errors located after the consumed prefix stay unseen:
//!
//! ```rust
//! use pg_composite::parse;
//!
//! let mut fields = parse("(1,2)junk");
//! assert!(fields.next().unwrap().is_ok());
//! assert!(fields.next().unwrap().is_ok());
//! assert!(fields.next().unwrap().is_err());
//! ```

use crate::error::FormatErrorKind;
use crate::grammar::{CLOSE, DELIMITER, OPEN, QUOTE};
use crate::{grammar, Error, Field, Result};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Expecting the opening `(`.
    Open,
    /// Positioned at the first byte of a field.
    Field,
    /// Positioned right after a field, expecting `,` or `)`.
    Delimiter,
    Done,
}

/// Lazy parser over the fields of one composite literal.
///
/// Created via [`parse`](crate::parse) or [`Parser::new`]. Yields
/// `Result<Field>`; once an error has been yielded the parser is exhausted.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    state: State,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            state: State::Open,
        }
    }

    /// Creates a parser that yields nothing, for a SQL `NULL` composite.
    pub fn empty() -> Self {
        Parser {
            input: "",
            position: 0,
            state: State::Done,
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn fail(&mut self, position: usize, kind: FormatErrorKind) -> Error {
        tracing::debug!(position, %kind, "rejected composite literal");
        self.state = State::Done;
        Error::format(position, kind)
    }

    fn open(&mut self) -> Result<()> {
        if self.peek() != Some(OPEN) {
            return Err(self.fail(0, FormatErrorKind::MissingOpen));
        }
        self.position = 1;
        self.state = State::Field;
        Ok(())
    }

    fn parse_field(&mut self) -> Result<Field> {
        match self.peek() {
            None => Err(self.fail(self.position, FormatErrorKind::UnexpectedEnd)),
            Some(DELIMITER) | Some(CLOSE) => {
                self.state = State::Delimiter;
                Ok(Field::Null)
            }
            Some(QUOTE) => self.parse_quoted(),
            Some(_) => self.parse_unquoted(),
        }
    }

    fn parse_quoted(&mut self) -> Result<Field> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.position + 1;
        let mut i = start;

        // A quote followed by another quote is an escaped quote, not the end.
        let end = loop {
            match bytes[i..].iter().position(|&b| b == QUOTE) {
                None => return Err(self.fail(self.position, FormatErrorKind::UnterminatedQuote)),
                Some(offset) => {
                    let at = i + offset;
                    if bytes.get(at + 1) == Some(&QUOTE) {
                        i = at + 2;
                    } else {
                        break at;
                    }
                }
            }
        };

        let raw = &input[start..end];
        let text = grammar::unescape(raw);
        if text.len() != raw.len() {
            tracing::trace!(start, end, "unescaped quoted field");
        }

        self.position = end + 1;
        self.state = State::Delimiter;
        Ok(Field::Text(text))
    }

    fn parse_unquoted(&mut self) -> Result<Field> {
        let input = self.input;
        let start = self.position;
        let end = match input.as_bytes()[start..]
            .iter()
            .position(|&b| b == DELIMITER || b == CLOSE)
        {
            Some(offset) => start + offset,
            None => return Err(self.fail(input.len(), FormatErrorKind::UnexpectedEnd)),
        };

        self.position = end;
        self.state = State::Delimiter;
        Ok(Field::Text(input[start..end].to_string()))
    }

    /// Consumes the delimiter after a field. Returns `true` if another field follows.
    fn parse_delimiter(&mut self) -> Result<bool> {
        match self.peek() {
            Some(DELIMITER) => {
                self.position += 1;
                self.state = State::Field;
                Ok(true)
            }
            Some(CLOSE) => {
                self.position += 1;
                if self.position != self.input.len() {
                    return Err(self.fail(self.position, FormatErrorKind::TrailingContent));
                }
                self.state = State::Done;
                Ok(false)
            }
            None => Err(self.fail(self.position, FormatErrorKind::UnexpectedEnd)),
            // Only reachable after a quoted field.
            Some(_) => Err(self.fail(
                self.position,
                FormatErrorKind::ExpectedDelimiterAfterQuote,
            )),
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Field>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Done => return None,
                State::Open => {
                    if let Err(e) = self.open() {
                        return Some(Err(e));
                    }
                }
                State::Field => return Some(self.parse_field()),
                State::Delimiter => match self.parse_delimiter() {
                    Ok(true) => continue,
                    Ok(false) => return None,
                    Err(e) => return Some(Err(e)),
                },
            }
        }
    }
}

impl FusedIterator for Parser<'_> {}
