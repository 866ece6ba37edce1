//! JSON Decoder — converts JSON text into an owned [`Node`] tree.
//!
//! The decoder is a backtracking recursive-descent parser with one matching
//! method per grammar production (value, object, members, member, array,
//! elements, element, string, string characters, string escape, number, bool,
//! null, whitespace). Each method either consumes a prefix of the remaining
//! input and yields what it matched, or fails and leaves the cursor exactly
//! where it found it.
//!
//! # Key design decisions
//!
//! - **Cursor, not slices**: the parser holds the whole input and a byte
//!   offset. Backtracking is `self.pos = start`; nothing is copied.
//! - **Strict objects**: a duplicate key fails the whole object rather than
//!   overwriting the earlier value. Empty containers only match through the
//!   explicit `{ }` / `[ ]` productions, and a `,` must be followed by
//!   another member or element, so trailing commas (`[1,]`, `{"a":1,}`) are
//!   rejected.
//! - **Single precision numbers**: the grammar validates the token, then the
//!   whole token is converted to the nearest `f32` in one rounding step, so a
//!   rendered number decodes back to the same value. Overflow yields an
//!   infinity and underflow a zero; neither is an error.
//! - **No surrogate pairing**: every `\uXXXX` escape is one codepoint on its
//!   own, so an escaped surrogate half is rejected as an invalid codepoint.
//! - **Bounded nesting**: containers deeper than [`Decoder::max_depth`] fail
//!   with [`ErrorKind::DepthLimitExceeded`] instead of exhausting the stack.
//!   The limit itself is capped at [`MAX_DEPTH_CEILING`].
//! - **Furthest failure wins**: productions only answer match / no-match, but
//!   each failure is noted with its offset. When the document fails, the
//!   failure noted furthest into the input is reported.

use crate::error::{DecodeError, ErrorKind, Result};
use crate::node::{Node, NodeKind, Object};
use crate::unicode;
use log::{debug, trace};

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Largest nesting limit a [`Decoder`] accepts. Each level costs several
/// stack frames, so deeper limits would overflow a 2 MiB thread stack.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Decode any JSON value using the default [`Decoder`].
pub fn decode(input: impl AsRef<[u8]>) -> Result<Node> {
    Decoder::default().decode(input)
}

/// Decode a document whose root must be an object.
pub fn decode_object(input: impl AsRef<[u8]>) -> Result<Object> {
    Decoder::default().decode_object(input)
}

/// Decode a document whose root must be an array.
pub fn decode_array(input: impl AsRef<[u8]>) -> Result<Vec<Node>> {
    Decoder::default().decode_array(input)
}

/// Decode a document whose root must be a string.
pub fn decode_string(input: impl AsRef<[u8]>) -> Result<String> {
    Decoder::default().decode_string(input)
}

/// Decode a document whose root must be a number.
pub fn decode_number(input: impl AsRef<[u8]>) -> Result<f32> {
    Decoder::default().decode_number(input)
}

/// Decode a document whose root must be `true` or `false`.
pub fn decode_bool(input: impl AsRef<[u8]>) -> Result<bool> {
    Decoder::default().decode_bool(input)
}

/// Decode a document whose root must be `null`.
pub fn decode_null(input: impl AsRef<[u8]>) -> Result<()> {
    Decoder::default().decode_null(input)
}

/// Decoder configuration. Every decode call is independent; a `Decoder` can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Decoder {
    pub fn new() -> Self {
        Decoder::default()
    }

    /// Set the maximum number of nested objects/arrays.
    ///
    /// Values above [`MAX_DEPTH_CEILING`] are clamped to it.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decode the whole input as a single JSON value of any kind.
    ///
    /// Leading and trailing whitespace is allowed; anything else after the
    /// value is an error.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Node> {
        self.parse_document(input.as_ref()).map(|(root, _)| root)
    }

    pub fn decode_object(&self, input: impl AsRef<[u8]>) -> Result<Object> {
        self.decode_as(input.as_ref(), NodeKind::Object, Node::into_object)
    }

    pub fn decode_array(&self, input: impl AsRef<[u8]>) -> Result<Vec<Node>> {
        self.decode_as(input.as_ref(), NodeKind::Array, Node::into_array)
    }

    pub fn decode_string(&self, input: impl AsRef<[u8]>) -> Result<String> {
        self.decode_as(input.as_ref(), NodeKind::String, Node::into_string)
    }

    pub fn decode_number(&self, input: impl AsRef<[u8]>) -> Result<f32> {
        self.decode_as(input.as_ref(), NodeKind::Number, |node| match node {
            Node::Number(n) => Ok(n),
            other => Err(other),
        })
    }

    pub fn decode_bool(&self, input: impl AsRef<[u8]>) -> Result<bool> {
        self.decode_as(input.as_ref(), NodeKind::Bool, |node| match node {
            Node::Bool(b) => Ok(b),
            other => Err(other),
        })
    }

    pub fn decode_null(&self, input: impl AsRef<[u8]>) -> Result<()> {
        self.decode_as(input.as_ref(), NodeKind::Null, |node| match node {
            Node::Null => Ok(()),
            other => Err(other),
        })
    }

    /// Decode the document, then require the root to be `expected`.
    ///
    /// A mismatch is reported at the offset where the root value starts.
    pub fn decode_kind(&self, input: impl AsRef<[u8]>, expected: NodeKind) -> Result<Node> {
        self.decode_as(input.as_ref(), expected, |node| {
            if node.kind() == expected {
                Ok(node)
            } else {
                Err(node)
            }
        })
    }

    fn decode_as<T>(
        &self,
        input: &[u8],
        expected: NodeKind,
        extract: impl FnOnce(Node) -> std::result::Result<T, Node>,
    ) -> Result<T> {
        let (root, start) = self.parse_document(input)?;
        extract(root).map_err(|found| {
            let err = DecodeError::new(
                ErrorKind::TypeMismatch {
                    expected,
                    found: found.kind(),
                },
                start,
            );
            debug!("{err}");
            err
        })
    }

    /// Returns the root and the offset where it starts.
    fn parse_document(&self, input: &[u8]) -> Result<(Node, usize)> {
        let mut parser = Parser::new(input, self.max_depth);
        let result = parser.parse_document();
        match &result {
            Ok((root, _)) => trace!("decoded {} from {} bytes", root.kind(), input.len()),
            Err(err) => debug!("{err}"),
        }
        result
    }
}

/// Cursor over one input buffer. Lives for a single decode call.
struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
    furthest: Option<DecodeError>,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8], max_depth: usize) -> Self {
        Parser {
            bytes,
            pos: 0,
            depth: 0,
            max_depth,
            furthest: None,
        }
    }

    fn parse_document(&mut self) -> Result<(Node, usize)> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(root) = self.parse_value() else {
            return Err(self
                .furthest
                .take()
                .unwrap_or_else(|| DecodeError::new(ErrorKind::ExpectedValue, start)));
        };
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(DecodeError::new(ErrorKind::TrailingInput, self.pos));
        }
        Ok((root, start))
    }

    // ------------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------------

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Advance over ASCII digits, returning how many were skipped.
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Run a production, rewinding the cursor if it does not match.
    fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let matched = production(self);
        if matched.is_none() {
            self.pos = start;
        }
        matched
    }

    /// Run a container production one nesting level deeper.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.max_depth {
            self.note(ErrorKind::DepthLimitExceeded(self.max_depth), self.pos);
            return None;
        }
        self.depth += 1;
        let matched = self.attempt(production);
        self.depth -= 1;
        matched
    }

    /// Remember a failure if it is the furthest one seen so far.
    fn note(&mut self, kind: ErrorKind, offset: usize) {
        if self.furthest.as_ref().is_none_or(|f| offset > f.offset) {
            self.furthest = Some(DecodeError::new(kind, offset));
        }
    }

    // ------------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------------

    fn parse_value(&mut self) -> Option<Node> {
        let start = self.pos;
        let value = self
            .parse_object()
            .map(Node::Object)
            .or_else(|| self.parse_array().map(Node::Array))
            .or_else(|| self.parse_string().map(Node::String))
            .or_else(|| self.parse_number().map(Node::Number))
            .or_else(|| self.parse_bool().map(Node::Bool))
            .or_else(|| self.parse_null().map(|()| Node::Null));
        if value.is_none() {
            self.note(ErrorKind::ExpectedValue, start);
        }
        value
    }

    // ------------------------------------------------------------------------
    // Objects
    // ------------------------------------------------------------------------

    fn parse_object(&mut self) -> Option<Object> {
        if self.peek() != Some(b'{') {
            return None;
        }
        self.nested(|p| {
            let empty = p.attempt(|p| {
                p.eat(b'{');
                p.skip_whitespace();
                p.eat(b'}').then(Object::new)
            });
            if empty.is_some() {
                return empty;
            }
            p.attempt(|p| {
                p.eat(b'{');
                let object = p.parse_members()?;
                if p.eat(b'}') {
                    Some(object)
                } else {
                    p.note(ErrorKind::UnterminatedObject, p.pos);
                    None
                }
            })
        })
    }

    /// One or more members separated by `,`. Fails as a whole on a duplicate key.
    fn parse_members(&mut self) -> Option<Object> {
        self.attempt(|p| {
            let mut object = Object::new();
            loop {
                let (offset, key, value) = p.parse_member()?;
                if let Err((key, _)) = object.try_insert(key, value) {
                    p.note(ErrorKind::DuplicateKey(key), offset);
                    return None;
                }
                if !p.eat(b',') {
                    break;
                }
            }
            Some(object)
        })
    }

    /// `ws string ws ':' element`, yielding the key's offset along with the pair.
    fn parse_member(&mut self) -> Option<(usize, String, Node)> {
        self.attempt(|p| {
            p.skip_whitespace();
            let offset = p.pos;
            let Some(key) = p.parse_string() else {
                p.note(ErrorKind::ExpectedKey, offset);
                return None;
            };
            p.skip_whitespace();
            if !p.eat(b':') {
                p.note(ErrorKind::ExpectedColon, p.pos);
                return None;
            }
            let value = p.parse_element()?;
            Some((offset, key, value))
        })
    }

    // ------------------------------------------------------------------------
    // Arrays
    // ------------------------------------------------------------------------

    fn parse_array(&mut self) -> Option<Vec<Node>> {
        if self.peek() != Some(b'[') {
            return None;
        }
        self.nested(|p| {
            let empty = p.attempt(|p| {
                p.eat(b'[');
                p.skip_whitespace();
                p.eat(b']').then(Vec::new)
            });
            if empty.is_some() {
                return empty;
            }
            p.attempt(|p| {
                p.eat(b'[');
                let items = p.parse_elements()?;
                if p.eat(b']') {
                    Some(items)
                } else {
                    p.note(ErrorKind::UnterminatedArray, p.pos);
                    None
                }
            })
        })
    }

    fn parse_elements(&mut self) -> Option<Vec<Node>> {
        self.attempt(|p| {
            let mut items = Vec::new();
            loop {
                items.push(p.parse_element()?);
                if !p.eat(b',') {
                    break;
                }
            }
            Some(items)
        })
    }

    fn parse_element(&mut self) -> Option<Node> {
        self.attempt(|p| {
            p.skip_whitespace();
            let value = p.parse_value()?;
            p.skip_whitespace();
            Some(value)
        })
    }

    // ------------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------------

    fn parse_string(&mut self) -> Option<String> {
        if self.peek() != Some(b'"') {
            return None;
        }
        self.attempt(|p| {
            p.eat(b'"');
            let mut characters = String::new();
            if !p.parse_string_characters(&mut characters) {
                return None;
            }
            p.eat(b'"').then_some(characters)
        })
    }

    /// Decode characters up to (not including) the closing quote.
    fn parse_string_characters(&mut self, out: &mut String) -> bool {
        let start = self.pos;
        let start_len = out.len();
        loop {
            let rest = &self.bytes[self.pos..];
            if rest.is_empty() {
                self.note(ErrorKind::UnterminatedString, self.pos);
                break;
            }
            let Some((ch, len)) = unicode::decode_codepoint(rest) else {
                self.note(ErrorKind::InvalidUtf8, self.pos);
                break;
            };
            match ch {
                '"' => return true,
                '\\' => {
                    self.pos += 1;
                    if !self.parse_string_escape(out) {
                        break;
                    }
                }
                _ => {
                    if !unicode::encode_codepoint(u32::from(ch), out) {
                        self.note(ErrorKind::InvalidCodepoint, self.pos);
                        break;
                    }
                    self.pos += len;
                }
            }
        }
        self.pos = start;
        out.truncate(start_len);
        false
    }

    /// Decode the escape whose backslash was just consumed.
    fn parse_string_escape(&mut self, out: &mut String) -> bool {
        let backslash = self.pos - 1;
        let simple = match self.peek() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => return self.parse_unicode_escape(out, backslash),
            _ => {
                self.note(ErrorKind::InvalidEscape, backslash);
                return false;
            }
        };
        out.push(simple);
        self.pos += 1;
        true
    }

    /// `u` followed by exactly four hex digits, taken as one codepoint.
    fn parse_unicode_escape(&mut self, out: &mut String, backslash: usize) -> bool {
        let codepoint = self.bytes.get(self.pos + 1..self.pos + 5).and_then(|hex| {
            hex.iter()
                .try_fold(0u32, |acc, &digit| Some(acc * 16 + char::from(digit).to_digit(16)?))
        });
        let Some(codepoint) = codepoint else {
            self.note(ErrorKind::InvalidEscape, backslash);
            return false;
        };
        if !unicode::encode_codepoint(codepoint, out) {
            self.note(ErrorKind::InvalidCodepoint, backslash);
            return false;
        }
        self.pos += 5;
        true
    }

    // ------------------------------------------------------------------------
    // Numbers and literals
    // ------------------------------------------------------------------------

    fn parse_number(&mut self) -> Option<f32> {
        if !matches!(self.peek(), Some(b'-' | b'0'..=b'9')) {
            return None;
        }
        self.attempt(|p| {
            let start = p.pos;
            p.eat(b'-');

            match p.peek() {
                Some(b'0') => p.pos += 1,
                Some(b'1'..=b'9') => {
                    p.skip_digits();
                }
                _ => {
                    p.note(ErrorKind::MalformedNumber, p.pos);
                    return None;
                }
            }

            if p.eat(b'.') && p.skip_digits() == 0 {
                p.note(ErrorKind::MalformedNumber, p.pos);
                return None;
            }

            if matches!(p.peek(), Some(b'e' | b'E')) {
                p.pos += 1;
                if matches!(p.peek(), Some(b'+' | b'-')) {
                    p.pos += 1;
                }
                if p.skip_digits() == 0 {
                    p.note(ErrorKind::MalformedNumber, p.pos);
                    return None;
                }
            }

            p.token_as_f32(start)
        })
    }

    /// Convert the validated number token starting at `start` with one rounding.
    fn token_as_f32(&mut self, start: usize) -> Option<f32> {
        let parsed = std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|token| token.parse::<f32>().ok());
        if parsed.is_none() {
            self.note(ErrorKind::MalformedNumber, start);
        }
        parsed
    }

    fn parse_bool(&mut self) -> Option<bool> {
        if self.eat_literal(b"true") {
            Some(true)
        } else if self.eat_literal(b"false") {
            Some(false)
        } else {
            None
        }
    }

    fn parse_null(&mut self) -> Option<()> {
        self.eat_literal(b"null").then_some(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\n' | b'\r' | b'\t')) {
            self.pos += 1;
        }
    }
}
