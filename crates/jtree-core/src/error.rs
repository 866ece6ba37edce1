//! Error types for JSON decoding.

use crate::node::NodeKind;
use thiserror::Error;

/// Why a grammar production failed to match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No value production matched at this position.
    #[error("expected a value")]
    ExpectedValue,

    /// An object member did not start with a string key.
    #[error("expected a string key")]
    ExpectedKey,

    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,

    /// End of input inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,

    /// An object was not closed by `}` (or continued with `,`).
    #[error("unterminated object")]
    UnterminatedObject,

    /// An array was not closed by `]` (or continued with `,`).
    #[error("unterminated array")]
    UnterminatedArray,

    /// Unknown escape character or a `\u` escape without four hex digits.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// Malformed UTF-8 byte sequence inside a string.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,

    /// A `\u` escape naming a value that is not a Unicode scalar value.
    #[error("invalid Unicode codepoint")]
    InvalidCodepoint,

    /// The same key appeared twice in one object.
    #[error("duplicate object key \"{0}\"")]
    DuplicateKey(String),

    /// A `-` or digit sequence that does not form a number token.
    #[error("malformed number")]
    MalformedNumber,

    /// Non-whitespace text after a complete value.
    #[error("unexpected trailing input")]
    TrailingInput,

    /// The root parsed, but not as the requested variant.
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: NodeKind, found: NodeKind },

    /// Containers nested deeper than the configured maximum.
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

/// A failed decode: what went wrong and the byte offset where it was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("JSON decode error at byte {offset}: {kind}")]
pub struct DecodeError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl DecodeError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        DecodeError { kind, offset }
    }
}

/// Convenience alias used throughout jtree-core.
pub type Result<T> = std::result::Result<T, DecodeError>;
