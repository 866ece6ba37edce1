//! # jtree-core
//!
//! Decode JSON text into an owned tree of typed nodes, and render the tree
//! back into JSON text.
//!
//! The decoder is a strict backtracking recursive-descent parser: duplicate
//! object keys are rejected, the whole input must be consumed, numbers are
//! single precision and nesting depth is bounded.
//!
//! ## Quick start
//!
//! ```rust
//! use jtree_core::{decode, decode_object, Node};
//!
//! let root = decode(r#"{"name":"Alice","scores":[95,87.5]}"#).unwrap();
//! assert_eq!(root.get("name"), Some(&Node::from("Alice")));
//! assert_eq!(root.render(), r#"{ "name" : "Alice", "scores" : [ 95, 87.5 ] }"#);
//!
//! // Typed decoders also check the root variant
//! assert!(decode_object("[1, 2]").is_err());
//! assert!(decode_object(r#"{"a":1,"a":2}"#).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON text → [`Node`] (`decode`, `decode_object`, ..., [`Decoder`])
//! - [`encoder`] — [`Node`] → JSON text (`render`, `render_into`)
//! - [`node`] — the [`Node`] tree, [`NodeKind`] and the order-preserving [`Object`]
//! - [`error`] — [`DecodeError`] with an [`ErrorKind`] and byte offset
//! - [`unicode`] — single-codepoint UTF-8 decode/encode used by the string productions
//! - [`interop`] — `serde::Serialize` and `serde_json::Value` conversions

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod interop;
pub mod node;
pub mod unicode;

pub use decoder::{
    decode, decode_array, decode_bool, decode_null, decode_number, decode_object, decode_string,
    Decoder, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING,
};
pub use encoder::{render, render_into};
pub use error::{DecodeError, ErrorKind};
pub use node::{Node, NodeKind, Object};
