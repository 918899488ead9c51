// SPDX-License-Identifier: Apache-2.0

//! A single-pass scanner and a streaming formatter for JSON-like text.
//!
//! The scanner walks a complete in-memory document token by token without
//! building a tree. String and symbol payloads are decoded into one fixed
//! scratch buffer that is reused on every call, so scanning allocates
//! nothing. The formatter emits compact text the other way around, tracking
//! comma placement with a single bit per open nesting level. A small pool
//! recycles formatter instances so output buffers are not reallocated per
//! use.
//!
//! ```
//! use jscan::{Scanner, Token};
//!
//! let mut scanner = Scanner::new(r#"{"a":1,"b":[true]}"#);
//! assert_eq!(scanner.next(), Token::Object);
//! assert_eq!(scanner.next(), Token::Setter);
//! assert!(scanner.str_eq("a"));
//! assert_eq!(scanner.next(), Token::Int);
//! assert_eq!(scanner.int_value(), 1);
//! scanner.next(); // Setter "b"
//! let tok = scanner.next(); // Array
//! scanner.skip(tok); // discard the whole array
//! assert_eq!(scanner.next(), Token::End);
//! assert_eq!(scanner.next(), Token::Eof);
//! ```
//!
//! Scratch content is only valid until the next call to
//! [`Scanner::next`]; callers that need to keep a decoded string must copy
//! it out first. See [`Scanner::str_value`].
//!
//! The crate is `no_std` and only requires `alloc` (for the formatter's
//! output buffer, the pool and the optional [`Value`] tree).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod error;
mod escape;
mod formatter;
mod number;
mod pool;
mod scanner;
mod scratch;
mod token;
mod value;

pub use error::ScanError;
pub use formatter::Formatter;
pub use pool::{FormatterPool, PooledFormatter};
pub use scanner::Scanner;
pub use scratch::SCRATCH_MAX;
pub use token::{Grammar, Token};
pub use value::Value;
