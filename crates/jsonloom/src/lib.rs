//! A self-contained JSON text processor.
//!
//! Converts JSON source text into an in-memory [`Value`] tree and
//! structured values back into JSON text, optionally pretty-printed.
//! Three pieces carry all the non-trivial logic: the pushback
//! [`Tokenizer`], the recursive-descent builder behind [`parse`], and
//! the classification-driven serializer behind [`serialize`].
//!
//! Parsing is synchronous and all-or-nothing: malformed text is rejected
//! wholesale with a [`ParseError`] carrying the text offset, and no
//! partial tree is ever returned.
//!
//! ```
//! use jsonloom::{parse, serialize, Value};
//!
//! let value = parse(r#"{"count":3,"greeting":"hi"}"#).unwrap();
//! assert_eq!(value["count"], Value::Number(3.into()));
//! assert_eq!(serialize(&value, false), r#"{"count":3,"greeting":"hi"}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod error;
mod extract;
mod number;
mod token;
mod tokenizer;
mod value;

pub use error::{ParseError, ValueError};
pub use extract::{serialize, Extract, Shape, Skipped};
pub use number::{Decimal, Number};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use value::{Array, Map, Value, ValueKind};

/// Parses JSON text into a [`Value`] tree.
///
/// The returned tree is owned by the caller with no lifetime tied to
/// `text`. Trailing text after the first complete value is ignored.
///
/// # Errors
///
/// [`ParseError::Lexical`] when the raw text cannot be tokenized,
/// [`ParseError::Semantic`] when well-formed tokens violate the grammar
/// at their position.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    builder::build(text)
}
