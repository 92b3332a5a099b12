//! Parse and access failure types.
//!
//! Parsing fails on exactly two levels: [`ParseError::Lexical`] when the
//! raw text cannot be tokenized, and [`ParseError::Semantic`] when
//! well-formed tokens appear in a grammatically invalid position. Both
//! carry the text offset for diagnostics; neither is ever recovered from
//! internally.

use alloc::format;
use alloc::string::String;

use thiserror::Error;

use crate::value::ValueKind;

/// A failure while turning JSON text into a value tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The raw text could not be tokenized: an unterminated quoted
    /// string, a bad or truncated escape sequence, or a quote opening
    /// inside a bare token.
    #[error("{message} at offset {offset}")]
    Lexical {
        /// Description of the malformed construct.
        message: String,
        /// Offset at which the malformed construct began.
        offset: usize,
    },
    /// Tokens are well formed but violate the grammar at the current
    /// position.
    #[error("{}", semantic_message(.expected, .got, .offset))]
    Semantic {
        /// The token texts (or kind, for the object-key position) the
        /// grammar would have accepted here.
        expected: &'static [&'static str],
        /// Raw text of the offending token, or its kind name when the
        /// grammar expected a specific kind.
        got: String,
        /// Scan offset when the token was rejected.
        offset: usize,
    },
}

fn semantic_message(expected: &[&'static str], got: &str, offset: &usize) -> String {
    if let [only] = expected {
        format!("expected {only} but got \"{got}\" at offset {offset}")
    } else {
        format!(
            "expected one of {} but got \"{got}\" at offset {offset}",
            expected.join(", ")
        )
    }
}

/// A failure while accessing or converting a parsed [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Member access on a value shape that has no members.
    #[error("value of type {0} does not have members")]
    NoMembers(ValueKind),
    /// The object has no entry under the requested key.
    #[error("no member named \"{0}\"")]
    MissingKey(String),
    /// Iteration requested on a shape that is not an array.
    #[error("cannot iterate over a {0}")]
    NotIterable(ValueKind),
    /// A narrowing conversion attempted from an incompatible shape.
    #[error("cannot convert {from} to {to}")]
    Conversion {
        /// Shape of the value the conversion was attempted on.
        from: ValueKind,
        /// Name of the requested target type.
        to: &'static str,
    },
}
