//! Lexical tokens produced by the [`Tokenizer`](crate::Tokenizer).

use alloc::string::String;
use core::fmt;

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A token whose class has not been decided yet. Used while a bare
    /// token accumulates; never escapes the tokenizer.
    Unidentified,
    /// One of the literals `true`, `false` or `null`.
    KeyWord,
    /// A single structural character: `{` `}` `[` `]` `,` `:`.
    SpecialChar,
    /// A numeric literal.
    Number,
    /// A quoted string (escapes already decoded) or a bare literal that
    /// is neither numeric nor a keyword.
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Unidentified => "Unidentified",
            TokenKind::KeyWord => "KeyWord",
            TokenKind::SpecialChar => "SpecialChar",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
        })
    }
}

/// A lexical unit extracted from raw JSON source.
///
/// Tokens are immutable once produced: the tokenizer creates them on
/// demand and the builder consumes each exactly once, unless it is
/// replayed via [`Tokenizer::push_back`](crate::Tokenizer::push_back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical class of this token.
    pub kind: TokenKind,
    /// Decoded text: escape sequences in quoted strings are already
    /// resolved; structural tokens hold their single character.
    pub text: String,
    /// Character offset at which the token began in the source text.
    pub offset: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: String, offset: usize) -> Self {
        Self { kind, text, offset }
    }

    /// Returns `true` if this token is the given structural character.
    #[must_use]
    pub fn is_special(&self, ch: char) -> bool {
        self.kind == TokenKind::SpecialChar && self.text.chars().eq(core::iter::once(ch))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.kind, self.text)
    }
}
