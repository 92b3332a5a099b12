//! Recursive-descent construction of the value tree.
//!
//! The builder consumes the tokenizer's output with one token of
//! lookahead (via pushback) and attaches every node to its parent only
//! after its matching close delimiter resolved; partially-parsed state
//! never escapes. Failures propagate immediately, no partial tree is
//! returned.

use alloc::string::ToString;

use crate::error::ParseError;
use crate::number::Number;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;
use crate::value::{Array, Map, Value};

/// Every shape a value position accepts; reported when a keyword token
/// carries unexpected text.
const VALUE_SHAPES: &[&str] = &["Boolean", "Number", "String", "Array", "Object"];

/// Parses one JSON value from `text`.
///
/// Trailing text after the first complete value is ignored.
///
/// # Errors
///
/// [`ParseError::Lexical`] when the text cannot be tokenized,
/// [`ParseError::Semantic`] when the token stream violates the grammar.
pub fn build(text: &str) -> Result<Value, ParseError> {
    let mut tokens = Tokenizer::new(text);
    build_value(&mut tokens)
}

fn build_value(tokens: &mut Tokenizer) -> Result<Value, ParseError> {
    let token = tokens.read_token()?;
    match token.kind {
        TokenKind::SpecialChar => {
            if token.is_special('{') {
                tokens.push_back(token);
                Ok(Value::Object(build_object(tokens)?))
            } else if token.is_special('[') {
                tokens.push_back(token);
                Ok(Value::Array(build_array(tokens)?))
            } else {
                Err(ParseError::Semantic {
                    expected: &["'{'", "'['"],
                    got: token.text,
                    offset: tokens.position(),
                })
            }
        }
        TokenKind::Number => match Number::from_literal(&token.text) {
            Some(number) => Ok(Value::Number(number)),
            None => Err(ParseError::Semantic {
                expected: &["Number"],
                got: token.text,
                offset: tokens.position(),
            }),
        },
        TokenKind::KeyWord => {
            if token.text == "null" {
                Ok(Value::Null)
            } else if token.text == "true" {
                Ok(Value::Boolean(true))
            } else if token.text == "false" {
                Ok(Value::Boolean(false))
            } else {
                Err(ParseError::Semantic {
                    expected: VALUE_SHAPES,
                    got: token.text,
                    offset: tokens.position(),
                })
            }
        }
        TokenKind::String | TokenKind::Unidentified => Ok(Value::String(token.text)),
    }
}

fn build_object(tokens: &mut Tokenizer) -> Result<Map, ParseError> {
    let mut map = Map::new();

    let token = tokens.read_token()?;
    if !token.is_special('{') {
        return Err(ParseError::Semantic {
            expected: &["'{'"],
            got: token.text,
            offset: tokens.position(),
        });
    }

    let token = tokens.read_token()?;
    if token.is_special('}') {
        return Ok(map);
    }
    tokens.push_back(token);

    loop {
        let key = tokens.read_token()?;
        if key.kind != TokenKind::String {
            return Err(ParseError::Semantic {
                expected: &["String"],
                got: key.kind.to_string(),
                offset: tokens.position(),
            });
        }

        let token = tokens.read_token()?;
        if !token.is_special(':') {
            return Err(ParseError::Semantic {
                expected: &["':'"],
                got: token.text,
                offset: tokens.position(),
            });
        }

        let value = build_value(tokens)?;
        // Duplicate keys are not special-cased: last write wins.
        map.insert(key.text, value);

        let token = tokens.read_token()?;
        if token.is_special(',') {
            continue;
        }
        if token.is_special('}') {
            return Ok(map);
        }
        return Err(ParseError::Semantic {
            expected: &["'}'", "','"],
            got: token.text,
            offset: tokens.position(),
        });
    }
}

fn build_array(tokens: &mut Tokenizer) -> Result<Array, ParseError> {
    let mut values = Array::new();

    let token = tokens.read_token()?;
    if !token.is_special('[') {
        return Err(ParseError::Semantic {
            expected: &["'['"],
            got: token.text,
            offset: tokens.position(),
        });
    }

    let token = tokens.read_token()?;
    if token.is_special(']') {
        return Ok(values);
    }
    tokens.push_back(token);

    loop {
        values.push(build_value(tokens)?);

        let token = tokens.read_token()?;
        if token.is_special(',') {
            continue;
        }
        if token.is_special(']') {
            return Ok(values);
        }
        return Err(ParseError::Semantic {
            expected: &["']'", "','"],
            got: token.text,
            offset: tokens.position(),
        });
    }
}
