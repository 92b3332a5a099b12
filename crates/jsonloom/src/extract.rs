//! Serialization of structured values into JSON text.
//!
//! The serializer never inspects host types. It asks each value to
//! classify itself as one of the JSON shapes through the [`Extract`]
//! trait and walks the result; opaque host objects join by reflecting
//! their public fields into [`Shape::Mapping`], which is the single
//! place the serializer defers to the host.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use crate::number::{Decimal, Number};
use crate::value::Value;

/// Characters emitted literally inside quoted output; everything else
/// becomes a `\uXXXX` escape. Deliberately stricter than minimal JSON
/// escaping and kept byte-for-byte for output compatibility.
const SAFE_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-+_.,~^ ()[]{}%@/!?#&*:";

/// How a value presents itself to the serializer.
pub enum Shape<'a> {
    /// The null value.
    Null,
    /// A boolean, emitted as lowercase `true`/`false`.
    Boolean(bool),
    /// Culture-invariant decimal text: `.` as the decimal point, no
    /// grouping separators.
    Number(Cow<'a, str>),
    /// Text, emitted quoted with the fixed allow-list encoding.
    Text(Cow<'a, str>),
    /// An ordered sequence, emitted with `[` `]`.
    Sequence(Vec<&'a dyn Extract>),
    /// A keyed mapping, emitted with `{` `}`.
    Mapping(Vec<(Cow<'a, str>, &'a dyn Extract)>),
    /// Reported by behavior-valued mapping entries (callbacks and the
    /// like) so they are omitted from the output instead of serialized
    /// as data.
    Skipped,
}

/// Classification seam between the serializer and serializable values.
///
/// # Examples
///
/// An opaque host object reflects its public readable fields into a
/// mapping:
///
/// ```
/// use jsonloom::{serialize, Extract, Shape};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Extract for Point {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Mapping(vec![
///             ("x".into(), &self.x as &dyn Extract),
///             ("y".into(), &self.y as &dyn Extract),
///         ])
///     }
/// }
///
/// assert_eq!(serialize(&Point { x: 1, y: 2 }, false), r#"{"x":1,"y":2}"#);
/// ```
pub trait Extract {
    /// Classifies this value as one of the JSON shapes.
    fn shape(&self) -> Shape<'_>;
}

/// Serializes `value` as JSON text.
///
/// With `pretty`, a newline and one tab per nesting level precede every
/// bracket and entry, and a space follows each `:`. Leading and trailing
/// line breaks are trimmed from the final text either way.
#[must_use]
pub fn serialize<T: Extract + ?Sized>(value: &T, pretty: bool) -> String {
    let mut out = String::new();
    write_shape(&mut out, &value.shape(), pretty, 0);
    out.trim_matches(['\r', '\n']).to_string()
}

fn write_shape(out: &mut String, shape: &Shape<'_>, pretty: bool, depth: usize) {
    match shape {
        // A skipped value outside a mapping entry still has to render
        // as something; only mappings omit entries.
        Shape::Null | Shape::Skipped => out.push_str("null"),
        Shape::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Shape::Number(text) => out.push_str(text),
        Shape::Text(text) => write_quoted(out, text),
        Shape::Sequence(items) => {
            let mut depth = depth;
            if pretty {
                out.push('\n');
                push_tabs(out, depth);
            }
            out.push('[');
            if pretty {
                depth += 1;
            }
            let mut first = true;
            for item in items {
                if first {
                    first = false;
                } else {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_tabs(out, depth);
                }
                write_shape(out, &item.shape(), pretty, depth);
            }
            if pretty {
                depth -= 1;
                out.push('\n');
                push_tabs(out, depth);
            }
            out.push(']');
        }
        Shape::Mapping(entries) => {
            let mut depth = depth;
            if pretty {
                out.push('\n');
                push_tabs(out, depth);
            }
            out.push('{');
            if pretty {
                depth += 1;
            }
            let mut first = true;
            for (key, value) in entries {
                let shape = value.shape();
                if matches!(shape, Shape::Skipped) {
                    continue;
                }
                if first {
                    first = false;
                } else {
                    out.push(',');
                }
                if pretty {
                    out.push('\n');
                    push_tabs(out, depth);
                }
                write_quoted(out, key);
                out.push(':');
                if pretty {
                    out.push(' ');
                }
                write_shape(out, &shape, pretty, depth);
            }
            if pretty {
                depth -= 1;
                out.push('\n');
                push_tabs(out, depth);
            }
            out.push('}');
        }
    }
}

fn push_tabs(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

/// Quotes `text`, escaping every character outside [`SAFE_CHARS`] as an
/// uppercase `\uXXXX` escape; characters beyond the basic multilingual
/// plane emit a UTF-16 surrogate pair, so decoding the output restores
/// the original text exactly.
fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        if SAFE_CHARS.contains(ch) {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for &unit in ch.encode_utf16(&mut units).iter() {
                let _ = write!(out, "\\u{unit:04X}");
            }
        }
    }
    out.push('"');
}

impl Extract for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Null,
            Value::Boolean(b) => Shape::Boolean(*b),
            Value::Number(n) => Shape::Number(Cow::Owned(n.to_string())),
            Value::String(s) => Shape::Text(Cow::Borrowed(s.as_str())),
            Value::Array(values) => {
                Shape::Sequence(values.iter().map(|v| v as &dyn Extract).collect())
            }
            Value::Object(map) => Shape::Mapping(
                map.iter()
                    .map(|(k, v)| (Cow::Borrowed(k.as_str()), v as &dyn Extract))
                    .collect(),
            ),
        }
    }
}

impl Extract for Number {
    fn shape(&self) -> Shape<'_> {
        Shape::Number(Cow::Owned(self.to_string()))
    }
}

impl Extract for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Boolean(*self)
    }
}

macro_rules! extract_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl Extract for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Number(Cow::Owned(self.to_string()))
            }
        }
    )*};
}

extract_numeric!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64, Decimal);

impl Extract for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(Cow::Borrowed(self))
    }
}

impl Extract for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(Cow::Borrowed(self.as_str()))
    }
}

impl Extract for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(Cow::Owned(self.to_string()))
    }
}

impl<T: Extract> Extract for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }
}

impl<T: Extract + ?Sized> Extract for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Extract> Extract for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Extract).collect())
    }
}

impl<T: Extract> Extract for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<V: Extract> Extract for BTreeMap<String, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_str()), v as &dyn Extract))
                .collect(),
        )
    }
}

/// Marker whose shape is [`Shape::Skipped`].
///
/// Hosts reflect behavior-valued members (callbacks, closures) as this
/// type to keep them out of serialized output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skipped;

impl Extract for Skipped {
    fn shape(&self) -> Shape<'_> {
        Shape::Skipped
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{serialize, Extract, Shape, Skipped};
    use crate::value::Value;

    #[test]
    fn scalars_render_bare() {
        assert_eq!(serialize(&Value::Null, false), "null");
        assert_eq!(serialize(&true, false), "true");
        assert_eq!(serialize(&false, false), "false");
        assert_eq!(serialize(&42i32, false), "42");
        assert_eq!(serialize(&-3i64, false), "-3");
    }

    #[test]
    fn allow_list_escapes_printable_ascii_outside_it() {
        assert_eq!(
            serialize("a;b<c>d=e", false),
            "\"a\\u003Bb\\u003Cc\\u003Ed\\u003De\""
        );
    }

    #[test]
    fn allow_list_passes_its_own_characters() {
        let safe = "AZaz09-+_.,~^ ()[]{}%@/!?#&*:";
        let mut expected = String::from('"');
        expected.push_str(safe);
        expected.push('"');
        assert_eq!(serialize(safe, false), expected);
    }

    #[test]
    fn control_characters_escape_uppercase() {
        assert_eq!(serialize("a\nb", false), "\"a\\u000Ab\"");
        assert_eq!(serialize("é", false), "\"\\u00E9\"");
    }

    #[test]
    fn astral_characters_emit_a_surrogate_pair() {
        assert_eq!(serialize("😀", false), "\"\\uD83D\\uDE00\"");
    }

    #[test]
    fn skipped_mapping_entries_are_omitted() {
        struct Handler {
            name: &'static str,
            on_change: Skipped,
        }

        impl Extract for Handler {
            fn shape(&self) -> Shape<'_> {
                Shape::Mapping(vec![
                    (Cow::Borrowed("name"), &self.name as &dyn Extract),
                    (Cow::Borrowed("on_change"), &self.on_change as &dyn Extract),
                ])
            }
        }

        let handler = Handler {
            name: "resize",
            on_change: Skipped,
        };
        assert_eq!(serialize(&handler, false), r#"{"name":"resize"}"#);
    }

    #[test]
    fn host_sequences_and_mappings_serialize() {
        let items: Vec<i32> = vec![1, 2, 3];
        assert_eq!(serialize(&items, false), "[1,2,3]");

        let mut map = alloc::collections::BTreeMap::new();
        map.insert("k".to_string(), 1u8);
        assert_eq!(serialize(&map, false), r#"{"k":1}"#);
    }

    #[test]
    fn pretty_layout_uses_tabs_and_a_space_after_colons() {
        let value = crate::parse(r#"{"a":1}"#).unwrap();
        assert_eq!(serialize(&value, true), "{\n\t\"a\": 1\n}");
    }

    #[test]
    fn pretty_empty_mapping_keeps_the_brace_newline() {
        let value = crate::parse("{}").unwrap();
        assert_eq!(serialize(&value, true), "{\n}");
    }

    #[test]
    fn option_none_is_null() {
        let none: Option<i32> = None;
        assert_eq!(serialize(&none, false), "null");
        assert_eq!(serialize(&Some(5i32), false), "5");
    }
}
