use std::fmt;
use std::io;

use crate::entity::{escape_attribute, escape_text};
use crate::error::ErrorKind;

/// Fallback encoder for values the serializer does not handle itself.
///
/// A [`Value::Structured`] content item is rendered by calling
/// [`encode`](`Encode::encode`) and writing the returned bytes to the
/// sink verbatim. The bytes are trusted to be a well-formed, UTF-8
/// encoded XML fragment; the serializer never escapes or inspects them.
/// This keeps the crate decoupled from any one structured-data
/// serializer: an adapter over serde, or anything else that can render
/// a value as XML, plugs in here.
///
/// If `encode` fails the serialization fails with
/// [`ErrorKind::Unencodable`], carrying the debug rendering of the
/// value.
pub trait Encode: fmt::Debug {
    /// Render the value as a complete XML fragment.
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;
}

/// Returned by an [`Encode`] implementation that cannot render its
/// value.
#[derive(Debug, Default)]
pub struct EncodeError;

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value cannot be encoded as an XML fragment")
    }
}

impl std::error::Error for EncodeError {}

/// A scalar or structured value in attribute or text position.
///
/// Anything that converts [`Into<Value>`] can be used directly as an
/// attribute value or content item; `Structured` is constructed
/// explicitly via [`Value::structured`] or
/// [`Content::structured`](`crate::Content::structured`).
#[derive(Debug)]
pub enum Value {
    /// Emitted as the literal `true` or `false`.
    Bool(bool),
    /// Emitted in plain decimal, `-` prefixed when negative.
    Int(i64),
    /// Emitted in plain decimal.
    Uint(u64),
    /// Emitted in fixed-point decimal with exactly six fractional
    /// digits, never in exponent notation.
    Float(f64),
    /// Emitted through text or attribute escaping depending on
    /// position.
    Text(String),
    /// Emitted by delegating to the value's [`Encode`] implementation.
    Structured(Box<dyn Encode>),
}

impl Value {
    /// Wrap a value that renders itself through the [`Encode`]
    /// fallback.
    pub fn structured(value: impl Encode + 'static) -> Self {
        Value::Structured(Box::new(value))
    }

    pub(crate) fn write_text<W: io::Write>(&self, w: &mut W) -> Result<(), ErrorKind> {
        self.write(w, false)
    }

    pub(crate) fn write_attribute<W: io::Write>(&self, w: &mut W) -> Result<(), ErrorKind> {
        self.write(w, true)
    }

    fn write<W: io::Write>(&self, w: &mut W, in_attribute: bool) -> Result<(), ErrorKind> {
        match self {
            Value::Bool(true) => w.write_all(b"true")?,
            Value::Bool(false) => w.write_all(b"false")?,
            Value::Int(i) => write!(w, "{}", i)?,
            Value::Uint(u) => write!(w, "{}", u)?,
            Value::Float(x) => write!(w, "{:.6}", x)?,
            Value::Text(text) => {
                let escaped = if in_attribute {
                    escape_attribute(text)
                } else {
                    escape_text(text)
                };
                w.write_all(escaped.as_bytes())?;
            }
            Value::Structured(value) => {
                let fragment = value
                    .encode()
                    .map_err(|_| ErrorKind::Unencodable(format!("{:?}", value)))?;
                w.write_all(&fragment)?;
            }
        }
        Ok(())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

macro_rules! value_from_int {
    ($variant:ident: $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )*
    };
}

value_from_int!(Int: i64, i8, i16, i32, i64, isize);
value_from_int!(Uint: u64, u8, u16, u32, u64, usize);
