//! Values a placeholder can resolve to.
//!
//! A [`ContextValue`] is one of:
//! - text, inserted verbatim
//! - a [`Number`], inserted in decimal form
//! - a [`NestedTemplate`], resolved against its own fields first

use std::borrow::Cow;
use std::fmt;

use crate::context::Context;
use crate::error::{ContextError, Result};
use crate::substitute::substitute;

/// Reserved key naming the template of a nested context.
pub const TEMPLATE_KEY: &str = "template";

/// Numeric placeholder value.
///
/// Stored in one of three variants to preserve precision. Rendering follows
/// the usual decimal form: integers as-is, floats without a trailing `.0`,
/// non-finite floats as `NaN`, `Infinity` and `-Infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 prints as "0"
            Number::F64(n) if n == 0.0 => f.write_str("0"),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

// Conversions from primitive types
impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// A template whose result becomes the value of an outer placeholder.
///
/// The template is resolved against `fields` only; the outer context is not
/// visible to it.
///
/// # Example
///
/// ```
/// use drafter_template::{render, Context, NestedTemplate};
///
/// let version = NestedTemplate::new(
///     "$MAJOR.$MINOR.$PATCH",
///     Context::new().with("$MAJOR", 2).with("$MINOR", 1).with("$PATCH", 0),
/// );
/// let context = Context::new().with("$NEXT_MINOR_VERSION", version);
///
/// assert_eq!(render("v$NEXT_MINOR_VERSION", &context), "v2.1.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NestedTemplate {
    /// Template text.
    pub template: String,
    /// Placeholders available to `template`.
    pub fields: Context,
}

impl NestedTemplate {
    /// Creates a nested template.
    pub fn new(template: impl Into<String>, fields: Context) -> Self {
        NestedTemplate {
            template: template.into(),
            fields,
        }
    }

    /// Resolves the template against its fields. No replacement rules apply.
    pub fn resolve(&self) -> String {
        tracing::trace!(
            fields = self.fields.len(),
            "resolving nested template"
        );
        substitute(&self.template, &self.fields)
    }
}

/// Splits a flat context carrying a `template` entry into a nested template.
impl TryFrom<Context> for NestedTemplate {
    type Error = ContextError;

    fn try_from(mut fields: Context) -> Result<Self> {
        match fields.remove(TEMPLATE_KEY) {
            Some(ContextValue::Text(template)) => Ok(NestedTemplate { template, fields }),
            Some(other) => Err(ContextError::TemplateNotText { kind: other.kind() }),
            None => Err(ContextError::MissingTemplate),
        }
    }
}

/// The value bound to a placeholder key.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// Text inserted verbatim.
    Text(String),
    /// Number inserted in decimal form.
    Number(Number),
    /// Template resolved against its own fields before insertion.
    Nested(NestedTemplate),
}

impl ContextValue {
    /// The replacement text for this value.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            ContextValue::Text(text) => Cow::Borrowed(text),
            ContextValue::Number(n) => Cow::Owned(n.to_string()),
            ContextValue::Nested(nested) => Cow::Owned(nested.resolve()),
        }
    }

    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContextValue::Text(_) => "text",
            ContextValue::Number(_) => "number",
            ContextValue::Nested(_) => "nested template",
        }
    }

    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContextValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            ContextValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested template, if this is one.
    pub fn as_nested(&self) -> Option<&NestedTemplate> {
        match self {
            ContextValue::Nested(nested) => Some(nested),
            _ => None,
        }
    }
}

impl From<&str> for ContextValue {
    fn from(text: &str) -> Self {
        ContextValue::Text(text.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(text: String) -> Self {
        ContextValue::Text(text)
    }
}

impl From<Number> for ContextValue {
    fn from(n: Number) -> Self {
        ContextValue::Number(n)
    }
}

impl From<NestedTemplate> for ContextValue {
    fn from(nested: NestedTemplate) -> Self {
        ContextValue::Nested(nested)
    }
}

macro_rules! number_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContextValue {
                fn from(n: $ty) -> Self {
                    ContextValue::Number(Number::from(n))
                }
            }
        )*
    };
}

number_value!(i32, i64, u32, u64, usize, f64);
