/*!
Typed values and the coercion rules that turn raw command-line text into
them.

Coercion is deliberately lenient: a command line is a conversation with a
human, and the rules below prefer a usable default over an error wherever
one exists. The only hard failure in this module is an unknown type *tag*,
which is a bug in the interface definition rather than in the user's input.
*/

use core::fmt;
use core::str::FromStr;

use crate::errors::DefinitionError;

/// The declared type of an option or positional value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueKind {
    #[default]
    String,
    Number,
    Boolean,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/**
Parse a declarative type tag. Rejecting an unknown tag here, while the tree
is being defined, is what keeps [`coerce`] itself infallible.
*/
impl FromStr for ValueKind {
    type Err = DefinitionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            _ => Err(DefinitionError::UnknownType {
                tag: tag.to_owned(),
            }),
        }
    }
}

/// A decoded option or positional value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Str(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Boolean,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/**
Convert a raw token into a [`Value`] of the declared kind.

- `string` is a passthrough.
- `number` parses as a float; input that fails to parse (or parses to NaN)
  yields the declared default if there is one, else `0`. Garbage numeric
  input is *not* an error, by design of the coercion contract.
- `boolean` treats the literal `"false"`, case-insensitively, as `false`
  and every other string as `true`. The empty string is therefore `true`,
  which is the same rule that makes bare flag presence truthy.
*/
#[must_use]
pub fn coerce(kind: ValueKind, raw: &str, default: Option<&Value>) -> Value {
    match kind {
        ValueKind::String => Value::Str(raw.to_owned()),
        ValueKind::Number => match raw.parse::<f64>() {
            Ok(number) if !number.is_nan() => Value::Number(number),
            _ => default.cloned().unwrap_or(Value::Number(0.0)),
        },
        ValueKind::Boolean => Value::Bool(!raw.eq_ignore_ascii_case("false")),
    }
}
