//! Coercers over `serde_json::Value`
//!
//! Request parameters arrive as strings; these turn them into typed JSON
//! values. A value that cannot be parsed is a coercion failure, a parsed
//! value outside the allowed set is a constraint violation. Both surface as
//! `ParamError::Syntax`.

use serde_json::Value;
use want_core::{Coerce, CoercionError};

/// Integer from a number or a decimal string
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

/// Float from a number or a numeric string
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

/// Boolean from a bool or `true/false`, `1/0`, `yes/no`, `on/off`
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

/// String from a string, number or bool
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

/// Integer coercer
#[inline]
#[must_use]
pub fn integer() -> Integer {
    Integer
}

/// Float coercer
#[inline]
#[must_use]
pub fn float() -> Float {
    Float
}

/// Boolean coercer
#[inline]
#[must_use]
pub fn boolean() -> Boolean {
    Boolean
}

/// String coercer
#[inline]
#[must_use]
pub fn string() -> Text {
    Text
}

/// Membership constraint
#[must_use]
pub fn one_of<I, T>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    OneOf {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}

impl Coerce<Value> for Integer {
    fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| CoercionError::coercion(format!("'{s}' is not an integer: {e}"))),
            other => Err(CoercionError::coercion(format!("{other} is not an integer"))),
        }
    }
}

impl Coerce<Value> for Float {
    fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| CoercionError::coercion(format!("{value} is not a finite number")))
    }
}

impl Coerce<Value> for Boolean {
    fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            Value::String(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
                _ => Err(CoercionError::coercion(format!("'{s}' is not a boolean"))),
            },
            other => Err(CoercionError::coercion(format!("{other} is not a boolean"))),
        }
    }
}

impl Coerce<Value> for Text {
    fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
        match value {
            Value::String(_) => Ok(value.clone()),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            other => Err(CoercionError::coercion(format!("{other} is not a string"))),
        }
    }
}

/// Accepts only listed values
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Value>,
}

impl OneOf {
    /// Allowed values
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Coerce<Value> for OneOf {
    fn coerce(&self, value: &Value) -> Result<Value, CoercionError> {
        if self.allowed.contains(value) {
            Ok(value.clone())
        } else {
            Err(CoercionError::constraint(format!(
                "{value} is not one of {}",
                Value::Array(self.allowed.clone())
            )))
        }
    }
}
