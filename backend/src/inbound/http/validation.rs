//! Declarative request validation for inbound HTTP adapters.
//!
//! Handlers declare each field's constraint on a [`ValidationGate`], which
//! records every violation instead of stopping at the first. Nothing else
//! runs until [`ValidationGate::finish_with`] reports a clean gate.

use std::str::FromStr;

use serde_json::{Number, Value};

use crate::domain::{Error, FieldLocation, FieldViolation};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Scalar rendered as text the way form-style validators see it.
///
/// Objects, arrays and `null` have no textual form and fail every check.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accepts `true`, `false`, `1` and `0`.
fn coerce_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Optional sign followed by decimal digits, leading zeros allowed.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Classify a JSON number; fractional values are rejected.
fn integral_number(number: &Number) -> Option<IntegerInput> {
    if let Some(exact) = number.as_i64() {
        return Some(IntegerInput::Number(exact));
    }
    if number.is_u64() {
        return Some(IntegerInput::Unaddressable);
    }
    let float = number.as_f64().filter(|float| float.fract() == 0.0)?;
    // `as` saturates, so the round trip only holds in range.
    let truncated = float as i64;
    if truncated as f64 == float && truncated != i64::MAX {
        Some(IntegerInput::Number(truncated))
    } else {
        Some(IntegerInput::Unaddressable)
    }
}

/// An integer field that passed its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntegerInput {
    /// A JSON number with no fractional part.
    Number(i64),
    /// Integer-shaped but never equal to a stored id: decimal text, or a
    /// number outside the `i64` range.
    Unaddressable,
}

/// Collects field violations for one request location.
#[derive(Debug)]
pub(crate) struct ValidationGate {
    location: FieldLocation,
    violations: Vec<FieldViolation>,
}

impl ValidationGate {
    pub(crate) fn new(location: FieldLocation) -> Self {
        Self {
            location,
            violations: Vec::new(),
        }
    }

    fn reject(&mut self, field: FieldName, message: String, value: Option<&Value>) {
        let violation = FieldViolation::new(field.as_str(), self.location, message);
        self.violations.push(match value {
            Some(raw) => violation.with_value(raw.clone()),
            None => violation,
        });
    }

    /// Optional boolean with `true`/`false`/`1`/`0` coercion.
    pub(crate) fn optional_bool(&mut self, field: FieldName, raw: Option<&Value>) -> Option<bool> {
        let raw = raw?;
        let parsed = as_text(raw).as_deref().and_then(coerce_bool);
        if parsed.is_none() {
            self.reject(field, format!("{} must be a boolean", field.as_str()), Some(raw));
        }
        parsed
    }

    /// Optional value that must parse as `T`; `allowed` names the accepted
    /// spellings for the violation message.
    pub(crate) fn optional_one_of<T: FromStr>(
        &mut self,
        field: FieldName,
        raw: Option<&Value>,
        allowed: &[&str],
    ) -> Option<T> {
        let raw = raw?;
        let parsed = as_text(raw).and_then(|text| text.parse::<T>().ok());
        if parsed.is_none() {
            self.reject(
                field,
                format!("{} must be one of {}", field.as_str(), allowed.join(", ")),
                Some(raw),
            );
        }
        parsed
    }

    /// Required string of at least `min` characters.
    pub(crate) fn min_length(
        &mut self,
        field: FieldName,
        raw: Option<&Value>,
        min: usize,
    ) -> Option<String> {
        let accepted = raw
            .and_then(Value::as_str)
            .filter(|text| text.chars().count() >= min)
            .map(str::to_owned);
        if accepted.is_none() {
            self.reject(
                field,
                format!("{} must be at least {min} characters", field.as_str()),
                raw,
            );
        }
        accepted
    }

    /// Required integer: a JSON number without a fractional part, or a
    /// string of decimal digits.
    pub(crate) fn integer(
        &mut self,
        field: FieldName,
        raw: Option<&Value>,
    ) -> Option<IntegerInput> {
        let accepted = raw.and_then(|value| match value {
            Value::Number(number) => integral_number(number),
            Value::String(text) if is_integer_text(text) => Some(IntegerInput::Unaddressable),
            _ => None,
        });
        if accepted.is_none() {
            self.reject(field, format!("{} must be an integer", field.as_str()), raw);
        }
        accepted
    }

    /// Violations recorded so far, in declaration order.
    #[cfg(test)]
    pub(crate) fn violations(&self) -> &[FieldViolation] {
        self.violations.as_slice()
    }

    /// Raise a validation error if any check failed; otherwise run `build`.
    ///
    /// `build` sees only values that passed their checks, so a `None` from it
    /// means a check and its parsed value disagree; that is reported as an
    /// internal error.
    pub(crate) fn finish_with<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Error> {
        if !self.violations.is_empty() {
            return Err(Error::validation(self.violations));
        }
        build().ok_or_else(|| Error::internal("validated request could not be assembled"))
    }
}
