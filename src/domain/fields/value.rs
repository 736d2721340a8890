//! Dynamic field values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalendarDate, ValidationError};

/// Declared type of a configurable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    /// ISO `YYYY-MM-DD`, carried as text.
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a configurable field.
///
/// Serialized untagged, so the JSON form is a plain string, number or bool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// The type this value carries on its own. Dates report as text.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Number(_) => FieldType::Number,
            FieldValue::Bool(_) => FieldType::Boolean,
        }
    }

    /// Whether this value is acceptable for a field declared as `expected`.
    pub fn conforms_to(&self, expected: FieldType) -> bool {
        match (self, expected) {
            (FieldValue::Text(_), FieldType::Text) => true,
            (FieldValue::Text(s), FieldType::Date) => CalendarDate::parse(s).is_ok(),
            (FieldValue::Number(n), FieldType::Number) => n.is_finite(),
            (FieldValue::Bool(_), FieldType::Boolean) => true,
            _ => false,
        }
    }

    /// True for an empty text value, which forms send for untouched inputs.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    /// Parses raw form input into a value of the declared type.
    pub fn coerce(
        field: &str,
        raw: &str,
        expected: FieldType,
    ) -> Result<FieldValue, ValidationError> {
        let trimmed = raw.trim();
        match expected {
            FieldType::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldType::Number => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Number)
                .ok_or_else(|| {
                    ValidationError::invalid_format(field, format!("'{}' is not a number", trimmed))
                }),
            FieldType::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(FieldValue::Bool(true)),
                "false" | "no" | "off" | "0" | "" => Ok(FieldValue::Bool(false)),
                _ => Err(ValidationError::invalid_format(
                    field,
                    format!("'{}' is not a boolean", trimmed),
                )),
            },
            FieldType::Date => CalendarDate::parse(trimmed)
                .map(|d| FieldValue::Text(d.to_string()))
                .map_err(|_| {
                    ValidationError::invalid_format(
                        field,
                        format!("'{}' is not YYYY-MM-DD", trimmed),
                    )
                }),
        }
    }
}
