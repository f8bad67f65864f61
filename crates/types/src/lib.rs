/// Errors that can occur when coercing raw form input into a field value.
#[derive(Debug, thiserror::Error)]
pub enum CoercionError {
    /// The input could not be parsed as a whole number
    #[error("'{0}' is not a valid whole number")]
    NotInteger(String),
    /// The input could not be parsed as a finite decimal number
    #[error("'{0}' is not a valid decimal number")]
    NotDecimal(String),
}

/// A single numeric measurement held by the form.
///
/// Clinical fields carry either a whole number (twelve of the thirteen) or a
/// decimal (ST depression). Which variant a field holds is fixed by its
/// schema entry, not by the shape of the input text: "2" entered into the
/// decimal field still becomes `Decimal(2.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    /// Coerces raw input to a whole number.
    ///
    /// The input is trimmed of leading and trailing whitespace. Returns
    /// `Err(CoercionError::NotInteger)` if the trimmed input does not parse
    /// as an `i64`.
    pub fn parse_integer(input: impl AsRef<str>) -> Result<i64, CoercionError> {
        let trimmed = input.as_ref().trim();
        trimmed
            .parse::<i64>()
            .map_err(|_| CoercionError::NotInteger(trimmed.to_owned()))
    }

    /// Coerces raw input to a finite decimal number.
    ///
    /// The input is trimmed of leading and trailing whitespace. Non-finite
    /// parses ("NaN", "inf") are rejected so an invalid entry can never
    /// poison the record with a value that fails downstream serialisation.
    pub fn parse_decimal(input: impl AsRef<str>) -> Result<f64, CoercionError> {
        let trimmed = input.as_ref().trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CoercionError::NotDecimal(trimmed.to_owned())),
        }
    }

    /// Returns the value widened to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Integer(value) => value as f64,
            FieldValue::Decimal(value) => value,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl serde::Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FieldValue::Integer(value) => serializer.serialize_i64(*value),
            FieldValue::Decimal(value) => serializer.serialize_f64(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integer() {
        let value = FieldValue::parse_integer(" 145 ").expect("valid integer");
        assert_eq!(value, 145);
    }

    #[test]
    fn rejects_fractional_input_for_integer_fields() {
        let err = FieldValue::parse_integer("1.5").expect_err("expected coercion failure");
        assert!(matches!(err, CoercionError::NotInteger(ref s) if s == "1.5"));
    }

    #[test]
    fn parses_decimal() {
        let value = FieldValue::parse_decimal("2.3").expect("valid decimal");
        assert_eq!(value, 2.3);
    }

    #[test]
    fn rejects_non_finite_decimal() {
        let err = FieldValue::parse_decimal("NaN").expect_err("expected coercion failure");
        assert!(matches!(err, CoercionError::NotDecimal(_)));
    }

    #[test]
    fn serialises_as_plain_numbers() {
        let int = serde_json::to_value(FieldValue::Integer(57)).expect("serialise integer");
        let dec = serde_json::to_value(FieldValue::Decimal(0.4)).expect("serialise decimal");
        assert_eq!(int, serde_json::json!(57));
        assert_eq!(dec, serde_json::json!(0.4));
    }
}
