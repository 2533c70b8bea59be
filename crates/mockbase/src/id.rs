use std::{fmt, str::FromStr};

use serde_json::{Number, Value};

use crate::{
    constants::{FIRST_RECORD_ID, MAX_EXACT_INTEGER},
    MockbaseError,
};

/// Numeric record identifier.
///
/// Identifiers compare numerically, so `2`, `2.0` and `"2"` (once parsed) all
/// address the same record. Only finite values are representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RecordId(f64);

impl RecordId {
    /// Identifier given to the first record of a collection.
    pub const FIRST: Self = Self(FIRST_RECORD_ID);

    /// Builds an identifier from a float, rejecting NaN and infinities.
    pub fn new(value: f64) -> Option<Self> { value.is_finite().then_some(Self(value)) }

    /// Reads an identifier out of a JSON value. Strings are not accepted: a stored
    /// `"id": "3"` is not a numeric identifier.
    pub fn from_value(value: &Value) -> Option<Self> { value.as_f64().and_then(Self::new) }

    /// The raw numeric value.
    pub const fn get(self) -> f64 { self.0 }

    /// The identifier following this one (`self + 1`).
    #[must_use]
    pub fn next(self) -> Self { Self(self.0 + 1.0) }

    /// Whether the identifier has no fractional part and fits an `f64` exactly.
    fn is_exact_integer(self) -> bool { self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER }
}

impl FromStr for RecordId {
    type Err = MockbaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| {
                MockbaseError::InvalidRecordId {
                    id: s.to_owned(),
                }
            })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        if id.is_exact_integer() {
            if id.0 >= 0.0 {
                return Self::from(id.0 as u64);
            }
            return Self::from(id.0 as i64);
        }
        Number::from_f64(id.0).map_or(Self::Null, Self::Number)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_integer_and_float() {
        assert_eq!("2".parse::<RecordId>().unwrap().get(), 2.0);
        assert_eq!(
            "2.0".parse::<RecordId>().unwrap(),
            "2".parse::<RecordId>().unwrap()
        );
        assert_eq!("0.5".parse::<RecordId>().unwrap().get(), 0.5);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for input in ["abc", "", "1a", "NaN", "inf", "-inf"] {
            let err = input.parse::<RecordId>().unwrap_err();
            assert!(
                matches!(err, MockbaseError::InvalidRecordId { ref id } if id == input),
                "expected InvalidRecordId for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_from_value() {
        assert_eq!(RecordId::from_value(&json!(3)), RecordId::new(3.0));
        assert_eq!(RecordId::from_value(&json!(3.5)), RecordId::new(3.5));
        assert_eq!(RecordId::from_value(&json!("3")), None);
        assert_eq!(RecordId::from_value(&json!(null)), None);
    }

    #[test]
    fn test_integral_ids_serialize_as_integers() {
        assert_eq!(Value::from(RecordId::FIRST.next()), json!(2));
        assert_eq!(Value::from(RecordId::new(2.5).unwrap()), json!(2.5));
        assert_eq!(Value::from(RecordId::new(-4.0).unwrap()), json!(-4));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::new(5.0).unwrap().to_string(), "5");
        assert_eq!(RecordId::new(1.25).unwrap().to_string(), "1.25");
    }
}
