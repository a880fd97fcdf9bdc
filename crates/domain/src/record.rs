//! Record: the `year`/`title`/`id` tuple persisted once per request.

use std::fmt;

use serde_json::Value;

use crate::error::ValidationError;
use crate::id::RecordId;

/// Year written when a request arrives without a body.
pub const DEFAULT_YEAR: Year = Year(2012);

/// Title written when a request arrives without a body.
pub const DEFAULT_TITLE: &str = "The Amazing Spider-Man 2";

const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Release year of a movie.
///
/// Stored as a numeric attribute, so it is always rendered as its decimal
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i64);

impl Year {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Coerce a JSON value into a year.
    ///
    /// Accepts integers, floats without a fractional part, and strings holding
    /// an integer (surrounding whitespace is ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidYear`] for anything else.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self(int));
                }
                // Floats beyond 2^53 are not exact, so they are never integral years.
                match number.as_f64() {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(float) if float.fract() == 0.0 && float.abs() < MAX_EXACT_FLOAT => {
                        Ok(Self(float as i64))
                    }
                    _ => Err(ValidationError::InvalidYear(number.to_string())),
                }
            }
            Value::String(text) => text
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| ValidationError::InvalidYear(text.clone())),
            other => Err(ValidationError::InvalidYear(other.to_string())),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A movie record keyed by [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub year: Year,
}

impl Record {
    /// The fixed demo record written when a request has no body.
    #[must_use]
    pub fn default_with_id(id: RecordId) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            year: DEFAULT_YEAR,
        }
    }

    /// Extract a record from a parsed request body.
    ///
    /// `year`, `title` and `id` are required. Other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the payload is not an object, a field
    /// is missing or `null`, or a field has the wrong type.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let fields = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let required = |name: &'static str| {
            fields
                .get(name)
                .filter(|value| !value.is_null())
                .ok_or(ValidationError::MissingField(name))
        };
        let text = |name: &'static str| -> Result<String, ValidationError> {
            required(name)?
                .as_str()
                .map(str::to_string)
                .ok_or(ValidationError::InvalidType {
                    field: name,
                    expected: "string",
                })
        };

        let year = Year::from_json(required("year")?)?;
        let title = text("title")?;
        let id = RecordId::new(text("id")?)?;

        Ok(Self { id, title, year })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_extract_record_when_all_fields_present() {
        let record =
            Record::from_payload(&json!({"year": 1999, "title": "X", "id": "abc"})).unwrap();
        assert_eq!(record.year.to_string(), "1999");
        assert_eq!(record.title, "X");
        assert_eq!(record.id.as_str(), "abc");
    }

    #[test]
    fn should_coerce_string_year() {
        let record =
            Record::from_payload(&json!({"year": " 1984 ", "title": "T", "id": "1"})).unwrap();
        assert_eq!(record.year, Year::new(1984));
    }

    #[test]
    fn should_accept_integral_float_year() {
        let year = Year::from_json(&json!(2001.0)).unwrap();
        assert_eq!(year.to_string(), "2001");
    }

    #[test]
    fn should_reject_fractional_year() {
        let result = Year::from_json(&json!(2001.5));
        assert!(matches!(result, Err(ValidationError::InvalidYear(_))));
    }

    #[test]
    fn should_reject_non_numeric_year_string() {
        let result = Year::from_json(&json!("nineteen"));
        assert!(matches!(result, Err(ValidationError::InvalidYear(text)) if text == "nineteen"));
    }

    #[test]
    fn should_reject_boolean_year() {
        let result = Year::from_json(&json!(true));
        assert!(matches!(result, Err(ValidationError::InvalidYear(_))));
    }

    #[test]
    fn should_return_missing_field_when_title_absent() {
        let result = Record::from_payload(&json!({"year": 1999, "id": "abc"}));
        assert!(matches!(
            result,
            Err(ValidationError::MissingField("title"))
        ));
    }

    #[test]
    fn should_treat_null_as_missing() {
        let result = Record::from_payload(&json!({"year": null, "title": "X", "id": "abc"}));
        assert!(matches!(result, Err(ValidationError::MissingField("year"))));
    }

    #[test]
    fn should_reject_non_string_title() {
        let result = Record::from_payload(&json!({"year": 1999, "title": 42, "id": "abc"}));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidType {
                field: "title",
                expected: "string"
            })
        ));
    }

    #[test]
    fn should_reject_empty_id() {
        let result = Record::from_payload(&json!({"year": 1999, "title": "X", "id": ""}));
        assert!(matches!(result, Err(ValidationError::EmptyId)));
    }

    #[test]
    fn should_reject_array_payload() {
        let result = Record::from_payload(&json!([1999, "X", "abc"]));
        assert!(matches!(result, Err(ValidationError::NotAnObject)));
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let record = Record::from_payload(
            &json!({"year": 1999, "title": "X", "id": "abc", "rating": 5}),
        )
        .unwrap();
        assert_eq!(record.id.as_str(), "abc");
    }

    #[test]
    fn should_build_default_record_with_given_id() {
        let id = RecordId::generate();
        let record = Record::default_with_id(id.clone());
        assert_eq!(record.id, id);
        assert_eq!(record.title, "The Amazing Spider-Man 2");
        assert_eq!(record.year.to_string(), "2012");
    }
}
