use crate::errors::FieldError;
use serde::{Deserialize, Deserializer};

pub const MAX_NAME_LEN: usize = 100;

/// Keeps "field absent" distinct from "field explicitly null". Plain
/// `Option<Option<T>>` collapses null to the outer `None`, so fields using
/// this must pair it with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Checks a required string field, appending to `errors` on failure.
pub fn require_string(
    field: &str,
    value: Option<Option<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(None) => {
            errors.push(FieldError::none_not_allowed(field));
            None
        }
        Some(Some(s)) => {
            if s.chars().count() > MAX_NAME_LEN {
                errors.push(FieldError::max_length(field, MAX_NAME_LEN));
                None
            } else {
                Some(s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        name: Option<Option<String>>,
    }

    #[test]
    fn double_option_distinguishes_null_from_absent() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, None);

        let null: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(null.name, Some(None));

        let set: Probe = serde_json::from_str(r#"{"name": "IT"}"#).unwrap();
        assert_eq!(set.name, Some(Some("IT".to_string())));
    }

    #[test]
    fn require_string_reports_null_and_missing() {
        let mut errors = Vec::new();
        assert!(require_string("name", None, &mut errors).is_none());
        assert_eq!(errors[0].msg, "field required");

        let mut errors = Vec::new();
        assert!(require_string("name", Some(None), &mut errors).is_none());
        assert_eq!(errors[0].msg, "none is not an allowed value");

        let mut errors = Vec::new();
        let ok = require_string("name", Some(Some("IT".to_string())), &mut errors);
        assert_eq!(ok.as_deref(), Some("IT"));
        assert!(errors.is_empty());
    }

    #[test]
    fn require_string_caps_length() {
        let mut errors = Vec::new();
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(require_string("name", Some(Some(long)), &mut errors).is_none());
        assert_eq!(errors[0].msg, "ensure this value has at most 100 characters");
    }
}
