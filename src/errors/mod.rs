use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// One entry of a 422 `detail` list.
#[derive(Serialize, Debug, Clone)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn for_field(field: &str, msg: String, kind: &str) -> Self {
        FieldError {
            loc: vec!["body".to_string(), "payload".to_string(), field.to_string()],
            msg,
            kind: kind.to_string(),
        }
    }

    pub fn none_not_allowed(field: &str) -> Self {
        Self::for_field(
            field,
            "none is not an allowed value".to_string(),
            "type_error.none.not_allowed",
        )
    }

    pub fn missing(field: &str) -> Self {
        Self::for_field(field, "field required".to_string(), "value_error.missing")
    }

    pub fn max_length(field: &str, limit: usize) -> Self {
        Self::for_field(
            field,
            format!("ensure this value has at most {} characters", limit),
            "value_error.any_str.max_length",
        )
    }

    /// The whole body failed to decode; no single field to point at.
    pub fn undecodable_body(msg: String) -> Self {
        FieldError {
            loc: vec!["body".to_string(), "payload".to_string()],
            msg,
            kind: "value_error.jsondecode".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(Vec<FieldError>),
    Database(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not Found"),
            ApiError::Validation(errors) => write!(f, "Validation failed: {} error(s)", errors.len()),
            ApiError::Database(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => HttpResponse::NotFound().json(json!({ "detail": "Not Found" })),
            ApiError::Validation(errors) => {
                HttpResponse::UnprocessableEntity().json(json!({ "detail": errors }))
            }
            ApiError::Database(msg) => {
                error!("database error: {}", msg);
                HttpResponse::InternalServerError().json(json!({ "detail": "Internal Server Error" }))
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            other => ApiError::Database(other.to_string()),
        }
    }
}
