use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("training_time must be a multiple of 5 minutes, got {0}")]
    TrainingTimeStep(i64),
    #[error("unknown experience level: {0}")]
    UnknownExperienceLevel(String),
    #[error("malformed request body: {0}")]
    Malformed(String),
}

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),
    #[error("plan generation service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlanError::InvalidProfile(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlanError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
