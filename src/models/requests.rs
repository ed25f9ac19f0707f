use serde::Deserialize;

/// Body of `POST /api/generate-training-plan`.
///
/// Numeric fields are signed so that out-of-range values reach profile
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingPlanRequest {
    pub client_id: i64,
    pub age: i64,
    pub height: i64,
    pub body_type: String,
    pub goal: String,
    pub training_days: i64,
    pub training_time: i64,
    pub experience_level: String,
    pub current_condition: String,
}
