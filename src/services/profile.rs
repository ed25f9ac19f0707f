use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ProfileError;
use crate::models::requests::TrainingPlanRequest;

pub const TRAINING_DAYS_RANGE: RangeInclusive<i64> = 1..=7;
pub const TRAINING_TIME_RANGE: RangeInclusive<i64> = 25..=100;
const TRAINING_TIME_STEP: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Label stamped on every exercise of a plan.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Iniciante",
            ExperienceLevel::Intermediate => "Intermediário",
            ExperienceLevel::Advanced => "Avançado",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "iniciante" | "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediário" | "intermediario" | "intermediate" => {
                Ok(ExperienceLevel::Intermediate)
            }
            "avançado" | "avancado" | "advanced" => Ok(ExperienceLevel::Advanced),
            "" => Err(ProfileError::MissingField("experience_level")),
            _ => Err(ProfileError::UnknownExperienceLevel(value.to_string())),
        }
    }
}

/// Validated input of one plan generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub age: u32,
    pub height: u32,
    pub body_type: String,
    pub goal: String,
    pub training_days: u8,
    pub training_time: u16,
    pub experience_level: ExperienceLevel,
    pub current_condition: String,
}

impl TryFrom<&TrainingPlanRequest> for Profile {
    type Error = ProfileError;

    fn try_from(request: &TrainingPlanRequest) -> Result<Self, Self::Error> {
        let age = positive("age", request.age)?;
        let height = positive("height", request.height)?;
        let training_days = within("training_days", request.training_days, TRAINING_DAYS_RANGE)?;
        let training_time = within("training_time", request.training_time, TRAINING_TIME_RANGE)?;
        if training_time % TRAINING_TIME_STEP != 0 {
            return Err(ProfileError::TrainingTimeStep(training_time));
        }

        Ok(Self {
            age,
            height,
            body_type: required("body_type", &request.body_type)?,
            goal: required("goal", &request.goal)?,
            training_days: training_days as u8,
            training_time: training_time as u16,
            experience_level: request.experience_level.parse()?,
            current_condition: required("current_condition", &request.current_condition)?,
        })
    }
}

fn within(
    field: &'static str,
    value: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ProfileError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ProfileError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}

fn positive(field: &'static str, value: i64) -> Result<u32, ProfileError> {
    within(field, value, 1..=i64::from(u32::MAX)).map(|v| v as u32)
}

fn required(field: &'static str, value: &str) -> Result<String, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
