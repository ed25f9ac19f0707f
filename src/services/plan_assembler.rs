use crate::error::PlanError;
use crate::models::common::Workout;
use crate::models::responses::TrainingPlanResponse;
use crate::services::profile::Profile;
use crate::services::templates::{self, SessionTemplate};

/// Builds a plan from the static catalog.
///
/// Pure: the same profile always yields the same plan.
pub fn assemble(profile: &Profile) -> Result<TrainingPlanResponse, PlanError> {
    let level = profile.experience_level;
    let templates = templates::select_templates(level, profile.training_days)?;

    let workouts = templates
        .iter()
        .map(|template| build_workout(template, profile))
        .collect();

    Ok(TrainingPlanResponse { workouts })
}

fn build_workout(template: &SessionTemplate, profile: &Profile) -> Workout {
    let level = profile.experience_level;

    let exercises = template
        .split
        .base_exercises()
        .iter()
        .chain(template.split.bonus_exercises(level))
        .take(template.exercise_count)
        .map(|id| id.entry().to_exercise(level))
        .collect();

    Workout {
        name: template.name(),
        exercises,
    }
}
