use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;

use crate::models::responses::TrainingPlanResponse;
use crate::services::profile::Profile;

const FENCED_JSON: &str = r"(?s)```(?:json)?\s*(\{.*\})\s*```";
const EXPECTED_ALTERNATIVES: usize = 3;

/// Turns the generator's free-text answer into a plan the API can return.
pub fn parse_training_plan(response: &str, profile: &Profile) -> Result<TrainingPlanResponse> {
    let json_content = extract_json_from_response(response)?;
    let mut plan: TrainingPlanResponse = serde_json::from_str(&json_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse training plan JSON: {}", e))?;

    validate_plan(&plan, profile.training_days)?;

    let level = profile.experience_level.label();
    for exercise in plan.workouts.iter_mut().flat_map(|w| w.exercises.iter_mut()) {
        exercise.level = level.to_string();
    }

    Ok(plan)
}

fn extract_json_from_response(response: &str) -> Result<String> {
    let fenced = Regex::new(FENCED_JSON)?;
    if let Some(block) = fenced.captures(response).and_then(|c| c.get(1)) {
        return Ok(block.as_str().to_string());
    }

    match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(response[start..=end].to_string()),
        _ => Err(anyhow::anyhow!("No JSON object found in response")),
    }
}

fn validate_plan(plan: &TrainingPlanResponse, training_days: u8) -> Result<()> {
    if plan.workouts.is_empty() {
        return Err(anyhow::anyhow!("Plan has no workouts"));
    }

    if plan.workouts.len() > usize::from(training_days) {
        return Err(anyhow::anyhow!(
            "Plan has {} workouts for {} training days",
            plan.workouts.len(),
            training_days
        ));
    }

    for workout in &plan.workouts {
        if workout.exercises.is_empty() {
            return Err(anyhow::anyhow!("Workout '{}' has no exercises", workout.name));
        }

        for exercise in &workout.exercises {
            if exercise.name.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "Workout '{}' has an unnamed exercise",
                    workout.name
                ));
            }

            if !has_distinct_alternatives(&exercise.name, &exercise.alternatives) {
                return Err(anyhow::anyhow!(
                    "Exercise '{}' must have {} distinct alternatives",
                    exercise.name,
                    EXPECTED_ALTERNATIVES
                ));
            }
        }
    }

    Ok(())
}

fn has_distinct_alternatives(name: &str, alternatives: &[String]) -> bool {
    let name = name.trim().to_lowercase();
    let normalized: HashSet<String> = alternatives
        .iter()
        .map(|alt| alt.trim().to_lowercase())
        .collect();

    alternatives.len() == EXPECTED_ALTERNATIVES
        && normalized.len() == EXPECTED_ALTERNATIVES
        && normalized.iter().all(|alt| !alt.is_empty() && *alt != name)
}
