use serde::{Deserialize, Serialize};

use crate::models::common::Workout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlanResponse {
    pub workouts: Vec<Workout>,
}

impl TrainingPlanResponse {
    pub fn exercise_count(&self) -> usize {
        self.workouts.iter().map(|w| w.exercises.len()).sum()
    }
}
