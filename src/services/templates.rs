use crate::error::ProfileError;
use crate::services::catalog::ExerciseId;
use crate::services::profile::{ExperienceLevel, TRAINING_DAYS_RANGE};

/// One letter per weekday; a plan never has more sessions than letters.
pub const TEMPLATE_LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

const BASE_EXERCISES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    /// Chest and triceps.
    Push,
    /// Back and biceps.
    Pull,
    /// Legs and shoulders.
    Legs,
}

const SPLIT_ROTATION: [Split; 3] = [Split::Push, Split::Pull, Split::Legs];

impl Split {
    /// Base exercises followed by bonus exercises in priority order.
    pub fn exercises(self) -> &'static [ExerciseId; 6] {
        match self {
            Split::Push => &[
                ExerciseId::BarbellBenchPress,
                ExerciseId::DumbbellFly,
                ExerciseId::RopeTricepsPushdown,
                ExerciseId::InclinePress,
                ExerciseId::FrenchPress,
                ExerciseId::PeckDeck,
            ],
            Split::Pull => &[
                ExerciseId::FrontLatPulldown,
                ExerciseId::SeatedRow,
                ExerciseId::BarbellCurl,
                ExerciseId::WideGripPulldown,
                ExerciseId::HammerCurl,
                ExerciseId::Pullover,
            ],
            Split::Legs => &[
                ExerciseId::BackSquat,
                ExerciseId::StiffLegDeadlift,
                ExerciseId::DumbbellShoulderPress,
                ExerciseId::LateralRaise,
                ExerciseId::StandingCalfRaise,
                ExerciseId::ReverseFly,
            ],
        }
    }

    pub fn base_exercises(self) -> &'static [ExerciseId] {
        &self.exercises()[..BASE_EXERCISES]
    }

    /// Bonus exercises a session of this split receives at the given level.
    pub fn bonus_exercises(self, level: ExperienceLevel) -> &'static [ExerciseId] {
        &self.exercises()[BASE_EXERCISES..exercises_per_session(level)]
    }
}

pub fn exercises_per_session(level: ExperienceLevel) -> usize {
    match level {
        ExperienceLevel::Beginner => 3,
        ExperienceLevel::Intermediate => 5,
        ExperienceLevel::Advanced => 6,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTemplate {
    pub letter: char,
    pub split: Split,
    pub exercise_count: usize,
}

impl SessionTemplate {
    pub fn name(&self) -> String {
        format!("Treino {}", self.letter)
    }

    pub fn exercise_ids(&self) -> &'static [ExerciseId] {
        &self.split.exercises()[..self.exercise_count]
    }
}

/// Picks one template per training day.
///
/// Splits rotate push, pull, legs, so no split is scheduled twice in a row
/// and every session gets its own letter.
pub fn select_templates(
    level: ExperienceLevel,
    training_days: u8,
) -> Result<Vec<SessionTemplate>, ProfileError> {
    let days = i64::from(training_days);
    if !TRAINING_DAYS_RANGE.contains(&days) {
        return Err(ProfileError::OutOfRange {
            field: "training_days",
            min: *TRAINING_DAYS_RANGE.start(),
            max: *TRAINING_DAYS_RANGE.end(),
            value: days,
        });
    }

    let session_count = usize::from(training_days).min(TEMPLATE_LETTERS.len());
    let exercise_count = exercises_per_session(level);

    Ok(TEMPLATE_LETTERS
        .iter()
        .take(session_count)
        .enumerate()
        .map(|(index, &letter)| SessionTemplate {
            letter,
            split: SPLIT_ROTATION[index % SPLIT_ROTATION.len()],
            exercise_count,
        })
        .collect())
}
