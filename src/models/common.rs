use serde::{Deserialize, Serialize};

fn default_series() -> u32 {
    3
}

fn default_repetitions() -> String {
    "12-15".to_string()
}

fn default_rest_time() -> u32 {
    60
}

/// One prescribed exercise inside a workout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub target: String,
    pub level: String,
    pub alternatives: Vec<String>,
    #[serde(default = "default_series")]
    pub series: u32,
    #[serde(default = "default_repetitions")]
    pub repetitions: String, // "8-12", "12-15", "15-20"
    #[serde(default = "default_rest_time")]
    pub rest_time: u32, // seconds
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    pub exercises: Vec<Exercise>,
}
