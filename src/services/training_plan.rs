use std::time::Duration;

use tracing::{debug, warn};

use crate::clients::gemini::GeminiClient;
use crate::error::PlanError;
use crate::models::responses::TrainingPlanResponse;
use crate::services::profile::Profile;
use crate::services::{ai_parser, ai_prompt, plan_assembler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Generated,
    Fallback,
}

#[derive(Debug)]
pub struct GeneratedPlan {
    pub plan: TrainingPlanResponse,
    pub source: PlanSource,
}

#[derive(Clone)]
pub struct TrainingPlanService {
    gemini_client: Option<GeminiClient>,
    generation_timeout: Duration,
}

impl TrainingPlanService {
    pub fn new(gemini_client: Option<GeminiClient>, generation_timeout: Duration) -> Self {
        Self {
            gemini_client,
            generation_timeout,
        }
    }

    /// Asks the generator for a plan and falls back to the local assembler
    /// when it cannot deliver a valid one. Only an invalid profile fails.
    pub async fn generate(&self, profile: &Profile) -> Result<GeneratedPlan, PlanError> {
        let generated = self.generate_with_ai(profile).await;
        plan_or_fallback(profile, generated)
    }

    async fn generate_with_ai(&self, profile: &Profile) -> Result<TrainingPlanResponse, PlanError> {
        let client = self.gemini_client.as_ref().ok_or_else(|| {
            PlanError::ServiceUnavailable("no Gemini API key configured".to_string())
        })?;

        let prompt = ai_prompt::build_training_plan_prompt(profile);

        debug!(model = %client.model(), prompt = %prompt, "gemini.prompt");

        let response = tokio::time::timeout(self.generation_timeout, client.generate_text(&prompt))
            .await
            .map_err(|_| {
                PlanError::ServiceUnavailable(format!(
                    "no answer within {}s",
                    self.generation_timeout.as_secs()
                ))
            })?
            .map_err(|e| PlanError::ServiceUnavailable(e.to_string()))?;

        debug!(response = %response, "gemini.response");

        ai_parser::parse_training_plan(&response, profile)
            .map_err(|e| PlanError::ServiceUnavailable(e.to_string()))
    }
}

/// Keeps a generated plan, or replaces a generator failure with the locally
/// assembled plan. Profile errors are passed through untouched.
pub fn plan_or_fallback(
    profile: &Profile,
    generated: Result<TrainingPlanResponse, PlanError>,
) -> Result<GeneratedPlan, PlanError> {
    match generated {
        Ok(plan) => Ok(GeneratedPlan {
            plan,
            source: PlanSource::Generated,
        }),
        Err(PlanError::ServiceUnavailable(reason)) => {
            warn!(%reason, "training_plan.fallback");
            Ok(GeneratedPlan {
                plan: plan_assembler::assemble(profile)?,
                source: PlanSource::Fallback,
            })
        }
        Err(error) => Err(error),
    }
}
