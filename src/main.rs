use std::time::Duration;

use treino_planner::api::training_plan::{AppState, router};
use treino_planner::clients::gemini::GeminiClient;
use treino_planner::config::Config;
use treino_planner::services::training_plan::TrainingPlanService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let gemini_client = match &config.gemini_api_key {
        Some(api_key) => Some(GeminiClient::new(
            api_key.clone(),
            config.gemini_model.clone(),
        )?),
        None => {
            tracing::warn!("GEMINI_API_KEY not set; every plan will be assembled locally");
            None
        }
    };

    let training_plan_service = TrainingPlanService::new(
        gemini_client,
        Duration::from_secs(config.generation_timeout_secs),
    );

    let app = router(AppState {
        training_plan_service,
    });

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
