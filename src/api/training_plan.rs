use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{PlanError, ProfileError};
use crate::models::requests::TrainingPlanRequest;
use crate::models::responses::TrainingPlanResponse;
use crate::services::profile::Profile;
use crate::services::training_plan::TrainingPlanService;

#[derive(Clone)]
pub struct AppState {
    pub training_plan_service: TrainingPlanService,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/api/generate-training-plan", post(create_training_plan))
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Bem-vindo à API de Treino IA" }))
}

pub async fn create_training_plan(
    State(state): State<AppState>,
    payload: Result<Json<TrainingPlanRequest>, JsonRejection>,
) -> Result<Json<TrainingPlanResponse>, PlanError> {
    let Json(request) = payload.map_err(|rejection| ProfileError::Malformed(rejection.body_text()))?;

    tracing::info!(
        client_id = request.client_id,
        training_days = request.training_days,
        experience_level = %request.experience_level,
        "training_plan.request_received"
    );

    let profile = Profile::try_from(&request).inspect_err(|e| {
        tracing::warn!(client_id = request.client_id, error = %e, "training_plan.invalid_profile");
    })?;

    let generated = state.training_plan_service.generate(&profile).await?;

    tracing::info!(
        client_id = request.client_id,
        source = ?generated.source,
        workout_count = generated.plan.workouts.len(),
        exercise_count = generated.plan.exercise_count(),
        "training_plan.generated"
    );

    Ok(Json(generated.plan))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router(AppState {
            training_plan_service: TrainingPlanService::new(None, Duration::from_secs(1)),
        })
    }

    fn plan_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-training-plan")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn profile_body(training_days: i64, experience_level: &str) -> Value {
        json!({
            "client_id": 1234,
            "age": 25,
            "height": 170,
            "body_type": "Masculino",
            "goal": "Hipertrofia",
            "training_days": training_days,
            "training_time": 50,
            "experience_level": experience_level,
            "current_condition": "Nunca treinei"
        })
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["message"],
            "Bem-vindo à API de Treino IA"
        );
    }

    #[tokio::test]
    async fn test_generate_plan_falls_back_locally() {
        let response = app()
            .oneshot(plan_request(profile_body(3, "Avançado")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let workouts = body["workouts"].as_array().unwrap();
        assert_eq!(workouts.len(), 3);

        for workout in workouts {
            let exercises = workout["exercises"].as_array().unwrap();
            assert_eq!(exercises.len(), 6);
            for exercise in exercises {
                for field in [
                    "name",
                    "target",
                    "level",
                    "alternatives",
                    "series",
                    "repetitions",
                    "rest_time",
                ] {
                    assert!(!exercise[field].is_null(), "missing {}", field);
                }
                assert_eq!(exercise["level"], "Avançado");
                assert_eq!(exercise["alternatives"].as_array().unwrap().len(), 3);
            }
        }
        assert_eq!(workouts[0]["name"], "Treino A");
        assert_eq!(workouts[0]["exercises"][0]["name"], "Supino reto com barra");
        assert_eq!(workouts[0]["exercises"][0]["repetitions"], "8-12");
    }

    #[tokio::test]
    async fn test_out_of_range_days_is_unprocessable() {
        let response = app()
            .oneshot(plan_request(profile_body(8, "Iniciante")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await["detail"],
            "invalid profile: training_days must be between 1 and 7, got 8"
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let mut body = profile_body(3, "Iniciante");
        body.as_object_mut().unwrap().remove("goal");

        let response = app().oneshot(plan_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let detail = json_body(response).await["detail"].as_str().unwrap().to_string();
        assert!(detail.starts_with("invalid profile: malformed request body"));
    }

    #[tokio::test]
    async fn test_unknown_level_is_unprocessable() {
        let response = app()
            .oneshot(plan_request(profile_body(3, "Elite")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
