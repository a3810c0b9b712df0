//! HTTP handlers for the arcade API

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, error};
use serde_json::Value;

/// Shared per-process state, built once at startup and
/// never mutated afterwards
pub struct AppState
{   pub config: crate::config::ProviderConfig
  , pub generator: crate::generator::ResponseGenerator
}

/// Error shapes surfaced to the game UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError
{   /// Body unparseable or prompt field absent
    MissingPrompt
  , /// Anything else that breaks request handling
    Internal
}

impl IntoResponse for ApiError
{   fn into_response(self) -> Response
    {   match self
        {   ApiError::MissingPrompt => (
              StatusCode::BAD_REQUEST
            , Json(crate::request::ErrorReply
              {   error: "Missing prompt in request".to_string()
              })
            ).into_response()
          , ApiError::Internal => (
              StatusCode::INTERNAL_SERVER_ERROR
            , Json(crate::request::ErrorReply
              {   error: "AI generation failed".to_string()
              })
            ).into_response()
        }
    }
}

/// Build the service router
pub fn router(state: Arc<AppState>) -> Router
{   Router::new()
      .route("/api/ai/generate", post(generate))
      .route("/healthz", get(healthz))
      .with_state(state)
}

/// POST /api/ai/generate
///
/// The body is parsed leniently: a missing prompt key is a
/// client error, while wrong-typed fields count as internal
/// failures of the generation path
pub async fn generate(
  State(state): State<Arc<AppState>>
, body: Bytes
) -> Result<Json<crate::request::GenerateReply>, ApiError>
{   let data: Value = serde_json::from_slice(&body)
      .map_err(|e| {
        error!("Invalid request body: {}", e);
        ApiError::MissingPrompt
      })?;

    let fields = data.as_object()
      .ok_or(ApiError::MissingPrompt)?;
    let prompt_value = fields.get("prompt")
      .ok_or(ApiError::MissingPrompt)?;

    let prompt = prompt_value.as_str()
      .ok_or_else(|| {
        error!("AI generation error: prompt is not a string");
        ApiError::Internal
      })?;

    let difficulty = match fields.get("difficulty")
    {   None => 1
      , Some(value) => value.as_i64()
          .ok_or_else(|| {
            error!(
              "AI generation error: difficulty is not an integer"
            );
            ApiError::Internal
          })?
    };

    debug!("Generating reply at difficulty {}", difficulty);
    let text = state.generator
      .generate(prompt, difficulty)
      .await;

    Ok(Json(crate::request::GenerateReply
    {   text
    }))
}

/// GET /healthz
pub async fn healthz(
  State(state): State<Arc<AppState>>
) -> Json<crate::request::HealthReply>
{   Json(crate::request::HealthReply
    {   status: "ok".to_string()
      , model: state.config.model.clone()
    })
}
