//! AI drafting endpoint.

use crate::web::{
    dto::{GenerateBody, GenerateResponse},
    error::ApiResult,
    state::AppState,
};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

/// `POST /ai/generate`
///
/// Drafts a post body from a prompt, styled for the optional platform.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBody>, JsonRejection>,
) -> ApiResult<Json<GenerateResponse>> {
    let Json(body) = payload?;
    let generated = state
        .assistant
        .generate(&body.prompt, body.platform.as_deref())
        .await?;
    Ok(Json(GenerateResponse {
        content: generated.content,
    }))
}
