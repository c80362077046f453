//! Handler for the generation proxy.
//!
//! Routes:
//! - `POST /api/generate/{type}`: forward a system/user prompt pair to the
//!   completion provider and return the parsed JSON reply

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body. Both fields are optional here so that a missing field maps
/// to [`AppError::MissingParameters`] instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateRequest {
    /// `(system_prompt, prompt)` when both are present and non-empty.
    pub fn into_parts(self) -> Option<(String, String)> {
        match (self.system_prompt, self.prompt) {
            (Some(system), Some(prompt)) if !system.is_empty() && !prompt.is_empty() => {
                Some((system, prompt))
            }
            _ => None,
        }
    }
}

/// POST /api/generate/{type}
///
/// `{type}` is only used for logging; the caller supplies both prompts, so
/// the server never picks a template.
pub async fn generate(
    State(state): State<AppState>,
    Path(content_type): Path<String>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let body = payload.map_err(|rejection| {
        tracing::debug!(%content_type, error = %rejection, "Rejected generation body");
        AppError::MissingParameters
    })?;
    let (system_prompt, prompt) = body.0.into_parts().ok_or(AppError::MissingParameters)?;

    tracing::debug!(
        %content_type,
        system_len = system_prompt.len(),
        prompt_len = prompt.len(),
        "Forwarding generation request"
    );

    let raw = state
        .provider
        .complete_json(&system_prompt, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(%content_type, error = %e, "Error generating content");
            AppError::Provider(e)
        })?;

    let parsed: Value = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!(%content_type, raw = %raw, error = %e, "Invalid JSON response");
        AppError::InvalidResponseFormat
    })?;

    Ok(Json(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(system: Option<&str>, prompt: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            system_prompt: system.map(str::to_string),
            prompt: prompt.map(str::to_string),
        }
    }

    #[test]
    fn both_fields_required_and_non_empty() {
        assert!(request(Some("sys"), Some("go")).into_parts().is_some());
        assert!(request(Some(""), Some("go")).into_parts().is_none());
        assert!(request(Some("sys"), Some("")).into_parts().is_none());
        assert!(request(None, Some("go")).into_parts().is_none());
        assert!(request(Some("sys"), None).into_parts().is_none());
    }

    #[test]
    fn whitespace_prompt_counts_as_present() {
        assert!(request(Some(" "), Some(" ")).into_parts().is_some());
    }
}
