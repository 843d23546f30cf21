//! Axum route handlers for the Generation and Render API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::generate_content;
use crate::llm_client::ModelInfo;
use crate::models::resume::{
    download_filename, GeneratedText, ResumeForm, TemplateVariant, DOCX_MIME_TYPE,
};
use crate::session::session_not_found;
use crate::state::AppState;
use crate::templates::render_resume;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub form: ResumeForm,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub session_id: Uuid,
    pub optimized_experience: GeneratedText,
    pub summary: GeneratedText,
    pub cover_letter: GeneratedText,
    pub history_len: usize,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub template: TemplateVariant,
    #[serde(flatten)]
    pub form: ResumeForm,
    pub summary: GeneratedText,
    pub optimized_experience: GeneratedText,
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateVariant,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/generate
///
/// Validates the form, runs experience → summary → cover letter, and records
/// the result in the session history. Upstream failures come back as
/// `failed` entries, not as an error status.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let missing = request.form.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all the fields to generate documents. Missing: {}",
            missing.join(", ")
        )));
    }

    if !state.sessions.exists(request.session_id).await {
        return Err(session_not_found(request.session_id));
    }

    let content = generate_content(state.generator.as_ref(), &request.form).await;

    let history_len = state
        .sessions
        .record(
            request.session_id,
            content.clone().into_record(&request.form.job_title),
        )
        .await?;

    Ok(Json(GenerateResponse {
        session_id: request.session_id,
        optimized_experience: content.optimized_experience,
        summary: content.summary,
        cover_letter: content.cover_letter,
        history_len,
    }))
}

/// POST /api/v1/resumes/render
///
/// Composes the selected template and returns it as a `.docx` attachment.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Result<Response, AppError> {
    let filename = download_filename(&request.form.full_name);
    let variant = request.template;
    let inputs = request
        .form
        .into_inputs(request.summary, request.optimized_experience);

    // Composition and zipping are CPU-bound; keep them off the async workers.
    let docx = tokio::task::spawn_blocking(move || render_resume(variant, &inputs))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    info!(
        "Rendered {} template as {filename} ({} bytes)",
        variant.label(),
        docx.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        Bytes::from(docx),
    )
        .into_response())
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateVariant::all()
            .into_iter()
            .map(|id| TemplateInfo {
                id,
                label: id.label(),
            })
            .collect(),
    )
}

/// GET /api/v1/models
///
/// Lists the models available to the configured key. Useful for checking
/// the key before generating.
pub async fn handle_list_models(
    State(state): State<AppState>,
) -> Result<Json<ModelsResponse>, AppError> {
    let models = state.generator.list_models().await?;
    Ok(Json(ModelsResponse { models }))
}

/// Attachment header carrying both filename forms. The quoted fallback is
/// plain ASCII with quotes, backslashes and control characters replaced. The
/// RFC 6266 `filename*` form keeps the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();
    format!(
        "attachment; filename=\"{safe}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_quotes_filename() {
        assert_eq!(
            content_disposition("Resume_Jane_Doe.docx"),
            "attachment; filename=\"Resume_Jane_Doe.docx\"; filename*=UTF-8''Resume_Jane_Doe.docx"
        );
    }

    #[test]
    fn test_content_disposition_strips_quotes() {
        assert_eq!(
            content_disposition("Resume_\"JD\".docx"),
            "attachment; filename=\"Resume__JD_.docx\"; filename*=UTF-8''Resume_%22JD%22.docx"
        );
    }

    #[test]
    fn test_content_disposition_encodes_non_ascii_name() {
        assert_eq!(
            content_disposition("Resume_José_Núñez.docx"),
            "attachment; filename=\"Resume_Jos__N__ez.docx\"; \
             filename*=UTF-8''Resume_Jos%C3%A9_N%C3%BA%C3%B1ez.docx"
        );
    }
}
