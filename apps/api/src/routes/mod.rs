pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/models", get(handlers::handle_list_models))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id/history",
            get(sessions::handle_get_history),
        )
        // Résumé API
        .route("/api/v1/resumes/generate", post(handlers::handle_generate))
        .route("/api/v1/resumes/render", post(handlers::handle_render))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::document::reader::read_docx;
    use crate::generation::generator::test_support::ScriptedGenerator;
    use crate::models::resume::DOCX_MIME_TYPE;
    use crate::session::SessionStore;
    use crate::templates::headers::SECTION_HEADER_STYLE;

    fn app_with(generator: ScriptedGenerator) -> Router {
        build_router(AppState {
            generator: Arc::new(generator),
            sessions: SessionStore::new(Duration::from_secs(60), 16),
        })
    }

    fn app() -> Router {
        app_with(ScriptedGenerator::new())
    }

    fn form_fields() -> Value {
        json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "phone_number": "555-0100",
            "linkedin_profile": "linkedin.com/in/janedoe",
            "job_title": "Data Scientist",
            "skills": "Python, SQL",
            "education": "B.Sc. Statistics",
            "certifications": "AWS CCP",
            "work_experience": "Analyst - Acme (2021 - Present)\n- Built dashboards"
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_session(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/sessions", &json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = app().oneshot(get("/api/v1/templates")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body[0]["id"], "professional");
        assert_eq!(body[1]["id"], "modern_two_column");
        assert_eq!(body[1]["label"], "Modern Two-Column");
    }

    #[tokio::test]
    async fn test_list_models() {
        let response = app().oneshot(get("/api/v1/models")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["models"][0]["id"], "scripted");
    }

    #[tokio::test]
    async fn test_generate_records_history() {
        let app = app();
        let session_id = create_session(&app).await;

        let mut body = form_fields();
        body["session_id"] = json!(session_id);
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/resumes/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let generated = json_body(response).await;
        assert_eq!(generated["summary"]["status"], "ok");
        assert_eq!(generated["summary"]["value"], "Generated summary");
        assert_eq!(generated["cover_letter"]["value"], "Generated cover letter");
        assert_eq!(generated["history_len"], 1);

        let response = app
            .oneshot(get(&format!("/api/v1/sessions/{session_id}/history")))
            .await
            .unwrap();
        let history = json_body(response).await;
        let entries = history["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["job_title"], "Data Scientist");
        assert!(entries[0]["label"]
            .as_str()
            .unwrap()
            .starts_with("Result 1: Data Scientist ("));
    }

    #[tokio::test]
    async fn test_generate_reports_upstream_failure_as_data() {
        let app = app_with(ScriptedGenerator::failing_on("resume summary"));
        let session_id = create_session(&app).await;

        let mut body = form_fields();
        body["session_id"] = json!(session_id);
        let response = app
            .oneshot(post_json("/api/v1/resumes/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let generated = json_body(response).await;
        assert_eq!(generated["summary"]["status"], "failed");
        assert_eq!(generated["optimized_experience"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_fields() {
        let app = app();
        let session_id = create_session(&app).await;

        let mut body = form_fields();
        body["session_id"] = json!(session_id);
        body["skills"] = json!("  ");
        body["certifications"] = json!("");
        let response = app
            .oneshot(post_json("/api/v1/resumes/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = json_body(response).await;
        let message = error["error"]["message"].as_str().unwrap();
        assert!(message.ends_with("Missing: Skills, Certifications"));
    }

    #[tokio::test]
    async fn test_generate_unknown_session_is_not_found() {
        let mut body = form_fields();
        body["session_id"] = json!(Uuid::new_v4());
        let response = app()
            .oneshot(post_json("/api/v1/resumes/generate", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_unknown_session_is_not_found() {
        let response = app()
            .oneshot(get(&format!("/api/v1/sessions/{}/history", Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_returns_docx_attachment() {
        let mut body = form_fields();
        body["template"] = json!("professional");
        body["summary"] = json!({ "status": "ok", "value": "A seasoned analyst." });
        body["optimized_experience"] =
            json!({ "status": "failed", "value": "over capacity" });

        let response = app()
            .oneshot(post_json("/api/v1/resumes/render", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], DOCX_MIME_TYPE);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Resume_Jane_Doe.docx\"; filename*=UTF-8''Resume_Jane_Doe.docx"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc = read_docx(&bytes).unwrap();
        let headers: Vec<String> = doc
            .with_style(SECTION_HEADER_STYLE)
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(headers.len(), 5);

        let texts = doc.texts();
        assert!(texts.contains(&"A seasoned analyst."));
        let notice = "An error occurred while generating experience points: over capacity";
        assert!(texts.contains(&notice));
    }

    #[tokio::test]
    async fn test_render_modern_template() {
        let mut body = form_fields();
        body["template"] = json!("modern_two_column");
        body["summary"] = json!({ "status": "ok", "value": "S" });
        body["optimized_experience"] = json!({ "status": "ok", "value": "E" });

        let response = app()
            .oneshot(post_json("/api/v1/resumes/render", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc = read_docx(&bytes).unwrap();
        assert_eq!(doc.tables().len(), 1);
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_template() {
        let mut body = form_fields();
        body["template"] = json!("creative");
        body["summary"] = json!({ "status": "ok", "value": "S" });
        body["optimized_experience"] = json!({ "status": "ok", "value": "E" });

        let response = app()
            .oneshot(post_json("/api/v1/resumes/render", &body))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
