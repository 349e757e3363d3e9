pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/sections",
            get(handlers::handle_list_sections),
        )
        .route(
            "/api/v1/assessment",
            post(handlers::handle_start)
                .get(handlers::handle_get_session)
                .delete(handlers::handle_end),
        )
        .route("/api/v1/assessment/current", get(handlers::handle_current))
        .route("/api/v1/assessment/responses", put(handlers::handle_answer))
        .route("/api/v1/assessment/next", post(handlers::handle_next))
        .route("/api/v1/assessment/previous", post(handlers::handle_previous))
        .route("/api/v1/assessment/result", get(handlers::handle_result))
        .route(
            "/api/v1/assessment/report",
            post(handlers::handle_download_report),
        )
        .route("/api/v1/assessment/share", post(handlers::handle_share))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assessment::questions::{Question, SectionKind};
    use crate::assessment::report::{
        AssessmentReport, ExportedReport, ReportError, ReportExporter, ShareLink,
    };
    use crate::config::Config;

    fn test_config() -> Config {
        Config {
            recommendation_delay_ms: 0,
            report_delay_ms: 0,
            ..Config::default()
        }
    }

    fn app() -> Router {
        build_router(AppState::new(&test_config()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Answers and advances through every subsection of `kind`.
    async fn complete_section(app: &Router, kind: SectionKind, likert: &str) {
        for subsection in kind.subsections() {
            for (i, question) in subsection.questions.iter().enumerate() {
                let value = match question {
                    Question::Likert { .. } => likert.to_string(),
                    Question::MultipleChoice { correct, .. } => correct.to_string(),
                };
                let (status, _) = send(
                    app,
                    "PUT",
                    "/api/v1/assessment/responses",
                    Some(json!({ "question": i, "value": value })),
                )
                .await;
                assert_eq!(status, StatusCode::OK);
            }
            let (status, _) = send(app, "POST", "/api/v1/assessment/next", None).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    async fn wait_for_recommendation(app: &Router) -> Value {
        for _ in 0..50 {
            let (_, content) = send(app, "GET", "/api/v1/assessment/current", None).await;
            if content["status"] != "generating" {
                return content;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("recommendation never resolved");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "assessment-api");
    }

    #[tokio::test]
    async fn test_sections_lists_six_phases() {
        let (status, body) = send(&app(), "GET", "/api/v1/assessment/sections", None).await;
        assert_eq!(status, StatusCode::OK);
        let phases = body.as_array().unwrap();
        assert_eq!(phases.len(), 6);
        assert_eq!(phases[0]["key"], "introduction");
        assert_eq!(phases[5]["key"], "careerGuidance");
        assert_eq!(phases[1]["section"], "psychometric");
        assert!(phases[0].get("section").is_none());
    }

    #[tokio::test]
    async fn test_requests_without_session_return_404() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/v1/assessment/current", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, "DELETE", "/api/v1/assessment", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_incomplete_subsection_blocks_next() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        send(&app, "POST", "/api/v1/assessment/next", None).await;

        send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": 0, "value": "4" })),
        )
        .await;
        let (status, body) = send(&app, "POST", "/api/v1/assessment/next", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        let (_, session) = send(&app, "GET", "/api/v1/assessment", None).await;
        assert_eq!(session["phase"], "psychometric");
        assert_eq!(session["subsection"]["index"], 0);
        assert_eq!(session["subsection"]["answered"], 1);
        assert_eq!(session["canAdvance"], false);
    }

    #[tokio::test]
    async fn test_invalid_answer_is_rejected() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;

        // Introduction has no questions.
        let (status, _) = send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": 0, "value": "3" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        send(&app, "POST", "/api/v1/assessment/next", None).await;
        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": 0, "value": "6" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": 99, "value": "3" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_answer_body_uses_error_envelope() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        send(&app, "POST", "/api/v1/assessment/next", None).await;

        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": -1, "value": "3" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());

        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/assessment/responses",
            Some(json!({ "question": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_report_download_on_fresh_session_succeeds() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        let (status, body) = send(&app, "POST", "/api/v1/assessment/report", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notification"]["title"], "Report Downloaded");
        assert_eq!(body["notification"]["variant"], "default");
        assert_eq!(body["report"]["contentType"], "application/json");
    }

    #[tokio::test]
    async fn test_full_walkthrough_produces_strong_fit() {
        let app = app();
        let (status, started) = send(&app, "POST", "/api/v1/assessment", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(started["phase"], "introduction");
        assert_eq!(started["progressPercent"], 17);

        let (_, step) = send(&app, "POST", "/api/v1/assessment/next", None).await;
        assert_eq!(step["transition"]["kind"], "phase");
        assert_eq!(step["transition"]["to"], "psychometric");

        complete_section(&app, SectionKind::Psychometric, "5").await;
        complete_section(&app, SectionKind::Technical, "5").await;
        complete_section(&app, SectionKind::Wiscar, "5").await;

        let content = wait_for_recommendation(&app).await;
        assert_eq!(content["phase"], "recommendation");
        assert_eq!(content["status"], "ready");
        assert_eq!(content["recommendation"]["decision"], "yes");
        assert_eq!(content["recommendation"]["overallScore"], 100);

        let (status, step) = send(&app, "POST", "/api/v1/assessment/next", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(step["session"]["phase"], "careerGuidance");
        assert_eq!(step["session"]["progressPercent"], 100);

        let (_, result) = send(&app, "GET", "/api/v1/assessment/result", None).await;
        assert_eq!(result["psychometric"]["scores"]["overallScore"], 100);
        assert_eq!(result["technical"]["scores"]["overallScore"], 100);
        assert_eq!(result["recommendation"]["completed"], true);
        assert!(result.get("careerGuidance").is_none());

        let (_, report) = send(&app, "POST", "/api/v1/assessment/report", None).await;
        assert_eq!(report["notification"]["title"], "Report Downloaded");
        assert!(report["report"]["filename"]
            .as_str()
            .unwrap()
            .starts_with("om-assessment-"));

        let (_, last) = send(&app, "POST", "/api/v1/assessment/next", None).await;
        assert_eq!(last["transition"]["kind"], "stayed");

        let (_, result) = send(&app, "GET", "/api/v1/assessment/result", None).await;
        assert_eq!(result["careerGuidance"]["completed"], true);
        assert_eq!(result["careerGuidance"]["downloadedReport"], true);
    }

    #[tokio::test]
    async fn test_previous_from_first_phase_stays() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        let (status, body) = send(&app, "POST", "/api/v1/assessment/previous", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transition"]["kind"], "stayed");
        assert_eq!(body["session"]["cursor"], 0);
    }

    #[tokio::test]
    async fn test_end_session_then_404() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        let (status, _) = send(&app, "DELETE", "/api/v1/assessment", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", "/api/v1/assessment", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    struct FailingExporter;

    #[async_trait]
    impl ReportExporter for FailingExporter {
        async fn export(&self, _report: &AssessmentReport) -> Result<ExportedReport, ReportError> {
            Err(ReportError::Unavailable("disk full".to_string()))
        }

        async fn share(&self, _report: &AssessmentReport) -> Result<ShareLink, ReportError> {
            Err(ReportError::Unavailable("no clipboard".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_export_returns_destructive_notification() {
        let mut state = AppState::new(&test_config());
        state.exporter = Arc::new(FailingExporter);
        let app = build_router(state);
        send(&app, "POST", "/api/v1/assessment", None).await;
        send(&app, "POST", "/api/v1/assessment/next", None).await;

        let (status, body) = send(&app, "POST", "/api/v1/assessment/report", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notification"]["title"], "Download Failed");
        assert_eq!(body["notification"]["variant"], "destructive");
        assert!(body.get("report").is_none());

        let (_, body) = send(&app, "POST", "/api/v1/assessment/share", None).await;
        assert_eq!(body["notification"]["variant"], "destructive");
    }

    #[tokio::test]
    async fn test_share_returns_link() {
        let app = app();
        send(&app, "POST", "/api/v1/assessment", None).await;
        let (status, body) = send(&app, "POST", "/api/v1/assessment/share", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["notification"]["title"], "Link Copied");
        assert_eq!(body["share"]["url"], "http://localhost:8080/assessment");
    }
}
