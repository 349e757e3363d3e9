//! Axum route handlers for the Assessment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::flow::{AssessmentResult, Phase, PHASES};
use crate::assessment::questions::SectionKind;
use crate::assessment::report::{AssessmentReport, Notification, ShareLink};
use crate::assessment::session::{PhaseContent, SessionView, Transition};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSummary {
    pub index: usize,
    pub phase: Phase,
    pub key: &'static str,
    pub name: &'static str,
    pub time_estimate: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionKind>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: usize,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub transition: Transition,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub filename: String,
    pub content_type: &'static str,
    pub size_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub notification: Notification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<ShareLink>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/sections
pub async fn handle_list_sections() -> Json<Vec<PhaseSummary>> {
    Json(
        PHASES
            .iter()
            .enumerate()
            .map(|(index, &phase)| PhaseSummary {
                index,
                phase,
                key: phase.key(),
                name: phase.name(),
                time_estimate: phase.time_estimate(),
                section: phase.section_kind(),
            })
            .collect(),
    )
}

/// POST /api/v1/assessment
///
/// Starts a fresh session. Any existing session is torn down first.
pub async fn handle_start(State(state): State<AppState>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.session.start().await))
}

/// GET /api/v1/assessment
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.session.read(|s| s.view()).await?))
}

/// DELETE /api/v1/assessment
pub async fn handle_end(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    match state.session.end().await {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(
            "No assessment session is active".to_string(),
        )),
    }
}

/// GET /api/v1/assessment/current
///
/// Content for the phase under the cursor: questions with recorded answers,
/// recommendation status, or static guidance.
pub async fn handle_current(
    State(state): State<AppState>,
) -> Result<Json<PhaseContent>, AppError> {
    Ok(Json(state.session.read(|s| s.content()).await?))
}

/// PUT /api/v1/assessment/responses
pub async fn handle_answer(
    State(state): State<AppState>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<SessionView>, AppError> {
    let Json(req) = payload?;
    if req.value.trim().is_empty() {
        return Err(AppError::Validation("value cannot be empty".to_string()));
    }
    let view = state.session.answer(req.question, req.value.trim()).await?;
    Ok(Json(view))
}

/// POST /api/v1/assessment/next
pub async fn handle_next(
    State(state): State<AppState>,
) -> Result<Json<TransitionResponse>, AppError> {
    let (transition, session) = state.session.next().await?;
    Ok(Json(TransitionResponse {
        transition,
        session,
    }))
}

/// POST /api/v1/assessment/previous
pub async fn handle_previous(
    State(state): State<AppState>,
) -> Result<Json<TransitionResponse>, AppError> {
    let (transition, session) = state.session.previous().await?;
    Ok(Json(TransitionResponse {
        transition,
        session,
    }))
}

/// GET /api/v1/assessment/result
pub async fn handle_result(
    State(state): State<AppState>,
) -> Result<Json<AssessmentResult>, AppError> {
    Ok(Json(state.session.read(|s| s.result().clone()).await?))
}

async fn snapshot(state: &AppState) -> Result<AssessmentReport, AppError> {
    let report = state
        .session
        .read(|s| AssessmentReport {
            session_id: s.id(),
            generated_at: Utc::now(),
            result: s.result().clone(),
        })
        .await?;
    Ok(report)
}

/// POST /api/v1/assessment/report
///
/// Placeholder download. Export failures come back as a notification, not an error.
pub async fn handle_download_report(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse>, AppError> {
    let report = snapshot(&state).await?;

    match state.exporter.export(&report).await {
        Ok(exported) => {
            state.session.mark_report_downloaded(report.session_id).await;
            info!(
                session_id = %report.session_id,
                filename = %exported.filename,
                size_bytes = exported.body.len(),
                "Report generated"
            );
            Ok(Json(ReportResponse {
                notification: Notification::info(
                    "Report Downloaded",
                    "Your complete assessment report has been downloaded successfully.",
                ),
                report: Some(ReportSummary {
                    size_bytes: exported.body.len(),
                    filename: exported.filename,
                    content_type: exported.content_type,
                }),
            }))
        }
        Err(e) => {
            warn!(session_id = %report.session_id, error = %e, "Report download failed");
            Ok(Json(ReportResponse {
                notification: Notification::destructive(
                    "Download Failed",
                    "There was an error downloading your report. Please try again.",
                ),
                report: None,
            }))
        }
    }
}

/// POST /api/v1/assessment/share
pub async fn handle_share(
    State(state): State<AppState>,
) -> Result<Json<ShareResponse>, AppError> {
    let report = snapshot(&state).await?;

    match state.exporter.share(&report).await {
        Ok(link) => Ok(Json(ShareResponse {
            notification: Notification::info("Link Copied", "Assessment link copied to clipboard!"),
            share: Some(link),
        })),
        Err(e) => {
            warn!(session_id = %report.session_id, error = %e, "Share failed");
            Ok(Json(ShareResponse {
                notification: Notification::destructive(
                    "Share Failed",
                    "The assessment link could not be shared. Please try again.",
                ),
                share: None,
            }))
        }
    }
}
