//! Report export — pluggable backend for the placeholder download and share actions.
//!
//! `AppState` holds an `Arc<dyn ReportExporter>`. Failures never touch assessment
//! state; handlers turn them into a transient `Notification`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::assessment::flow::AssessmentResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Report backend unavailable: {0}")]
    Unavailable(String),
}

/// Snapshot handed to the exporter. Taken under the session lock, exported without it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: AssessmentResult,
}

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLink {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Short-lived, non-blocking message for the user.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

#[async_trait]
pub trait ReportExporter: Send + Sync {
    async fn export(&self, report: &AssessmentReport) -> Result<ExportedReport, ReportError>;

    async fn share(&self, report: &AssessmentReport) -> Result<ShareLink, ReportError>;
}

/// Default exporter: waits a fixed delay to simulate generation, then renders JSON.
pub struct JsonReportExporter {
    delay: Duration,
    public_url: String,
}

impl JsonReportExporter {
    pub fn new(delay: Duration, public_url: String) -> Self {
        Self { delay, public_url }
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    async fn export(&self, report: &AssessmentReport) -> Result<ExportedReport, ReportError> {
        tokio::time::sleep(self.delay).await;

        let body = serde_json::to_vec_pretty(report)?;
        Ok(ExportedReport {
            filename: format!(
                "om-assessment-{}.json",
                report.generated_at.format("%Y%m%d-%H%M%S")
            ),
            content_type: "application/json",
            body: Bytes::from(body),
        })
    }

    async fn share(&self, _report: &AssessmentReport) -> Result<ShareLink, ReportError> {
        if self.public_url.trim().is_empty() {
            return Err(ReportError::Unavailable("PUBLIC_URL is not set".to_string()));
        }
        Ok(ShareLink {
            title: "Operations Management Assessment Results".to_string(),
            text: "I just completed an Operations Management career assessment!".to_string(),
            url: self.public_url.clone(),
        })
    }
}
