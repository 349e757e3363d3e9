use std::sync::Arc;

use crate::assessment::report::{JsonReportExporter, ReportExporter};
use crate::assessment::session::SessionSlot;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory assessment session for the local user.
    pub session: SessionSlot,
    /// Pluggable report backend. Default: JsonReportExporter.
    pub exporter: Arc<dyn ReportExporter>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let exporter = Arc::new(JsonReportExporter::new(
            config.report_delay(),
            config.public_url.clone(),
        ));
        Self {
            session: SessionSlot::new(config.session_settings()),
            exporter,
        }
    }
}
