//! The single in-memory assessment session and the slot that owns it.
//!
//! `AssessmentSession` is synchronous: every user interaction is one method call that
//! updates state immediately. The only suspension point is the artificial delay before
//! a recommendation is shown, run as a tokio task owned by the session. Leaving the
//! recommendation phase, restarting, or ending the session aborts that task, and a
//! generation counter keeps a task that already woke from writing into a newer view.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::assessment::flow::{
    AssessmentResult, CareerGuidanceRecord, FlowController, IntroductionRecord, Phase,
    PhasePayload, RecommendationRecord, SectionRecord,
};
use crate::assessment::guidance::{
    CareerGuidanceContent, IntroductionContent, CAREER_GUIDANCE, INTRODUCTION,
};
use crate::assessment::questions::{
    Question, ScoringMethod, SectionKind, Subsection, LIKERT_LABELS,
};
use crate::assessment::recommendation::{
    generate_recommendation, MissingScorePolicy, Recommendation, ScoreInputs,
};
use crate::assessment::responses::ResponseCollector;
use crate::assessment::scoring::score_section;
use crate::assessment::AssessmentError;

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub recommendation_delay: Duration,
    pub missing_score_policy: MissingScorePolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            recommendation_delay: Duration::from_millis(2000),
            missing_score_policy: MissingScorePolicy::TreatAsZero,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Active phase state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct QuestionnaireState {
    pub kind: SectionKind,
    pub subsection: usize,
    pub responses: ResponseCollector,
}

impl QuestionnaireState {
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            subsection: 0,
            responses: ResponseCollector::new(),
        }
    }

    pub fn subsections(&self) -> &'static [Subsection] {
        self.kind.subsections()
    }

    pub fn current(&self) -> &'static Subsection {
        &self.subsections()[self.subsection]
    }

    pub fn is_current_complete(&self) -> bool {
        self.responses
            .is_complete(self.subsections(), self.subsection)
    }

    fn is_last_subsection(&self) -> bool {
        self.subsection + 1 == self.subsections().len()
    }

    pub fn progress_percent(&self) -> u32 {
        (((self.subsection + 1) as f64 / self.subsections().len() as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationState {
    Generating { generation: u64 },
    Ready(Recommendation),
    Failed(AssessmentError),
}

impl RecommendationState {
    pub fn status(&self) -> &'static str {
        match self {
            RecommendationState::Generating { .. } => "generating",
            RecommendationState::Ready(_) => "ready",
            RecommendationState::Failed(_) => "failed",
        }
    }
}

/// State of whichever phase the cursor points at.
#[derive(Debug, Clone)]
pub enum ActivePhase {
    Introduction,
    Questionnaire(QuestionnaireState),
    Recommendation(RecommendationState),
    CareerGuidance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transition {
    Subsection { index: usize },
    Phase { from: Phase, to: Phase },
    Stayed,
}

// ────────────────────────────────────────────────────────────────────────────
// Views
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsectionProgress {
    pub index: usize,
    pub total: usize,
    pub title: &'static str,
    pub answered: usize,
    pub question_count: usize,
    pub progress_percent: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub cursor: usize,
    pub total_phases: usize,
    pub phase: Phase,
    pub phase_name: &'static str,
    pub time_estimate: &'static str,
    pub progress_percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<SubsectionProgress>,
    pub can_advance: bool,
    pub can_go_back: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_status: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PhaseContent {
    Introduction {
        content: &'static IntroductionContent,
    },
    Questionnaire {
        section: SectionKind,
        title: &'static str,
        subsection_index: usize,
        subsection_count: usize,
        subsection: &'static Subsection,
        #[serde(skip_serializing_if = "Option::is_none")]
        likert_labels: Option<&'static [&'static str]>,
        answers: Vec<Option<String>>,
    },
    Recommendation {
        status: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        recommendation: Option<Recommendation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    CareerGuidance {
        content: &'static CareerGuidanceContent,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct AssessmentSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    flow: FlowController,
    active: ActivePhase,
    pending: Option<JoinHandle<()>>,
    generation: u64,
    report_downloaded: bool,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            flow: FlowController::new(),
            active: ActivePhase::Introduction,
            pending: None,
            generation: 0,
            report_downloaded: false,
        };
        session.enter_current_phase();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn result(&self) -> &AssessmentResult {
        self.flow.result()
    }

    pub fn mark_report_downloaded(&mut self) {
        self.report_downloaded = true;
    }

    /// Records an answer for `question` in the current subsection.
    pub fn answer(&mut self, question: usize, value: &str) -> Result<(), AssessmentError> {
        let phase_key = self.flow.current().key();
        let ActivePhase::Questionnaire(state) = &mut self.active else {
            return Err(AssessmentError::NotAQuestionnaire(phase_key));
        };

        let item = state
            .current()
            .questions
            .get(question)
            .ok_or(AssessmentError::UnknownQuestion {
                subsection: state.subsection,
                question,
            })?;

        if !item.accepts(value) {
            return Err(AssessmentError::InvalidValue {
                value: value.to_string(),
                expected: expected_answer(item),
            });
        }

        state.responses.record(state.subsection, question, value);
        debug!(
            session_id = %self.id,
            phase = phase_key,
            subsection = state.subsection,
            question,
            value,
            "Answer recorded"
        );
        Ok(())
    }

    /// Whether a forward transition is currently allowed.
    pub fn can_advance(&self) -> bool {
        match &self.active {
            ActivePhase::Introduction | ActivePhase::CareerGuidance => true,
            ActivePhase::Questionnaire(state) => state.is_current_complete(),
            ActivePhase::Recommendation(state) => matches!(state, RecommendationState::Ready(_)),
        }
    }

    pub fn can_go_back(&self) -> bool {
        match &self.active {
            ActivePhase::Questionnaire(state) if state.subsection > 0 => true,
            _ => self.flow.cursor() > 0,
        }
    }

    /// Forward transition: next subsection, or complete the phase and hand its
    /// payload to the flow controller.
    pub fn next(&mut self) -> Result<Transition, AssessmentError> {
        let from = self.flow.current();
        let cursor = self.flow.cursor();

        let payload = match &mut self.active {
            ActivePhase::Introduction => PhasePayload::Introduction(IntroductionRecord {
                completed: true,
                timestamp: Utc::now(),
            }),
            ActivePhase::Questionnaire(state) => {
                if !state.is_current_complete() {
                    return Err(AssessmentError::SubsectionIncomplete {
                        subsection: state.subsection,
                        answered: state.responses.answered_in(state.subsection),
                        total: state.current().questions.len(),
                    });
                }
                if !state.is_last_subsection() {
                    state.subsection += 1;
                    return Ok(Transition::Subsection {
                        index: state.subsection,
                    });
                }
                let scores = score_section(state.kind, &state.responses);
                info!(
                    session_id = %self.id,
                    section = ?state.kind,
                    overall_score = scores.overall_score(),
                    "Section scored"
                );
                PhasePayload::Section(
                    state.kind,
                    SectionRecord {
                        responses: state.responses.clone(),
                        scores,
                        completed: true,
                    },
                )
            }
            ActivePhase::Recommendation(RecommendationState::Ready(recommendation)) => {
                PhasePayload::Recommendation(RecommendationRecord {
                    recommendation: recommendation.clone(),
                    completed: true,
                    timestamp: Utc::now(),
                })
            }
            ActivePhase::Recommendation(RecommendationState::Generating { .. }) => {
                return Err(AssessmentError::RecommendationPending);
            }
            ActivePhase::Recommendation(RecommendationState::Failed(err)) => {
                return Err(err.clone());
            }
            ActivePhase::CareerGuidance => PhasePayload::CareerGuidance(CareerGuidanceRecord {
                completed: true,
                timestamp: Utc::now(),
                downloaded_report: self.report_downloaded,
            }),
        };

        if !self.flow.complete(cursor, payload)? {
            info!(session_id = %self.id, phase = from.key(), "Final phase completed");
            return Ok(Transition::Stayed);
        }

        self.enter_current_phase();
        let to = self.flow.current();
        info!(session_id = %self.id, from = from.key(), to = to.key(), "Advanced to next phase");
        Ok(Transition::Phase { from, to })
    }

    /// Backward transition: previous subsection, or the previous phase.
    pub fn previous(&mut self) -> Transition {
        if let ActivePhase::Questionnaire(state) = &mut self.active {
            if state.subsection > 0 {
                state.subsection -= 1;
                return Transition::Subsection {
                    index: state.subsection,
                };
            }
        }

        let from = self.flow.current();
        if !self.flow.previous() {
            return Transition::Stayed;
        }
        self.enter_current_phase();
        let to = self.flow.current();
        info!(session_id = %self.id, from = from.key(), to = to.key(), "Returned to previous phase");
        Transition::Phase { from, to }
    }

    /// Mounts fresh state for the phase under the cursor, tearing down the old one.
    fn enter_current_phase(&mut self) {
        self.cancel_pending();
        self.active = match self.flow.current() {
            Phase::Introduction => ActivePhase::Introduction,
            Phase::Psychometric => {
                ActivePhase::Questionnaire(QuestionnaireState::new(SectionKind::Psychometric))
            }
            Phase::Technical => {
                ActivePhase::Questionnaire(QuestionnaireState::new(SectionKind::Technical))
            }
            Phase::Wiscar => ActivePhase::Questionnaire(QuestionnaireState::new(SectionKind::Wiscar)),
            Phase::Recommendation => {
                self.generation += 1;
                ActivePhase::Recommendation(RecommendationState::Generating {
                    generation: self.generation,
                })
            }
            Phase::CareerGuidance => ActivePhase::CareerGuidance,
        };
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!(session_id = %self.id, "Pending recommendation task cancelled");
        }
    }

    /// Generation awaiting a delayed recommendation task, if none is attached yet.
    pub fn pending_generation(&self) -> Option<u64> {
        match &self.active {
            ActivePhase::Recommendation(RecommendationState::Generating { generation })
                if self.pending.is_none() =>
            {
                Some(*generation)
            }
            _ => None,
        }
    }

    fn attach_pending(&mut self, handle: JoinHandle<()>) {
        self.cancel_pending();
        self.pending = Some(handle);
    }

    pub fn score_inputs(&self) -> ScoreInputs {
        let overall = |kind| self.result().section(kind).map(|r| r.scores.overall_score());
        ScoreInputs {
            psychometric: overall(SectionKind::Psychometric),
            technical: overall(SectionKind::Technical),
            wiscar: overall(SectionKind::Wiscar),
        }
    }

    /// Computes the recommendation for `generation`. Returns false, changing nothing,
    /// when the phase has been left or re-entered since that generation started.
    pub fn resolve_recommendation(&mut self, generation: u64, policy: MissingScorePolicy) -> bool {
        match &self.active {
            ActivePhase::Recommendation(RecommendationState::Generating { generation: g })
                if *g == generation => {}
            _ => return false,
        }

        let state = match generate_recommendation(self.score_inputs(), policy) {
            Ok(rec) => {
                info!(
                    session_id = %self.id,
                    decision = ?rec.decision,
                    overall_score = rec.overall_score,
                    "Recommendation ready"
                );
                RecommendationState::Ready(rec)
            }
            Err(err) => {
                warn!(session_id = %self.id, error = %err, "Recommendation failed");
                RecommendationState::Failed(err)
            }
        };
        self.active = ActivePhase::Recommendation(state);
        // The finishing task owns this handle; drop it rather than abort.
        self.pending = None;
        true
    }

    pub fn view(&self) -> SessionView {
        let phase = self.flow.current();
        let subsection = match &self.active {
            ActivePhase::Questionnaire(state) => Some(SubsectionProgress {
                index: state.subsection,
                total: state.subsections().len(),
                title: state.current().title,
                answered: state.responses.answered_in(state.subsection),
                question_count: state.current().questions.len(),
                progress_percent: state.progress_percent(),
            }),
            _ => None,
        };
        let recommendation_status = match &self.active {
            ActivePhase::Recommendation(state) => Some(state.status()),
            _ => None,
        };

        SessionView {
            session_id: self.id,
            started_at: self.started_at,
            cursor: self.flow.cursor(),
            total_phases: self.flow.len(),
            phase,
            phase_name: phase.name(),
            time_estimate: phase.time_estimate(),
            progress_percent: self.flow.progress_percent(),
            subsection,
            can_advance: self.can_advance(),
            can_go_back: self.can_go_back(),
            recommendation_status,
        }
    }

    pub fn content(&self) -> PhaseContent {
        match &self.active {
            ActivePhase::Introduction => PhaseContent::Introduction {
                content: &INTRODUCTION,
            },
            ActivePhase::Questionnaire(state) => {
                let subsection = state.current();
                PhaseContent::Questionnaire {
                    section: state.kind,
                    title: state.kind.title(),
                    subsection_index: state.subsection,
                    subsection_count: state.subsections().len(),
                    subsection,
                    likert_labels: match state.kind.scoring_method() {
                        ScoringMethod::LikertMean => Some(&LIKERT_LABELS[..]),
                        ScoringMethod::Correctness => None,
                    },
                    answers: (0..subsection.questions.len())
                        .map(|q| state.responses.get(state.subsection, q).map(str::to_string))
                        .collect(),
                }
            }
            ActivePhase::Recommendation(state) => PhaseContent::Recommendation {
                status: state.status(),
                recommendation: match state {
                    RecommendationState::Ready(rec) => Some(rec.clone()),
                    _ => None,
                },
                error: match state {
                    RecommendationState::Failed(err) => Some(err.to_string()),
                    _ => None,
                },
            },
            ActivePhase::CareerGuidance => PhaseContent::CareerGuidance {
                content: &CAREER_GUIDANCE,
            },
        }
    }
}

impl Drop for AssessmentSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

fn expected_answer(question: &Question) -> String {
    match question {
        Question::Likert { .. } => "an agreement level from 1 to 5".to_string(),
        Question::MultipleChoice { options, .. } => {
            format!("an option index from 0 to {}", options.len().saturating_sub(1))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slot
// ────────────────────────────────────────────────────────────────────────────

/// Holds at most one session. Starting a new one drops (and so tears down) the old.
#[derive(Clone, Default)]
pub struct SessionSlot {
    inner: Arc<RwLock<Option<AssessmentSession>>>,
    settings: SessionSettings,
}

impl SessionSlot {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            settings,
        }
    }

    pub async fn start(&self) -> SessionView {
        let session = AssessmentSession::new();
        let view = session.view();
        if let Some(old) = self.inner.write().await.replace(session) {
            info!(session_id = %old.id(), "Replacing active assessment session");
        }
        info!(session_id = %view.session_id, "Assessment session started");
        view
    }

    /// Tears down the active session. Returns its id if there was one.
    pub async fn end(&self) -> Option<Uuid> {
        let old = self.inner.write().await.take();
        let id = old.as_ref().map(AssessmentSession::id);
        if let Some(id) = id {
            info!(session_id = %id, "Assessment session ended");
        }
        id
    }

    pub async fn read<R>(
        &self,
        f: impl FnOnce(&AssessmentSession) -> R,
    ) -> Result<R, AssessmentError> {
        let guard = self.inner.read().await;
        guard.as_ref().map(f).ok_or(AssessmentError::NoActiveSession)
    }

    pub async fn answer(&self, question: usize, value: &str) -> Result<SessionView, AssessmentError> {
        let mut guard = self.inner.write().await;
        let session = guard.as_mut().ok_or(AssessmentError::NoActiveSession)?;
        session.answer(question, value)?;
        Ok(session.view())
    }

    pub async fn next(&self) -> Result<(Transition, SessionView), AssessmentError> {
        let mut guard = self.inner.write().await;
        let session = guard.as_mut().ok_or(AssessmentError::NoActiveSession)?;
        let transition = session.next()?;
        self.schedule_recommendation(session);
        Ok((transition, session.view()))
    }

    pub async fn previous(&self) -> Result<(Transition, SessionView), AssessmentError> {
        let mut guard = self.inner.write().await;
        let session = guard.as_mut().ok_or(AssessmentError::NoActiveSession)?;
        let transition = session.previous();
        self.schedule_recommendation(session);
        Ok((transition, session.view()))
    }

    /// Flags a successful report download, if `session_id` is still the active session.
    pub async fn mark_report_downloaded(&self, session_id: Uuid) {
        let mut guard = self.inner.write().await;
        if let Some(session) = guard.as_mut().filter(|s| s.id() == session_id) {
            session.mark_report_downloaded();
        }
    }

    fn schedule_recommendation(&self, session: &mut AssessmentSession) {
        let Some(generation) = session.pending_generation() else {
            return;
        };

        let slot = Arc::clone(&self.inner);
        let session_id = session.id();
        let delay = self.settings.recommendation_delay;
        let policy = self.settings.missing_score_policy;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut guard = slot.write().await;
            if let Some(session) = guard.as_mut().filter(|s| s.id() == session_id) {
                session.resolve_recommendation(generation, policy);
            }
        });

        debug!(
            session_id = %session_id,
            generation,
            delay_ms = delay.as_millis() as u64,
            "Recommendation scheduled"
        );
        session.attach_pending(handle);
    }
}
