//! Flow controller — one linear cursor over the ordered phases plus the cumulative result.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assessment::questions::SectionKind;
use crate::assessment::recommendation::Recommendation;
use crate::assessment::responses::ResponseCollector;
use crate::assessment::scoring::SectionScores;
use crate::assessment::AssessmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Introduction,
    Psychometric,
    Technical,
    Wiscar,
    Recommendation,
    CareerGuidance,
}

pub const PHASES: [Phase; 6] = [
    Phase::Introduction,
    Phase::Psychometric,
    Phase::Technical,
    Phase::Wiscar,
    Phase::Recommendation,
    Phase::CareerGuidance,
];

impl Phase {
    /// Top-level key this phase's payload occupies in the aggregate result.
    pub fn key(self) -> &'static str {
        match self {
            Phase::Introduction => "introduction",
            Phase::Psychometric => "psychometric",
            Phase::Technical => "technical",
            Phase::Wiscar => "wiscar",
            Phase::Recommendation => "recommendation",
            Phase::CareerGuidance => "careerGuidance",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Introduction => "Introduction",
            Phase::Psychometric => "Psychometric Analysis",
            Phase::Technical => "Technical & Aptitude",
            Phase::Wiscar => "WISCAR Framework",
            Phase::Recommendation => "Recommendations",
            Phase::CareerGuidance => "Career Guidance",
        }
    }

    pub fn time_estimate(self) -> &'static str {
        match self {
            Phase::Introduction => "2 min",
            Phase::Psychometric => "8-10 min",
            Phase::Technical => "6-8 min",
            Phase::Wiscar => "5-7 min",
            Phase::Recommendation => "3-4 min",
            Phase::CareerGuidance => "2-3 min",
        }
    }

    pub fn section_kind(self) -> Option<SectionKind> {
        match self {
            Phase::Psychometric => Some(SectionKind::Psychometric),
            Phase::Technical => Some(SectionKind::Technical),
            Phase::Wiscar => Some(SectionKind::Wiscar),
            _ => None,
        }
    }
}

impl From<SectionKind> for Phase {
    fn from(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Psychometric => Phase::Psychometric,
            SectionKind::Technical => Phase::Technical,
            SectionKind::Wiscar => Phase::Wiscar,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Phase payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct IntroductionRecord {
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRecord {
    pub responses: ResponseCollector,
    pub scores: SectionScores,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRecord {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGuidanceRecord {
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
    pub downloaded_report: bool,
}

/// What one phase hands to the flow controller when it completes.
#[derive(Debug, Clone)]
pub enum PhasePayload {
    Introduction(IntroductionRecord),
    Section(SectionKind, SectionRecord),
    Recommendation(RecommendationRecord),
    CareerGuidance(CareerGuidanceRecord),
}

impl PhasePayload {
    pub fn phase(&self) -> Phase {
        match self {
            PhasePayload::Introduction(_) => Phase::Introduction,
            PhasePayload::Section(kind, _) => Phase::from(*kind),
            PhasePayload::Recommendation(_) => Phase::Recommendation,
            PhasePayload::CareerGuidance(_) => Phase::CareerGuidance,
        }
    }
}

/// Cumulative result. Each completed phase owns one top-level key.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<IntroductionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychometric: Option<SectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<SectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiscar: Option<SectionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_guidance: Option<CareerGuidanceRecord>,
}

impl AssessmentResult {
    /// Shallow merge: the payload replaces whatever its key held before.
    pub fn merge(&mut self, payload: PhasePayload) {
        match payload {
            PhasePayload::Introduction(r) => self.introduction = Some(r),
            PhasePayload::Section(SectionKind::Psychometric, r) => self.psychometric = Some(r),
            PhasePayload::Section(SectionKind::Technical, r) => self.technical = Some(r),
            PhasePayload::Section(SectionKind::Wiscar, r) => self.wiscar = Some(r),
            PhasePayload::Recommendation(r) => self.recommendation = Some(r),
            PhasePayload::CareerGuidance(r) => self.career_guidance = Some(r),
        }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionRecord> {
        match kind {
            SectionKind::Psychometric => self.psychometric.as_ref(),
            SectionKind::Technical => self.technical.as_ref(),
            SectionKind::Wiscar => self.wiscar.as_ref(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct FlowController {
    cursor: usize,
    result: AssessmentResult,
}

impl FlowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Phase {
        PHASES[self.cursor]
    }

    pub fn len(&self) -> usize {
        PHASES.len()
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == PHASES.len()
    }

    pub fn result(&self) -> &AssessmentResult {
        &self.result
    }

    /// Overall progress through the flow, 0–100.
    pub fn progress_percent(&self) -> u32 {
        (((self.cursor + 1) as f64 / PHASES.len() as f64) * 100.0).round() as u32
    }

    /// Merges `payload` and advances one phase unless already at the last one.
    /// Returns whether the cursor moved.
    ///
    /// Only the phase under the cursor may complete; anything else is rejected
    /// before the result is touched.
    pub fn complete(
        &mut self,
        phase_index: usize,
        payload: PhasePayload,
    ) -> Result<bool, AssessmentError> {
        if phase_index != self.cursor {
            return Err(AssessmentError::StaleCompletion {
                expected: self.cursor,
                got: phase_index,
            });
        }
        if payload.phase() != self.current() {
            return Err(AssessmentError::WrongPhase {
                expected: self.current().key(),
                got: payload.phase().key(),
            });
        }

        self.result.merge(payload);

        if self.is_last() {
            return Ok(false);
        }
        self.cursor += 1;
        Ok(true)
    }

    /// Steps back one phase unless at the first. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }
}
