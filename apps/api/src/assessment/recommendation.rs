//! Recommendation engine — maps the mean of three phase scores to one of three fixed bands.
//!
//! Nothing in the output depends on the score beyond band selection; insights, next
//! steps and timeline are canned per band.

use serde::Serialize;
use tracing::warn;

use crate::assessment::scoring::round_score;
use crate::assessment::AssessmentError;

pub const STRONG_FIT_THRESHOLD: u32 = 75;
pub const MODERATE_FIT_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Yes,
    Maybe,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Moderate,
}

/// What to do when one of the three input scores is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingScorePolicy {
    /// Substitute 0 and list the gap in `missing_sections`.
    #[default]
    TreatAsZero,
    /// Refuse to produce a recommendation.
    Reject,
}

/// The three phase-level overall scores feeding the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreInputs {
    pub psychometric: Option<u32>,
    pub technical: Option<u32>,
    pub wiscar: Option<u32>,
}

impl ScoreInputs {
    pub fn missing(&self) -> Vec<String> {
        [
            ("psychometric", self.psychometric),
            ("technical", self.technical),
            ("wiscar", self.wiscar),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_none())
        .map(|(k, _)| k.to_string())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub title: String,
    pub description: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub decision: Decision,
    pub confidence: Confidence,
    pub overall_score: u32,
    pub psychometric_score: u32,
    pub technical_score: u32,
    pub wiscar_score: u32,
    pub insights: Vec<String>,
    pub next_steps: Vec<NextStep>,
    pub timeline: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_sections: Vec<String>,
}

struct Band {
    decision: Decision,
    confidence: Confidence,
    insights: [&'static str; 4],
    next_steps: [(&'static str, &'static str, &'static str); 3],
    timeline: &'static str,
}

const STRONG_FIT: Band = Band {
    decision: Decision::Yes,
    confidence: Confidence::High,
    insights: [
        "Your cognitive style and personality align well with process optimization roles",
        "You demonstrate strong analytical abilities and systems thinking",
        "Your motivation patterns match those of successful operations professionals",
        "You show high potential for learning operations management concepts quickly",
    ],
    next_steps: [
        (
            "Start with Operations Fundamentals",
            "Begin with 'Introduction to Operations & Process Design' course",
            "2-3 weeks",
        ),
        (
            "Learn Core Tools",
            "Master Excel, basic statistics, and process mapping tools",
            "3-4 weeks",
        ),
        (
            "Apply Knowledge",
            "Work on a real operations improvement project",
            "4-6 weeks",
        ),
    ],
    timeline: "3-4 months for job-ready level",
};

const MODERATE_FIT: Band = Band {
    decision: Decision::Maybe,
    confidence: Confidence::Moderate,
    insights: [
        "You show potential but may need to develop specific areas first",
        "Your technical skills could benefit from strengthening",
        "Consider exploring related fields that might be a better fit",
        "Focus on building foundational knowledge before diving deep",
    ],
    next_steps: [
        (
            "Explore Related Fields",
            "Look into Business Analysis or Project Coordination roles",
            "1-2 weeks",
        ),
        (
            "Take Foundation Course",
            "Complete a business fundamentals or analytics course",
            "4-6 weeks",
        ),
        (
            "Reassess Interest",
            "Take a specialized operations course to test genuine interest",
            "2-3 weeks",
        ),
    ],
    timeline: "2-3 months to determine fit",
};

const POOR_FIT: Band = Band {
    decision: Decision::No,
    confidence: Confidence::High,
    insights: [
        "Your current profile suggests operations management may not be the best fit",
        "Your strengths might be better suited for other career paths",
        "Consider fields that better match your natural preferences and abilities",
        "This doesn't reflect on your capabilities - just alignment with this specific field",
    ],
    next_steps: [
        (
            "Explore Alternative Fields",
            "Consider Product Design (creative + structured thinking)",
            "1-2 weeks",
        ),
        (
            "Try UX Research",
            "Blend analytical skills with user-focused work",
            "2-3 weeks",
        ),
        (
            "Consider Consulting",
            "Use problem-solving skills in varied business contexts",
            "1-2 weeks",
        ),
    ],
    timeline: "1-2 months to explore alternatives",
};

fn band_for(overall_score: u32) -> &'static Band {
    if overall_score >= STRONG_FIT_THRESHOLD {
        &STRONG_FIT
    } else if overall_score >= MODERATE_FIT_THRESHOLD {
        &MODERATE_FIT
    } else {
        &POOR_FIT
    }
}

/// Builds the recommendation from the three phase scores.
///
/// `overall_score = round(mean(inputs))` and the band is chosen on that rounded value.
pub fn generate_recommendation(
    inputs: ScoreInputs,
    policy: MissingScorePolicy,
) -> Result<Recommendation, AssessmentError> {
    let missing_sections = inputs.missing();
    if !missing_sections.is_empty() {
        match policy {
            MissingScorePolicy::Reject => {
                return Err(AssessmentError::MissingScores(missing_sections));
            }
            MissingScorePolicy::TreatAsZero => {
                warn!(
                    missing = ?missing_sections,
                    "Recommendation computed with missing section scores treated as 0"
                );
            }
        }
    }

    let psychometric_score = inputs.psychometric.unwrap_or(0);
    let technical_score = inputs.technical.unwrap_or(0);
    let wiscar_score = inputs.wiscar.unwrap_or(0);

    let sum = psychometric_score + technical_score + wiscar_score;
    let overall_score = round_score(sum as f64 / 3.0);
    let band = band_for(overall_score);

    Ok(Recommendation {
        decision: band.decision,
        confidence: band.confidence,
        overall_score,
        psychometric_score,
        technical_score,
        wiscar_score,
        insights: band.insights.iter().map(|s| s.to_string()).collect(),
        next_steps: band
            .next_steps
            .iter()
            .map(|(title, description, duration)| NextStep {
                title: title.to_string(),
                description: description.to_string(),
                duration: duration.to_string(),
            })
            .collect(),
        timeline: band.timeline.to_string(),
        missing_sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(p: u32, t: u32, w: u32) -> Recommendation {
        let inputs = ScoreInputs {
            psychometric: Some(p),
            technical: Some(t),
            wiscar: Some(w),
        };
        generate_recommendation(inputs, MissingScorePolicy::Reject).unwrap()
    }

    #[test]
    fn test_strong_fit_band() {
        let r = rec(90, 90, 90);
        assert_eq!(r.decision, Decision::Yes);
        assert_eq!(r.confidence, Confidence::High);
        assert_eq!(r.overall_score, 90);
        assert_eq!(r.timeline, "3-4 months for job-ready level");
    }

    #[test]
    fn test_moderate_fit_band() {
        let r = rec(65, 65, 65);
        assert_eq!(r.decision, Decision::Maybe);
        assert_eq!(r.confidence, Confidence::Moderate);
    }

    #[test]
    fn test_poor_fit_band() {
        let r = rec(30, 30, 30);
        assert_eq!(r.decision, Decision::No);
        assert_eq!(r.confidence, Confidence::High);
        assert_eq!(r.timeline, "1-2 months to explore alternatives");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(rec(75, 75, 75).decision, Decision::Yes);
        assert_eq!(rec(60, 60, 60).decision, Decision::Maybe);
        assert_eq!(rec(59, 59, 59).decision, Decision::No);
        assert_eq!(rec(100, 50, 75).decision, Decision::Yes);
    }

    #[test]
    fn test_band_uses_rounded_mean() {
        // (75 + 75 + 74) / 3 = 74.67 → 75
        let r = rec(75, 75, 74);
        assert_eq!(r.overall_score, 75);
        assert_eq!(r.decision, Decision::Yes);
        // (60 + 60 + 58) / 3 = 59.33 → 59
        assert_eq!(rec(60, 60, 58).decision, Decision::No);
    }

    #[test]
    fn test_decision_is_monotonic_in_mean() {
        let rank = |d: Decision| match d {
            Decision::No => 0,
            Decision::Maybe => 1,
            Decision::Yes => 2,
        };
        let mut last = 0;
        for s in 0..=100 {
            let current = rank(rec(s, s, s).decision);
            assert!(current >= last, "decision regressed at {s}");
            last = current;
        }
    }

    #[test]
    fn test_every_band_has_three_next_steps_and_four_insights() {
        for s in [10, 65, 90] {
            let r = rec(s, s, s);
            assert_eq!(r.next_steps.len(), 3);
            assert_eq!(r.insights.len(), 4);
        }
    }

    #[test]
    fn test_missing_scores_rejected_in_strict_mode() {
        let inputs = ScoreInputs {
            psychometric: Some(90),
            technical: None,
            wiscar: Some(90),
        };
        let err = generate_recommendation(inputs, MissingScorePolicy::Reject).unwrap_err();
        match err {
            AssessmentError::MissingScores(sections) => assert_eq!(sections, vec!["technical"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_scores_pull_average_down_when_lenient() {
        let inputs = ScoreInputs {
            psychometric: Some(90),
            technical: None,
            wiscar: Some(90),
        };
        let r = generate_recommendation(inputs, MissingScorePolicy::TreatAsZero).unwrap();
        assert_eq!(r.overall_score, 60);
        assert_eq!(r.decision, Decision::Maybe);
        assert_eq!(r.missing_sections, vec!["technical"]);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(rec(90, 90, 90)).unwrap();
        assert_eq!(json["decision"], "yes");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["overallScore"], 90);
        assert!(json["nextSteps"][0]["duration"].is_string());
        assert!(json.get("missingSections").is_none());
    }
}
