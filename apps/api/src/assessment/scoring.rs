//! Section scoring — reduces a phase's recorded answers to 0–100 scores.
//!
//! Two-level average: question → subsection percentage, subsection → phase overall.
//! Subscores are rounded for display; the overall score is the rounded mean of the
//! unrounded subsection percentages.

use serde::Serialize;

use crate::assessment::questions::{Question, ScoringMethod, SectionKind, Subsection, LIKERT_MIN};
use crate::assessment::responses::ResponseCollector;

/// Mean of Likert levels rescaled from 1–5 to 0–100. Empty input yields 0.0.
pub fn likert_percent(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u32 = values.iter().map(|&v| v as u32).sum();
    let mean = sum as f64 / values.len() as f64;
    (mean - LIKERT_MIN as f64) / 4.0 * 100.0
}

/// Percentage of questions answered correctly. Zero questions yields 0.0.
pub fn correctness_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

pub fn round_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unrounded percentage for one subsection.
///
/// Likert subsections average only the values that parse as levels, so an
/// unanswered subsection scores 0. Multiple-choice subsections divide by the
/// full question count; a missing or malformed answer counts as wrong.
pub fn subsection_percent(
    method: ScoringMethod,
    subsection: &Subsection,
    index: usize,
    responses: &ResponseCollector,
) -> f64 {
    match method {
        ScoringMethod::LikertMean => {
            let values: Vec<u8> = (0..subsection.questions.len())
                .filter_map(|q| responses.get(index, q))
                .filter_map(|v| v.parse::<u8>().ok())
                .collect();
            likert_percent(&values)
        }
        ScoringMethod::Correctness => {
            let correct = subsection
                .questions
                .iter()
                .enumerate()
                .filter(|(q, question)| match question {
                    Question::MultipleChoice { correct, .. } => responses
                        .get(index, *q)
                        .and_then(|v| v.parse::<usize>().ok())
                        .is_some_and(|chosen| chosen == *correct),
                    Question::Likert { .. } => false,
                })
                .count();
            correctness_percent(correct, subsection.questions.len())
        }
    }
}

fn subsection_percents(kind: SectionKind, responses: &ResponseCollector) -> Vec<f64> {
    let method = kind.scoring_method();
    kind.subsections()
        .iter()
        .enumerate()
        .map(|(i, sub)| subsection_percent(method, sub, i, responses))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Per-phase score objects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychometricScores {
    pub interest_score: u32,
    pub personality_score: u32,
    pub cognitive_score: u32,
    pub motivation_score: u32,
    pub overall_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalScores {
    pub aptitude_score: u32,
    pub prerequisite_score: u32,
    pub domain_score: u32,
    pub overall_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive_readiness: u32,
    pub ability_to_learn: u32,
    pub real_world_alignment: u32,
    pub overall_score: u32,
}

/// Scores of one completed phase, tagged by phase kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionScores {
    Psychometric(PsychometricScores),
    Technical(TechnicalScores),
    Wiscar(WiscarScores),
}

impl SectionScores {
    pub fn overall_score(&self) -> u32 {
        match self {
            SectionScores::Psychometric(s) => s.overall_score,
            SectionScores::Technical(s) => s.overall_score,
            SectionScores::Wiscar(s) => s.overall_score,
        }
    }
}

/// Scores a whole phase. Callers gate this on every subsection being complete.
pub fn score_section(kind: SectionKind, responses: &ResponseCollector) -> SectionScores {
    let p = subsection_percents(kind, responses);
    let overall_score = round_score(mean(&p));
    let at = |i: usize| p.get(i).copied().map(round_score).unwrap_or(0);

    match kind {
        SectionKind::Psychometric => SectionScores::Psychometric(PsychometricScores {
            interest_score: at(0),
            personality_score: at(1),
            cognitive_score: at(2),
            motivation_score: at(3),
            overall_score,
        }),
        SectionKind::Technical => SectionScores::Technical(TechnicalScores {
            aptitude_score: at(0),
            prerequisite_score: at(1),
            domain_score: at(2),
            overall_score,
        }),
        SectionKind::Wiscar => SectionScores::Wiscar(WiscarScores {
            will: at(0),
            interest: at(1),
            skill: at(2),
            cognitive_readiness: at(3),
            ability_to_learn: at(4),
            real_world_alignment: at(5),
            overall_score,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::{PSYCHOMETRIC, TECHNICAL, WISCAR};

    fn fill_uniform(subsections: &[Subsection], value: &str) -> ResponseCollector {
        let mut c = ResponseCollector::new();
        for (s, sub) in subsections.iter().enumerate() {
            for q in 0..sub.questions.len() {
                c.record(s, q, value);
            }
        }
        c
    }

    fn fill_technical(pick: impl Fn(usize) -> usize) -> ResponseCollector {
        let mut c = ResponseCollector::new();
        for (s, sub) in TECHNICAL.iter().enumerate() {
            for (q, question) in sub.questions.iter().enumerate() {
                if let Question::MultipleChoice { correct, .. } = question {
                    c.record(s, q, pick(*correct).to_string());
                }
            }
        }
        c
    }

    fn likert_score(values: &[u8]) -> u32 {
        round_score(likert_percent(values))
    }

    fn correctness_score(correct: usize, total: usize) -> u32 {
        round_score(correctness_percent(correct, total))
    }

    #[test]
    fn test_likert_endpoints_and_midpoint() {
        assert_eq!(likert_score(&[5, 5, 5, 5, 5]), 100);
        assert_eq!(likert_score(&[1, 1, 1, 1, 1]), 0);
        assert_eq!(likert_score(&[3, 3, 3, 3, 3]), 50);
    }

    #[test]
    fn test_likert_rounds_to_nearest() {
        // mean 3.4 → 60; mean 3.2 → 55
        assert_eq!(likert_score(&[4, 4, 3, 3, 3]), 60);
        assert_eq!(likert_score(&[4, 3, 3, 3, 3]), 55);
        // mean 11/3 → 66.67 → 67
        assert_eq!(likert_score(&[4, 4, 3]), 67);
    }

    #[test]
    fn test_likert_empty_is_zero() {
        assert_eq!(likert_score(&[]), 0);
    }

    #[test]
    fn test_correctness_score() {
        assert_eq!(correctness_score(5, 5), 100);
        assert_eq!(correctness_score(0, 6), 0);
        assert_eq!(correctness_score(4, 6), 67);
        assert_eq!(correctness_score(0, 0), 0);
    }

    #[test]
    fn test_displayed_subscores_match_rounded_percent() {
        // Interest 3.4 mean → 60, personality 3.2 → 55, the rest all 5.
        let mut c = fill_uniform(PSYCHOMETRIC, "5");
        for (q, v) in ["4", "4", "3", "3", "3"].into_iter().enumerate() {
            c.record(0, q, v);
        }
        for (q, v) in ["4", "3", "3", "3", "3"].into_iter().enumerate() {
            c.record(1, q, v);
        }
        match score_section(SectionKind::Psychometric, &c) {
            SectionScores::Psychometric(s) => {
                assert_eq!(s.interest_score, likert_score(&[4, 4, 3, 3, 3]));
                assert_eq!(s.personality_score, likert_score(&[4, 3, 3, 3, 3]));
                assert_eq!(s.cognitive_score, 100);
                // (60 + 55 + 100 + 100) / 4 = 78.75
                assert_eq!(s.overall_score, 79);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_psychometric_all_agree() {
        let scores = score_section(SectionKind::Psychometric, &fill_uniform(PSYCHOMETRIC, "5"));
        assert_eq!(
            scores,
            SectionScores::Psychometric(PsychometricScores {
                interest_score: 100,
                personality_score: 100,
                cognitive_score: 100,
                motivation_score: 100,
                overall_score: 100,
            })
        );
    }

    #[test]
    fn test_wiscar_all_neutral_is_fifty() {
        let scores = score_section(SectionKind::Wiscar, &fill_uniform(WISCAR, "3"));
        match scores {
            SectionScores::Wiscar(w) => {
                assert_eq!(w.will, 50);
                assert_eq!(w.real_world_alignment, 50);
                assert_eq!(w.overall_score, 50);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_technical_all_correct_and_all_wrong() {
        let all = score_section(SectionKind::Technical, &fill_technical(|c| c));
        assert_eq!(all.overall_score(), 100);

        let none = score_section(SectionKind::Technical, &fill_technical(|c| (c + 1) % 4));
        assert_eq!(none.overall_score(), 0);
    }

    #[test]
    fn test_overall_is_mean_of_unrounded_subsections() {
        // Only the 6-question subsection partly right: 4/6 = 66.67.
        let mut c = fill_technical(|c| c);
        c.record(2, 0, "0");
        c.record(2, 1, "0");
        let scores = score_section(SectionKind::Technical, &c);
        match scores {
            SectionScores::Technical(t) => {
                assert_eq!(t.aptitude_score, 100);
                assert_eq!(t.prerequisite_score, 100);
                assert_eq!(t.domain_score, 67);
                // (100 + 100 + 66.67) / 3 = 88.89
                assert_eq!(t.overall_score, 89);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_reanswer_is_reflected_in_score() {
        let mut c = fill_uniform(PSYCHOMETRIC, "1");
        assert_eq!(score_section(SectionKind::Psychometric, &c).overall_score(), 0);
        for (s, sub) in PSYCHOMETRIC.iter().enumerate() {
            for q in 0..sub.questions.len() {
                c.record(s, q, "5");
            }
        }
        assert_eq!(score_section(SectionKind::Psychometric, &c).overall_score(), 100);
    }

    #[test]
    fn test_scores_serialize_camel_case() {
        let scores = score_section(SectionKind::Wiscar, &fill_uniform(WISCAR, "4"));
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["cognitiveReadiness"], 75);
        assert_eq!(json["overallScore"], 75);
    }
}
