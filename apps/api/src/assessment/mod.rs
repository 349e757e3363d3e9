// Operations Management career assessment.
// Question bank, response collection, scoring, recommendation and the linear phase flow.
// Everything below `session` is synchronous and pure; only the session slot spawns tasks.

pub mod flow;
pub mod guidance;
pub mod handlers;
pub mod questions;
pub mod recommendation;
pub mod report;
pub mod responses;
pub mod scoring;
pub mod session;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("No assessment session is active")]
    NoActiveSession,

    #[error("Subsection {subsection} is incomplete ({answered}/{total} answered)")]
    SubsectionIncomplete {
        subsection: usize,
        answered: usize,
        total: usize,
    },

    #[error("Question {question} does not exist in subsection {subsection}")]
    UnknownQuestion { subsection: usize, question: usize },

    #[error("'{value}' is not a valid answer: expected {expected}")]
    InvalidValue { value: String, expected: String },

    #[error("The {0} phase does not take answers")]
    NotAQuestionnaire(&'static str),

    #[error("Phase {got} cannot complete while phase {expected} is current")]
    StaleCompletion { expected: usize, got: usize },

    #[error("Payload for {got} cannot complete the {expected} phase")]
    WrongPhase {
        expected: &'static str,
        got: &'static str,
    },

    #[error("Recommendation is still being generated")]
    RecommendationPending,

    #[error("Missing section scores: {}", .0.join(", "))]
    MissingScores(Vec<String>),
}
