use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::assessment::questions::Subsection;

/// Composite key of one answer inside a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResponseKey {
    pub subsection: usize,
    pub question: usize,
}

impl std::fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.subsection, self.question)
    }
}

/// Answers recorded for one questionnaire phase.
///
/// Values are stored exactly as the input widget produced them (a Likert level
/// or an option index, string-encoded). Recording the same key twice overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCollector {
    values: BTreeMap<ResponseKey, String>,
}

impl ResponseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, subsection: usize, question: usize, value: impl Into<String>) {
        self.values.insert(
            ResponseKey {
                subsection,
                question,
            },
            value.into(),
        );
    }

    pub fn get(&self, subsection: usize, question: usize) -> Option<&str> {
        self.values
            .get(&ResponseKey {
                subsection,
                question,
            })
            .map(String::as_str)
    }

    /// True iff every question of `subsections[subsection]` has a stored value.
    /// An out-of-range subsection is never complete.
    pub fn is_complete(&self, subsections: &[Subsection], subsection: usize) -> bool {
        subsections
            .get(subsection)
            .map(|s| (0..s.questions.len()).all(|q| self.get(subsection, q).is_some()))
            .unwrap_or(false)
    }

    pub fn answered_in(&self, subsection: usize) -> usize {
        self.values
            .keys()
            .filter(|k| k.subsection == subsection)
            .count()
    }
}

// Wire form is a flat map keyed "subsection-question".
impl Serialize for ResponseCollector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}
