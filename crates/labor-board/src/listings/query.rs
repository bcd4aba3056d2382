use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::JobRecord;

/// Listing filters taken verbatim from the request's query string.
///
/// `q` is a free-text term and `skill` a single tag; empty values disable
/// the corresponding filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    #[serde(default, rename = "q")]
    pub term: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
}

impl JobQuery {
    pub fn new(term: impl Into<String>, skill: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            skill: Some(skill.into()),
        }
    }

    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or_default()
    }

    pub fn skill(&self) -> &str {
        self.skill.as_deref().unwrap_or_default()
    }
}

/// Filter `records` down to the postings matching both parts of `query`.
///
/// Order is inherited from `records`; nothing is ranked or reordered.
pub fn search(records: &[Arc<JobRecord>], query: &JobQuery) -> Vec<Arc<JobRecord>> {
    let needle = query.term().to_lowercase();
    let skill = query.skill();

    records
        .iter()
        .filter(|record| needle.is_empty() || matches_term(record, &needle))
        .filter(|record| skill.is_empty() || record.has_tag(skill))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_term(record: &JobRecord, needle: &str) -> bool {
    [&record.title, &record.location, &record.description]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
