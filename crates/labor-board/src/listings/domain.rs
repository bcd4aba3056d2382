use serde::{Deserialize, Serialize};

/// Duration shown when a poster leaves the field blank.
pub const UNSPECIFIED_DURATION: &str = "Not specified";

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One listed short-term work opportunity.
///
/// Records are shared behind `Arc` once stored and expose no mutation API.
/// `posted` is the relative label captured when the record was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub location: String,
    pub pay: String,
    pub tags: Vec<String>,
    pub posted: String,
    pub duration: String,
    pub description: String,
}

impl JobRecord {
    /// Case-insensitive exact match against any of the record's tags.
    pub fn has_tag(&self, skill: &str) -> bool {
        let wanted = skill.to_lowercase();
        self.tags.iter().any(|tag| tag.to_lowercase() == wanted)
    }
}

/// Raw posting payload exactly as it arrives from a form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub pay: Option<String>,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw application payload. Form bodies send the id as `jobId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    #[serde(default, alias = "jobId")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Shortcut chip rendered above the listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularSkill {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const POPULAR_SKILLS: [PopularSkill; 6] = [
    PopularSkill {
        key: "mansory",
        label: "Mansory",
        icon: "👨‍🔧",
    },
    PopularSkill {
        key: "plumbing",
        label: "Plumbing",
        icon: "🛠",
    },
    PopularSkill {
        key: "carpentry",
        label: "Carpentry",
        icon: "🪚",
    },
    PopularSkill {
        key: "electrical",
        label: "Electrical",
        icon: "⚡",
    },
    PopularSkill {
        key: "painting",
        label: "Painting",
        icon: "🎨",
    },
    PopularSkill {
        key: "gardening",
        label: "Gardening",
        icon: "🌺",
    },
];

/// Treat missing and whitespace-only form values the same way.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
