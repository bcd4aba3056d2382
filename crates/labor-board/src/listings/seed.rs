//! Startup catalogue for the listing store.

use std::io::Read;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Deserializer};

use super::domain::{JobId, JobRecord, UNSPECIFIED_DURATION};
use super::posting::split_tags;
use super::relative;
use super::store::{InMemoryListingStore, StoreError};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    location: &str,
    pay: &str,
    tags: &[&str],
    posted: &str,
    duration: &str,
    description: &str,
) -> JobRecord {
    JobRecord {
        id: JobId::from(id),
        title: title.to_string(),
        location: location.to_string(),
        pay: pay.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        posted: posted.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    }
}

/// The three illustrative postings served when no catalogue file is configured.
pub fn default_listings() -> Vec<JobRecord> {
    vec![
        record(
            "Job-01",
            "Construction Helper Needed",
            "Gurgaon, Haryana",
            "500.00rs/day",
            &["Mansory", "Physical Work"],
            "About 2 days ago",
            "2 weeks",
            "Need 2 experienced construction workers for building projects",
        ),
        record(
            "Job-02",
            "Plumbing Repair work",
            "Noida, UP",
            "800.00rs/day",
            &["Plumbing", "Pipe Repair"],
            "About 7 hours ago",
            "3 days",
            "Urgent plumbing repair needed in residential complex. Experience with pipe fitting required.",
        ),
        record(
            "Job-03",
            "House Painting Project",
            "Delhi, NCR",
            "600.00rs/day",
            &["Painting", "Interior Design"],
            "1 day ago",
            "1 week",
            "Interior and exterior painting work for 3BHK house. Must bring own brushes and basic equipments",
        ),
    ]
}

pub fn seeded_store() -> InMemoryListingStore {
    InMemoryListingStore::with_records(default_listings())
        .expect("built-in listings have distinct ids")
}

#[derive(Debug, thiserror::Error)]
pub enum SeedImportError {
    #[error("failed to read listing catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing catalogue CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalogue row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("catalogue contains duplicate job ids: {0}")]
    Duplicate(#[from] StoreError),
}

/// Load a catalogue file (see [`import_csv`]) into a fresh store.
pub fn store_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<InMemoryListingStore, SeedImportError> {
    let file = std::fs::File::open(path)?;
    let records = import_csv(file)?;
    Ok(InMemoryListingStore::with_records(records)?)
}

/// Parse catalogue rows with headers
/// `id,title,location,pay,tags,posted,duration,description`.
///
/// Rows are kept in file order, which becomes the store's newest-first
/// order. Tags share one quoted cell and are split exactly like posted
/// forms (see [`split_tags`]). A blank `posted` is labelled relative to the
/// import time.
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<JobRecord>, SeedImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<CatalogueRow>().enumerate() {
        let row = row?;
        records.push(row.into_record(index + 1)?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogueRow {
    id: String,
    title: String,
    location: String,
    pay: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    posted: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    duration: Option<String>,
    #[serde(default)]
    description: String,
}

impl CatalogueRow {
    fn into_record(self, row: usize) -> Result<JobRecord, SeedImportError> {
        for (name, value) in [
            ("id", &self.id),
            ("title", &self.title),
            ("location", &self.location),
            ("pay", &self.pay),
        ] {
            if value.is_empty() {
                return Err(SeedImportError::InvalidRow {
                    row,
                    reason: format!("{name} is empty"),
                });
            }
        }

        let tags = split_tags(self.tags.as_deref());

        let posted = self.posted.unwrap_or_else(|| {
            let now = Utc::now();
            relative::from_now(now, now)
        });

        Ok(JobRecord {
            id: JobId(self.id),
            title: self.title,
            location: self.location,
            pay: self.pay,
            tags,
            posted,
            duration: self
                .duration
                .unwrap_or_else(|| UNSPECIFIED_DURATION.to_string()),
            description: self.description,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}
