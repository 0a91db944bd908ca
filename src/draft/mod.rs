//! Local draft persistence for the job posting form

mod store;

pub use store::{DraftStore, FileDraftStore};

#[cfg(test)]
pub use store::MockDraftStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single persisted job posting draft.
///
/// Field values are stored exactly as entered; the deadline is kept as a
/// date so it can be restored without reparsing user text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub min_salary: String,
    #[serde(default)]
    pub max_salary: String,
    #[serde(default)]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}
