//! Application state definitions

use crate::api::JobFilters;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::{Duration, Instant};

use super::forms::JobPostingForm;

/// How long the transient "Draft Saved" indicator stays up
pub const DRAFT_SAVED_TTL: Duration = Duration::from_secs(2);

/// How long a status-bar notice stays up
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Jobs,
    JobDetail,
    JobCreate,
}

/// A job posting as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    #[serde(default, deserialize_with = "salary_as_string")]
    pub salary_range: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The backend stores the salary as whatever the posting form sent, so
/// listings carry it as either a number or a string.
fn salary_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// Kind of transient status-bar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient status-bar notice (toast-style feedback)
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_TTL
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Data
    pub jobs: Vec<Job>,
    pub filters: JobFilters,

    // Selection
    pub selected_index: usize,
    pub selected_job_id: Option<i64>,
    pub scroll_offset: usize,

    // UI state
    pub api_connected: bool,
    pub search_focused: bool,
    pub notice: Option<Notice>,

    // Form state: present only while the create form is open
    pub form: Option<JobPostingForm>,
    pub draft_saved_at: Option<Instant>,
    pub submit_in_flight: bool,
}

impl AppState {
    /// Move selection down a row in the card grid
    pub fn move_selection_down(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        let total = self.jobs.len();
        if total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        } else {
            // Moving down past the end lands on the last item, but only
            // when there is a row below the current one
            let current_row = self.selected_index / columns;
            let last_row = (total - 1) / columns;
            if current_row < last_row {
                self.selected_index = total - 1;
            }
        }
    }

    /// Move selection up a row in the card grid
    pub fn move_selection_up(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection left within a grid row
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index % columns > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right within a grid row
    pub fn move_selection_right(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        let total = self.jobs.len();
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Currently selected job in the listing
    pub fn selected_job(&self) -> Option<&Job> {
        self.jobs.get(self.selected_index)
    }

    /// Job opened in the detail view
    pub fn detail_job(&self) -> Option<&Job> {
        self.selected_job_id
            .and_then(|id| self.jobs.iter().find(|j| j.id == id))
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::success(message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::error(message));
    }

    /// Whether the "Draft Saved" indicator is still showing
    pub fn draft_just_saved(&self) -> bool {
        self.draft_saved_at
            .is_some_and(|at| at.elapsed() < DRAFT_SAVED_TTL)
    }

    /// Expire transient indicators; called once per event-loop tick
    pub fn clear_expired_transients(&mut self) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired()) {
            self.notice = None;
        }
        if let Some(at) = self.draft_saved_at {
            if at.elapsed() >= DRAFT_SAVED_TTL {
                self.draft_saved_at = None;
            }
        }
    }
}
