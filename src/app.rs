//! Application state and core logic

use crate::api::{HttpJobApi, JobApi};
use crate::clock::{Clock, SystemClock};
use crate::config::{FormOptions, TuiConfig};
use crate::draft::{DraftStore, FileDraftStore};
use crate::state::{
    AppState, FormField, JobPostingForm, View, BUTTONS_ROW, BUTTON_CANCEL, BUTTON_PUBLISH,
    BUTTON_SAVE_DRAFT,
};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the remote job API
    pub api: Box<dyn JobApi>,
    /// The single local draft slot
    pub drafts: Box<dyn DraftStore>,
    /// Time source for deadline checks and card timestamps
    pub clock: Box<dyn Clock>,
    /// Option sets for the form dropdowns
    pub options: FormOptions,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance wired to the real backends
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let options = config.form_options();
        let api = Box::new(HttpJobApi::new(config.api_base_url));

        let mut app = Self::with_parts(api, Box::new(FileDraftStore::new()), Box::new(SystemClock), options);

        app.state.api_connected = app.api.check_connection().await;
        if app.state.api_connected {
            app.refresh_jobs().await;
        }

        Ok(app)
    }

    /// Assemble an App from explicit ports; performs no I/O
    pub fn with_parts(
        api: Box<dyn JobApi>,
        drafts: Box<dyn DraftStore>,
        clock: Box<dyn Clock>,
        options: FormOptions,
    ) -> Self {
        Self {
            state: AppState::default(),
            api,
            drafts,
            clock,
            options,
            terminal_size: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Expire transient indicators; called once per event-loop pass
    pub fn tick(&mut self) {
        self.state.clear_expired_transients();
    }

    /// Calculate number of columns for the job card grid
    pub fn calculate_grid_columns(&self) -> usize {
        // terminal_size is (height, width)
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);

        // Subtract sidebar width and outer borders
        let usable_width = width.saturating_sub(crate::ui::SIDEBAR_WIDTH + 2);

        const MIN_CARD_WIDTH: u16 = 30;
        const CARD_SPACING_H: u16 = 1;

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        columns.max(1)
    }

    /// Fetch the job listing with the current filters
    pub async fn refresh_jobs(&mut self) {
        match self.api.list_jobs(&self.state.filters).await {
            Ok(jobs) => {
                self.state.jobs = jobs;
                if self.state.selected_index >= self.state.jobs.len() {
                    self.state.selected_index = self.state.jobs.len().saturating_sub(1);
                }
            }
            Err(e) => {
                tracing::warn!("failed to load jobs: {e}");
                self.state.notify_error("Failed to fetch jobs.");
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Jobs => self.handle_jobs_key(key).await?,
            View::JobDetail => self.handle_job_detail_key(key),
            View::JobCreate => self.handle_job_create_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys in the jobs listing view
    async fn handle_jobs_key(&mut self, key: KeyEvent) -> Result<()> {
        // Search input swallows printable keys while focused
        if self.state.search_focused {
            match key.code {
                KeyCode::Char(c) => self.state.filters.search_query.push(c),
                KeyCode::Backspace => {
                    self.state.filters.search_query.pop();
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.state.search_focused = false;
                    self.state.reset_selection();
                    self.refresh_jobs().await;
                }
                _ => {}
            }
            return Ok(());
        }

        let columns = self.calculate_grid_columns();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(columns),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(columns),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_selection_left(columns),
            KeyCode::Char('l') | KeyCode::Right => self.state.move_selection_right(columns),
            KeyCode::Char('/') => self.state.search_focused = true,
            KeyCode::Char('f') => {
                self.cycle_location_filter();
                self.state.reset_selection();
                self.refresh_jobs().await;
            }
            KeyCode::Char('t') => {
                self.cycle_job_type_filter();
                self.state.reset_selection();
                self.refresh_jobs().await;
            }
            KeyCode::Char('s') => {
                self.cycle_salary_filter();
                self.state.reset_selection();
                self.refresh_jobs().await;
            }
            KeyCode::Char('r') => self.refresh_jobs().await,
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter => {
                if let Some(job) = self.state.selected_job() {
                    self.state.selected_job_id = Some(job.id);
                    self.state.scroll_offset = 0;
                    self.state.current_view = View::JobDetail;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the job detail view
    fn handle_job_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.selected_job_id = None;
                self.state.current_view = View::Jobs;
            }
            _ => {}
        }
    }

    /// Handle keys in the create form view
    async fn handle_job_create_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.form.as_ref() else {
            self.state.current_view = View::Jobs;
            return Ok(());
        };

        let today = self.clock.today();
        let on_buttons = form.is_buttons_row_active();
        let active = form.get_field(form.active_field_index);
        let dropdown_open = active.is_some_and(|f| f.is_open());
        let active_is_select = active.is_some_and(|f| f.is_select());
        let active_is_multiline = active.is_some_and(|f| f.is_multiline);

        match key.code {
            // Dropdown interaction while the active field's list is open
            KeyCode::Up if dropdown_open => {
                if let Some(field) = self.active_field_mut() {
                    field.highlight_prev();
                }
            }
            KeyCode::Down if dropdown_open => {
                if let Some(field) = self.active_field_mut() {
                    field.highlight_next();
                }
            }
            KeyCode::Enter if dropdown_open => {
                if let Some(field) = self.active_field_mut() {
                    field.select_highlighted();
                }
                self.validate_active_field(today);
            }
            KeyCode::Esc if dropdown_open => {
                if let Some(field) = self.active_field_mut() {
                    field.close_dropdown();
                }
            }

            // Field navigation validates the field being left
            KeyCode::Tab => {
                self.validate_active_field(today);
                if let Some(form) = self.state.form.as_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab => {
                self.validate_active_field(today);
                if let Some(form) = self.state.form.as_mut() {
                    form.prev_field();
                }
            }

            // Buttons row
            KeyCode::Left | KeyCode::Char('h') if on_buttons => {
                if let Some(form) = self.state.form.as_mut() {
                    form.prev_button();
                }
            }
            KeyCode::Right | KeyCode::Char('l') if on_buttons => {
                if let Some(form) = self.state.form.as_mut() {
                    form.next_button();
                }
            }
            KeyCode::Enter if on_buttons => {
                let selected = self
                    .state
                    .form
                    .as_ref()
                    .map(|f| f.selected_button)
                    .unwrap_or(BUTTON_PUBLISH);
                match selected {
                    BUTTON_SAVE_DRAFT => self.save_draft(),
                    BUTTON_PUBLISH => self.submit_job().await,
                    BUTTON_CANCEL => self.close_form(),
                    _ => {}
                }
            }

            // Keyboard shortcuts (work from anywhere in the form)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_job().await;
            }
            KeyCode::Char('d') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.save_draft();
            }
            KeyCode::Esc => self.close_form(),

            // Enter on a closed select toggles its dropdown open
            KeyCode::Enter if active_is_select => {
                if let Some(field) = self.active_field_mut() {
                    field.toggle_open();
                }
            }
            // Enter in the description field adds a newline
            KeyCode::Enter if active_is_multiline => {
                if let Some(field) = self.active_field_mut() {
                    field.push_char('\n');
                }
            }

            // Form field input
            KeyCode::Char(c) if !on_buttons => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                if let Some(field) = self.active_field_mut() {
                    field.push_char(ch);
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = self.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.state.form.as_mut().and_then(|f| f.get_active_field_mut())
    }

    fn validate_active_field(&mut self, today: NaiveDate) {
        if let Some(form) = self.state.form.as_mut() {
            let index = form.active_field_index;
            if index < BUTTONS_ROW {
                form.validate_field(index, today);
            }
        }
    }

    /// Open the create form, restoring the draft slot if it holds one
    pub fn open_create_form(&mut self) {
        let form = match self.drafts.load() {
            Ok(Some(draft)) => JobPostingForm::from_draft(&draft, &self.options),
            Ok(None) => JobPostingForm::new(&self.options),
            Err(e) => {
                tracing::warn!("failed to load draft: {e}");
                self.state.notify_error("Failed to load saved draft.");
                JobPostingForm::new(&self.options)
            }
        };
        self.state.form = Some(form);
        self.state.draft_saved_at = None;
        self.state.submit_in_flight = false;
        self.state.current_view = View::JobCreate;
    }

    /// Write the current field values to the draft slot
    fn save_draft(&mut self) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        let draft = form.to_draft();
        match self.drafts.save(&draft) {
            Ok(()) => self.state.draft_saved_at = Some(Instant::now()),
            Err(e) => {
                tracing::warn!("failed to save draft: {e}");
                self.state.notify_error("Failed to save draft.");
            }
        }
    }

    /// Close the form without saving (Cancel / Esc)
    fn close_form(&mut self) {
        self.state.form = None;
        self.state.current_view = View::Jobs;
    }

    /// Validate, project, and send the posting; on success clear the
    /// form, drop the draft slot, and return to the listing.
    async fn submit_job(&mut self) {
        if self.state.submit_in_flight {
            return;
        }

        let today = self.clock.today();
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        if !form.validate_all(today) {
            return;
        }
        let Some(request) = form.to_request() else {
            return;
        };

        self.state.submit_in_flight = true;
        let result = self.api.create_job(&request).await;
        self.state.submit_in_flight = false;

        match result {
            Ok(response) if response.success => {
                tracing::info!("job created with id {:?}", response.id);
                if let Err(e) = self.drafts.delete() {
                    tracing::warn!("failed to clear draft slot: {e}");
                }
                self.state.notify_success("Job created successfully!");
                self.close_form();
                self.refresh_jobs().await;
            }
            Ok(_) => {
                self.state.notify_error("Failed to create job.");
            }
            Err(e) => {
                tracing::warn!("job submission failed: {e}");
                self.state.notify_error("Failed to create job.");
            }
        }
    }

    fn cycle_location_filter(&mut self) {
        self.state.filters.location = next_filter_option(
            self.state.filters.location.as_deref(),
            &self.options.locations,
        );
    }

    fn cycle_job_type_filter(&mut self) {
        self.state.filters.job_type = next_filter_option(
            self.state.filters.job_type.as_deref(),
            &self.options.job_types,
        );
    }

    fn cycle_salary_filter(&mut self) {
        self.state.filters.salary = match self.state.filters.salary {
            None => SALARY_BANDS.first().copied(),
            Some(current) => SALARY_BANDS
                .iter()
                .position(|b| *b == current)
                .and_then(|i| SALARY_BANDS.get(i + 1).copied()),
        };
    }
}

/// Salary bands selectable from the filter bar, as (min, max) bounds
const SALARY_BANDS: &[(u64, u64)] = &[
    (0, 300_000),
    (300_000, 600_000),
    (600_000, 1_000_000),
    (1_000_000, 5_000_000),
];

/// Advance a filter through None -> each option -> None
fn next_filter_option(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .and_then(|i| options.get(i + 1).cloned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CreateJobResponse, MockJobApi};
    use crate::clock::MockClock;
    use crate::draft::{JobDraft, MockDraftStore};
    use crate::state::{NoticeKind, FIELD_TITLE};
    use crossterm::event::KeyEvent;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    fn mock_clock() -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(fixed_today());
        clock
    }

    fn app_with(api: MockJobApi, drafts: MockDraftStore) -> App {
        App::with_parts(
            Box::new(api),
            Box::new(drafts),
            Box::new(mock_clock()),
            FormOptions::default(),
        )
    }

    fn fill_valid_form(app: &mut App) {
        let form = app.state.form.as_mut().unwrap();
        form.title.set_text("Backend Developer".to_string());
        form.company_name.set_text("Acme".to_string());
        form.location.set_text("Chennai".to_string());
        form.job_type.set_text("Full-time".to_string());
        form.min_salary.set_text("50000".to_string());
        form.max_salary.set_text("90000".to_string());
        form.application_deadline.set_text("2026-09-15".to_string());
        form.description
            .set_text("Own the services behind the product".to_string());
    }

    fn sample_draft() -> JobDraft {
        JobDraft {
            title: "Backend Dev".to_string(),
            company_name: "Acme".to_string(),
            location: "Chennai".to_string(),
            job_type: "Full-time".to_string(),
            min_salary: "50000".to_string(),
            max_salary: "90000".to_string(),
            application_deadline: NaiveDate::from_ymd_opt(2026, 9, 15),
            description: "Own the billing services".to_string(),
        }
    }

    mod form_open {
        use super::*;

        #[test]
        fn test_open_with_empty_slot_starts_blank() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().times(1).returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();

            assert_eq!(app.state.current_view, View::JobCreate);
            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.title.as_text(), "");
            assert_eq!(form.location.as_text(), "");
        }

        #[test]
        fn test_open_restores_stored_draft_verbatim() {
            let mut drafts = MockDraftStore::new();
            drafts
                .expect_load()
                .times(1)
                .returning(|| Ok(Some(sample_draft())));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();

            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.title.as_text(), "Backend Dev");
            assert_eq!(form.company_name.as_text(), "Acme");
            assert_eq!(form.location.as_text(), "Chennai");
            assert_eq!(form.application_deadline.as_text(), "2026-09-15");
        }

        #[test]
        fn test_open_with_broken_slot_starts_blank_and_notifies() {
            let mut drafts = MockDraftStore::new();
            drafts
                .expect_load()
                .times(1)
                .returning(|| Err(anyhow::anyhow!("corrupt slot")));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();

            assert!(app.state.form.is_some());
            assert_eq!(
                app.state.notice.as_ref().map(|n| n.kind),
                Some(NoticeKind::Error)
            );
        }
    }

    mod draft_saving {
        use super::*;

        #[tokio::test]
        async fn test_save_draft_writes_slot_and_flips_indicator() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));
            drafts
                .expect_save()
                .times(1)
                .withf(|d| d.title == "Backend Developer" && d.max_salary == "90000")
                .returning(|_| Ok(()));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            fill_valid_form(&mut app);

            app.save_draft();
            assert!(app.state.draft_just_saved());
            assert!(app.state.notice.is_none());
        }

        #[tokio::test]
        async fn test_save_draft_failure_notifies() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));
            drafts
                .expect_save()
                .returning(|_| Err(anyhow::anyhow!("disk full")));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            app.save_draft();

            assert!(!app.state.draft_just_saved());
            assert_eq!(
                app.state.notice.as_ref().map(|n| n.kind),
                Some(NoticeKind::Error)
            );
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_blocks_submission() {
            // No create_job expectation: a call would panic the mock
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();

            app.submit_job().await;

            assert_eq!(app.state.current_view, View::JobCreate);
            let form = app.state.form.as_ref().unwrap();
            assert!(form.has_errors());
            assert!(form.error(FIELD_TITLE).is_some());
        }

        #[tokio::test]
        async fn test_single_invalid_field_blocks_submission() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            fill_valid_form(&mut app);
            app.state
                .form
                .as_mut()
                .unwrap()
                .max_salary
                .set_text("50000".to_string());
            app.state
                .form
                .as_mut()
                .unwrap()
                .min_salary
                .set_text("50000".to_string());

            app.submit_job().await;

            let form = app.state.form.as_ref().unwrap();
            assert!(form.has_errors());
            assert_eq!(app.state.current_view, View::JobCreate);
        }

        #[tokio::test]
        async fn test_successful_submit_clears_form_and_slot() {
            let mut api = MockJobApi::new();
            api.expect_create_job()
                .times(1)
                .withf(|req| req.job_type == "FULL-TIME" && req.salary_range == 90000)
                .returning(|_| {
                    Ok(CreateJobResponse {
                        success: true,
                        id: Some(7),
                    })
                });
            api.expect_list_jobs().times(1).returning(|_| Ok(vec![]));

            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));
            drafts.expect_delete().times(1).returning(|| Ok(()));

            let mut app = app_with(api, drafts);
            app.open_create_form();
            fill_valid_form(&mut app);

            app.submit_job().await;

            assert_eq!(app.state.current_view, View::Jobs);
            assert!(app.state.form.is_none());
            let notice = app.state.notice.as_ref().unwrap();
            assert_eq!(notice.kind, NoticeKind::Success);
            assert_eq!(notice.message, "Job created successfully!");
        }

        #[tokio::test]
        async fn test_reopen_after_submit_is_blank() {
            let mut api = MockJobApi::new();
            api.expect_create_job().returning(|_| {
                Ok(CreateJobResponse {
                    success: true,
                    id: None,
                })
            });
            api.expect_list_jobs().returning(|_| Ok(vec![]));

            let mut drafts = MockDraftStore::new();
            // Slot is gone after the delete, so the reopen sees None
            drafts.expect_load().returning(|| Ok(None));
            drafts.expect_delete().returning(|| Ok(()));

            let mut app = app_with(api, drafts);
            app.open_create_form();
            fill_valid_form(&mut app);
            app.submit_job().await;

            app.open_create_form();
            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.title.as_text(), "");
            assert_eq!(form.description.as_text(), "");
        }

        #[tokio::test]
        async fn test_transport_failure_preserves_everything() {
            let mut api = MockJobApi::new();
            api.expect_create_job()
                .times(1)
                .returning(|_| Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)));
            // No delete expectation: touching the slot would panic the mock

            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(api, drafts);
            app.open_create_form();
            fill_valid_form(&mut app);

            app.submit_job().await;

            assert_eq!(app.state.current_view, View::JobCreate);
            let form = app.state.form.as_ref().unwrap();
            assert_eq!(form.title.as_text(), "Backend Developer");
            assert_eq!(form.max_salary.as_text(), "90000");
            assert!(!form.has_errors());
            let notice = app.state.notice.as_ref().unwrap();
            assert_eq!(notice.kind, NoticeKind::Error);
            assert_eq!(notice.message, "Failed to create job.");
            assert!(!app.state.submit_in_flight);
        }

        #[tokio::test]
        async fn test_non_success_ack_is_a_failure() {
            let mut api = MockJobApi::new();
            api.expect_create_job().times(1).returning(|_| {
                Ok(CreateJobResponse {
                    success: false,
                    id: None,
                })
            });

            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(api, drafts);
            app.open_create_form();
            fill_valid_form(&mut app);

            app.submit_job().await;

            assert_eq!(app.state.current_view, View::JobCreate);
            assert!(app.state.form.is_some());
            assert_eq!(
                app.state.notice.as_ref().map(|n| n.kind),
                Some(NoticeKind::Error)
            );
        }

        #[tokio::test]
        async fn test_submit_ignored_while_in_flight() {
            // No API expectations at all: any call panics the mock
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            fill_valid_form(&mut app);
            app.state.submit_in_flight = true;

            app.submit_job().await;

            assert!(app.state.submit_in_flight);
            assert_eq!(app.state.current_view, View::JobCreate);
        }
    }

    mod form_closing {
        use super::*;

        #[tokio::test]
        async fn test_escape_discards_without_saving() {
            // No save expectation: a write would panic the mock
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            fill_valid_form(&mut app);

            app.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();

            assert_eq!(app.state.current_view, View::Jobs);
            assert!(app.state.form.is_none());
        }

        #[tokio::test]
        async fn test_escape_with_open_dropdown_only_closes_it() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            {
                let form = app.state.form.as_mut().unwrap();
                form.active_field_index = crate::state::FIELD_LOCATION;
                form.location.toggle_open();
            }

            app.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();

            assert_eq!(app.state.current_view, View::JobCreate);
            let form = app.state.form.as_ref().unwrap();
            assert!(!form.location.is_open());
        }
    }

    mod dropdown_keys {
        use super::*;

        #[tokio::test]
        async fn test_enter_opens_selects_and_closes() {
            let mut drafts = MockDraftStore::new();
            drafts.expect_load().returning(|| Ok(None));

            let mut app = app_with(MockJobApi::new(), drafts);
            app.open_create_form();
            app.state.form.as_mut().unwrap().active_field_index = crate::state::FIELD_JOB_TYPE;

            app.handle_key(KeyEvent::from(KeyCode::Enter)).await.unwrap();
            assert!(app.state.form.as_ref().unwrap().job_type.is_open());

            app.handle_key(KeyEvent::from(KeyCode::Down)).await.unwrap();
            app.handle_key(KeyEvent::from(KeyCode::Enter)).await.unwrap();

            let form = app.state.form.as_ref().unwrap();
            assert!(!form.job_type.is_open());
            assert_eq!(form.job_type.as_text(), "Part-time");
            // Selecting a valid option leaves no error on the field
            assert!(form.error(crate::state::FIELD_JOB_TYPE).is_none());
        }
    }

    mod filters {
        use super::*;

        #[test]
        fn test_next_filter_option_cycles_back_to_none() {
            let options = vec!["Remote".to_string(), "Kochi".to_string()];
            assert_eq!(next_filter_option(None, &options), Some("Remote".to_string()));
            assert_eq!(
                next_filter_option(Some("Remote"), &options),
                Some("Kochi".to_string())
            );
            assert_eq!(next_filter_option(Some("Kochi"), &options), None);
        }

        #[test]
        fn test_salary_bands_cycle_back_to_none() {
            let mut app = app_with(MockJobApi::new(), MockDraftStore::new());
            for band in SALARY_BANDS {
                app.cycle_salary_filter();
                assert_eq!(app.state.filters.salary, Some(*band));
            }
            app.cycle_salary_filter();
            assert_eq!(app.state.filters.salary, None);
        }

        #[tokio::test]
        async fn test_cycling_salary_filter_refetches_with_bounds() {
            let mut api = MockJobApi::new();
            api.expect_list_jobs()
                .times(1)
                .withf(|f| f.salary == Some((0, 300_000)))
                .returning(|_| Ok(vec![]));

            let mut app = app_with(api, MockDraftStore::new());
            app.handle_key(KeyEvent::from(KeyCode::Char('s')))
                .await
                .unwrap();

            assert_eq!(app.state.filters.salary, Some((0, 300_000)));
        }

        #[tokio::test]
        async fn test_cycling_location_filter_refetches() {
            let mut api = MockJobApi::new();
            api.expect_list_jobs()
                .times(1)
                .withf(|f| f.location.as_deref() == Some("Remote"))
                .returning(|_| Ok(vec![]));

            let mut app = app_with(api, MockDraftStore::new());
            app.handle_key(KeyEvent::from(KeyCode::Char('f')))
                .await
                .unwrap();

            assert_eq!(app.state.filters.location.as_deref(), Some("Remote"));
        }
    }
}
