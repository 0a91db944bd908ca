//! Job posting form state

use super::field::FormField;
use super::validation;
use crate::api::JobPostingRequest;
use crate::config::FormOptions;
use crate::draft::JobDraft;
use chrono::NaiveDate;

// Field indices (order matches the rendered form)
pub const FIELD_TITLE: usize = 0;
pub const FIELD_COMPANY_NAME: usize = 1;
pub const FIELD_LOCATION: usize = 2;
pub const FIELD_JOB_TYPE: usize = 3;
pub const FIELD_MIN_SALARY: usize = 4;
pub const FIELD_MAX_SALARY: usize = 5;
pub const FIELD_DEADLINE: usize = 6;
pub const FIELD_DESCRIPTION: usize = 7;
/// Index of the buttons row, one past the last field
pub const BUTTONS_ROW: usize = 8;

const FIELD_COUNT: usize = 8;

// Buttons row order
pub const BUTTON_SAVE_DRAFT: usize = 0;
pub const BUTTON_PUBLISH: usize = 1;
pub const BUTTON_CANCEL: usize = 2;
const BUTTON_COUNT: usize = 3;

/// State of the job posting create form
#[derive(Debug, Clone)]
pub struct JobPostingForm {
    pub title: FormField,
    pub company_name: FormField,
    pub location: FormField,
    pub job_type: FormField,
    pub min_salary: FormField,
    pub max_salary: FormField,
    pub application_deadline: FormField,
    pub description: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    /// (0=Save Draft, 1=Publish, 2=Cancel)
    pub selected_button: usize,
    errors: [Option<String>; FIELD_COUNT],
}

impl JobPostingForm {
    pub fn new(options: &FormOptions) -> Self {
        Self {
            title: FormField::text("title", "Job Title", false),
            company_name: FormField::text("company_name", "Company Name", false),
            location: FormField::select("location", "Location", options.locations.clone()),
            job_type: FormField::select("job_type", "Job Type", options.job_types.clone()),
            min_salary: FormField::text("min_salary", "Min Salary", false),
            max_salary: FormField::text("max_salary", "Max Salary", false),
            application_deadline: FormField::date("application_deadline", "Application Deadline"),
            description: FormField::text("description", "Job Description", true),
            active_field_index: 0,
            selected_button: BUTTON_PUBLISH,
            errors: Default::default(),
        }
    }

    /// Rebuild the form from a stored draft. Present fields are restored
    /// verbatim; absent fields keep their defaults.
    pub fn from_draft(draft: &JobDraft, options: &FormOptions) -> Self {
        let deadline_text = draft
            .application_deadline
            .map(|d| d.format(validation::DEADLINE_FORMAT).to_string())
            .unwrap_or_default();

        Self {
            title: FormField::text_with_value("title", "Job Title", draft.title.clone(), false),
            company_name: FormField::text_with_value(
                "company_name",
                "Company Name",
                draft.company_name.clone(),
                false,
            ),
            location: FormField::select_with_value(
                "location",
                "Location",
                options.locations.clone(),
                draft.location.clone(),
            ),
            job_type: FormField::select_with_value(
                "job_type",
                "Job Type",
                options.job_types.clone(),
                draft.job_type.clone(),
            ),
            min_salary: FormField::text_with_value(
                "min_salary",
                "Min Salary",
                draft.min_salary.clone(),
                false,
            ),
            max_salary: FormField::text_with_value(
                "max_salary",
                "Max Salary",
                draft.max_salary.clone(),
                false,
            ),
            application_deadline: FormField::date_with_value(
                "application_deadline",
                "Application Deadline",
                deadline_text,
            ),
            description: FormField::text_with_value(
                "description",
                "Job Description",
                draft.description.clone(),
                true,
            ),
            active_field_index: 0,
            selected_button: BUTTON_PUBLISH,
            errors: Default::default(),
        }
    }

    /// Snapshot the current field values for the draft slot
    pub fn to_draft(&self) -> JobDraft {
        JobDraft {
            title: self.title.as_text().to_string(),
            company_name: self.company_name.as_text().to_string(),
            location: self.location.as_text().to_string(),
            job_type: self.job_type.as_text().to_string(),
            min_salary: self.min_salary.as_text().to_string(),
            max_salary: self.max_salary.as_text().to_string(),
            application_deadline: self.parsed_deadline(),
            description: self.description.as_text().to_string(),
        }
    }

    /// Project a fully valid form into the wire request.
    ///
    /// Returns `None` when the numeric or date fields do not parse;
    /// callers validate first, this is the belt to that suspender.
    pub fn to_request(&self) -> Option<JobPostingRequest> {
        let salary_range = self.max_salary.as_text().parse::<u64>().ok()?;
        let application_deadline = self.parsed_deadline()?;

        Some(JobPostingRequest {
            title: self.title.as_text().to_string(),
            company_name: self.company_name.as_text().to_string(),
            location: self.location.as_text().to_string(),
            job_type: self.job_type.as_text().to_uppercase(),
            salary_range,
            description: self.description.as_text().to_string(),
            application_deadline,
        })
    }

    fn parsed_deadline(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(
            self.application_deadline.as_text(),
            validation::DEADLINE_FORMAT,
        )
        .ok()
    }

    pub fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // fields plus the buttons row
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            FIELD_TITLE => Some(&self.title),
            FIELD_COMPANY_NAME => Some(&self.company_name),
            FIELD_LOCATION => Some(&self.location),
            FIELD_JOB_TYPE => Some(&self.job_type),
            FIELD_MIN_SALARY => Some(&self.min_salary),
            FIELD_MAX_SALARY => Some(&self.max_salary),
            FIELD_DEADLINE => Some(&self.application_deadline),
            FIELD_DESCRIPTION => Some(&self.description),
            _ => None,
        }
    }

    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            FIELD_TITLE => Some(&mut self.title),
            FIELD_COMPANY_NAME => Some(&mut self.company_name),
            FIELD_LOCATION => Some(&mut self.location),
            FIELD_JOB_TYPE => Some(&mut self.job_type),
            FIELD_MIN_SALARY => Some(&mut self.min_salary),
            FIELD_MAX_SALARY => Some(&mut self.max_salary),
            FIELD_DEADLINE => Some(&mut self.application_deadline),
            FIELD_DESCRIPTION => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.get_field_mut(self.active_field_index)
    }

    /// Inline error for a field, if any
    pub fn error(&self, index: usize) -> Option<&str> {
        self.errors.get(index).and_then(|e| e.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.is_some())
    }

    /// Re-run the rule for one field, storing or clearing its message
    pub fn validate_field(&mut self, index: usize, today: NaiveDate) {
        let result = match index {
            FIELD_TITLE => validation::validate_title(self.title.as_text()),
            FIELD_COMPANY_NAME => validation::validate_company_name(self.company_name.as_text()),
            FIELD_LOCATION => {
                validation::validate_location(self.location.as_text(), self.location.options())
            }
            FIELD_JOB_TYPE => {
                validation::validate_job_type(self.job_type.as_text(), self.job_type.options())
            }
            FIELD_MIN_SALARY => validation::validate_min_salary(self.min_salary.as_text()),
            FIELD_MAX_SALARY => validation::validate_max_salary(
                self.max_salary.as_text(),
                self.min_salary.as_text(),
            ),
            FIELD_DEADLINE => {
                validation::validate_deadline(self.application_deadline.as_text(), today)
            }
            FIELD_DESCRIPTION => validation::validate_description(self.description.as_text()),
            _ => return,
        };
        self.errors[index] = result;
    }

    /// Validate every field; each failing field keeps its own message.
    /// Returns true when the whole form passes.
    pub fn validate_all(&mut self, today: NaiveDate) -> bool {
        for index in 0..FIELD_COUNT {
            self.validate_field(index, today);
        }
        !self.has_errors()
    }
}
