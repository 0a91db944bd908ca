//! Form domain layer
//!
//! Type-safe state for the job posting form: field values, dropdown
//! state, per-field validation messages, and the draft/request
//! projections.

mod field;
mod job_form;
mod validation;

pub use field::{FieldValue, FormField};
pub use job_form::{
    JobPostingForm, BUTTONS_ROW, BUTTON_CANCEL, BUTTON_PUBLISH, BUTTON_SAVE_DRAFT,
    FIELD_COMPANY_NAME, FIELD_DEADLINE, FIELD_DESCRIPTION, FIELD_JOB_TYPE, FIELD_LOCATION,
    FIELD_MAX_SALARY, FIELD_MIN_SALARY, FIELD_TITLE,
};
