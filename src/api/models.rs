//! Wire-shaped types for the job API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters applied to the job listing query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub search_query: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    /// Inclusive (min, max) salary bounds
    pub salary: Option<(u64, u64)>,
}

impl JobFilters {
    /// Build the query parameters for `GET /jobs`
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search_query.is_empty() {
            params.push(("searchQuery", self.search_query.clone()));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        if let Some(job_type) = &self.job_type {
            params.push(("jobType", job_type.clone()));
        }
        if let Some((min, max)) = self.salary {
            params.push(("minSalary", min.to_string()));
            params.push(("maxSalary", max.to_string()));
        }
        params
    }
}

/// Request body for creating a job posting.
///
/// One-way projection of a valid form: `job_type` is uppercased and
/// `salary_range` carries the max salary as a number.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobPostingRequest {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_range: u64,
    pub description: String,
    pub application_deadline: NaiveDate,
}

/// Acknowledgment body from the job-creation endpoint.
///
/// `success` defaults to false so a body of any other shape reads as a
/// failed creation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateJobResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<i64>,
}
