//! Trait abstraction for the job API client to enable mocking in tests

use crate::state::Job;
use async_trait::async_trait;

use super::error::ApiError;
use super::models::{CreateJobResponse, JobFilters, JobPostingRequest};

/// Trait for job API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Check if the API is reachable
    async fn check_connection(&self) -> bool;

    /// List job postings matching the given filters
    async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, ApiError>;

    /// Create a new job posting
    async fn create_job(&self, request: &JobPostingRequest)
        -> Result<CreateJobResponse, ApiError>;
}
