//! HTTP client for the remote job API
//!
//! Talks JSON to the job-creation backend: `GET /jobs` for listings and
//! `POST /jobs` for publishing a posting.

use crate::state::Job;
use async_trait::async_trait;

use super::error::ApiError;
use super::models::{CreateJobResponse, JobFilters, JobPostingRequest};
use super::traits::JobApi;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://job-management-nest-server.onrender.com";

/// reqwest-backed client for the job API
pub struct HttpJobApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpJobApi {
    /// Create a client, preferring `JOBBOARD_API_URL`, then the
    /// configured base URL, then the built-in default.
    pub fn new(configured_url: Option<String>) -> Self {
        let base_url = std::env::var("JOBBOARD_API_URL")
            .ok()
            .or(configured_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }
}

#[async_trait]
impl JobApi for HttpJobApi {
    async fn check_connection(&self) -> bool {
        match self.http.get(self.jobs_url()).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn list_jobs(&self, filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
        let response = self
            .http
            .get(self.jobs_url())
            .query(&filters.to_query_params())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<Vec<Job>>().await.map_err(ApiError::Malformed)
    }

    async fn create_job(
        &self,
        request: &JobPostingRequest,
    ) -> Result<CreateJobResponse, ApiError> {
        let response = self
            .http
            .post(self.jobs_url())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<CreateJobResponse>()
            .await
            .map_err(ApiError::Malformed)
    }
}
