use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::types::{GatewayError, JobSummary, JobsFilter, ProfileDetails};

/// Upstream deployment the original client talked to.
pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

/// Tunables for the remote board API client.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Minimum time a successful profile fetch stays in progress before it
    /// is published, so a fast response does not flash the loading
    /// indicator. Zero disables the hold.
    pub profile_publish_delay: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            profile_publish_delay: Duration::from_millis(500),
        }
    }
}

impl ApiSettings {
    /// Settings pointing at a non-default deployment of the board API.
    pub fn with_base_url(base_url: &str) -> Result<Self, GatewayError> {
        let base_url =
            Url::parse(base_url).map_err(|err| GatewayError::Network(err.to_string()))?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }
}

#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_profile(&self, token: &str) -> Result<ProfileDetails, GatewayError>;

    async fn fetch_jobs(
        &self,
        token: &str,
        filter: &JobsFilter,
    ) -> Result<Vec<JobSummary>, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: ApiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.settings
            .base_url
            .join(path)
            .map_err(|err| GatewayError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn fetch_profile(&self, token: &str) -> Result<ProfileDetails, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("profile")?)
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus(status.as_u16()));
        }

        let body: ProfileBody = response.json().await.map_err(map_body_error)?;
        if !self.settings.profile_publish_delay.is_zero() {
            tokio::time::sleep(self.settings.profile_publish_delay).await;
        }
        Ok(body.profile_details.into())
    }

    async fn fetch_jobs(
        &self,
        token: &str,
        filter: &JobsFilter,
    ) -> Result<Vec<JobSummary>, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("jobs")?)
            .query(&[
                ("employment_type", filter.employment_types.join(",")),
                ("minimum_package", filter.minimum_package.clone()),
                ("search", filter.search.clone()),
            ])
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus(status.as_u16()));
        }

        let body: JobsBody = response.json().await.map_err(map_body_error)?;
        Ok(body.jobs.into_iter().map(JobSummary::from).collect())
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout;
    }
    GatewayError::Network(err.to_string())
}

fn map_body_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout;
    }
    GatewayError::Parse(err.to_string())
}

// Wire shapes: field renames only, values pass through untransformed.

#[derive(Debug, Deserialize)]
struct ProfileBody {
    profile_details: RawProfile,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    profile_image_url: String,
    short_bio: String,
}

impl From<RawProfile> for ProfileDetails {
    fn from(raw: RawProfile) -> Self {
        Self {
            name: raw.name,
            avatar_url: raw.profile_image_url,
            short_bio: raw.short_bio,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobsBody {
    jobs: Vec<RawJob>,
}

#[derive(Debug, Deserialize)]
struct RawJob {
    id: String,
    company_logo_url: String,
    employment_type: String,
    title: String,
    rating: f64,
    location: String,
    package_per_annum: String,
    job_description: String,
}

impl From<RawJob> for JobSummary {
    fn from(raw: RawJob) -> Self {
        Self {
            id: raw.id,
            company_logo_url: raw.company_logo_url,
            employment_type: raw.employment_type,
            title: raw.title,
            rating: raw.rating,
            location: raw.location,
            package_per_annum: raw.package_per_annum,
            description: raw.job_description,
        }
    }
}
