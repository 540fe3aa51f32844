use thiserror::Error;

/// Correlates a fetch request with its completion event.
pub type RequestSeq = u64;

/// Normalized profile payload from `GET /profile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub name: String,
    pub avatar_url: String,
    pub short_bio: String,
}

/// Normalized job posting from `GET /jobs`.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSummary {
    pub id: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub package_per_annum: String,
    pub description: String,
}

/// Filter snapshot a jobs fetch is issued with. Empty strings and an empty
/// type list mean "no constraint"; the server treats them as match-all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsFilter {
    pub search: String,
    pub minimum_package: String,
    pub employment_types: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response body: {0}")]
    Parse(String),
}

/// Completion delivered by the background gateway runtime.
#[derive(Debug)]
pub enum GatewayEvent {
    ProfileFetched {
        seq: RequestSeq,
        result: Result<ProfileDetails, GatewayError>,
    },
    JobsFetched {
        seq: RequestSeq,
        result: Result<Vec<JobSummary>, GatewayError>,
    },
}
