use crate::remote::RequestStatus;
use crate::state::{JobRecord, ProfileRecord};

/// Snapshot consumed by presentation. Intents travel back as `Msg`s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardViewModel {
    pub search_input: String,
    pub selected_salary_range: Option<String>,
    pub selected_employment_types: Vec<String>,
    pub profile_status: RequestStatus,
    /// Last successfully fetched profile; kept across failed attempts so
    /// presentation can decide what to show next to a `Failure` status.
    pub profile: Option<ProfileView>,
    pub jobs_status: RequestStatus,
    /// Rows of the current successful jobs fetch; empty in every other
    /// status.
    pub jobs: Vec<JobCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub avatar_url: String,
    pub short_bio: String,
}

impl From<&ProfileRecord> for ProfileView {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone(),
            avatar_url: record.avatar_url.clone(),
            short_bio: record.short_bio.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub rating: f64,
    pub location: String,
    pub package_per_annum: String,
    pub description: String,
}

impl From<&JobRecord> for JobCardView {
    fn from(record: &JobRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            company_logo_url: record.company_logo_url.clone(),
            employment_type: record.employment_type.clone(),
            rating: record.rating,
            location: record.location.clone(),
            package_per_annum: record.package_per_annum.clone(),
            description: record.description.clone(),
        }
    }
}
