use std::collections::BTreeSet;

use crate::effect::JobsQuery;
use crate::remote::{LoadFailure, RemoteData};
use crate::view_model::{BoardViewModel, JobCardView, ProfileView};

/// Correlates a fetch with its completion; only the most recently issued
/// seq for a slot may apply its result.
pub type RequestSeq = u64;

/// Profile of the signed-in user, replaced wholesale on each successful
/// fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileRecord {
    pub name: String,
    pub avatar_url: String,
    pub short_bio: String,
}

/// One job posting as returned by the jobs fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub id: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub package_per_annum: String,
    pub description: String,
}

/// User-controlled criteria that parameterize the jobs fetch.
///
/// `salary_range_id` is single-select; the employment-type set has no
/// duplicates and iterates in sorted order so query building is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    search_input: String,
    salary_range_id: Option<String>,
    employment_type_ids: BTreeSet<String>,
}

impl FilterState {
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn salary_range_id(&self) -> Option<&str> {
        self.salary_range_id.as_deref()
    }

    pub fn employment_type_ids(&self) -> &BTreeSet<String> {
        &self.employment_type_ids
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    pub(crate) fn select_salary_range(&mut self, id: String) {
        self.salary_range_id = Some(id);
    }

    /// Flips membership: an already-selected id is removed, otherwise it
    /// is added. The set never holds duplicates.
    pub(crate) fn toggle_employment_type(&mut self, id: String) {
        if !self.employment_type_ids.remove(&id) {
            self.employment_type_ids.insert(id);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    filters: FilterState,
    profile: RemoteData<ProfileRecord>,
    profile_seq: RequestSeq,
    jobs: RemoteData<Vec<JobRecord>>,
    jobs_seq: RequestSeq,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn profile(&self) -> &RemoteData<ProfileRecord> {
        &self.profile
    }

    pub fn jobs(&self) -> &RemoteData<Vec<JobRecord>> {
        &self.jobs
    }

    pub fn view(&self) -> BoardViewModel {
        BoardViewModel {
            search_input: self.filters.search_input.clone(),
            selected_salary_range: self.filters.salary_range_id.clone(),
            selected_employment_types: self
                .filters
                .employment_type_ids
                .iter()
                .cloned()
                .collect(),
            profile_status: self.profile.status(),
            profile: self.profile.retained().map(ProfileView::from),
            jobs_status: self.jobs.status(),
            jobs: self
                .jobs
                .current()
                .map(|records| records.iter().map(JobCardView::from).collect())
                .unwrap_or_default(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        self.filters.set_search_input(text);
        self.mark_dirty();
    }

    pub(crate) fn select_salary_range(&mut self, id: String) {
        self.filters.select_salary_range(id);
        self.mark_dirty();
    }

    pub(crate) fn toggle_employment_type(&mut self, id: String) {
        self.filters.toggle_employment_type(id);
        self.mark_dirty();
    }

    /// Snapshot of the filters for the next jobs fetch.
    pub(crate) fn jobs_query(&self) -> JobsQuery {
        JobsQuery {
            search: self.filters.search_input.clone(),
            minimum_package: self.filters.salary_range_id.clone().unwrap_or_default(),
            employment_types: self
                .filters
                .employment_type_ids
                .iter()
                .cloned()
                .collect(),
        }
    }

    pub(crate) fn begin_profile_fetch(&mut self) -> RequestSeq {
        self.profile_seq += 1;
        self.profile.begin();
        self.mark_dirty();
        self.profile_seq
    }

    pub(crate) fn begin_jobs_fetch(&mut self) -> RequestSeq {
        self.jobs_seq += 1;
        self.jobs.begin();
        self.mark_dirty();
        self.jobs_seq
    }

    /// Applies a profile completion; returns false when the completion is
    /// stale (superseded seq, or no fetch pending) and was dropped.
    pub(crate) fn apply_profile_result(
        &mut self,
        seq: RequestSeq,
        result: Result<ProfileRecord, LoadFailure>,
    ) -> bool {
        if seq != self.profile_seq || !matches!(self.profile, RemoteData::InProgress { .. }) {
            return false;
        }
        match result {
            Ok(record) => self.profile.succeed(record),
            Err(_) => self.profile.fail(),
        }
        self.mark_dirty();
        true
    }

    /// Applies a jobs completion; same staleness rule as the profile slot.
    pub(crate) fn apply_jobs_result(
        &mut self,
        seq: RequestSeq,
        result: Result<Vec<JobRecord>, LoadFailure>,
    ) -> bool {
        if seq != self.jobs_seq || !matches!(self.jobs, RemoteData::InProgress { .. }) {
            return false;
        }
        match result {
            Ok(records) => self.jobs.succeed(records),
            Err(_) => self.jobs.fail(),
        }
        self.mark_dirty();
        true
    }
}
