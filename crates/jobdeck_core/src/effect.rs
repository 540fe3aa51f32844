use crate::state::RequestSeq;

/// IO requested by the state machine, executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProfile { seq: RequestSeq },
    FetchJobs { seq: RequestSeq, query: JobsQuery },
}

/// Snapshot of the filters a jobs fetch was issued with. Taken at trigger
/// time so a later filter edit cannot leak into an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsQuery {
    pub search: String,
    /// Salary-range id, empty when no minimum is selected.
    pub minimum_package: String,
    /// Employment-type ids in deterministic (sorted) order.
    pub employment_types: Vec<String>,
}
