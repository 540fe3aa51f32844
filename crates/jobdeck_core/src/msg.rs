use crate::remote::LoadFailure;
use crate::state::{JobRecord, ProfileRecord, RequestSeq};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Board opened; kick off the initial profile and jobs fetches.
    Started,
    /// User edited the search box (staged; nothing is fetched until the
    /// search is submitted).
    SearchInputChanged(String),
    /// User submitted the current search text.
    SearchSubmitted,
    /// User picked a salary-range option.
    SalaryRangeSelected(String),
    /// User flipped an employment-type checkbox.
    EmploymentTypeToggled(String),
    /// User clicked Retry on the failed profile panel.
    ProfileRetryClicked,
    /// Gateway completion for a profile fetch.
    ProfileLoaded {
        seq: RequestSeq,
        result: Result<ProfileRecord, LoadFailure>,
    },
    /// Gateway completion for a jobs fetch.
    JobsLoaded {
        seq: RequestSeq,
        result: Result<Vec<JobRecord>, LoadFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
