use crate::{AppState, Effect, Msg, RequestStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // Profile and jobs are independent slots; both fetches start
            // together and complete in any order.
            let profile_seq = state.begin_profile_fetch();
            let jobs_seq = state.begin_jobs_fetch();
            let query = state.jobs_query();
            vec![
                Effect::FetchProfile { seq: profile_seq },
                Effect::FetchJobs {
                    seq: jobs_seq,
                    query,
                },
            ]
        }
        Msg::SearchInputChanged(text) => {
            // Text edits are staged; only an explicit submit fetches.
            state.set_search_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => trigger_jobs_fetch(&mut state),
        Msg::SalaryRangeSelected(id) => {
            state.select_salary_range(id);
            trigger_jobs_fetch(&mut state)
        }
        Msg::EmploymentTypeToggled(id) => {
            state.toggle_employment_type(id);
            trigger_jobs_fetch(&mut state)
        }
        Msg::ProfileRetryClicked => {
            // Retry is only offered on the failure panel; any other status
            // means the click raced a state change and is ignored.
            if state.profile().status() == RequestStatus::Failure {
                let seq = state.begin_profile_fetch();
                vec![Effect::FetchProfile { seq }]
            } else {
                Vec::new()
            }
        }
        Msg::ProfileLoaded { seq, result } => {
            if let Err(failure) = &result {
                log::warn!("profile fetch seq={seq} failed: {failure}");
            }
            if !state.apply_profile_result(seq, result) {
                log::debug!("superseded profile completion seq={seq} dropped");
            }
            Vec::new()
        }
        Msg::JobsLoaded { seq, result } => {
            if let Err(failure) = &result {
                log::warn!("jobs fetch seq={seq} failed: {failure}");
            }
            if !state.apply_jobs_result(seq, result) {
                log::debug!("superseded jobs completion seq={seq} dropped");
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn trigger_jobs_fetch(state: &mut AppState) -> Vec<Effect> {
    let seq = state.begin_jobs_fetch();
    let query = state.jobs_query();
    vec![Effect::FetchJobs { seq, query }]
}
