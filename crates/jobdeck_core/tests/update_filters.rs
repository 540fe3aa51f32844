use jobdeck_core::{update, AppState, Effect, Msg};

fn jobs_query_of(effects: &[Effect]) -> &jobdeck_core::JobsQuery {
    match effects {
        [Effect::FetchJobs { query, .. }] => query,
        other => panic!("expected a single jobs fetch, got {other:?}"),
    }
}

#[test]
fn search_input_is_staged_until_submitted() {
    let state = AppState::new();

    let (state, effects) = update(state, Msg::SearchInputChanged("rust".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().search_input, "rust");

    let (_state, effects) = update(state, Msg::SearchSubmitted);
    assert_eq!(jobs_query_of(&effects).search, "rust");
}

#[test]
fn toggling_employment_type_twice_restores_selection() {
    let state = AppState::new();

    let (state, effects) = update(state, Msg::EmploymentTypeToggled("FULLTIME".to_string()));
    assert_eq!(
        state.view().selected_employment_types,
        vec!["FULLTIME".to_string()]
    );
    assert_eq!(
        jobs_query_of(&effects).employment_types,
        vec!["FULLTIME".to_string()]
    );

    let (state, effects) = update(state, Msg::EmploymentTypeToggled("FULLTIME".to_string()));
    assert!(state.view().selected_employment_types.is_empty());
    assert!(jobs_query_of(&effects).employment_types.is_empty());
}

#[test]
fn employment_types_are_deduplicated_and_sorted() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::EmploymentTypeToggled("PARTTIME".to_string()));
    let (state, effects) = update(state, Msg::EmploymentTypeToggled("FULLTIME".to_string()));

    assert_eq!(
        jobs_query_of(&effects).employment_types,
        vec!["FULLTIME".to_string(), "PARTTIME".to_string()]
    );
    assert_eq!(state.view().selected_employment_types.len(), 2);
}

#[test]
fn salary_range_is_single_select() {
    let state = AppState::new();

    let (state, effects) = update(state, Msg::SalaryRangeSelected("1000000".to_string()));
    assert_eq!(jobs_query_of(&effects).minimum_package, "1000000");

    let (state, effects) = update(state, Msg::SalaryRangeSelected("2000000".to_string()));
    assert_eq!(jobs_query_of(&effects).minimum_package, "2000000");
    assert_eq!(
        state.view().selected_salary_range,
        Some("2000000".to_string())
    );
}

#[test]
fn unset_filters_produce_empty_query_fields() {
    let state = AppState::new();
    let (_state, effects) = update(state, Msg::SearchSubmitted);

    let query = jobs_query_of(&effects);
    assert_eq!(query.search, "");
    assert_eq!(query.minimum_package, "");
    assert!(query.employment_types.is_empty());
}

#[test]
fn filter_edits_mark_state_dirty() {
    let state = AppState::new();
    let (mut state, _) = update(state, Msg::SearchInputChanged("qa".to_string()));

    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}
