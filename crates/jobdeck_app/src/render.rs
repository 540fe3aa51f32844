use jobdeck_core::{BoardViewModel, JobCardView, RequestStatus};

use crate::catalog;

pub fn help_text() -> String {
    let mut out = String::from(
        "Commands:\n  find <text>    search job titles (empty text matches all)\n  type <id>      toggle an employment-type filter\n  salary <id>    set the minimum package\n  retry          retry a failed profile fetch\n  refresh        re-fetch jobs with the current filters\n  help           show this text\n  quit           exit\n",
    );
    out.push_str("Employment types:\n");
    for option in &catalog::EMPLOYMENT_TYPES {
        out.push_str(&format!("  {:<12} {}\n", option.id, option.label));
    }
    out.push_str("Salary ranges:\n");
    for option in &catalog::SALARY_RANGES {
        out.push_str(&format!("  {:<12} {}\n", option.id, option.label));
    }
    out
}

pub fn print_board(view: &BoardViewModel) {
    println!("{}", format_board(view));
}

fn format_board(view: &BoardViewModel) -> String {
    format!(
        "{}\n{}\n{}",
        format_profile(view),
        format_filters(view),
        format_jobs(view)
    )
}

fn format_profile(view: &BoardViewModel) -> String {
    match view.profile_status {
        RequestStatus::Initial => "Profile: -".to_string(),
        RequestStatus::InProgress => "Profile: loading...".to_string(),
        RequestStatus::Failure => "Profile: failed to load (use `retry`)".to_string(),
        RequestStatus::Success => match &view.profile {
            Some(profile) => format!("Profile: {} | {}", profile.name, profile.short_bio),
            None => "Profile: unavailable".to_string(),
        },
    }
}

fn format_filters(view: &BoardViewModel) -> String {
    let salary = view.selected_salary_range.as_deref().unwrap_or("any");
    let types = if view.selected_employment_types.is_empty() {
        "any".to_string()
    } else {
        view.selected_employment_types.join(",")
    };
    format!(
        "Filters: search={:?} salary={} types={}",
        view.search_input, salary, types
    )
}

fn format_jobs(view: &BoardViewModel) -> String {
    match view.jobs_status {
        RequestStatus::Initial => "Jobs: -".to_string(),
        RequestStatus::InProgress => "Jobs: loading...".to_string(),
        RequestStatus::Failure => {
            "Jobs: failed to load (change a filter or `refresh` to retry)".to_string()
        }
        RequestStatus::Success => {
            if view.jobs.is_empty() {
                "Jobs: no jobs found for these filters".to_string()
            } else {
                let mut out = format!("Jobs: {} found", view.jobs.len());
                for job in &view.jobs {
                    out.push('\n');
                    out.push_str(&format_job_row(job));
                }
                out
            }
        }
    }
}

fn format_job_row(job: &JobCardView) -> String {
    format!(
        "  [{id}] {title} | {location} | {kind} | {package} | rating {rating}",
        id = job.id,
        title = job.title,
        location = job.location,
        kind = job.employment_type,
        package = job.package_per_annum,
        rating = job.rating
    )
}
