use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use gateway_logging::gateway_info;
use jobdeck_core::{Effect, JobRecord, JobsQuery, LoadFailure, Msg, ProfileRecord};
use jobdeck_gateway::{
    GatewayError, GatewayEvent, GatewayHandle, JobSummary, JobsFilter, ProfileDetails,
};

use crate::app::AppEvent;

/// Executes core effects against the gateway and pumps completions back
/// into the main loop as messages.
pub struct EffectRunner {
    handle: GatewayHandle,
}

impl EffectRunner {
    pub fn new(handle: GatewayHandle, tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self { handle };
        runner.spawn_event_loop(tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProfile { seq } => {
                    gateway_info!("FetchProfile seq={seq}");
                    self.handle.fetch_profile(seq);
                }
                Effect::FetchJobs { seq, query } => {
                    gateway_info!(
                        "FetchJobs seq={} search={:?} types={}",
                        seq,
                        query.search,
                        query.employment_types.len()
                    );
                    self.handle.fetch_jobs(seq, map_query(query));
                }
            }
        }
    }

    fn spawn_event_loop(&self, tx: mpsc::Sender<AppEvent>) {
        let handle = self.handle.clone();
        thread::spawn(move || loop {
            if let Some(event) = handle.try_recv() {
                let msg = match event {
                    GatewayEvent::ProfileFetched { seq, result } => Msg::ProfileLoaded {
                        seq,
                        result: result.map(map_profile).map_err(map_failure),
                    },
                    GatewayEvent::JobsFetched { seq, result } => Msg::JobsLoaded {
                        seq,
                        result: result
                            .map(|jobs| jobs.into_iter().map(map_job).collect())
                            .map_err(map_failure),
                    },
                };
                if tx.send(AppEvent::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_query(query: JobsQuery) -> JobsFilter {
    JobsFilter {
        search: query.search,
        minimum_package: query.minimum_package,
        employment_types: query.employment_types,
    }
}

fn map_profile(details: ProfileDetails) -> ProfileRecord {
    ProfileRecord {
        name: details.name,
        avatar_url: details.avatar_url,
        short_bio: details.short_bio,
    }
}

fn map_job(job: JobSummary) -> JobRecord {
    JobRecord {
        id: job.id,
        company_logo_url: job.company_logo_url,
        employment_type: job.employment_type,
        title: job.title,
        rating: job.rating,
        location: job.location,
        package_per_annum: job.package_per_annum,
        description: job.description,
    }
}

fn map_failure(err: GatewayError) -> LoadFailure {
    match err {
        GatewayError::Network(_) | GatewayError::Timeout => LoadFailure::Network,
        GatewayError::HttpStatus(code) => LoadFailure::Http(code),
        GatewayError::Parse(_) => LoadFailure::Parse,
    }
}
