//! Jobdeck core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod remote;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, JobsQuery};
pub use msg::Msg;
pub use remote::{LoadFailure, RemoteData, RequestStatus};
pub use state::{AppState, FilterState, JobRecord, ProfileRecord, RequestSeq};
pub use update::update;
pub use view_model::{BoardViewModel, JobCardView, ProfileView};
