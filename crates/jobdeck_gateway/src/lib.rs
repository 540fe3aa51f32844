//! Jobdeck gateway: HTTP access to the remote job-board API.
mod client;
mod handle;
mod types;

pub use client::{ApiSettings, Gateway, ReqwestGateway, DEFAULT_BASE_URL};
pub use handle::GatewayHandle;
pub use types::{
    GatewayError, GatewayEvent, JobSummary, JobsFilter, ProfileDetails, RequestSeq,
};
