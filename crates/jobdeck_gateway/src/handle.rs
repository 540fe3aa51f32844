use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use gateway_logging::{gateway_debug, gateway_warn};

use crate::client::{ApiSettings, Gateway, ReqwestGateway};
use crate::types::{GatewayError, GatewayEvent, JobsFilter, RequestSeq};

enum GatewayCommand {
    FetchProfile { seq: RequestSeq },
    FetchJobs { seq: RequestSeq, filter: JobsFilter },
}

/// Runs gateway requests on a dedicated tokio runtime and reports
/// completions over a channel. Requests overlap freely; callers resolve
/// supersession by comparing seq values on completion.
#[derive(Clone)]
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<GatewayEvent>>>,
}

impl GatewayHandle {
    pub fn new(settings: ApiSettings, token: String) -> Result<Self, GatewayError> {
        let gateway = Arc::new(ReqwestGateway::new(settings)?);
        Ok(Self::with_gateway(gateway, token))
    }

    /// Wires a handle around any gateway implementation; used by the
    /// default constructor and by tests substituting a fake.
    pub fn with_gateway(gateway: Arc<dyn Gateway>, token: String) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let token = Arc::new(token);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let event_tx = event_tx.clone();
                let token = token.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), &token, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_profile(&self, seq: RequestSeq) {
        let _ = self.cmd_tx.send(GatewayCommand::FetchProfile { seq });
    }

    pub fn fetch_jobs(&self, seq: RequestSeq, filter: JobsFilter) {
        let _ = self.cmd_tx.send(GatewayCommand::FetchJobs { seq, filter });
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        let rx = self.event_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

async fn handle_command(
    gateway: &dyn Gateway,
    token: &str,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    match command {
        GatewayCommand::FetchProfile { seq } => {
            gateway_debug!("profile fetch seq={seq}");
            let result = gateway.fetch_profile(token).await;
            if let Err(err) = &result {
                gateway_warn!("profile fetch seq={seq} failed: {err}");
            }
            let _ = event_tx.send(GatewayEvent::ProfileFetched { seq, result });
        }
        GatewayCommand::FetchJobs { seq, filter } => {
            gateway_debug!(
                "jobs fetch seq={seq} types={} search_len={}",
                filter.employment_types.len(),
                filter.search.len()
            );
            let result = gateway.fetch_jobs(token, &filter).await;
            if let Err(err) = &result {
                gateway_warn!("jobs fetch seq={seq} failed: {err}");
            }
            let _ = event_tx.send(GatewayEvent::JobsFetched { seq, result });
        }
    }
}
