use std::fmt;

/// Four-state lifecycle tracked independently per logical fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

/// Why a fetch attempt failed. Every kind collapses to `Failure` status
/// for presentation; the distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    Network,
    Http(u16),
    Parse,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Network => write!(f, "network error"),
            LoadFailure::Http(code) => write!(f, "http status {code}"),
            LoadFailure::Parse => write!(f, "malformed response body"),
        }
    }
}

/// Lifecycle of one remote fetch, holding the payload only where it can
/// exist. `retained` carries the last successful payload across later
/// attempts; presentation branches on status and decides whether to show
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteData<T> {
    Initial,
    InProgress { retained: Option<T> },
    Success(T),
    Failure { retained: Option<T> },
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        RemoteData::Initial
    }
}

impl<T> RemoteData<T> {
    pub fn status(&self) -> RequestStatus {
        match self {
            RemoteData::Initial => RequestStatus::Initial,
            RemoteData::InProgress { .. } => RequestStatus::InProgress,
            RemoteData::Success(_) => RequestStatus::Success,
            RemoteData::Failure { .. } => RequestStatus::Failure,
        }
    }

    /// Payload of the current successful attempt.
    pub fn current(&self) -> Option<&T> {
        match self {
            RemoteData::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Last successful payload, surviving in-progress and failed attempts.
    pub fn retained(&self) -> Option<&T> {
        match self {
            RemoteData::Initial => None,
            RemoteData::InProgress { retained } | RemoteData::Failure { retained } => {
                retained.as_ref()
            }
            RemoteData::Success(value) => Some(value),
        }
    }

    /// Moves to `InProgress`, carrying over any previous success payload.
    pub(crate) fn begin(&mut self) {
        let retained = std::mem::take(self).into_retained();
        *self = RemoteData::InProgress { retained };
    }

    pub(crate) fn succeed(&mut self, value: T) {
        *self = RemoteData::Success(value);
    }

    pub(crate) fn fail(&mut self) {
        let retained = std::mem::take(self).into_retained();
        *self = RemoteData::Failure { retained };
    }

    fn into_retained(self) -> Option<T> {
        match self {
            RemoteData::Initial => None,
            RemoteData::InProgress { retained } | RemoteData::Failure { retained } => retained,
            RemoteData::Success(value) => Some(value),
        }
    }
}
