/// Fetch lifecycle primitives shared by every page view.
///
/// Each fetch site owns a `RemoteData` slot and a `FetchSequence`. The slot
/// makes the `Idle -> Loading -> {Success, Error}` transitions explicit, and
/// the sequence tags every request so a response that lost a race against a
/// newer request is discarded instead of overwriting fresher state.
use serde::Serialize;

/// State of one remotely-fetched slot of view state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "value")]
pub enum RemoteData<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> RemoteData<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RemoteData::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RemoteData::Error(_))
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            RemoteData::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RemoteData::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Fold a fetch outcome into the slot, replacing whatever was there.
    pub fn resolve<E>(&mut self, outcome: Result<T, E>, error_message: &str) {
        *self = match outcome {
            Ok(value) => RemoteData::Success(value),
            Err(_) => RemoteData::Error(error_message.to_string()),
        };
    }
}

/// Ticket identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Monotonically increasing fetch sequence for one view.
///
/// `issue` before sending a request, `is_current` before applying its
/// response; a ticket superseded by a newer `issue` must be dropped.
#[derive(Debug, Default)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}
