use crate::client::ApiError;

pub mod checkin;
pub mod checkout;
pub mod edit;
pub mod invoice;
pub mod listing;
pub mod new_booking;
pub mod services;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient user-facing notice. Flows never throw; they set one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Forbidden responses stay silent towards the user (the client already
    /// logged them); everything else becomes an error notice.
    pub fn from_api_error(error: &ApiError) -> Option<Self> {
        match error {
            ApiError::Forbidden => None,
            other => Some(Self::error(other.to_string())),
        }
    }
}

/// Generation counter shared by all flows: each fetch mints a token, and a
/// response is applied only while its token is still the latest. A reply that
/// arrives after the dialog was reopened or retargeted is dropped on the floor.
#[derive(Debug, Default)]
pub struct FetchGate {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        FetchToken {
            generation: self.generation,
        }
    }

    pub fn admits(&self, token: FetchToken) -> bool {
        token.generation == self.generation
    }
}

/// Replacement for blocking confirm prompts: the pending decision is plain
/// state, so both the question and the answer are testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmState<T> {
    Idle,
    Pending(T),
    Confirmed,
}

impl<T> ConfirmState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmState::Pending(_))
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmState::Confirmed)
    }
}
