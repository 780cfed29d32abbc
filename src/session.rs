//! Session Gate
//!
//! Login form state and the submit lifecycle:
//! `Idle --submit--> Pending --accepted--> Navigated`, or back to `Idle`
//! with an error message. Only one request may be in flight.

use crate::error::{LoginError, SubmitError, CONNECTIVITY_ERROR, INVALID_CREDENTIALS};
use crate::models::{Credentials, LoginResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateStatus {
    #[default]
    Idle,
    Pending,
    /// Terminal
    Navigated,
}

/// HTTP status plus decoded body of a login call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReply {
    pub status: u16,
    pub body: LoginResponse,
}

impl LoginReply {
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status) && self.body.success
    }
}

/// What the view should do after a login call resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    /// Replace the current history entry with the products view
    NavigateToProducts,
    Stay,
}

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    pub credentials: Credentials,
    status: GateStatus,
    error: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == GateStatus::Pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_user(&mut self, user: String) {
        self.credentials.user = user;
    }

    pub fn set_pass(&mut self, pass: String) {
        self.credentials.pass = pass;
    }

    /// Enter `Pending` and hand out the credentials to send
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitError> {
        match self.status {
            GateStatus::Pending => Err(SubmitError::AlreadyPending),
            GateStatus::Navigated => Err(SubmitError::AlreadyNavigated),
            GateStatus::Idle => {
                self.status = GateStatus::Pending;
                Ok(self.credentials.clone())
            }
        }
    }

    /// Resolve the in-flight request
    pub fn finish_submit(&mut self, outcome: Result<LoginReply, LoginError>) -> GateTransition {
        if self.status != GateStatus::Pending {
            log::warn!("login result arrived with no request pending, ignoring");
            return GateTransition::Stay;
        }
        match outcome {
            Ok(reply) if reply.is_accepted() => {
                log::info!("login accepted for {}", self.credentials.user);
                self.error = None;
                self.status = GateStatus::Navigated;
                GateTransition::NavigateToProducts
            }
            Ok(reply) => {
                let message = reply
                    .body
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
                log::info!("login rejected (status {}): {}", reply.status, message);
                self.error = Some(message);
                self.status = GateStatus::Idle;
                GateTransition::Stay
            }
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(CONNECTIVITY_ERROR.to_string());
                self.status = GateStatus::Idle;
                GateTransition::Stay
            }
        }
    }
}
