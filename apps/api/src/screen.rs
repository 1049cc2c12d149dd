//! Screen state machine: `idle → loading → success | error`.
//!
//! At most one analysis is in flight. A submission while loading is refused,
//! and an outcome that arrives for an abandoned request is dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::models::AnalysisResult;
use crate::dashboard::DashboardView;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ScreenState {
    Idle,
    Loading,
    Success {
        result: AnalysisResult,
        dashboard: DashboardView,
    },
    Error {
        message: String,
    },
}

/// Terminal outcome of one submission: the result with its rendered
/// dashboard, or the message to show.
pub type Outcome = Result<(AnalysisResult, DashboardView), String>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("An analysis is already in progress")]
pub struct ScreenBusy;

/// Identifies one submission. Only the ticket of the current submission can
/// complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Screen {
    state: ScreenState,
    current: u64,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Idle,
            current: 0,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ScreenState::Loading)
    }

    /// Starts a new submission. Clears any previous result or error.
    pub fn begin(&mut self) -> Result<Ticket, ScreenBusy> {
        if self.is_loading() {
            return Err(ScreenBusy);
        }
        self.current += 1;
        self.state = ScreenState::Loading;
        Ok(Ticket(self.current))
    }

    /// Applies the outcome of a submission. Returns `false` (and changes
    /// nothing) when the ticket is stale or the screen is not loading.
    pub fn finish(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.owns(ticket) {
            debug!("Discarding outcome for stale submission {}", ticket.0);
            return false;
        }
        self.state = match outcome {
            Ok((result, dashboard)) => ScreenState::Success { result, dashboard },
            Err(message) => ScreenState::Error { message },
        };
        true
    }

    /// The caller gave up waiting: back to idle, later outcomes are ignored.
    pub fn abandon(&mut self, ticket: Ticket) {
        if self.owns(ticket) {
            info!("Submission {} abandoned before completion", ticket.0);
            self.current += 1;
            self.state = ScreenState::Idle;
        }
    }

    fn owns(&self, ticket: Ticket) -> bool {
        self.is_loading() && ticket.0 == self.current
    }
}

pub type SharedScreen = Arc<Mutex<Screen>>;

pub fn lock(screen: &SharedScreen) -> MutexGuard<'_, Screen> {
    // A panic while holding the lock cannot leave the state half-written.
    screen.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Guard for one in-flight submission. Dropping it without calling
/// `complete` (e.g. the HTTP client disconnected) abandons the submission.
pub struct InFlight {
    screen: SharedScreen,
    ticket: Option<Ticket>,
}

impl InFlight {
    pub fn start(screen: &SharedScreen) -> Result<Self, ScreenBusy> {
        let ticket = lock(screen).begin()?;
        Ok(Self {
            screen: Arc::clone(screen),
            ticket: Some(ticket),
        })
    }

    pub fn complete(mut self, outcome: Outcome) {
        if let Some(ticket) = self.ticket.take() {
            lock(&self.screen).finish(ticket, outcome);
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            lock(&self.screen).abandon(ticket);
        }
    }
}
