//! Request lifecycle - explicit request states with stale-response rejection
//!
//! Every `begin()` bumps a generation counter and hands out a [`Ticket`].
//! Only a completion carrying the current generation is applied; anything
//! older was superseded by a newer request and is dropped.

use crate::api::ApiError;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Where the most recent request stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Pending,
    Succeeded,
    Failed(ApiError),
}

/// Result of handing a completion to a lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Lifecycle of a repeatable request and the last value it produced
#[derive(Debug, Clone)]
pub struct Lifecycle<T> {
    generation: u64,
    status: RequestStatus,
    value: Option<T>,
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            status: RequestStatus::Idle,
            value: None,
        }
    }
}

impl<T> Lifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.status = RequestStatus::Pending;
        Ticket {
            generation: self.generation,
        }
    }

    /// Apply a completion. A failure keeps the previous value.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }

        match result {
            Ok(value) => {
                self.value = Some(value);
                self.status = RequestStatus::Succeeded;
            }
            Err(e) => {
                self.status = RequestStatus::Failed(e);
            }
        }
        Completion::Applied
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            RequestStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
