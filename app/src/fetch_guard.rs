//! Drops responses from fetches that were superseded before they resolved.
//!
//! Each view owns a [`FetchGeneration`]. Starting a fetch takes a
//! [`FetchTicket`]; a newer fetch, or the view being torn down, bumps the
//! generation so any older ticket settles as [`Relevant::Stale`] and its
//! response is discarded instead of overwriting newer state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    latest: Arc<AtomicU64>,
}

impl FetchGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, invalidating every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> FetchTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Invalidates outstanding tickets without starting a fetch, e.g. on unmount.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl FetchTicket {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Wraps a finished response according to whether it still matters.
    #[must_use]
    pub fn settle<T>(&self, value: T) -> Relevant<T> {
        if self.is_current() {
            Relevant::Current(value)
        } else {
            Relevant::Stale
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relevant<T> {
    Current(T),
    Stale,
}

impl<T> Relevant<T> {
    #[must_use]
    pub fn into_current(self) -> Option<T> {
        match self {
            Self::Current(value) => Some(value),
            Self::Stale => None,
        }
    }
}
