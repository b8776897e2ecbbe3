// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Call-chain recorders
//!
//! A recorder tracks which chain is active and at what depth, and turns
//! `begin` / `end` / `exception` into [`TraceEvent`]s for its sink.
//!
//! Per chain the active id moves `IDLE -> level 0 -> level n -> ... -> IDLE`.
//! Where that id lives is the [`ChainStore`]'s business:
//! - [`ThreadLocalStore`] keeps it per thread, so concurrent chains on
//!   different threads never see each other's levels.
//! - [`SharedStore`] keeps a single process-wide holder. Only correct when
//!   at most one chain runs at a time.

use crate::clock::{Clock, SystemClock};
use crate::error::TraceError;
use crate::event::TraceEvent;
use crate::id::{IdGen, UuidIdGen};
use crate::sink::TraceSink;
use crate::trace::{TraceId, TraceStatus};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Records the begin and completion of traced calls
pub trait LogTrace: Send + Sync {
    /// Start a call: opens a new chain when idle, otherwise nests one level
    fn begin(&self, message: &str) -> TraceStatus;

    /// Complete a call that returned normally
    fn end(&self, status: TraceStatus) -> Result<(), TraceError>;

    /// Complete a call that failed with `error`
    fn exception(
        &self,
        status: TraceStatus,
        error: &dyn std::error::Error,
    ) -> Result<(), TraceError>;

    /// Active id in the calling context, `None` when idle
    fn current(&self) -> Option<TraceId>;

    fn is_idle(&self) -> bool {
        self.current().is_none()
    }
}

impl<T: LogTrace + ?Sized> LogTrace for Arc<T> {
    fn begin(&self, message: &str) -> TraceStatus {
        (**self).begin(message)
    }

    fn end(&self, status: TraceStatus) -> Result<(), TraceError> {
        (**self).end(status)
    }

    fn exception(
        &self,
        status: TraceStatus,
        error: &dyn std::error::Error,
    ) -> Result<(), TraceError> {
        (**self).exception(status, error)
    }

    fn current(&self) -> Option<TraceId> {
        (**self).current()
    }
}

/// Holder of the active chain id
///
/// The closure runs with exclusive access to the slot for the calling
/// context and must not call back into the store.
pub trait ChainStore: Send + Sync {
    fn with_active<R>(&self, f: impl FnOnce(&mut Option<TraceId>) -> R) -> R;
}

thread_local! {
    static ACTIVE_CHAINS: RefCell<HashMap<u64, TraceId>> = RefCell::new(HashMap::new());
}

static NEXT_STORE_KEY: AtomicU64 = AtomicU64::new(1);

/// Per-thread chain state, isolated per store instance
#[derive(Debug)]
pub struct ThreadLocalStore {
    key: u64,
}

impl ThreadLocalStore {
    pub fn new() -> Self {
        Self {
            key: NEXT_STORE_KEY.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Default for ThreadLocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainStore for ThreadLocalStore {
    fn with_active<R>(&self, f: impl FnOnce(&mut Option<TraceId>) -> R) -> R {
        ACTIVE_CHAINS.with(|chains| {
            let mut chains = chains.borrow_mut();
            let mut slot = chains.remove(&self.key);
            let result = f(&mut slot);
            if let Some(id) = slot {
                chains.insert(self.key, id);
            }
            result
        })
    }
}

/// One holder shared by every thread
#[derive(Debug, Default)]
pub struct SharedStore {
    active: Mutex<Option<TraceId>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainStore for SharedStore {
    fn with_active<R>(&self, f: impl FnOnce(&mut Option<TraceId>) -> R) -> R {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut active)
    }
}

/// [`LogTrace`] built from a chain store, a clock, a token generator and a sink
pub struct Recorder<S, C = SystemClock, G = UuidIdGen> {
    store: S,
    clock: C,
    ids: G,
    sink: Arc<dyn TraceSink>,
}

/// Recorder safe for concurrent chains on independent threads
pub type ThreadLocalLogTrace<C = SystemClock, G = UuidIdGen> = Recorder<ThreadLocalStore, C, G>;

/// Recorder with a single shared holder; one chain at a time
pub type FieldLogTrace<C = SystemClock, G = UuidIdGen> = Recorder<SharedStore, C, G>;

impl<S: ChainStore + Default> Recorder<S, SystemClock, UuidIdGen> {
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self::with_parts(S::default(), SystemClock, UuidIdGen, sink)
    }
}

impl<S: ChainStore, C: Clock, G: IdGen> Recorder<S, C, G> {
    pub fn with_parts(store: S, clock: C, ids: G, sink: Arc<dyn TraceSink>) -> Self {
        Self {
            store,
            clock,
            ids,
            sink,
        }
    }

    fn complete(&self, status: TraceStatus, error: Option<String>) -> Result<(), TraceError> {
        let elapsed = self.clock.elapsed_since(status.start());
        let event = match error {
            Some(error) => TraceEvent::exception(&status, elapsed, error),
            None => TraceEvent::end(&status, elapsed),
        };
        self.sink.record(&event);

        let released = self.store.with_active(|active| release(active, &status));
        if let Err(e) = &released {
            tracing::error!(error = %e, "trace chain out of balance");
        }
        released
    }
}

/// Return the active slot to the parent of `status`, clearing it at the root.
///
/// Computed from the status rather than the stored id so a failing frame
/// always unwinds to its caller even if deeper frames never completed.
fn release(active: &mut Option<TraceId>, status: &TraceStatus) -> Result<(), TraceError> {
    let Some(current) = active.as_ref() else {
        return Err(TraceError::NoActiveChain {
            message: status.message().to_string(),
        });
    };
    if current.id() != status.trace_id().id() {
        return Err(TraceError::ChainMismatch {
            message: status.message().to_string(),
            status_id: status.trace_id().id().to_string(),
            active_id: current.id().to_string(),
        });
    }
    *active = status.trace_id().create_previous_id();
    Ok(())
}

impl<S: ChainStore, C: Clock, G: IdGen> LogTrace for Recorder<S, C, G> {
    fn begin(&self, message: &str) -> TraceStatus {
        let trace_id = self.store.with_active(|active| {
            let next = match active.as_ref() {
                Some(id) => id.create_next_id(),
                None => TraceId::new(self.ids.next()),
            };
            *active = Some(next.clone());
            next
        });
        let status = TraceStatus::new(trace_id, self.clock.now(), message);
        self.sink.record(&TraceEvent::begin(&status));
        status
    }

    fn end(&self, status: TraceStatus) -> Result<(), TraceError> {
        self.complete(status, None)
    }

    fn exception(
        &self,
        status: TraceStatus,
        error: &dyn std::error::Error,
    ) -> Result<(), TraceError> {
        self.complete(status, Some(error.to_string()))
    }

    fn current(&self) -> Option<TraceId> {
        self.store.with_active(|active| active.clone())
    }
}

#[cfg(test)]
#[path = "log_trace_tests.rs"]
mod tests;
