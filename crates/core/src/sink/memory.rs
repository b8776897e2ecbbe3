// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::TraceSink;
use crate::event::{EventKind, TraceEvent};
use std::sync::{Arc, Mutex};

/// Records every event; clones share the same buffer
#[derive(Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<TraceEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Rendered lines, in record order
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(TraceEvent::line).collect()
    }

    /// Events belonging to one chain
    pub fn chain(&self, token: &str) -> Vec<TraceEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.token == token)
            .collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events().iter().filter(|e| e.kind == kind).count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl TraceSink for MemorySink {
    fn record(&self, event: &TraceEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}
