// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity and timing of a traced call

use std::fmt;
use std::time::Instant;

/// Position of one call within a chain
///
/// Values are never mutated: entering a nested call derives the child id,
/// leaving it derives the parent id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId {
    id: String,
    level: usize,
}

impl TraceId {
    /// Root of a new chain
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_first_level(&self) -> bool {
        self.level == 0
    }

    pub fn create_next_id(&self) -> Self {
        Self {
            id: self.id.clone(),
            level: self.level + 1,
        }
    }

    /// Parent frame, or `None` when this is the root (the chain ends)
    pub fn create_previous_id(&self) -> Option<Self> {
        let level = self.level.checked_sub(1)?;
        Some(Self {
            id: self.id.clone(),
            level,
        })
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.level)
    }
}

/// Handle returned by `begin`, consumed by exactly one `end` or `exception`
#[derive(Debug)]
#[must_use = "a TraceStatus must be passed to end() or exception()"]
pub struct TraceStatus {
    trace_id: TraceId,
    start: Instant,
    message: String,
}

impl TraceStatus {
    pub fn new(trace_id: TraceId, start: Instant, message: impl Into<String>) -> Self {
        Self {
            trace_id,
            start,
            message: message.into(),
        }
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
