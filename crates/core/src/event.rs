// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace events and their line rendering
//!
//! ```text
//! [<token>] <"|  " x level><marker> <label>[ time=<ms>ms][ ex=<error>]
//! ```

use crate::trace::TraceStatus;
use std::fmt;
use std::time::Duration;

/// One level of nesting in a rendered line
pub const INDENT: &str = "|  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Begin,
    End,
    Exception,
}

impl EventKind {
    pub fn marker(self) -> &'static str {
        match self {
            EventKind::Begin => "->",
            EventKind::End => "<-",
            EventKind::Exception => "<X",
        }
    }
}

/// A single begin, end or exception record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub token: String,
    pub level: usize,
    pub kind: EventKind,
    pub label: String,
    /// Present on end and exception only
    pub elapsed: Option<Duration>,
    /// Present on exception only
    pub error: Option<String>,
}

impl TraceEvent {
    pub fn begin(status: &TraceStatus) -> Self {
        Self::from_status(status, EventKind::Begin, None, None)
    }

    pub fn end(status: &TraceStatus, elapsed: Duration) -> Self {
        Self::from_status(status, EventKind::End, Some(elapsed), None)
    }

    pub fn exception(status: &TraceStatus, elapsed: Duration, error: impl Into<String>) -> Self {
        Self::from_status(status, EventKind::Exception, Some(elapsed), Some(error.into()))
    }

    fn from_status(
        status: &TraceStatus,
        kind: EventKind,
        elapsed: Option<Duration>,
        error: Option<String>,
    ) -> Self {
        Self {
            token: status.trace_id().id().to_string(),
            level: status.trace_id().level(),
            kind,
            label: status.message().to_string(),
            elapsed,
            error,
        }
    }

    pub fn elapsed_ms(&self) -> Option<u64> {
        self.elapsed.map(|d| d.as_millis() as u64)
    }

    /// The rendered trace line
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.token)?;
        for _ in 0..self.level {
            f.write_str(INDENT)?;
        }
        write!(f, "{} {}", self.kind.marker(), self.label)?;
        if let Some(ms) = self.elapsed_ms() {
            write!(f, " time={}ms", ms)?;
        }
        if let Some(error) = &self.error {
            write!(f, " ex={}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
