// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destinations for trace events
//!
//! Recorders keep level state per execution context and never lock around
//! it; sinks are the only shared component, so they serialize at the write.

#[cfg(any(test, feature = "test-support"))]
mod memory;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemorySink;

use crate::event::{EventKind, TraceEvent};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// `tracing` target used by [`TracingSink`]
pub const TRACE_TARGET: &str = "lt::trace";

/// Receives every event a recorder produces, in call order
pub trait TraceSink: Send + Sync {
    fn record(&self, event: &TraceEvent);
}

impl<S: TraceSink + ?Sized> TraceSink for Arc<S> {
    fn record(&self, event: &TraceEvent) {
        (**self).record(event)
    }
}

/// Forwards trace lines to the installed `tracing` subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: &TraceEvent) {
        let elapsed_ms = event.elapsed_ms();
        match event.kind {
            EventKind::Exception => tracing::warn!(
                target: TRACE_TARGET,
                trace_id = %event.token,
                level = event.level,
                elapsed_ms,
                "{}",
                event
            ),
            EventKind::Begin | EventKind::End => tracing::info!(
                target: TRACE_TARGET,
                trace_id = %event.token,
                level = event.level,
                elapsed_ms,
                "{}",
                event
            ),
        }
    }
}

/// Appends one rendered line per event to a writer
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl WriterSink<File> {
    /// Open `path` for appending, creating parent directories as needed
    pub fn append(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TraceSink for WriterSink<W> {
    fn record(&self, event: &TraceEvent) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        // A lost trace line must not disturb the traced call
        if let Err(e) = writeln!(writer, "{}", event).and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "failed to write trace line");
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
