// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! lt-core: call-chain trace recording
//!
//! This crate provides:
//! - `TraceId` / `TraceStatus`, the identity and timing of one traced call
//! - `LogTrace` recorders that keep per-context chain state and emit
//!   begin/end/exception events with nesting depth
//! - Sinks that render those events as trace lines
//! - Clock and chain-token abstractions so tests can pin time and ids

pub mod clock;
pub mod error;
pub mod event;
pub mod id;
pub mod log_trace;
pub mod sink;
pub mod trace;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::TraceError;
pub use event::{EventKind, TraceEvent, INDENT};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use log_trace::{
    ChainStore, FieldLogTrace, LogTrace, Recorder, SharedStore, ThreadLocalLogTrace,
    ThreadLocalStore,
};
pub use sink::{TraceSink, TracingSink, WriterSink, TRACE_TARGET};
pub use trace::{TraceId, TraceStatus};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sink::MemorySink;
