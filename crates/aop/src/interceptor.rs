// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-cutting wrappers around a delegated call
//!
//! An [`Interceptor`] opens an [`InvocationScope`] before the target runs;
//! the scope is closed exactly once with the outcome. Interceptors only
//! observe: arguments, return values and errors pass through untouched.

use crate::operation::OperationId;
use lt_core::{Clock, LogTrace, SystemClock, TraceStatus};
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

/// Handed to [`InvocationScope::failed`] when the target unwound instead of
/// returning
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invocation aborted before completion")]
pub struct InvocationAborted;

pub trait Interceptor: Send + Sync {
    fn enter(&self, op: &OperationId) -> Box<dyn InvocationScope>;
}

/// Per-call state of one interceptor
pub trait InvocationScope {
    fn returned(self: Box<Self>);
    fn failed(self: Box<Self>, error: &dyn Error);
}

/// Records every intercepted call on a [`LogTrace`]
#[derive(Clone)]
pub struct LogTraceInterceptor {
    log_trace: Arc<dyn LogTrace>,
}

impl LogTraceInterceptor {
    pub fn new(log_trace: Arc<dyn LogTrace>) -> Self {
        Self { log_trace }
    }
}

impl Interceptor for LogTraceInterceptor {
    fn enter(&self, op: &OperationId) -> Box<dyn InvocationScope> {
        let status = self.log_trace.begin(&op.short_string());
        Box::new(LogTraceScope {
            log_trace: Arc::clone(&self.log_trace),
            status,
        })
    }
}

struct LogTraceScope {
    log_trace: Arc<dyn LogTrace>,
    status: TraceStatus,
}

// The recorder reports its own imbalance errors; the call's outcome stands.
impl InvocationScope for LogTraceScope {
    fn returned(self: Box<Self>) {
        let Self { log_trace, status } = *self;
        let _ = log_trace.end(status);
    }

    fn failed(self: Box<Self>, error: &dyn Error) {
        let Self { log_trace, status } = *self;
        let _ = log_trace.exception(status, error);
    }
}

/// Logs how long each intercepted call took
#[derive(Clone, Default)]
pub struct TimeInterceptor<C = SystemClock> {
    clock: C,
}

impl TimeInterceptor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock + 'static> TimeInterceptor<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock + 'static> Interceptor for TimeInterceptor<C> {
    fn enter(&self, op: &OperationId) -> Box<dyn InvocationScope> {
        let operation = op.to_string();
        tracing::info!(%operation, "TimeProxy start");
        Box::new(TimeScope {
            clock: self.clock.clone(),
            operation,
            start: self.clock.now(),
        })
    }
}

struct TimeScope<C> {
    clock: C,
    operation: String,
    start: Instant,
}

impl<C: Clock> InvocationScope for TimeScope<C> {
    fn returned(self: Box<Self>) {
        let result_time_ms = self.clock.elapsed_since(self.start).as_millis() as u64;
        tracing::info!(operation = %self.operation, result_time_ms, "TimeProxy end");
    }

    fn failed(self: Box<Self>, error: &dyn Error) {
        let result_time_ms = self.clock.elapsed_since(self.start).as_millis() as u64;
        tracing::info!(
            operation = %self.operation,
            result_time_ms,
            error = %error,
            "TimeProxy end"
        );
    }
}

#[cfg(test)]
#[path = "interceptor_tests.rs"]
mod tests;
