// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use lt_core::{FakeClock, MemorySink, Recorder, SequentialIdGen, ThreadLocalStore};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_tracing<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.logs.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).to_string()
}

fn order_save() -> OperationId {
    OperationId::new("app::order", "OrderRepository", "save")
}

#[derive(Debug, thiserror::Error)]
#[error("illegal item: ex")]
struct IllegalItem;

#[test]
fn log_trace_scope_begins_on_enter_and_ends_on_return() {
    let sink = MemorySink::new();
    let clock = FakeClock::new();
    let log_trace: Arc<dyn LogTrace> = Arc::new(Recorder::with_parts(
        ThreadLocalStore::new(),
        clock.clone(),
        SequentialIdGen::default(),
        Arc::new(sink.clone()),
    ));
    let interceptor = LogTraceInterceptor::new(Arc::clone(&log_trace));

    let scope = interceptor.enter(&order_save());
    assert_eq!(sink.lines(), vec!["[T1] -> OrderRepository.save(..)"]);
    assert!(!log_trace.is_idle());

    clock.advance_ms(15);
    scope.returned();
    assert_eq!(
        sink.lines()[1],
        "[T1] <- OrderRepository.save(..) time=15ms"
    );
    assert!(log_trace.is_idle());
}

#[test]
fn log_trace_scope_records_failure() {
    let sink = MemorySink::new();
    let log_trace: Arc<dyn LogTrace> =
        Arc::new(lt_core::ThreadLocalLogTrace::new(Arc::new(sink.clone())));
    let interceptor = LogTraceInterceptor::new(Arc::clone(&log_trace));

    interceptor.enter(&order_save()).failed(&IllegalItem);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].error.as_deref(), Some("illegal item: ex"));
    assert!(log_trace.is_idle());
}

#[test]
fn time_interceptor_logs_start_and_result_time() {
    let clock = FakeClock::new();
    let interceptor = TimeInterceptor::with_clock(clock.clone());

    let logs = with_tracing(|| {
        let scope = interceptor.enter(&order_save());
        clock.advance_ms(120);
        scope.returned();
    });

    assert!(logs.contains("TimeProxy start"), "Logs:\n{}", logs);
    assert!(logs.contains("TimeProxy end"), "Logs:\n{}", logs);
    assert!(logs.contains("result_time_ms=120"), "Logs:\n{}", logs);
    assert!(
        logs.contains("operation=app::order::OrderRepository::save"),
        "Logs:\n{}",
        logs
    );
}

#[test]
fn time_interceptor_logs_failures_with_error() {
    let interceptor = TimeInterceptor::with_clock(FakeClock::new());

    let logs = with_tracing(|| {
        interceptor.enter(&order_save()).failed(&IllegalItem);
    });

    assert!(logs.contains("error=illegal item: ex"), "Logs:\n{}", logs);
}
