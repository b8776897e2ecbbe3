// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::operation::OperationId;
use lt_core::MemorySink;
use std::io::Write;

#[test]
fn empty_document_gives_defaults() {
    let config = TraceConfig::parse("").unwrap();
    assert_eq!(config, TraceConfig::default());
    assert_eq!(config.namespace, "app");
    assert_eq!(config.exclude, vec!["no_log"]);
}

#[test]
fn full_trace_table_is_read() {
    let config = TraceConfig::parse(
        r#"
        [trace]
        namespace = "shop::orders"
        exclude = ["health", "no_log"]
        sink = "stderr"
        recorder = "field"
        timing = true
        "#,
    )
    .unwrap();

    assert_eq!(config.namespace, "shop::orders");
    assert_eq!(config.exclude, vec!["health", "no_log"]);
    assert_eq!(config.sink, SinkTarget::Stderr);
    assert_eq!(config.recorder, RecorderKind::Field);
    assert!(config.timing);
}

#[test]
fn unrecognised_sink_is_a_file_path() {
    let config = TraceConfig::parse("[trace]\nsink = \"/var/log/trace.log\"\n").unwrap();
    assert_eq!(
        config.sink,
        SinkTarget::File(PathBuf::from("/var/log/trace.log"))
    );
}

#[test]
fn empty_namespace_fails_validation() {
    let err = TraceConfig::parse("[trace]\nnamespace = \"\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::EmptyNamespace), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = TraceConfig::parse("[trace]\nnamspace = \"app\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn unknown_recorder_is_rejected() {
    let err = TraceConfig::parse("[trace]\nrecorder = \"global\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[trace]\nnamespace = \"svc\"").unwrap();
    let config = TraceConfig::load(file.path()).unwrap();
    assert_eq!(config.namespace, "svc");
}

#[test]
fn load_missing_file_reports_path() {
    let err = TraceConfig::load(Path::new("/nonexistent/lt.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/lt.toml"), "{err}");
}

#[test]
fn file_sink_appends_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let config = TraceConfig {
        sink: SinkTarget::File(path.clone()),
        ..TraceConfig::default()
    };

    let log_trace = config.build_recorder(config.open_sink().unwrap());
    let status = log_trace.begin("OrderService.order_item(..)");
    log_trace.end(status).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.lines().all(|l| l.contains("OrderService.order_item(..)")));
}

#[test]
fn install_registers_trace_and_timing_advisors() {
    let sink = MemorySink::new();
    let config = TraceConfig {
        timing: true,
        ..TraceConfig::default()
    };
    let mut factory = ProxyFactory::new();
    config
        .install(&mut factory, config.build_recorder(Arc::new(sink.clone())))
        .unwrap();

    assert_eq!(factory.advisors().len(), 2);
    let bar = OperationId::new("app", "Foo", "bar");
    let no_log = OperationId::new("app", "Foo", "no_log");
    assert!(factory.advisors().iter().all(|a| a.applies_to(&bar)));
    assert!(factory.advisors().iter().all(|a| !a.applies_to(&no_log)));
}

#[test]
fn unmatchable_namespace_fails_validation() {
    let err = TraceConfig::parse("[trace]\nnamespace = \"app::*::order\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNamespace(_)), "{err}");
}

#[test]
fn dotted_namespace_is_accepted() {
    let config = TraceConfig::parse("[trace]\nnamespace = \"app.*\"\n").unwrap();
    let mut factory = ProxyFactory::new();
    config
        .install(&mut factory, config.build_recorder(Arc::new(MemorySink::new())))
        .unwrap();
    assert!(factory.advisors()[0].applies_to(&OperationId::new("app::order", "Foo", "bar")));
}
