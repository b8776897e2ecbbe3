// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lt-demo
//!
//! Runs each item id given on the command line as an independent order
//! request, all concurrently, and prints one result line per item. Trace
//! lines go to the configured sink (stderr log by default).
//!
//! Environment:
//! - `LT_CONFIG`: path of a TOML trace configuration
//! - `LT_LATENCY_MS`: simulated repository latency (default 0)
//! - `RUST_LOG`: log filter (default `info`)

use std::path::PathBuf;
use std::time::Duration;

use lt_aop::TraceConfig;
use lt_app::{build_app, OrderController};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config = match std::env::var_os("LT_CONFIG") {
        Some(path) => TraceConfig::load(&PathBuf::from(path))?,
        None => TraceConfig::default(),
    };
    let latency = std::env::var("LT_LATENCY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::ZERO);

    let mut items: Vec<String> = std::env::args().skip(1).collect();
    if items.is_empty() {
        items.push("hello".to_string());
    }

    let app = build_app(&config, config.open_sink()?, latency)?;
    info!(requests = items.len(), "starting order requests");

    // One blocking task per request: each chain runs on its own thread.
    let mut handles = Vec::with_capacity(items.len());
    for item in items {
        let controller = app.controller.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let result = controller.request(&item);
            (item, result)
        }));
    }

    let mut failures = 0;
    for handle in handles {
        let (item, result) = handle.await?;
        match result {
            Ok(response) => println!("{}: {}", item, response),
            Err(e) => {
                failures += 1;
                error!(item = %item, error = %e, "request failed");
                println!("{}: error: {}", item, e);
            }
        }
    }
    println!("no_log: {}", app.controller.no_log());

    if failures > 0 {
        return Err(format!("{} request(s) failed", failures).into());
    }
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
