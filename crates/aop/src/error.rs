// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while wiring interception

use std::path::PathBuf;
use thiserror::Error;

/// Invalid interception setup, surfaced at registration time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pointcut namespace must not be empty")]
    EmptyNamespace,
    #[error("invalid pointcut namespace '{0}': expected a path like app::order")]
    InvalidNamespace(String),
    #[error("name pointcut needs at least one pattern")]
    EmptyPatterns,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
