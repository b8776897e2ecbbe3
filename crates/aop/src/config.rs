// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace configuration
//!
//! ```toml
//! [trace]
//! namespace = "app"
//! exclude = ["no_log"]
//! sink = "log"          # "log" | "stderr" | path of a file to append to
//! recorder = "thread"   # "thread" | "field"
//! timing = false
//! ```
//!
//! Every key is optional; a missing `[trace]` table means the defaults.

use crate::error::ConfigError;
use crate::interceptor::TimeInterceptor;
use crate::pointcut::NamespacePointcut;
use crate::proxy::{Advisor, ProxyFactory};
use lt_core::{FieldLogTrace, LogTrace, ThreadLocalLogTrace, TraceSink, TracingSink, WriterSink};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where trace lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SinkTarget {
    /// Through the `tracing` subscriber
    #[default]
    Log,
    Stderr,
    File(PathBuf),
}

impl From<String> for SinkTarget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "log" => SinkTarget::Log,
            "stderr" => SinkTarget::Stderr,
            _ => SinkTarget::File(PathBuf::from(value)),
        }
    }
}

/// Which chain store backs the recorder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecorderKind {
    /// Chain state per thread; safe with concurrent requests
    #[default]
    Thread,
    /// One shared holder; single-chain use only
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    pub namespace: String,
    pub exclude: Vec<String>,
    pub sink: SinkTarget,
    pub recorder: RecorderKind,
    /// Also install the timing interceptor on the same operations
    pub timing: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            namespace: "app".to_string(),
            exclude: vec!["no_log".to_string()],
            sink: SinkTarget::Log,
            recorder: RecorderKind::Thread,
            timing: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    trace: TraceConfig,
}

impl TraceConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.trace.validate()?;
        Ok(file.trace)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        NamespacePointcut::new(&self.namespace, self.exclude.iter().cloned()).map(|_| ())
    }

    pub fn open_sink(&self) -> Result<Arc<dyn TraceSink>, ConfigError> {
        let sink: Arc<dyn TraceSink> = match &self.sink {
            SinkTarget::Log => Arc::new(TracingSink),
            SinkTarget::Stderr => Arc::new(WriterSink::stderr()),
            SinkTarget::File(path) => {
                let sink = WriterSink::append(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                Arc::new(sink)
            }
        };
        Ok(sink)
    }

    pub fn build_recorder(&self, sink: Arc<dyn TraceSink>) -> Arc<dyn LogTrace> {
        match self.recorder {
            RecorderKind::Thread => Arc::new(ThreadLocalLogTrace::new(sink)),
            RecorderKind::Field => Arc::new(FieldLogTrace::new(sink)),
        }
    }

    /// Register this configuration's advisors on `factory`
    pub fn install(
        &self,
        factory: &mut ProxyFactory,
        log_trace: Arc<dyn LogTrace>,
    ) -> Result<(), ConfigError> {
        factory.install_interceptor(&self.namespace, self.exclude.iter().cloned(), log_trace)?;
        if self.timing {
            let pointcut = NamespacePointcut::new(&self.namespace, self.exclude.iter().cloned())?;
            factory.add_advisor(Advisor::new(pointcut, TimeInterceptor::new()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
