// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain token generation

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Length of the tokens produced by [`UuidIdGen`]
pub const SHORT_TOKEN_LEN: usize = 8;

/// Generates the token shared by every call in one chain
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Short random tokens: the leading hex digits of a v4 UUID
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> String {
        let mut token = uuid::Uuid::new_v4().simple().to_string();
        token.truncate(SHORT_TOKEN_LEN);
        token
    }
}

/// Predictable tokens (`T1`, `T2`, ...) for tests
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("T")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
