// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{OrderError, OrderRepository, NAMESPACE};
use lt_aop::Advised;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Item id the repository refuses to store
pub const ILLEGAL_ITEM: &str = "ex";

/// Repository keeping saved item ids in memory
///
/// Each save sleeps for `latency` to stand in for storage I/O. Clones share
/// the saved items.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    latency: Duration,
    saved: Arc<Mutex<Vec<String>>>,
}

impl InMemoryOrderRepository {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            saved: Arc::default(),
        }
    }

    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Advised for InMemoryOrderRepository {
    const NAMESPACE: &'static str = NAMESPACE;
    const TYPE_NAME: &'static str = "OrderRepository";
    const METHODS: &'static [&'static str] = &["save"];
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, item_id: &str) -> Result<(), OrderError> {
        if item_id == ILLEGAL_ITEM {
            return Err(OrderError::IllegalItem(item_id.to_string()));
        }
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        self.saved
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(item_id.to_string());
        Ok(())
    }
}
