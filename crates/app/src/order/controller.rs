// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{OrderController, OrderError, OrderService, NAMESPACE};
use lt_aop::Advised;

pub struct OrderControllerImpl<S> {
    service: S,
}

impl<S: OrderService> OrderControllerImpl<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S> Advised for OrderControllerImpl<S> {
    const NAMESPACE: &'static str = NAMESPACE;
    const TYPE_NAME: &'static str = "OrderController";
    const METHODS: &'static [&'static str] = &["request", "no_log"];
}

impl<S: OrderService> OrderController for OrderControllerImpl<S> {
    fn request(&self, item_id: &str) -> Result<String, OrderError> {
        self.service.order_item(item_id)?;
        Ok("ok".to_string())
    }

    fn no_log(&self) -> String {
        "ok".to_string()
    }
}
