// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{OrderError, OrderRepository, OrderService, NAMESPACE};
use lt_aop::Advised;

pub struct OrderServiceImpl<R> {
    repository: R,
}

impl<R: OrderRepository> OrderServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R> Advised for OrderServiceImpl<R> {
    const NAMESPACE: &'static str = NAMESPACE;
    const TYPE_NAME: &'static str = "OrderService";
    const METHODS: &'static [&'static str] = &["order_item"];
}

impl<R: OrderRepository> OrderService for OrderServiceImpl<R> {
    fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.repository.save(item_id)
    }
}
