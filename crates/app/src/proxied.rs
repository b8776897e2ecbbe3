// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proxied order components
//!
//! Each wrapper implements the same trait as the component it wraps and
//! delegates every method through the component's [`MethodTable`].

use crate::order::{OrderController, OrderError, OrderRepository, OrderService};
use lt_aop::{Advised, MethodTable, ProxyFactory};

/// Wrapper that intercepts any OrderRepository
pub struct ProxiedOrderRepository<R> {
    inner: R,
    table: MethodTable,
}

impl<R: Advised> ProxiedOrderRepository<R> {
    pub fn new(inner: R, factory: &ProxyFactory) -> Self {
        let table = factory.proxy_for::<R>();
        Self { inner, table }
    }
}

impl<R: OrderRepository> OrderRepository for ProxiedOrderRepository<R> {
    fn save(&self, item_id: &str) -> Result<(), OrderError> {
        self.table.invoke("save", || self.inner.save(item_id))
    }
}

/// Wrapper that intercepts any OrderService
pub struct ProxiedOrderService<S> {
    inner: S,
    table: MethodTable,
}

impl<S: Advised> ProxiedOrderService<S> {
    pub fn new(inner: S, factory: &ProxyFactory) -> Self {
        let table = factory.proxy_for::<S>();
        Self { inner, table }
    }
}

impl<S: OrderService> OrderService for ProxiedOrderService<S> {
    fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.table.invoke("order_item", || self.inner.order_item(item_id))
    }
}

/// Wrapper that intercepts any OrderController
pub struct ProxiedOrderController<C> {
    inner: C,
    table: MethodTable,
}

impl<C: Advised> ProxiedOrderController<C> {
    pub fn new(inner: C, factory: &ProxyFactory) -> Self {
        let table = factory.proxy_for::<C>();
        Self { inner, table }
    }
}

impl<C: OrderController> OrderController for ProxiedOrderController<C> {
    fn request(&self, item_id: &str) -> Result<String, OrderError> {
        self.table.invoke("request", || self.inner.request(item_id))
    }

    fn no_log(&self) -> String {
        self.table.invoke_infallible("no_log", || self.inner.no_log())
    }
}

#[cfg(test)]
#[path = "proxied_tests.rs"]
mod tests;
