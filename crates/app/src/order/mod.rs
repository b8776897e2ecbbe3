// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order components

mod controller;
mod repository;
mod service;

pub use controller::OrderControllerImpl;
pub use repository::InMemoryOrderRepository;
pub use service::OrderServiceImpl;

use thiserror::Error;

/// Namespace shared by the order components
pub const NAMESPACE: &str = "app::order";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("illegal item: {0}")]
    IllegalItem(String),
}

pub trait OrderRepository: Send + Sync + 'static {
    fn save(&self, item_id: &str) -> Result<(), OrderError>;
}

pub trait OrderService: Send + Sync + 'static {
    fn order_item(&self, item_id: &str) -> Result<(), OrderError>;
}

pub trait OrderController: Send + Sync + 'static {
    fn request(&self, item_id: &str) -> Result<String, OrderError>;

    /// Health probe; never traced
    fn no_log(&self) -> String;
}
