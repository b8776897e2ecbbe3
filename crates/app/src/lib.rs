// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Sample order application with traced components
//!
//! Controller, service and repository each sit behind a trait; the
//! `Proxied*` decorators route their methods through the interceptor chains
//! configured for the `app` namespace.

pub mod order;
pub mod proxied;
pub mod wiring;

pub use order::{
    InMemoryOrderRepository, OrderController, OrderControllerImpl, OrderError, OrderRepository,
    OrderService, OrderServiceImpl,
};
pub use proxied::{ProxiedOrderController, ProxiedOrderRepository, ProxiedOrderService};
pub use wiring::{build_app, App, AppController, AppRepository, AppService};
