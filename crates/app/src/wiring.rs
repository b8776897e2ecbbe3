// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Explicit composition of the order application

use crate::order::{InMemoryOrderRepository, OrderControllerImpl, OrderServiceImpl};
use crate::proxied::{ProxiedOrderController, ProxiedOrderRepository, ProxiedOrderService};
use lt_aop::{ConfigError, ProxyFactory, TraceConfig};
use lt_core::{LogTrace, TraceSink};
use std::sync::Arc;
use std::time::Duration;

pub type AppRepository = ProxiedOrderRepository<InMemoryOrderRepository>;
pub type AppService = ProxiedOrderService<OrderServiceImpl<AppRepository>>;
/// Controller with every layer proxied
pub type AppController = ProxiedOrderController<OrderControllerImpl<AppService>>;

/// The wired application
pub struct App {
    pub controller: Arc<AppController>,
    pub log_trace: Arc<dyn LogTrace>,
    /// Handle sharing the repository's saved items
    pub repository: InMemoryOrderRepository,
}

/// Build the recorder, register advisors and wrap every component
pub fn build_app(
    config: &TraceConfig,
    sink: Arc<dyn TraceSink>,
    latency: Duration,
) -> Result<App, ConfigError> {
    let log_trace = config.build_recorder(sink);
    let mut factory = ProxyFactory::new();
    config.install(&mut factory, Arc::clone(&log_trace))?;

    let repository = InMemoryOrderRepository::new(latency);
    let service = OrderServiceImpl::new(ProxiedOrderRepository::new(repository.clone(), &factory));
    let controller = OrderControllerImpl::new(ProxiedOrderService::new(service, &factory));
    let controller = ProxiedOrderController::new(controller, &factory);

    tracing::debug!(namespace = %config.namespace, "order application wired");
    Ok(App {
        controller: Arc::new(controller),
        log_trace,
        repository,
    })
}

#[cfg(test)]
#[path = "wiring_tests.rs"]
mod tests;
