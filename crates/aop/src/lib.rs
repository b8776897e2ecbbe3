// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Method interception for explicitly decorated components
//!
//! Components sit behind traits; a hand-written decorator implements the
//! same trait and routes each method through a [`MethodTable`] built by the
//! [`ProxyFactory`]. Which methods are intercepted is decided once, when the
//! table is built, by the registered [`Advisor`]s.

pub mod config;
pub mod error;
pub mod interceptor;
pub mod operation;
pub mod pointcut;
pub mod proxy;

pub use config::{RecorderKind, SinkTarget, TraceConfig};
pub use error::ConfigError;
pub use interceptor::{
    InvocationAborted, InvocationScope, Interceptor, LogTraceInterceptor, TimeInterceptor,
};
pub use operation::OperationId;
pub use pointcut::{NameMatchPointcut, NamespacePointcut, Pointcut};
pub use proxy::{Advised, Advisor, MethodTable, ProxyFactory};
