// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Building the interceptor chains behind decorated components
//!
//! The [`ProxyFactory`] holds the registered advisors. For each target type
//! it evaluates every advisor against every method once and hands back a
//! [`MethodTable`]; decorators call [`MethodTable::invoke`] for each
//! delegated method. A method no advisor matched is a plain pass-through.

use crate::error::ConfigError;
use crate::interceptor::{Interceptor, InvocationAborted, InvocationScope, LogTraceInterceptor};
use crate::operation::OperationId;
use crate::pointcut::{NamespacePointcut, Pointcut};
use lt_core::LogTrace;
use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error;
use std::sync::Arc;

/// Identity of a decoratable component type
pub trait Advised {
    const NAMESPACE: &'static str;
    const TYPE_NAME: &'static str;
    /// Methods a decorator routes through its table
    const METHODS: &'static [&'static str];
}

/// A pointcut paired with the interceptor it selects for
#[derive(Clone)]
pub struct Advisor {
    pointcut: Arc<dyn Pointcut>,
    interceptor: Arc<dyn Interceptor>,
}

impl Advisor {
    pub fn new(pointcut: impl Pointcut + 'static, interceptor: impl Interceptor + 'static) -> Self {
        Self {
            pointcut: Arc::new(pointcut),
            interceptor: Arc::new(interceptor),
        }
    }

    pub fn applies_to(&self, op: &OperationId) -> bool {
        self.pointcut.matches(op)
    }
}

/// Registry of advisors; the explicit stand-in for a proxy-creating container
#[derive(Clone, Default)]
pub struct ProxyFactory {
    advisors: Vec<Advisor>,
}

impl ProxyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an advisor. Advisors registered first wrap outermost.
    pub fn add_advisor(&mut self, advisor: Advisor) -> &mut Self {
        self.advisors.push(advisor);
        self
    }

    /// Trace every operation under `namespace_prefix` except `excluded_names`
    pub fn install_interceptor<I, S>(
        &mut self,
        namespace_prefix: &str,
        excluded_names: I,
        log_trace: Arc<dyn LogTrace>,
    ) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pointcut = NamespacePointcut::new(namespace_prefix, excluded_names)?;
        tracing::debug!(namespace = pointcut.prefix(), "installing trace interceptor");
        self.add_advisor(Advisor::new(pointcut, LogTraceInterceptor::new(log_trace)));
        Ok(())
    }

    pub fn advisors(&self) -> &[Advisor] {
        &self.advisors
    }

    /// Method table for an [`Advised`] component type
    pub fn proxy_for<T: Advised>(&self) -> MethodTable {
        self.proxy(T::NAMESPACE, T::TYPE_NAME, T::METHODS)
    }

    pub fn proxy(&self, namespace: &str, type_name: &str, methods: &[&str]) -> MethodTable {
        let mut table = HashMap::new();
        for method in methods {
            let operation = OperationId::new(namespace, type_name, *method);
            let interceptors: Vec<_> = self
                .advisors
                .iter()
                .filter(|advisor| advisor.applies_to(&operation))
                .map(|advisor| Arc::clone(&advisor.interceptor))
                .collect();
            if interceptors.is_empty() {
                continue;
            }
            tracing::debug!(%operation, interceptors = interceptors.len(), "advised");
            table.insert(
                method.to_string(),
                MethodAdvice {
                    operation,
                    interceptors,
                },
            );
        }

        MethodTable {
            type_name: type_name.to_string(),
            methods: Arc::new(table),
        }
    }
}

struct MethodAdvice {
    operation: OperationId,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

/// Per-type interceptor chains, fixed when the proxy was built
#[derive(Clone)]
pub struct MethodTable {
    type_name: String,
    methods: Arc<HashMap<String, MethodAdvice>>,
}

impl MethodTable {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is_advised(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// True when no method matched any advisor
    pub fn is_pass_through(&self) -> bool {
        self.methods.is_empty()
    }

    /// Run `f` as `method`, through the method's interceptor chain
    ///
    /// The result, including the error value, is returned exactly as `f`
    /// produced it.
    pub fn invoke<T, E, F>(&self, method: &str, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: Error,
    {
        let Some(advice) = self.methods.get(method) else {
            return f();
        };

        let mut chain = ScopeChain::enter(advice);
        let result = f();
        match &result {
            Ok(_) => chain.returned(),
            Err(e) => chain.failed(e),
        }
        result
    }

    /// [`invoke`](Self::invoke) for methods that cannot fail
    pub fn invoke_infallible<T, F>(&self, method: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.invoke(method, || Ok::<T, Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// Open scopes of one call, innermost last
///
/// Dropped with scopes still open means the target unwound: each scope is
/// failed with [`InvocationAborted`] so chain state cannot leak.
struct ScopeChain {
    scopes: Vec<Box<dyn InvocationScope>>,
}

impl ScopeChain {
    fn enter(advice: &MethodAdvice) -> Self {
        let mut chain = Self {
            scopes: Vec::with_capacity(advice.interceptors.len()),
        };
        for interceptor in &advice.interceptors {
            chain.scopes.push(interceptor.enter(&advice.operation));
        }
        chain
    }

    fn returned(&mut self) {
        while let Some(scope) = self.scopes.pop() {
            scope.returned();
        }
    }

    fn failed(&mut self, error: &dyn Error) {
        while let Some(scope) = self.scopes.pop() {
            scope.failed(error);
        }
    }
}

impl Drop for ScopeChain {
    fn drop(&mut self) {
        if !self.scopes.is_empty() {
            self.failed(&InvocationAborted);
        }
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
