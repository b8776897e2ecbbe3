// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operation identity

use std::fmt;

/// Namespace, declaring type and method of an interceptable operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId {
    namespace: String,
    type_name: String,
    method: String,
}

impl OperationId {
    pub fn new(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            method: method.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Trace label, e.g. `OrderService.order_item(..)`
    pub fn short_string(&self) -> String {
        format!("{}.{}(..)", self.type_name, self.method)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.namespace, self.type_name, self.method)
    }
}
