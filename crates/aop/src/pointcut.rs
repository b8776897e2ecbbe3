// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rules deciding which operations get intercepted

use crate::error::ConfigError;
use crate::operation::OperationId;
use std::collections::BTreeSet;

/// Predicate over operation identity
pub trait Pointcut: Send + Sync {
    fn matches(&self, op: &OperationId) -> bool;
}

impl<F> Pointcut for F
where
    F: Fn(&OperationId) -> bool + Send + Sync,
{
    fn matches(&self, op: &OperationId) -> bool {
        self(op)
    }
}

/// Every operation under a namespace, minus explicitly named methods
///
/// `app` (or `app::*`, `app::**`, `app.*`) matches `app` and
/// `app::order::v1`, never `application`.
#[derive(Debug, Clone)]
pub struct NamespacePointcut {
    prefix: String,
    excluded: BTreeSet<String>,
}

impl NamespacePointcut {
    pub fn new<I, S>(prefix: &str, excluded: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            prefix: normalize_prefix(prefix)?,
            excluded: excluded.into_iter().map(Into::into).collect(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn covers(&self, namespace: &str) -> bool {
        match namespace.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }
}

impl Pointcut for NamespacePointcut {
    fn matches(&self, op: &OperationId) -> bool {
        !self.excluded.contains(op.method()) && self.covers(op.namespace())
    }
}

/// Canonical `ident(::ident)*` form of a namespace prefix
///
/// `.` separates segments like `::`. A trailing `::*`, `::**` or `::` is
/// dropped; any other wildcard is invalid.
fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let path = raw.trim().replace('.', "::");
    let path = path
        .strip_suffix("::**")
        .or_else(|| path.strip_suffix("::*"))
        .unwrap_or(path.as_str());
    let path = path.strip_suffix("::").unwrap_or(path);
    if path.is_empty() || path.chars().all(|c| c == '*') {
        return Err(ConfigError::EmptyNamespace);
    }
    if !path.split("::").all(is_identifier) {
        return Err(ConfigError::InvalidNamespace(raw.to_string()));
    }
    Ok(path.to_string())
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Method names matched against `*` globs (`request*`, `*save`)
#[derive(Debug, Clone)]
pub struct NameMatchPointcut {
    patterns: Vec<String>,
}

impl NameMatchPointcut {
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Err(ConfigError::EmptyPatterns);
        }
        Ok(Self { patterns })
    }
}

impl Pointcut for NameMatchPointcut {
    fn matches(&self, op: &OperationId) -> bool {
        self.patterns.iter().any(|p| glob_match(p, op.method()))
    }
}

fn glob_match(pattern: &str, name: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    let [first, middle @ .., last] = parts.as_slice() else {
        return pattern == name;
    };

    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };
    for part in middle {
        match rest.find(part) {
            Some(i) => rest = &rest[i + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

#[cfg(test)]
#[path = "pointcut_tests.rs"]
mod tests;
