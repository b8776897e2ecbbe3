// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn op(namespace: &str, method: &str) -> OperationId {
    OperationId::new(namespace, "Foo", method)
}

#[parameterized(
    exact_namespace = { "app", true },
    nested_namespace = { "app::order::v1", true },
    sibling_with_same_prefix = { "application", false },
    unrelated = { "lib::app", false },
)]
fn namespace_pointcut_covers_subtree(namespace: &str, expected: bool) {
    let pointcut = NamespacePointcut::new("app", ["no_log"]).unwrap();
    assert_eq!(pointcut.matches(&op(namespace, "bar")), expected);
}

#[test]
fn excluded_method_never_matches() {
    let pointcut = NamespacePointcut::new("app::*", ["no_log"]).unwrap();
    assert!(pointcut.matches(&op("app", "bar")));
    assert!(!pointcut.matches(&op("app", "no_log")));
    assert!(!pointcut.matches(&op("app::order", "no_log")));
}

#[parameterized(
    single_star = { "app::*" },
    double_star = { "app::**" },
    padded = { "  app  " },
    trailing_separator = { "app::" },
    dotted_wildcard = { "app.*" },
    dotted_double_wildcard = { "app.**" },
)]
fn namespace_wildcard_suffix_is_stripped(prefix: &str) {
    let pointcut = NamespacePointcut::new(prefix, Vec::<String>::new()).unwrap();
    assert_eq!(pointcut.prefix(), "app");
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    only_wildcard = { "*" },
    only_separator_wildcard = { "::*" },
    only_double_wildcard = { "**" },
    only_separator = { "::" },
)]
fn empty_namespace_is_rejected(prefix: &str) {
    let err = NamespacePointcut::new(prefix, ["no_log"]).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyNamespace), "{err}");
}

#[parameterized(
    inner_wildcard = { "app::*::order" },
    glob_segment = { "app*" },
    empty_segment = { "app::::order" },
    leading_digit = { "1app" },
    spaces_inside = { "app order" },
)]
fn malformed_namespace_is_rejected(prefix: &str) {
    let err = NamespacePointcut::new(prefix, ["no_log"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNamespace(_)), "{err}");
}

#[parameterized(
    trailing_separator = { "app::" },
    dotted_wildcard = { "app.*" },
    dotted_path = { "app.order" },
)]
fn normalized_prefix_still_matches_its_subtree(prefix: &str) {
    let pointcut = NamespacePointcut::new(prefix, ["no_log"]).unwrap();
    assert!(pointcut.matches(&op("app::order", "bar")));
    assert!(!pointcut.matches(&op("app::order", "no_log")));
}

#[parameterized(
    prefix_glob = { "request*", "request", true },
    prefix_glob_longer = { "request*", "request_v2", true },
    suffix_glob = { "*save", "order_save", true },
    infix_glob = { "or*item", "order_item", true },
    exact = { "no_log", "no_log", true },
    exact_miss = { "no_log", "no_log2", false },
    prefix_miss = { "order*", "request", false },
    star_matches_all = { "*", "anything", true },
)]
fn name_pointcut_globs(pattern: &str, method: &str, expected: bool) {
    let pointcut = NameMatchPointcut::new([pattern]).unwrap();
    assert_eq!(pointcut.matches(&op("any", method)), expected);
}

#[test]
fn name_pointcut_requires_patterns() {
    let err = NameMatchPointcut::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPatterns));
}

#[test]
fn closures_are_pointcuts() {
    let only_repositories = |op: &OperationId| op.type_name().ends_with("Repository");
    assert!(only_repositories.matches(&OperationId::new("app", "OrderRepository", "save")));
    assert!(!only_repositories.matches(&OperationId::new("app", "OrderService", "save")));
}
