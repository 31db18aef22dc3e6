use mayer_core::errors::{ErrorInfo, MayerError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", "1")
        .with_context("reason", "example")
}

#[test]
fn coefficient_error_surface() {
    let err = MayerError::Coefficient(sample_info("invalid-denominator", "zero"));
    assert_eq!(err.code(), "invalid-denominator");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn graph_error_surface() {
    let err = MayerError::graph("duplicate-bond", "bond already exists").with_context("a", 0);
    assert_eq!(err.info().code, "duplicate-bond");
    assert_eq!(err.info().context.get("a"), Some(&"0".to_string()));
}

#[test]
fn isomorphism_error_surface() {
    let err = MayerError::isomorphism("iso-budget-exceeded", "search aborted")
        .with_context("limit", 10)
        .with_hint("raise the limit");
    assert_eq!(err.code(), "iso-budget-exceeded");
    assert_eq!(err.info().hint.as_deref(), Some("raise the limit"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = MayerError::Graph(sample_info("G001", "unknown node").with_hint("check indices"));
    assert_eq!(
        err.to_string(),
        "graph error: unknown node (code: G001) | context: [node=1, reason=example] | hint: check indices"
    );
}
