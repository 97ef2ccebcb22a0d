//! Tests for StatsState

use super::*;
use crate::stats::types::{StatValue, StatsRecord};
use insta::assert_snapshot;

fn provider_stats(values: &[f64]) -> Result<StatsRecord, String> {
    Ok(StatsRecord::new()
        .with("count", StatValue::Int(values.len() as i64))
        .with("exact", StatValue::Bool(true)))
}

fn failing_stats(_values: &[f64]) -> Result<StatsRecord, String> {
    Err("values out of range".to_string())
}

#[test]
fn test_initial_state_shows_prompt() {
    let state = StatsState::default();
    assert!(state.result().is_none());
    assert_eq!(state.display(), STATS_PROMPT);
}

#[test]
fn test_fallback_rendering_for_default_numbers() {
    let mut state = StatsState::default();
    state.compute("1, 2, 3, 4, 5", None);

    assert_snapshot!(state.display(), @r"
    Statistics:
    - count: 5.00
    - sum: 15.00
    - avg: 3.00
    - min: 1.00
    - max: 5.00

    (Calculated using fallback implementation)
    ");
}

#[test]
fn test_empty_numbers_render_nulls() {
    let mut state = StatsState::default();
    state.compute("  ", None);

    let text = state.display();
    assert!(text.contains("- count: 0.00"));
    assert!(text.contains("- avg: 0.00"));
    assert!(text.contains("- min: null"));
    assert!(text.contains("- max: null"));
}

#[test]
fn test_parse_error_becomes_error_record() {
    let mut state = StatsState::default();
    state.compute("a, b", None);

    assert!(matches!(state.result(), Some(StatsResult::Failed { .. })));
    assert_eq!(
        state.display(),
        "Error: could not convert string to float: 'a'"
    );
}

#[test]
fn test_parse_error_skips_provider() {
    let mut state = StatsState::default();
    state.compute("1, x", Some(provider_stats));

    assert!(state.display().starts_with("Error: "));
}

#[test]
fn test_provider_result_is_used_when_present() {
    let mut state = StatsState::default();
    state.compute("1, 2", Some(provider_stats));

    let text = state.display();
    assert!(text.contains("- count: 2.00"));
    assert!(text.contains("- exact: true"));
    assert!(text.ends_with("(Calculated using private package)"));
}

#[test]
fn test_provider_error_becomes_error_record() {
    let mut state = StatsState::default();
    state.compute("1, 2", Some(failing_stats));

    assert_eq!(state.display(), "Error: values out of range");
}

#[test]
fn test_new_result_replaces_previous_result() {
    let mut state = StatsState::default();
    state.compute("x", None);
    assert!(state.display().starts_with("Error: "));

    state.compute("4", None);
    let text = state.display();
    assert!(text.starts_with("Statistics:"));
    assert!(!text.contains("Error"));
}
