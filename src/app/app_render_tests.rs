//! Rendering tests for the form layout

use super::*;
use crate::test_utils::test_helpers::{render_to_string, test_app, test_app_with_provider};
use crossterm::event::KeyCode;

const TEST_WIDTH: u16 = 120;
const TEST_HEIGHT: u16 = 36;

#[test]
fn test_render_shows_every_section() {
    let mut app = test_app();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Private Package Integration Demo"));
    assert!(output.contains("Package Controls"));
    assert!(output.contains("Package Status"));
    assert!(output.contains("Greeting Demo"));
    assert!(output.contains("Styled Text Demo"));
    assert!(output.contains("Statistics Demo"));
    assert!(output.contains("[ Calculate Stats ]"));
    assert!(output.contains("Enter numbers and click 'Calculate Stats'"));
}

#[test]
fn test_render_fallback_outputs() {
    let mut app = test_app();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Package information not available"));
    assert!(output.contains("*Hello, User!*"));
}

#[test]
fn test_render_provider_info() {
    let mut app = test_app_with_provider();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Version: 0.3.1"));
    assert!(output.contains("Available functions: calculate_stats, format_text, generate_greeting"));
}

#[test]
fn test_render_statistics_after_calculate() {
    let mut app = test_app();
    app.calculate();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("- count: 5.00"));
    assert!(output.contains("- max: 5.00"));
    assert!(output.contains("(Calculated using fallback implementation)"));
}

#[test]
fn test_render_help_popup() {
    let mut app = test_app();
    app.handle_key_event(crate::test_utils::test_helpers::key(KeyCode::F(1)));

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Keyboard Shortcuts"));
    assert!(output.contains("Calculate statistics"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let mut app = test_app();
    app.help.visible = true;

    let _ = render_to_string(&mut app, 10, 5);
}

#[test]
fn test_help_line_follows_focus() {
    let mut app = test_app();
    app.focus = Focus::Calculate;

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Enter: Calculate Stats"));
}
