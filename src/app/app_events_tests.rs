//! Tests for app events

use super::*;
use crate::session::{OutputSlot, TextStyle};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app, type_text};
use crossterm::event::{KeyCode, KeyModifiers};
use proptest::prelude::*;

#[test]
fn test_typing_in_name_updates_greeting_live() {
    let mut app = test_app();

    type_text(&mut app, "!");

    assert_eq!(app.name(), "User!");
    assert_eq!(
        app.output(OutputSlot::GreetingOutput),
        "Hello, User!! (Default greeting since package is not available)"
    );
}

#[test]
fn test_backspace_in_name() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.session.input().name, "Use");
}

#[test]
fn test_enter_in_name_moves_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.focus, Focus::TextStyle);
    assert_eq!(app.name(), "User");
}

#[test]
fn test_name_stays_single_line() {
    let mut app = test_app();

    app.handle_key_event(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL));

    assert_eq!(app.name_input.lines().len(), 1);
    assert_eq!(app.session.input().name, "User");
}

#[test]
fn test_tab_and_backtab_cycle_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::TextStyle);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Numbers);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::TextStyle);
}

#[test]
fn test_style_selector_keys() {
    let mut app = test_app();
    app.focus = Focus::TextStyle;

    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.text_style, TextStyle::Italic);
    assert!(app.output(OutputSlot::StyledText).starts_with("_Hello"));

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Left));
    assert_eq!(app.text_style, TextStyle::Code);
    assert!(app.output(OutputSlot::StyledText).starts_with("`Hello"));
}

#[test]
fn test_editing_numbers_does_not_recalculate() {
    let mut app = test_app();
    app.focus = Focus::Numbers;

    type_text(&mut app, ", x");

    assert_eq!(app.session.input().numbers, "1, 2, 3, 4, 5, x");
    assert_eq!(
        app.output(OutputSlot::StatsOutput),
        "Enter numbers and click 'Calculate Stats'"
    );
}

#[test]
fn test_enter_on_button_calculates() {
    let mut app = test_app();
    app.focus = Focus::Calculate;

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.session.input().calculate, 1);
    assert!(app.output(OutputSlot::StatsOutput).starts_with("Statistics:"));
}

#[test]
fn test_f5_calculates_from_any_field() {
    let mut app = test_app();
    app.focus = Focus::Numbers;
    type_text(&mut app, ", a");

    app.handle_key_event(key(KeyCode::F(5)));

    assert_eq!(
        app.output(OutputSlot::StatsOutput),
        "Error: could not convert string to float: 'a'"
    );
}

#[test]
fn test_q_types_into_text_fields() {
    let mut app = test_app();

    type_text(&mut app, "q");

    assert!(!app.should_quit());
    assert_eq!(app.name(), "Userq");
}

#[test]
fn test_q_quits_from_button() {
    let mut app = test_app();
    app.focus = Focus::Calculate;

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_and_esc_quit() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_help_popup_blocks_other_keys() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    type_text(&mut app, "abc");
    assert_eq!(app.name(), "User");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_paste_into_name_flattens_newlines() {
    let mut app = test_app();

    app.handle_paste_event(" and\nfriends".to_string());

    assert_eq!(app.name(), "User and friends");
    assert_eq!(app.session.input().name, "User and friends");
}

#[test]
fn test_paste_into_numbers() {
    let mut app = test_app();
    app.focus = Focus::Numbers;

    app.handle_paste_event(", 6, 7".to_string());

    assert_eq!(app.session.input().numbers, "1, 2, 3, 4, 5, 6, 7");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_typed_name_reaches_session(name in "[a-zA-Z ]{0,12}") {
        let mut app = test_app();
        app.name_input.select_all();
        app.name_input.cut();
        app.sync_name();

        type_text(&mut app, &name);

        prop_assert_eq!(app.session.input().name.as_str(), name.as_str());
        let expected = format!("Hello, {}! (Default greeting since package is not available)", name);
        prop_assert_eq!(app.output(OutputSlot::GreetingOutput), expected.as_str());
    }
}
