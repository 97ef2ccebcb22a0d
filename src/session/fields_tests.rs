//! Tests for field identifiers and text styles

use super::*;

#[test]
fn test_output_slot_wire_names() {
    let names: Vec<&str> = OutputSlot::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "package_status",
            "package_info",
            "greeting_output",
            "styled_text",
            "stats_output"
        ]
    );
}

#[test]
fn test_output_slot_indices_are_unique() {
    let mut indices: Vec<usize> = OutputSlot::ALL.iter().map(|s| s.index()).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_field_wire_names() {
    assert_eq!(FieldId::Name.name(), "name");
    assert_eq!(FieldId::TextStyle.name(), "text_style");
    assert_eq!(FieldId::Numbers.name(), "numbers");
    assert_eq!(FieldId::Calculate.name(), "calculate");
}

#[test]
fn test_no_output_reads_numbers_directly() {
    let source = Source::Field(FieldId::Numbers);
    assert!(OutputSlot::ALL.iter().all(|s| !s.reads().contains(&source)));
}

#[test]
fn test_styled_text_reads_name_and_style() {
    let reads = OutputSlot::StyledText.reads();
    assert!(reads.contains(&Source::Field(FieldId::Name)));
    assert!(reads.contains(&Source::Field(FieldId::TextStyle)));
}

#[test]
fn test_text_style_parse() {
    assert_eq!("bold".parse::<TextStyle>().unwrap(), TextStyle::Bold);
    assert_eq!("italic".parse::<TextStyle>().unwrap(), TextStyle::Italic);
    assert_eq!("code".parse::<TextStyle>().unwrap(), TextStyle::Code);

    let err = "Bold".parse::<TextStyle>().unwrap_err();
    assert!(matches!(err, AppError::UnknownStyle(s) if s == "Bold"));
}

#[test]
fn test_text_style_cycle() {
    for style in TextStyle::ALL {
        assert_eq!(style.next().prev(), style);
    }
    assert_eq!(TextStyle::Code.next(), TextStyle::Bold);
    assert_eq!(TextStyle::Bold.prev(), TextStyle::Code);
}

#[test]
fn test_text_style_wrap() {
    assert_eq!(TextStyle::Bold.wrap("x"), "*x*");
    assert_eq!(TextStyle::Italic.wrap("x"), "_x_");
    assert_eq!(TextStyle::Code.wrap("x"), "`x`");
}

#[test]
fn test_event_field() {
    assert_eq!(InputEvent::SetName("a".into()).field(), FieldId::Name);
    assert_eq!(InputEvent::Calculate.field(), FieldId::Calculate);
    assert_eq!(InputEvent::SetCalculate(3).field(), FieldId::Calculate);
}
