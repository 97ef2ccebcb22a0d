//! Non-interactive evaluation
//!
//! Evaluates the form once, fires a single calculation and prints every
//! output slot, either as labelled plain text or as a JSON object.

use serde::Serialize;

use crate::error::AppError;
use crate::session::{InputEvent, OutputSlot, Session};

#[derive(Debug, Serialize)]
struct BatchOutput<'a> {
    package_status: &'a str,
    package_info: &'a str,
    greeting_output: &'a str,
    styled_text: &'a str,
    stats_output: &'a str,
}

impl<'a> BatchOutput<'a> {
    fn from_session(session: &'a Session) -> Self {
        Self {
            package_status: session.output(OutputSlot::PackageStatus),
            package_info: session.output(OutputSlot::PackageInfo),
            greeting_output: session.output(OutputSlot::GreetingOutput),
            styled_text: session.output(OutputSlot::StyledText),
            stats_output: session.output(OutputSlot::StatsOutput),
        }
    }
}

/// Press the calculate button once
pub fn evaluate(session: &mut Session) {
    session.apply(InputEvent::Calculate);
}

pub fn render_text(session: &Session) -> String {
    OutputSlot::ALL
        .iter()
        .map(|slot| format!("{}:\n{}\n", slot.name(), session.output(*slot)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(session: &Session) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&BatchOutput::from_session(
        session,
    ))?)
}
