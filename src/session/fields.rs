//! Field and output slot identifiers
//!
//! The wire names returned by `name()` are stable and shared with the UI
//! layer and batch output.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_NUMBERS: &str = "1, 2, 3, 4, 5";

/// Input fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    TextStyle,
    Numbers,
    Calculate,
}

impl FieldId {
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::TextStyle => "text_style",
            FieldId::Numbers => "numbers",
            FieldId::Calculate => "calculate",
        }
    }
}

/// Something an output can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Field(FieldId),
    /// The stored statistics result
    Stats,
}

/// Output slots of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    PackageStatus,
    PackageInfo,
    GreetingOutput,
    StyledText,
    StatsOutput,
}

impl OutputSlot {
    pub const ALL: [OutputSlot; 5] = [
        OutputSlot::PackageStatus,
        OutputSlot::PackageInfo,
        OutputSlot::GreetingOutput,
        OutputSlot::StyledText,
        OutputSlot::StatsOutput,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputSlot::PackageStatus => "package_status",
            OutputSlot::PackageInfo => "package_info",
            OutputSlot::GreetingOutput => "greeting_output",
            OutputSlot::StyledText => "styled_text",
            OutputSlot::StatsOutput => "stats_output",
        }
    }

    /// Sources this slot is re-evaluated for
    pub fn reads(self) -> &'static [Source] {
        match self {
            // Capabilities never change after startup
            OutputSlot::PackageStatus | OutputSlot::PackageInfo => &[],
            OutputSlot::GreetingOutput => &[Source::Field(FieldId::Name)],
            OutputSlot::StyledText => &[
                Source::Field(FieldId::Name),
                Source::Field(FieldId::TextStyle),
            ],
            OutputSlot::StatsOutput => &[Source::Stats],
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            OutputSlot::PackageStatus => 0,
            OutputSlot::PackageInfo => 1,
            OutputSlot::GreetingOutput => 2,
            OutputSlot::StyledText => 3,
            OutputSlot::StatsOutput => 4,
        }
    }
}

impl fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text styles offered by the style selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    #[default]
    Bold,
    Italic,
    Code,
}

impl TextStyle {
    pub const ALL: [TextStyle; 3] = [TextStyle::Bold, TextStyle::Italic, TextStyle::Code];

    pub fn name(self) -> &'static str {
        match self {
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Code => "code",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextStyle::Bold => "Bold",
            TextStyle::Italic => "Italic",
            TextStyle::Code => "Code",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TextStyle::Bold => TextStyle::Italic,
            TextStyle::Italic => TextStyle::Code,
            TextStyle::Code => TextStyle::Bold,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TextStyle::Bold => TextStyle::Code,
            TextStyle::Italic => TextStyle::Bold,
            TextStyle::Code => TextStyle::Italic,
        }
    }

    /// Local markup used when no provider formats the text
    pub fn wrap(self, text: &str) -> String {
        match self {
            TextStyle::Bold => format!("*{}*", text),
            TextStyle::Italic => format!("_{}_", text),
            TextStyle::Code => format!("`{}`", text),
        }
    }
}

impl FromStr for TextStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| AppError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SetName(String),
    SetTextStyle(String),
    SetNumbers(String),
    /// Press the calculate button (counter + 1)
    Calculate,
    /// Set the calculate counter directly; only an increase fires
    SetCalculate(u64),
}

impl InputEvent {
    pub fn field(&self) -> FieldId {
        match self {
            InputEvent::SetName(_) => FieldId::Name,
            InputEvent::SetTextStyle(_) => FieldId::TextStyle,
            InputEvent::SetNumbers(_) => FieldId::Numbers,
            InputEvent::Calculate | InputEvent::SetCalculate(_) => FieldId::Calculate,
        }
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod fields_tests;
