use crate::config::FormConfig;

use super::fields::{DEFAULT_NAME, DEFAULT_NUMBERS, TextStyle};

/// Current values of the form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub name: String,
    pub text_style: String,
    pub numbers: String,
    pub calculate: u64,
}

impl InputState {
    pub fn from_config(form: &FormConfig) -> Self {
        Self {
            name: form.name.clone(),
            text_style: form.text_style.name().to_string(),
            numbers: form.numbers.clone(),
            calculate: 0,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            text_style: TextStyle::default().name().to_string(),
            numbers: DEFAULT_NUMBERS.to_string(),
            calculate: 0,
        }
    }
}
