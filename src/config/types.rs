// Configuration type definitions

use serde::Deserialize;

use crate::provider::DEFAULT_PACKAGE;
use crate::session::{DEFAULT_NAME, DEFAULT_NUMBERS, TextStyle};

/// Initial values for the form fields
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub text_style: TextStyle,
    #[serde(default = "default_numbers")]
    pub numbers: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            name: default_name(),
            text_style: TextStyle::default(),
            numbers: default_numbers(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_numbers() -> String {
    DEFAULT_NUMBERS.to_string()
}

/// Provider plugin selection
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_package")]
    pub package: String,
    /// Optional allow-list of function names to expose
    #[serde(default)]
    pub functions: Option<Vec<String>>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            enabled: default_enabled(),
            package: default_package(),
            functions: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}
