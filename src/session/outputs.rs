//! Derived text outputs
//!
//! Pure functions of the capability descriptor and current field values.

use crate::provider::{Capabilities, Capability};

use super::fields::TextStyle;

pub fn package_status(capabilities: &Capabilities) -> String {
    if capabilities.is_available() {
        format!(
            "✅ Private package '{}' is successfully installed!",
            capabilities.package()
        )
    } else {
        format!(
            "❌ Private package '{}' is not available. Check installation.",
            capabilities.package()
        )
    }
}

pub fn package_info(capabilities: &Capabilities) -> String {
    match capabilities.provider() {
        Some(provider) => format!(
            "Package: {}\nVersion: {}\nAvailable functions: {}",
            capabilities.package(),
            provider.version(),
            provider.exposed_functions().join(", ")
        ),
        None => "Package information not available".to_string(),
    }
}

pub fn greeting_output(capabilities: &Capabilities, name: &str) -> String {
    let Some(provider) = capabilities.provider() else {
        return format!(
            "Hello, {}! (Default greeting since package is not available)",
            name
        );
    };

    match provider.generate_greeting() {
        Some(generate_greeting) => generate_greeting(name),
        None => format!(
            "Hello, {}! ({})",
            name,
            missing_function(Capability::GenerateGreeting)
        ),
    }
}

pub fn styled_text(capabilities: &Capabilities, name: &str, style: &str) -> String {
    let text = format!("Hello, {}!", name);

    let Some(provider) = capabilities.provider() else {
        return format!(
            "{} (Default styling since package is not available)",
            apply_fallback_style(&text, style)
        );
    };

    match provider.format_text() {
        Some(format_text) => format_text(&text, style),
        None => format!("{} ({})", text, missing_function(Capability::FormatText)),
    }
}

/// Wrap `text` in the markup for `style`; unknown styles leave it unchanged
pub fn apply_fallback_style(text: &str, style: &str) -> String {
    match style.parse::<TextStyle>() {
        Ok(style) => style.wrap(text),
        Err(_) => text.to_string(),
    }
}

fn missing_function(capability: Capability) -> String {
    format!("function {} not found in package", capability)
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod outputs_tests;
