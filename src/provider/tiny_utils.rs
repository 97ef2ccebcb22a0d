//! Bundled `tiny_private_utils` plugin

use super::ProviderBuilder;
use crate::stats::{StatValue, StatsRecord};

pub const PACKAGE_NAME: &str = "tiny_private_utils";
pub const VERSION: &str = "0.3.1";

pub fn register(builder: ProviderBuilder) -> ProviderBuilder {
    builder
        .version(VERSION)
        .generate_greeting(generate_greeting)
        .format_text(format_text)
        .calculate_stats(calculate_stats)
}

fn generate_greeting(name: &str) -> String {
    format!("Hello, {}! Greetings from {}.", name, PACKAGE_NAME)
}

fn format_text(text: &str, style: &str) -> String {
    match style {
        "bold" => format!("**{}**", text),
        "italic" => format!("*{}*", text),
        "code" => format!("`{}`", text),
        _ => text.to_string(),
    }
}

fn calculate_stats(values: &[f64]) -> Result<StatsRecord, String> {
    let count = values.len();
    let sum: f64 = values.iter().sum();

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let (avg, min, max, median) = if count == 0 {
        (StatValue::Null, StatValue::Null, StatValue::Null, StatValue::Null)
    } else {
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        (
            StatValue::Float(sum / count as f64),
            StatValue::Float(sorted[0]),
            StatValue::Float(sorted[count - 1]),
            StatValue::Float(median),
        )
    };

    Ok(StatsRecord::new()
        .with("count", StatValue::Int(count as i64))
        .with("sum", StatValue::Float(sum))
        .with("avg", avg)
        .with("min", min)
        .with("max", max)
        .with("median", median))
}

#[cfg(test)]
#[path = "tiny_utils_tests.rs"]
mod tiny_utils_tests;
