use super::types::{StatValue, StatsRecord};

/// Local summary used when no provider supplies `calculate_stats`
pub fn summarize(values: &[f64]) -> StatsRecord {
    let count = values.len();
    let sum: f64 = values.iter().sum();
    let avg = if count == 0 { 0.0 } else { sum / count as f64 };

    let min = values.iter().copied().reduce(f64::min);
    let max = values.iter().copied().reduce(f64::max);

    StatsRecord::new()
        .with("count", StatValue::Int(count as i64))
        .with("sum", StatValue::Float(sum))
        .with("avg", StatValue::Float(avg))
        .with("min", min.into())
        .with("max", max.into())
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
