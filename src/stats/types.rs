//! Type definitions for statistics results

use std::fmt;

/// A single value in a statistics record
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Value not defined for the input (e.g. min of an empty list)
    Null,
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Precision is ignored for integers, so go through f64
            StatValue::Int(v) => write!(f, "{:.2}", *v as f64),
            StatValue::Float(v) => write!(f, "{:.2}", v),
            StatValue::Bool(v) => write!(f, "{}", v),
            StatValue::Null => write!(f, "null"),
            StatValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<Option<f64>> for StatValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(StatValue::Null, StatValue::Float)
    }
}

/// Ordered key/value summary, rendered one line per entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsRecord {
    entries: Vec<(String, StatValue)>,
}

impl StatsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing an existing entry with the same key in place
    pub fn with(mut self, key: &str, value: StatValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: StatValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StatValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Which implementation produced a statistics record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    Provider,
    Fallback,
}

impl fmt::Display for StatsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsSource::Provider => write!(f, "using private package"),
            StatsSource::Fallback => write!(f, "using fallback implementation"),
        }
    }
}

/// Outcome of one statistics computation
#[derive(Debug, Clone, PartialEq)]
pub enum StatsResult {
    Computed {
        record: StatsRecord,
        source: StatsSource,
    },
    Failed {
        message: String,
    },
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsResult::Failed { message } => write!(f, "Error: {}", message),
            StatsResult::Computed { record, source } => {
                writeln!(f, "Statistics:")?;
                for (key, value) in record.iter() {
                    writeln!(f, "- {}: {}", key, value)?;
                }
                write!(f, "\n(Calculated {})", source)
            }
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
