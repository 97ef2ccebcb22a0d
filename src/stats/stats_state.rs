use crate::provider::StatsFn;
use crate::stats::parser::NumberParser;
use crate::stats::summary::summarize;
use crate::stats::types::{StatsResult, StatsSource};

pub const STATS_PROMPT: &str = "Enter numbers and click 'Calculate Stats'";

/// Holds the latest statistics result
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    result: Option<StatsResult>,
}

impl StatsState {
    /// Parse `numbers` and summarize them, delegating to `provider_stats` when
    /// present. Parse and provider failures become a `Failed` result; the
    /// previous result is replaced in a single assignment.
    pub fn compute(&mut self, numbers: &str, provider_stats: Option<StatsFn>) {
        let result = match NumberParser::parse(numbers) {
            Err(e) => StatsResult::Failed {
                message: e.to_string(),
            },
            Ok(values) => match provider_stats {
                Some(calculate_stats) => match calculate_stats(&values) {
                    Ok(record) => StatsResult::Computed {
                        record,
                        source: StatsSource::Provider,
                    },
                    Err(message) => StatsResult::Failed { message },
                },
                None => StatsResult::Computed {
                    record: summarize(&values),
                    source: StatsSource::Fallback,
                },
            },
        };

        log::debug!("Stats computed: {:?}", result);
        self.result = Some(result);
    }

    pub fn result(&self) -> Option<&StatsResult> {
        self.result.as_ref()
    }

    pub fn display(&self) -> String {
        match &self.result {
            Some(result) => result.to_string(),
            None => STATS_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "stats_state_tests.rs"]
mod stats_state_tests;
