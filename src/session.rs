//! Form session controller
//!
//! Owns the form inputs, the latest statistics result and the rendered text
//! of every output slot. Each [`InputEvent`] updates one field and
//! re-evaluates only the slots whose [`OutputSlot::reads`] include it. The
//! statistics handler runs on the rising edge of the calculate counter.

mod fields;
mod input_state;
mod outputs;

use std::rc::Rc;

use crate::provider::Capabilities;
use crate::stats::StatsState;

pub use fields::{
    DEFAULT_NAME, DEFAULT_NUMBERS, FieldId, InputEvent, OutputSlot, Source, TextStyle,
};
pub use input_state::InputState;
pub use outputs::{apply_fallback_style, greeting_output, package_info, package_status, styled_text};

pub struct Session {
    capabilities: Rc<Capabilities>,
    input: InputState,
    stats: StatsState,
    last_calculate: u64,
    outputs: [String; 5],
}

impl Session {
    pub fn new(capabilities: Rc<Capabilities>, input: InputState) -> Self {
        let mut session = Self {
            capabilities,
            last_calculate: input.calculate,
            input,
            stats: StatsState::default(),
            outputs: Default::default(),
        };

        for slot in OutputSlot::ALL {
            session.outputs[slot.index()] = session.evaluate(slot);
        }

        session
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn stats(&self) -> &StatsState {
        &self.stats
    }

    /// Current text of an output slot
    pub fn output(&self, slot: OutputSlot) -> &str {
        &self.outputs[slot.index()]
    }

    /// Apply one input event and return the slots that were re-evaluated
    pub fn apply(&mut self, event: InputEvent) -> Vec<OutputSlot> {
        log::trace!("Input event on '{}'", event.field().name());

        let changed = match event {
            InputEvent::SetName(name) => replace_if_changed(&mut self.input.name, name)
                .then_some(Source::Field(FieldId::Name)),
            InputEvent::SetTextStyle(style) => replace_if_changed(&mut self.input.text_style, style)
                .then_some(Source::Field(FieldId::TextStyle)),
            InputEvent::SetNumbers(numbers) => replace_if_changed(&mut self.input.numbers, numbers)
                .then_some(Source::Field(FieldId::Numbers)),
            InputEvent::Calculate => {
                let next = self.input.calculate.saturating_add(1);
                self.set_calculate(next)
            }
            InputEvent::SetCalculate(value) => self.set_calculate(value),
        };

        let Some(source) = changed else {
            return Vec::new();
        };

        let affected: Vec<OutputSlot> = OutputSlot::ALL
            .into_iter()
            .filter(|slot| slot.reads().contains(&source))
            .collect();

        for slot in &affected {
            self.outputs[slot.index()] = self.evaluate(*slot);
        }

        affected
    }

    /// Record a new counter value and run the stats handler on a rising edge
    fn set_calculate(&mut self, value: u64) -> Option<Source> {
        if value <= self.last_calculate {
            return None;
        }

        self.input.calculate = value;
        self.last_calculate = value;
        log::debug!("Calculate triggered ({})", value);

        let provider_stats = self
            .capabilities
            .provider()
            .and_then(|provider| provider.calculate_stats());
        self.stats.compute(&self.input.numbers, provider_stats);

        Some(Source::Stats)
    }

    fn evaluate(&self, slot: OutputSlot) -> String {
        let capabilities = self.capabilities.as_ref();
        match slot {
            OutputSlot::PackageStatus => package_status(capabilities),
            OutputSlot::PackageInfo => package_info(capabilities),
            OutputSlot::GreetingOutput => greeting_output(capabilities, &self.input.name),
            OutputSlot::StyledText => {
                styled_text(capabilities, &self.input.name, &self.input.text_style)
            }
            OutputSlot::StatsOutput => self.stats.display(),
        }
    }
}

fn replace_if_changed(field: &mut String, value: String) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}
