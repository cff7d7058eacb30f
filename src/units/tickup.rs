use crate::dom::{Element, Page};
use crate::duration::{format_duration, parse_seconds};
use crate::errors::TickError;
use crate::scheduler::Unit;
use tracing::warn;

pub const TICKUP_CLASS: &str = "tickup";

/// Elapsed-time counters. `data-seconds` is the source of truth and is
/// rewritten every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickUp;

fn tick_element(el: &mut Element) -> Result<(), TickError> {
    let raw = el.data("seconds").ok_or_else(|| TickError::MissingAttribute {
        element: el.describe(),
        attribute: "data-seconds",
    })?;
    let seconds = parse_seconds(raw)?.saturating_add(1);
    el.set_data("seconds", seconds.to_string());
    el.set_text(format_duration(seconds));
    Ok(())
}

impl Unit for TickUp {
    fn name(&self) -> &'static str {
        "tickup"
    }

    fn tick(&mut self, page: &mut Page) -> Result<(), TickError> {
        for el in page.by_class_mut(TICKUP_CLASS) {
            if let Err(err) = tick_element(el) {
                warn!(element = %el.describe(), "tickup skipped: {err}");
            }
        }
        Ok(())
    }
}
