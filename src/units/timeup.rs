use crate::clock::ClockTime;
use crate::dom::{Element, Page};
use crate::errors::TickError;
use crate::scheduler::Unit;
use tracing::warn;

pub const TIMEUP_CLASS: &str = "timeup";

/// Wall clocks that live entirely in their `data-time` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeUp;

fn tick_element(el: &mut Element) -> Result<(), TickError> {
    let raw = el.data("time").ok_or_else(|| TickError::MissingAttribute {
        element: el.describe(),
        attribute: "data-time",
    })?;
    let mut time: ClockTime = raw.parse()?;
    time.advance();
    el.set_text(time.to_string());
    el.set_data("time", time.to_attribute());
    Ok(())
}

impl Unit for TimeUp {
    fn name(&self) -> &'static str {
        "timeup"
    }

    fn tick(&mut self, page: &mut Page) -> Result<(), TickError> {
        for el in page.by_class_mut(TIMEUP_CLASS) {
            if let Err(err) = tick_element(el) {
                warn!(element = %el.describe(), "timeup skipped: {err}");
            }
        }
        Ok(())
    }
}
