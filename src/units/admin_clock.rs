use crate::clock::ClockTime;
use crate::dom::Page;
use crate::duration::{format_duration, parse_seconds};
use crate::errors::TickError;
use crate::scheduler::Unit;

pub const LOCAL_TIME_ID: &str = "localtime";
pub const UPTIME_ID: &str = "uptime";

/// Local time and uptime of the admin panel, seeded once from the page and
/// then counted in memory.
#[derive(Debug, Clone)]
pub struct AdminClock {
    local_time: ClockTime,
    uptime: u64,
}

impl AdminClock {
    /// Reads `#localtime[data-time]` and `#uptime[data-uptime]` and renders
    /// both right away.
    pub fn seed(page: &mut Page) -> Result<Self, TickError> {
        let local_time = {
            let el = page
                .by_id(LOCAL_TIME_ID)
                .ok_or(TickError::MissingElement(LOCAL_TIME_ID))?;
            let raw = el.data("time").ok_or_else(|| TickError::MissingAttribute {
                element: el.describe(),
                attribute: "data-time",
            })?;
            raw.parse::<ClockTime>()?
        };
        let uptime = {
            let el = page
                .by_id(UPTIME_ID)
                .ok_or(TickError::MissingElement(UPTIME_ID))?;
            let raw = el.data("uptime").ok_or_else(|| TickError::MissingAttribute {
                element: el.describe(),
                attribute: "data-uptime",
            })?;
            parse_seconds(raw)?
        };

        let clock = Self { local_time, uptime };
        clock.render(page)?;
        Ok(clock)
    }

    pub fn local_time(&self) -> ClockTime {
        self.local_time
    }

    pub fn uptime(&self) -> u64 {
        self.uptime
    }

    fn render(&self, page: &mut Page) -> Result<(), TickError> {
        page.by_id_mut(LOCAL_TIME_ID)
            .ok_or(TickError::MissingElement(LOCAL_TIME_ID))?
            .set_text(self.local_time.to_string());
        page.by_id_mut(UPTIME_ID)
            .ok_or(TickError::MissingElement(UPTIME_ID))?
            .set_text(format_duration(self.uptime));
        Ok(())
    }
}

impl Unit for AdminClock {
    fn name(&self) -> &'static str {
        "admin-clock"
    }

    fn tick(&mut self, page: &mut Page) -> Result<(), TickError> {
        self.local_time.advance();
        self.uptime = self.uptime.saturating_add(1);
        self.render(page)
    }
}
