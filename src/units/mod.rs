//! The four interval-driven units and their wiring.

pub mod admin_clock;
pub mod data_items;
pub mod tickup;
pub mod timeup;

use crate::config::Config;
use crate::errors::RefreshError;
use crate::scheduler::Scheduler;
use admin_clock::AdminClock;
use data_items::DataItemRefresher;
use std::time::Duration;
use tickup::TickUp;
use timeup::TimeUp;
use tracing::warn;

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Registers every unit on `scheduler`. An admin clock whose seed elements are
/// missing or malformed is left out.
pub async fn install(scheduler: &mut Scheduler, config: &Config) -> Result<(), RefreshError> {
    let seeded = {
        let mut page = scheduler.page().lock().await;
        AdminClock::seed(&mut page)
    };
    match seeded {
        Ok(clock) => scheduler.every(TICK_PERIOD, clock),
        Err(err) => warn!("admin clock not started: {err}"),
    }

    scheduler.every(TICK_PERIOD, TickUp);
    scheduler.every(TICK_PERIOD, TimeUp);

    let refresher = DataItemRefresher::new(&config.endpoint, config.request_timeout)?;
    scheduler.refresh_every(config.refresh_period, refresher);
    Ok(())
}
