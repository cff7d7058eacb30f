//! Recurring tasks bound to a fixed period.
//!
//! Every unit only touches its own elements, and each tick holds the page
//! lock until it finishes, so ticks never interleave.

use crate::dom::{Page, SharedPage};
use crate::errors::TickError;
use crate::units::data_items::DataItemRefresher;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

pub trait Unit: Send + 'static {
    fn name(&self) -> &'static str;

    fn tick(&mut self, page: &mut Page) -> Result<(), TickError>;
}

pub struct Scheduler {
    page: SharedPage,
    tasks: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(page: SharedPage) -> Self {
        Self {
            page,
            tasks: Vec::new(),
        }
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Runs `unit` every `period`, starting one period from now. A failed
    /// tick is logged and skipped.
    pub fn every<U: Unit>(&mut self, period: Duration, mut unit: U) {
        let page = Arc::clone(&self.page);
        info!(unit = unit.name(), ?period, "scheduling unit");
        self.tasks.push(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut page = page.lock().await;
                if let Err(err) = unit.tick(&mut page) {
                    warn!(unit = unit.name(), "skipping tick: {err}");
                }
            }
        }));
    }

    /// Runs one refresh cycle every `period`. The page is only locked once
    /// the response is in.
    pub fn refresh_every(&mut self, period: Duration, refresher: DataItemRefresher) {
        let page = Arc::clone(&self.page);
        info!(endpoint = refresher.endpoint(), ?period, "scheduling data item refresher");
        self.tasks.push(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                match refresher.run_cycle(&page).await {
                    Ok(applied) => debug!(applied, "data items refreshed"),
                    Err(err) => error!("error updating data items: {err}"),
                }
            }
        }));
    }

    pub fn shutdown(self) {
        for task in self.tasks {
            task.abort();
        }
    }
}
