use crate::dom::{Page, SharedPage};
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub page: SharedPage,
    pub started: Instant,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page: page.into_shared(),
            started: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
