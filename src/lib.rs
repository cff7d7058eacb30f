pub mod app;
pub mod clock;
pub mod config;
pub mod dom;
pub mod duration;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod ui;
pub mod units;

pub use app::router;
pub use config::Config;
pub use scheduler::Scheduler;
pub use state::AppState;
