pub mod app;
pub mod config;
pub mod cycle;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod journal;
pub mod meditation;
pub mod models;
pub mod prompt;
pub mod state;
pub mod ui;
pub mod wellness;

pub use app::router;
pub use config::Config;
pub use state::AppState;
