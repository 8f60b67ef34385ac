mod app;
mod effects;
mod error;
pub mod logging;
mod ui;

pub use app::run_app;
pub use error::AppError;
