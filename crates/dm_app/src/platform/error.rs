use std::io;

use dm_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
