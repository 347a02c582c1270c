//! Background training runs.
//!
//! A run walks progress from 0 to 100 one step at a time on a worker thread.
//! Each step goes through a [`TrainingBackend`]; the worker never touches the
//! session and only reports over a channel, so the UI thread stays the single
//! writer of session state.

mod backend;
mod worker;

pub use backend::{SimulatedBackend, TrainingBackend};
pub use worker::{TrainingMessage, run_training, spawn_training};

use crate::session::RunId;

/// Errors raised by a training run.
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    /// A backend step failed.
    #[error("Training step {step} failed: {reason}")]
    StepFailed { step: u8, reason: String },
    /// The receiving side went away before the run finished.
    #[error("Training channel closed during run {0}")]
    ChannelClosed(RunId),
    /// The worker thread could not be started.
    #[error("Failed to spawn training worker: {0}")]
    Spawn(#[from] std::io::Error),
}
