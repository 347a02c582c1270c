use std::thread;
use std::time::Duration;

use super::TrainerError;
use crate::session::TrainingRequest;

/// One unit of training work per progress step.
///
/// The worker calls [`TrainingBackend::step`] for every value in `0..=100`
/// and reports that value once the step returns.
pub trait TrainingBackend: Send {
    /// Called once before the first step.
    fn prepare(&mut self, _request: &TrainingRequest) -> Result<(), TrainerError> {
        Ok(())
    }

    fn step(&mut self, step: u8) -> Result<(), TrainerError>;
}

/// Stand-in backend that only waits before every step.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedBackend {
    step_delay: Duration,
}

impl SimulatedBackend {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}

impl TrainingBackend for SimulatedBackend {
    fn step(&mut self, _step: u8) -> Result<(), TrainerError> {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
        Ok(())
    }
}

impl<B: TrainingBackend + ?Sized> TrainingBackend for Box<B> {
    fn prepare(&mut self, request: &TrainingRequest) -> Result<(), TrainerError> {
        (**self).prepare(request)
    }

    fn step(&mut self, step: u8) -> Result<(), TrainerError> {
        (**self).step(step)
    }
}
