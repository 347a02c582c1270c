use super::options::SessionOptions;

/// Highest progress value; a finished run always reports it.
pub const MAX_PROGRESS: u8 = 100;
/// Shown when failing the run because a training step failed.
pub const TRAINING_FAILED_MESSAGE: &str = "An error occurred during training. Please try again.";

/// Where the training trigger currently sits.
///
/// Validation happens inside [`TrainingSession::start_training`](super::TrainingSession::start_training)
/// and is never observable as a separate phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrainingPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Failed,
}

/// Identifies one training run so late messages from an older run are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress, flag and error slot of the training trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingState {
    pub(super) phase: TrainingPhase,
    pub(super) progress: u8,
    pub(super) error: Option<String>,
    pub(super) run_id: RunId,
}

impl TrainingState {
    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    pub fn is_training(&self) -> bool {
        self.phase == TrainingPhase::Running
    }

    /// Percentage in `0..=100`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id of the latest run, or the default id if none has started.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }
}

/// Everything the backend needs to run one training pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingRequest {
    pub run_id: RunId,
    pub options: SessionOptions,
    pub image_count: usize,
}

/// Handed to the navigation target once a run completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingCompletion {
    pub run_id: RunId,
    pub options: SessionOptions,
    pub image_count: usize,
}

/// Why a start request did not launch a run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartRejection {
    #[error("Please upload at least {required} images before starting the training.")]
    NotEnoughImages { have: usize, required: usize },
}

/// Result of pressing start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A run was launched; hand the request to a backend.
    Started(TrainingRequest),
    /// Validation failed; the error slot now holds the message.
    Rejected(StartRejection),
    /// A run is already in flight; nothing changed.
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_matches_error_slot_text() {
        let rejection = StartRejection::NotEnoughImages {
            have: 9,
            required: 10,
        };
        assert_eq!(
            rejection.to_string(),
            "Please upload at least 10 images before starting the training."
        );
    }

    #[test]
    fn fresh_state_is_idle() {
        let state = TrainingState::default();
        assert_eq!(state.phase(), TrainingPhase::Idle);
        assert!(!state.is_training());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.error(), None);
    }
}
