//! Upload-and-train session state.
//!
//! [`TrainingSession`] owns the image collection, the two option fields and
//! the training trigger. It has no UI or threading dependency: the controller
//! calls its transition methods from the UI thread and feeds it the messages
//! produced by the training runner.

mod assets;
mod options;
mod training;

#[cfg(test)]
mod tests;

pub use assets::{AddOutcome, ImageAsset, UploadCollection};
pub use options::{Gender, Purpose, SessionOptions};
pub use training::{
    MAX_PROGRESS, RunId, StartOutcome, StartRejection, TRAINING_FAILED_MESSAGE,
    TrainingCompletion, TrainingPhase, TrainingRequest, TrainingState,
};

use crate::settings::UploadSettings;

/// Transient state of one visit to the training page.
#[derive(Clone, Debug)]
pub struct TrainingSession {
    images: UploadCollection,
    options: SessionOptions,
    training: TrainingState,
    min_images: usize,
}

impl Default for TrainingSession {
    fn default() -> Self {
        Self::new(&UploadSettings::default())
    }
}

impl TrainingSession {
    pub fn new(limits: &UploadSettings) -> Self {
        Self {
            images: UploadCollection::with_capacity(limits.max_images),
            options: SessionOptions::default(),
            training: TrainingState::default(),
            min_images: limits.min_images,
        }
    }

    pub fn images(&self) -> &UploadCollection {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn min_images(&self) -> usize {
        self.min_images
    }

    /// Append a batch of images, clipping at the collection capacity.
    pub fn add_files(&mut self, batch: impl IntoIterator<Item = ImageAsset>) -> AddOutcome {
        self.images.add_files(batch)
    }

    /// Remove the image at `index`; out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<ImageAsset> {
        self.images.remove_file(index)
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn purpose(&self) -> Purpose {
        self.options.purpose
    }

    pub fn set_purpose(&mut self, purpose: Purpose) {
        self.options.purpose = purpose;
    }

    pub fn gender(&self) -> Gender {
        self.options.gender
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.options.gender = gender;
    }

    pub fn training(&self) -> &TrainingState {
        &self.training
    }

    pub fn is_training(&self) -> bool {
        self.training.is_training()
    }

    pub fn progress(&self) -> u8 {
        self.training.progress
    }

    pub fn error(&self) -> Option<&str> {
        self.training.error()
    }

    /// Whether the start control should be enabled.
    pub fn can_start(&self) -> bool {
        !self.is_training() && self.images.len() >= self.min_images
    }

    /// Validate and, if allowed, enter the running phase.
    ///
    /// A running session ignores the call entirely. A session below the image
    /// minimum moves to [`TrainingPhase::Failed`] with the message in the error
    /// slot and never reports `is_training`.
    pub fn start_training(&mut self) -> StartOutcome {
        if self.is_training() {
            return StartOutcome::AlreadyRunning;
        }
        let have = self.images.len();
        if have < self.min_images {
            let rejection = StartRejection::NotEnoughImages {
                have,
                required: self.min_images,
            };
            self.training.phase = TrainingPhase::Failed;
            self.training.error = Some(rejection.to_string());
            return StartOutcome::Rejected(rejection);
        }

        let run_id = RunId(self.training.run_id.0 + 1);
        self.training = TrainingState {
            phase: TrainingPhase::Running,
            progress: 0,
            error: None,
            run_id,
        };
        StartOutcome::Started(TrainingRequest {
            run_id,
            options: self.options,
            image_count: have,
        })
    }

    /// Record a progress step from run `run_id`.
    ///
    /// Returns `false` when the message is stale or the session is not
    /// running. Progress never moves backwards and is capped at 100.
    pub fn apply_progress(&mut self, run_id: RunId, progress: u8) -> bool {
        if !self.accepts(run_id) {
            return false;
        }
        self.training.progress = self.training.progress.max(progress.min(MAX_PROGRESS));
        true
    }

    /// Close run `run_id` as completed.
    ///
    /// The returned completion is meant for the navigation target. Stale or
    /// duplicate calls return `None` and change nothing.
    pub fn complete_training(&mut self, run_id: RunId) -> Option<TrainingCompletion> {
        if !self.accepts(run_id) {
            return None;
        }
        self.training.phase = TrainingPhase::Completed;
        self.training.progress = MAX_PROGRESS;
        Some(TrainingCompletion {
            run_id,
            options: self.options,
            image_count: self.images.len(),
        })
    }

    /// Close run `run_id` as failed, setting the generic retry message.
    pub fn fail_training(&mut self, run_id: RunId) -> bool {
        if !self.accepts(run_id) {
            return false;
        }
        self.training.phase = TrainingPhase::Failed;
        self.training.error = Some(TRAINING_FAILED_MESSAGE.to_string());
        true
    }

    fn accepts(&self, run_id: RunId) -> bool {
        self.is_training() && self.training.run_id == run_id
    }
}
