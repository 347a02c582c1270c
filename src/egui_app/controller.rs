//! Maintains the session and bridges it to the egui UI.
//!
//! The controller is the only writer of [`TrainingSession`] state. Uploads are
//! loaded synchronously on the UI thread; training runs on a worker thread and
//! reports back through a channel drained by [`EguiController::poll_training`].

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tracing::{error, info, warn};

use crate::egui_app::state::{Screen, StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::session::{
    Gender, ImageAsset, Purpose, StartOutcome, TrainingRequest, TrainingSession,
};
use crate::settings::AppSettings;
use crate::trainer::{self, SimulatedBackend, TrainingBackend, TrainingMessage};
use crate::uploads::{self, Candidate, SelectionBatch, UploadFilter};

/// Builds the backend for each new run.
pub type BackendFactory = Box<dyn Fn(&TrainingRequest) -> Box<dyn TrainingBackend>>;

struct TrainingJobs {
    tx: Sender<TrainingMessage>,
    rx: Receiver<TrainingMessage>,
    worker: Option<JoinHandle<()>>,
}

impl TrainingJobs {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            worker: None,
        }
    }

    fn reap_finished_worker(&mut self) {
        if self.worker.as_ref().is_some_and(JoinHandle::is_finished)
            && let Some(handle) = self.worker.take()
            && handle.join().is_err()
        {
            error!("Training worker panicked");
        }
    }
}

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    session: TrainingSession,
    settings: AppSettings,
    filter: UploadFilter,
    backend_factory: BackendFactory,
    jobs: TrainingJobs,
}

impl EguiController {
    /// Controller using the simulated backend paced by `settings`.
    pub fn new(settings: AppSettings) -> Self {
        let step_delay = settings.training.step_delay();
        Self::with_backend(
            settings,
            Box::new(move |_request: &TrainingRequest| -> Box<dyn TrainingBackend> {
                Box::new(SimulatedBackend::new(step_delay))
            }),
        )
    }

    /// Controller with a custom backend per run.
    pub fn with_backend(settings: AppSettings, backend_factory: BackendFactory) -> Self {
        let settings = settings.normalized();
        Self {
            ui: UiState::new(settings.uploads.min_images),
            session: TrainingSession::new(&settings.uploads),
            filter: UploadFilter::from(&settings.uploads),
            settings,
            backend_factory,
            jobs: TrainingJobs::new(),
        }
    }

    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn images(&self) -> &[ImageAsset] {
        self.session.images().as_slice()
    }

    pub fn training_in_progress(&self) -> bool {
        self.session.is_training()
    }

    /// Label for the start button.
    pub fn start_button_label(&self) -> String {
        if self.session.is_training() {
            "Training...".to_string()
        } else {
            format!(
                "Start Training ({} credits)",
                self.settings.training.credit_cost
            )
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }

    /// Ask the user for files and add the accepted ones.
    pub fn add_files_via_dialog(&mut self) {
        let paths = uploads::pick_files_dialog();
        if paths.is_empty() {
            return;
        }
        self.add_paths(paths);
    }

    /// Load, filter and add files from disk.
    pub fn add_paths(&mut self, paths: Vec<PathBuf>) {
        let batch = uploads::load_paths(paths, &self.filter);
        self.add_batch(batch);
    }

    /// Load, filter and add dropped files.
    pub fn add_candidates(&mut self, candidates: Vec<Candidate>) {
        let batch = uploads::load_candidates(candidates, &self.filter);
        self.add_batch(batch);
    }

    fn add_batch(&mut self, batch: SelectionBatch) {
        if batch.is_empty() {
            return;
        }
        let rejected = batch.rejected.len();
        let outcome = self.session.add_files(batch.accepted);
        let count = self.session.image_count();
        let capacity = self.session.images().capacity();
        info!(
            "Added {} image(s), dropped {} over limit, skipped {}; {count}/{capacity} held",
            outcome.added, outcome.dropped, rejected
        );

        if outcome.dropped > 0 {
            warn!("Upload limit of {capacity} reached; dropped {} image(s)", outcome.dropped);
            self.set_status(
                format!(
                    "Limit of {capacity} images reached; {} image(s) not added",
                    outcome.dropped
                ),
                StatusTone::Warning,
            );
        } else if rejected > 0 {
            self.set_status(
                format!(
                    "Added {} image(s); skipped {rejected} file(s) (JPEG, PNG or GIF up to {})",
                    outcome.added,
                    format_megabytes(self.filter.max_file_size_bytes)
                ),
                StatusTone::Warning,
            );
        } else {
            self.set_status(
                format!("Added {} image(s) ({count}/{capacity})", outcome.added),
                StatusTone::Info,
            );
        }
    }

    /// Delete the image at `index`; out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        let Some(removed) = self.session.remove_file(index) else {
            return;
        };
        info!("Removed {} at index {index}", removed.file_name());
        let count = self.session.image_count();
        if count <= crate::egui_app::ui::gallery::PRIMARY_SLOTS {
            self.ui.gallery.show_more = false;
        }
        self.set_status(
            format!("Removed {} ({count} left)", removed.file_name()),
            StatusTone::Info,
        );
    }

    pub fn set_purpose(&mut self, purpose: Purpose) {
        self.session.set_purpose(purpose);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.session.set_gender(gender);
    }

    /// Handle a press of the start button.
    pub fn start_training(&mut self) {
        let request = match self.session.start_training() {
            StartOutcome::Started(request) => request,
            StartOutcome::AlreadyRunning => return,
            StartOutcome::Rejected(rejection) => {
                warn!("Training not started: {rejection}");
                self.set_status(rejection.to_string(), StatusTone::Error);
                return;
            }
        };

        self.jobs.reap_finished_worker();
        let run_id = request.run_id;
        let backend = (self.backend_factory)(&request);
        match trainer::spawn_training(backend, request, self.jobs.tx.clone()) {
            Ok(handle) => {
                self.jobs.worker = Some(handle);
                self.set_status("Training in progress...", StatusTone::Busy);
            }
            Err(err) => {
                error!("Could not start training run {run_id}: {err}");
                self.session.fail_training(run_id);
                self.set_status("Training could not be started", StatusTone::Error);
            }
        }
    }

    /// Apply every pending worker message. Returns `true` if any arrived.
    pub fn poll_training(&mut self) -> bool {
        let mut received = false;
        while let Ok(message) = self.jobs.rx.try_recv() {
            received = true;
            self.handle_training_message(message);
        }
        if received {
            self.jobs.reap_finished_worker();
        }
        received
    }

    fn handle_training_message(&mut self, message: TrainingMessage) {
        match message {
            TrainingMessage::Progress { run_id, progress } => {
                self.session.apply_progress(run_id, progress);
            }
            TrainingMessage::Finished {
                run_id,
                result: Ok(()),
            } => {
                if let Some(completion) = self.session.complete_training(run_id) {
                    info!("Training completed. Redirecting to prompt page...");
                    self.set_status("Training completed", StatusTone::Info);
                    self.ui.screen = Screen::Prompt(completion);
                }
            }
            TrainingMessage::Finished {
                run_id,
                result: Err(reason),
            } => {
                if self.session.fail_training(run_id) {
                    warn!("Training run {run_id} failed: {reason}");
                    self.set_status("Training failed", StatusTone::Error);
                }
            }
        }
    }

    /// Leave the prompt page and return to the training page.
    pub fn return_to_training(&mut self) {
        self.ui.screen = Screen::Training;
    }
}

pub(crate) fn format_megabytes(bytes: u64) -> String {
    let megabytes = bytes as f64 / (1024.0 * 1024.0);
    if megabytes.fract() == 0.0 {
        format!("{megabytes:.0} MB")
    } else {
        format!("{megabytes:.1} MB")
    }
}
