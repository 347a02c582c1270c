use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{error, info, warn};

use super::{TrainerError, TrainingBackend};
use crate::session::{MAX_PROGRESS, RunId, TrainingRequest};

/// Reports sent from a training worker to the UI thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrainingMessage {
    Progress {
        run_id: RunId,
        progress: u8,
    },
    Finished {
        run_id: RunId,
        result: Result<(), String>,
    },
}

impl TrainingMessage {
    pub fn run_id(&self) -> RunId {
        match self {
            TrainingMessage::Progress { run_id, .. } | TrainingMessage::Finished { run_id, .. } => {
                *run_id
            }
        }
    }
}

/// Drive `backend` through every step of one run on the current thread.
///
/// Progress for a step is sent only after the step succeeds, so receivers
/// see `0..=100` in order on success and a strictly shorter prefix on failure.
pub fn run_training(
    backend: &mut dyn TrainingBackend,
    request: &TrainingRequest,
    tx: &Sender<TrainingMessage>,
) -> Result<(), TrainerError> {
    backend.prepare(request)?;
    for step in 0..=MAX_PROGRESS {
        backend.step(step)?;
        tx.send(TrainingMessage::Progress {
            run_id: request.run_id,
            progress: step,
        })
        .map_err(|_| TrainerError::ChannelClosed(request.run_id))?;
    }
    Ok(())
}

/// Run `backend` on a named worker thread and report a final
/// [`TrainingMessage::Finished`].
pub fn spawn_training<B>(
    mut backend: B,
    request: TrainingRequest,
    tx: Sender<TrainingMessage>,
) -> Result<JoinHandle<()>, TrainerError>
where
    B: TrainingBackend + 'static,
{
    let name = format!("training-{}", request.run_id.0);
    let handle = thread::Builder::new().name(name).spawn(move || {
        let run_id = request.run_id;
        info!(
            "Training run {run_id} started: purpose={} gender={} images={}",
            request.options.purpose, request.options.gender, request.image_count
        );
        let started = Instant::now();
        let result = run_training(&mut backend, &request, &tx);
        match &result {
            Ok(()) => info!("Training run {run_id} finished in {:?}", started.elapsed()),
            Err(TrainerError::ChannelClosed(_)) => {
                warn!("Training run {run_id} abandoned; receiver dropped");
                return;
            }
            Err(err) => error!("Training run {run_id} failed: {err}"),
        }
        let _ = tx.send(TrainingMessage::Finished {
            run_id,
            result: result.map_err(|err| err.to_string()),
        });
    })?;
    Ok(handle)
}
