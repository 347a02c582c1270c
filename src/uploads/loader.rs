use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::filter::{RejectReason, UploadFilter};
use crate::session::ImageAsset;

/// A file offered by the picker or a drop, before filtering.
///
/// Drops on some platforms carry the bytes directly instead of a path.
#[derive(Clone, Debug)]
pub enum Candidate {
    Path(PathBuf),
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl Candidate {
    fn display_name(&self) -> String {
        match self {
            Candidate::Path(path) => file_name_of(path),
            Candidate::Bytes { name, .. } => name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedFile {
    pub name: String,
    pub reason: RejectReason,
}

/// Accepted assets in offer order plus the files that were filtered out.
#[derive(Debug, Default)]
pub struct SelectionBatch {
    pub accepted: Vec<ImageAsset>,
    pub rejected: Vec<RejectedFile>,
}

impl SelectionBatch {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// Load and filter files from disk.
pub fn load_paths(paths: impl IntoIterator<Item = PathBuf>, filter: &UploadFilter) -> SelectionBatch {
    load_candidates(paths.into_iter().map(Candidate::Path), filter)
}

/// Load and filter a mixed batch of candidates, keeping their order.
pub fn load_candidates(
    candidates: impl IntoIterator<Item = Candidate>,
    filter: &UploadFilter,
) -> SelectionBatch {
    let mut batch = SelectionBatch::default();
    for candidate in candidates {
        let name = candidate.display_name();
        match load_candidate(candidate, filter) {
            Ok(asset) => batch.accepted.push(asset),
            Err(reason) => {
                debug!("Skipping {name}: {reason}");
                batch.rejected.push(RejectedFile { name, reason });
            }
        }
    }
    batch
}

fn load_candidate(candidate: Candidate, filter: &UploadFilter) -> Result<ImageAsset, RejectReason> {
    match candidate {
        Candidate::Path(path) => load_path(&path, filter),
        Candidate::Bytes { name, bytes } => {
            filter.check(&bytes)?;
            Ok(ImageAsset::new(name, bytes))
        }
    }
}

fn load_path(path: &Path, filter: &UploadFilter) -> Result<ImageAsset, RejectReason> {
    let metadata = fs::metadata(path).map_err(|err| RejectReason::Unreadable(err.to_string()))?;
    if !metadata.is_file() {
        return Err(RejectReason::Unreadable("not a regular file".into()));
    }
    filter.check_size(metadata.len())?;
    let bytes = fs::read(path).map_err(|err| RejectReason::Unreadable(err.to_string()))?;
    filter.check(&bytes)?;
    Ok(ImageAsset::new(file_name_of(path), bytes))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
