use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

/// One user-supplied image held in memory for the session.
///
/// Ordering and removal go by position in [`UploadCollection`]. The `id` is
/// only a stable key for caches that must survive index shifts (previews).
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    id: Uuid,
    file_name: String,
    bytes: Arc<[u8]>,
}

impl ImageAsset {
    /// Wrap raw image bytes with their original file name.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the blob in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("id", &self.id)
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Result of appending a batch to the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Files kept from the batch.
    pub added: usize,
    /// Files cut off by the capacity bound.
    pub dropped: usize,
}

/// Ordered, capacity-bounded list of images.
#[derive(Clone, Debug)]
pub struct UploadCollection {
    items: Vec<ImageAsset>,
    capacity: usize,
}

impl UploadCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Append `batch`, then keep only the first `capacity` entries.
    ///
    /// Files past the bound are dropped from the tail of the batch; the
    /// existing entries are never displaced.
    pub fn add_files(&mut self, batch: impl IntoIterator<Item = ImageAsset>) -> AddOutcome {
        let before = self.items.len();
        self.items.extend(batch);
        let offered = self.items.len() - before;
        self.items.truncate(self.capacity);
        let added = self.items.len().saturating_sub(before);
        AddOutcome {
            added,
            dropped: offered - added,
        }
    }

    /// Remove the entry at `index`, shifting later entries down.
    /// Returns `None` when `index` is out of range.
    pub fn remove_file(&mut self, index: usize) -> Option<ImageAsset> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&ImageAsset> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageAsset> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ImageAsset] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a UploadCollection {
    type Item = &'a ImageAsset;
    type IntoIter = std::slice::Iter<'a, ImageAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(prefix: &str, count: usize) -> Vec<ImageAsset> {
        (0..count)
            .map(|idx| ImageAsset::new(format!("{prefix}{idx}.png"), vec![idx as u8; 4]))
            .collect()
    }

    fn names(collection: &UploadCollection) -> Vec<&str> {
        collection.iter().map(ImageAsset::file_name).collect()
    }

    #[test]
    fn batches_append_in_insertion_order() {
        let mut collection = UploadCollection::with_capacity(20);
        collection.add_files(assets("a", 2));
        collection.add_files(assets("b", 1));
        assert_eq!(names(&collection), ["a0.png", "a1.png", "b0.png"]);
    }

    #[test]
    fn overflow_is_clipped_from_the_batch_tail() {
        let mut collection = UploadCollection::with_capacity(20);
        assert_eq!(
            collection.add_files(assets("a", 18)),
            AddOutcome {
                added: 18,
                dropped: 0
            }
        );
        let outcome = collection.add_files(assets("b", 5));
        assert_eq!(
            outcome,
            AddOutcome {
                added: 2,
                dropped: 3
            }
        );
        assert_eq!(collection.len(), 20);
        assert_eq!(collection.get(17).unwrap().file_name(), "a17.png");
        assert_eq!(collection.get(19).unwrap().file_name(), "b1.png");
        assert!(collection.is_full());
    }

    #[test]
    fn full_collection_drops_whole_batch() {
        let mut collection = UploadCollection::with_capacity(3);
        collection.add_files(assets("a", 3));
        let outcome = collection.add_files(assets("b", 2));
        assert_eq!(outcome.added, 0);
        assert_eq!(outcome.dropped, 2);
        assert_eq!(names(&collection), ["a0.png", "a1.png", "a2.png"]);
    }

    #[test]
    fn length_tracks_min_of_capacity_and_total() {
        let mut collection = UploadCollection::with_capacity(20);
        let mut total = 0;
        for size in [0, 7, 1, 9, 4, 12] {
            total += size;
            collection.add_files(assets("x", size));
            assert_eq!(collection.len(), total.min(20));
        }
    }

    #[test]
    fn remove_shifts_later_entries_down() {
        let mut collection = UploadCollection::with_capacity(20);
        collection.add_files(assets("a", 4));
        let removed = collection.remove_file(1).unwrap();
        assert_eq!(removed.file_name(), "a1.png");
        assert_eq!(names(&collection), ["a0.png", "a2.png", "a3.png"]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut collection = UploadCollection::with_capacity(20);
        collection.add_files(assets("a", 2));
        assert!(collection.remove_file(2).is_none());
        assert!(collection.remove_file(usize::MAX).is_none());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn asset_reports_blob_size() {
        let asset = ImageAsset::new("face.jpg", vec![0u8; 1234]);
        assert_eq!(asset.size(), 1234);
        assert_eq!(asset.bytes().len(), 1234);
        assert_ne!(asset.id(), ImageAsset::new("face.jpg", vec![0u8; 1]).id());
    }

    #[test]
    fn huge_capacity_does_not_reserve_up_front() {
        let mut collection = UploadCollection::with_capacity(usize::MAX / 2);
        assert!(collection.is_empty());
        let outcome = collection.add_files(assets("a", 3));
        assert_eq!(outcome.added, 3);
        assert_eq!(collection.capacity(), usize::MAX / 2);
    }
}
