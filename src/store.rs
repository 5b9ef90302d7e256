//! Last successfully fetched batch of looks.

use crate::model::{Look, LookId};

/// Holds the most recent feed snapshot in display order.
///
/// The snapshot is replaced wholesale; individual looks are never
/// mutated in place.
#[derive(Debug, Default, Clone)]
pub struct ContentStore {
    looks: Option<Vec<Look>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched batch.
    pub fn replace(&mut self, looks: Vec<Look>) {
        self.looks = Some(looks);
    }

    /// Look at `index`, or `None` when out of range or nothing was fetched yet.
    pub fn get(&self, index: usize) -> Option<&Look> {
        self.looks.as_ref()?.get(index)
    }

    pub fn count(&self) -> usize {
        self.looks.as_ref().map_or(0, Vec::len)
    }

    pub fn id_at(&self, index: usize) -> Option<LookId> {
        self.get(index).map(|look| look.id)
    }

    /// Whether any fetch has populated the store.
    pub fn is_loaded(&self) -> bool {
        self.looks.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look(id: LookId) -> Look {
        Look {
            id,
            body: format!("look {}", id),
            profile_picture_url: format!("profile_{}", id),
            compressed_video_url: format!("video_{}", id),
            song_url: String::new(),
            username: format!("user{}", id),
        }
    }

    #[test]
    fn empty_before_first_replace() {
        let store = ContentStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.get(0).is_none());
        assert!(store.id_at(0).is_none());
        assert!(!store.is_loaded());
    }

    #[test]
    fn replace_keeps_fetch_order() {
        let mut store = ContentStore::new();
        store.replace(vec![look(3), look(1), look(2)]);

        assert_eq!(store.count(), 3);
        assert_eq!(store.id_at(0), Some(3));
        assert_eq!(store.id_at(2), Some(2));
        assert_eq!(store.get(1).map(|l| l.body.as_str()), Some("look 1"));
    }

    #[test]
    fn out_of_range_is_none() {
        let mut store = ContentStore::new();
        store.replace(vec![look(1)]);
        assert!(store.get(1).is_none());
        assert!(store.id_at(usize::MAX).is_none());
    }

    #[test]
    fn replace_is_wholesale() {
        let mut store = ContentStore::new();
        store.replace(vec![look(1), look(2), look(3)]);
        store.replace(vec![look(9)]);

        assert_eq!(store.count(), 1);
        assert_eq!(store.id_at(0), Some(9));
        assert!(store.get(1).is_none());
    }

    #[test]
    fn empty_batch_counts_as_loaded() {
        let mut store = ContentStore::new();
        store.replace(Vec::new());
        assert!(store.is_loaded());
        assert_eq!(store.count(), 0);
    }
}
