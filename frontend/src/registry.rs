//! Ordered reference gallery, partitioned into long-form and short-form rows.
//!
//! Entries live in one flat vector. A partition is the subsequence of entries
//! sharing a kind, so every reordering works on partition positions and only
//! ever swaps two entries of the same kind.

use crate::models::{VideoKind, VideoReference};
use uuid::Uuid;

pub const PLACEHOLDER_TITLE: &str = "새 레퍼런스";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A single-field edit. Edits to different fields never interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceField {
    Kind(VideoKind),
    Title(String),
    ExternalUrl(String),
    Thumbnail(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    entries: Vec<VideoReference>,
}

impl Registry {
    pub fn new(entries: Vec<VideoReference>) -> Self {
        Self { entries }
    }

    /// Every entry, both partitions, in storage order.
    pub fn entries(&self) -> &[VideoReference] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VideoReference> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn list(&self, kind: VideoKind) -> Vec<&VideoReference> {
        self.entries.iter().filter(|entry| entry.kind == kind).collect()
    }

    /// Prepends a placeholder entry and returns its id.
    pub fn add(&mut self, kind: VideoKind) -> String {
        let id = Uuid::new_v4().to_string();
        self.entries.insert(
            0,
            VideoReference {
                id: id.clone(),
                kind,
                title: PLACEHOLDER_TITLE.to_string(),
                external_url: String::new(),
                thumbnail: String::new(),
            },
        );
        id
    }

    /// Returns false when `id` is unknown.
    pub fn update(&mut self, id: &str, field: ReferenceField) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        match field {
            ReferenceField::Kind(kind) => entry.kind = kind,
            ReferenceField::Title(title) => entry.title = title,
            ReferenceField::ExternalUrl(url) => entry.external_url = url,
            ReferenceField::Thumbnail(thumbnail) => entry.thumbnail = thumbnail,
        }
        true
    }

    /// Applies a finished thumbnail read. A result for an entry deleted while
    /// the read was in flight is dropped.
    pub fn set_thumbnail(&mut self, id: &str, thumbnail: String) -> bool {
        self.update(id, ReferenceField::Thumbnail(thumbnail))
    }

    pub fn remove(&mut self, id: &str) -> Option<VideoReference> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Swaps the entry with its neighbour inside its own partition.
    /// Returns false for unknown ids and at the partition edges.
    pub fn move_entry(&mut self, id: &str, direction: Direction) -> bool {
        let Some(kind) = self.get(id).map(|entry| entry.kind) else {
            return false;
        };
        let positions: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.kind == kind)
            .map(|(index, _)| index)
            .collect();
        let Some(slot) = positions.iter().position(|&index| self.entries[index].id == id) else {
            return false;
        };
        let neighbour = match direction {
            Direction::Up if slot > 0 => positions[slot - 1],
            Direction::Down if slot + 1 < positions.len() => positions[slot + 1],
            _ => return false,
        };
        self.entries.swap(positions[slot], neighbour);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::initial_references;

    fn ids(entries: Vec<&VideoReference>) -> Vec<String> {
        entries.into_iter().map(|entry| entry.id.clone()).collect()
    }

    fn seeded() -> Registry {
        // ref1 L, ref2 S, ref3 L, ref4 S
        Registry::new(initial_references())
    }

    #[test]
    fn test_add_prepends_placeholder() {
        let mut registry = seeded();
        let id = registry.add(VideoKind::ShortForm);
        let first = &registry.entries()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.title, PLACEHOLDER_TITLE);
        assert!(first.external_url.is_empty());
        assert!(first.thumbnail.is_empty());
        assert_eq!(ids(registry.list(VideoKind::ShortForm)), vec![id, "ref2".into(), "ref4".into()]);
    }

    #[test]
    fn test_last_update_per_field_wins_around_thumbnail_completion() {
        let mut registry = Registry::default();
        let id = registry.add(VideoKind::LongForm);

        // thumbnail read finishing before, between and after field edits
        assert!(registry.set_thumbnail(&id, "data:image/png;base64,AAAA".into()));
        registry.update(&id, ReferenceField::Title("첫 제목".into()));
        registry.update(&id, ReferenceField::ExternalUrl("https://a.test".into()));
        assert!(registry.set_thumbnail(&id, "data:image/png;base64,BBBB".into()));
        registry.update(&id, ReferenceField::Title("최종 제목".into()));
        registry.update(&id, ReferenceField::ExternalUrl("https://b.test".into()));

        let listed = registry.list(VideoKind::LongForm);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "최종 제목");
        assert_eq!(listed[0].external_url, "https://b.test");
        assert_eq!(listed[0].thumbnail, "data:image/png;base64,BBBB");
    }

    #[test]
    fn test_thumbnail_for_removed_entry_is_discarded() {
        let mut registry = seeded();
        let id = registry.add(VideoKind::LongForm);
        assert!(registry.remove(&id).is_some());
        assert!(!registry.set_thumbnail(&id, "data:image/png;base64,AAAA".into()));
        assert!(registry.get(&id).is_none());
        assert_eq!(registry.entries().len(), 4);
    }

    #[test]
    fn test_move_at_partition_edges_is_noop() {
        let mut registry = seeded();
        let before = registry.clone();
        assert!(!registry.move_entry("ref1", Direction::Up));
        assert!(!registry.move_entry("ref3", Direction::Down));
        assert!(!registry.move_entry("ref2", Direction::Up));
        assert!(!registry.move_entry("ref4", Direction::Down));
        assert!(!registry.move_entry("missing", Direction::Up));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_move_skips_over_other_partition() {
        let mut registry = seeded();
        assert!(registry.move_entry("ref3", Direction::Up));
        assert_eq!(ids(registry.list(VideoKind::LongForm)), vec!["ref3", "ref1"]);
        assert_eq!(ids(registry.list(VideoKind::ShortForm)), vec!["ref2", "ref4"]);

        assert!(registry.move_entry("ref2", Direction::Down));
        assert_eq!(ids(registry.list(VideoKind::ShortForm)), vec!["ref4", "ref2"]);
        assert_eq!(ids(registry.list(VideoKind::LongForm)), vec!["ref3", "ref1"]);

        // flat slots of each kind stay where they were
        let kinds: Vec<VideoKind> = registry.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![VideoKind::LongForm, VideoKind::ShortForm, VideoKind::LongForm, VideoKind::ShortForm]
        );
    }

    #[test]
    fn test_kind_change_joins_other_partition_in_place() {
        let mut registry = seeded();
        assert!(registry.update("ref3", ReferenceField::Kind(VideoKind::ShortForm)));
        assert_eq!(ids(registry.list(VideoKind::ShortForm)), vec!["ref2", "ref3", "ref4"]);
        assert_eq!(ids(registry.list(VideoKind::LongForm)), vec!["ref1"]);
        assert!(!registry.update("missing", ReferenceField::Title("x".into())));
    }
}
