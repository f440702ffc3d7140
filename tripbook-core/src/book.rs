//! In-memory editing model for the book document.
//!
//! Mirrors the editing surface of the web client: every mutation is a
//! synchronous state transition on the section tree, which is then
//! persisted wholesale through [`crate::usecases::save_layout`].

use crate::{entities::*, util::order};

/// Title of the synthesized section when no layout has been saved yet.
pub const DEFAULT_SECTION_TITLE: &str = "Trip Memories";

/// Editor over the ordered section tree of one trip.
#[derive(Debug, Default, Clone)]
pub struct BookEditor {
    sections: Vec<Section>,
}

impl BookEditor {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn add_section(&mut self, title: &str) -> Option<&Id> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.sections.push(Section {
            id: Id::new(),
            title: title.to_owned(),
            content: vec![],
        });
        self.sections.last().map(|s| &s.id)
    }

    pub fn remove_section(&mut self, section_id: &str) -> bool {
        let Some(index) = self.section_index(section_id) else {
            return false;
        };
        order::remove_at(&mut self.sections, index).is_some()
    }

    pub fn move_section_up(&mut self, section_id: &str) -> bool {
        self.section_index(section_id)
            .map(|index| order::move_up(&mut self.sections, index))
            .unwrap_or(false)
    }

    pub fn move_section_down(&mut self, section_id: &str) -> bool {
        self.section_index(section_id)
            .map(|index| order::move_down(&mut self.sections, index))
            .unwrap_or(false)
    }

    /// Appends an empty photo group to the section and returns its id.
    pub fn add_photo_group(&mut self, section_id: &str, kind: PhotoGroupKind) -> Option<Id> {
        let section = self.section_mut(section_id)?;
        let id = Id::new();
        section
            .content
            .push(ContentBlock::photo_group(id.clone(), kind, vec![]));
        Some(id)
    }

    /// Appends one text block per note to the section.
    pub fn add_note_blocks(&mut self, section_id: &str, notes: &[Note]) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        section.content.extend(notes.iter().map(|note| {
            ContentBlock::text(
                Id::new(),
                note.kind,
                note.content.clone(),
                note.date.to_rfc3339(),
            )
        }));
        true
    }

    pub fn remove_block(&mut self, section_id: &str, block_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        let Some(index) = block_index(section, block_id) else {
            return false;
        };
        order::remove_at(&mut section.content, index).is_some()
    }

    pub fn move_block_up(&mut self, section_id: &str, block_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        block_index(section, block_id)
            .map(|index| order::move_up(&mut section.content, index))
            .unwrap_or(false)
    }

    pub fn move_block_down(&mut self, section_id: &str, block_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        block_index(section, block_id)
            .map(|index| order::move_down(&mut section.content, index))
            .unwrap_or(false)
    }

    /// Fills a photo group with the selected photos, up to the remaining
    /// capacity of the group. Excess selections are silently dropped.
    /// Returns the number of photos actually added.
    pub fn add_photos_to_group(
        &mut self,
        section_id: &str,
        block_id: &str,
        selected: &[Photo],
    ) -> usize {
        let Some(section) = self.section_mut(section_id) else {
            return 0;
        };
        let Some(block) = section
            .content
            .iter_mut()
            .find(|block| block.id().as_str() == block_id)
        else {
            return 0;
        };
        let Some(capacity) = block.photo_group_kind().map(PhotoGroupKind::capacity) else {
            return 0;
        };
        let Some(photos) = block.photos_mut() else {
            return 0;
        };
        let remaining = capacity.saturating_sub(photos.len());
        let added = selected.iter().take(remaining).map(PhotoStub::from);
        photos.extend(added);
        remaining.min(selected.len())
    }

    pub fn remove_photo(&mut self, section_id: &str, block_id: &str, photo_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        let Some(photos) = section
            .content
            .iter_mut()
            .find(|block| block.id().as_str() == block_id)
            .and_then(ContentBlock::photos_mut)
        else {
            return false;
        };
        let before = photos.len();
        photos.retain(|photo| photo.id.as_str() != photo_id);
        photos.len() < before
    }

    /// Photos that are not referenced by any photo group of the current
    /// document, i.e. the candidates for the photo selection dialog.
    pub fn unused_photos<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        let used: std::collections::HashSet<&str> = self
            .sections
            .iter()
            .flat_map(|section| section.content.iter())
            .filter_map(ContentBlock::photos)
            .flatten()
            .map(|stub| stub.id.as_str())
            .collect();
        photos
            .iter()
            .filter(|photo| !used.contains(photo.id.as_str()))
            .collect()
    }

    fn section_index(&self, section_id: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.id.as_str() == section_id)
    }

    fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.id.as_str() == section_id)
    }
}

fn block_index(section: &Section, block_id: &str) -> Option<usize> {
    section
        .content
        .iter()
        .position(|block| block.id().as_str() == block_id)
}

/// Fallback arrangement when a trip has no saved layout: a single
/// section with one triple group holding all photos in their existing
/// order, followed by one text block per note.
pub fn default_sections(photos: &[Photo], notes: &[Note]) -> Vec<Section> {
    let mut content = Vec::with_capacity(1 + notes.len());
    content.push(ContentBlock::photo_group(
        "default".into(),
        PhotoGroupKind::Triple,
        photos.iter().map(PhotoStub::from).collect(),
    ));
    content.extend(notes.iter().map(|note| {
        ContentBlock::text(
            note.id.clone(),
            note.kind,
            note.content.clone(),
            note.date.to_rfc3339(),
        )
    }));
    vec![Section {
        id: "main".into(),
        title: DEFAULT_SECTION_TITLE.to_owned(),
        content,
    }]
}

/// Relative column widths of a double photo group, proportional to the
/// width/height aspect ratios of its two photos. As long as a ratio is
/// still unknown the split is an even 50/50.
pub fn double_column_split(left_ratio: Option<f64>, right_ratio: Option<f64>) -> (f64, f64) {
    match (left_ratio, right_ratio) {
        (Some(left), Some(right)) if left > 0.0 && right > 0.0 => {
            let total = left + right;
            (left / total * 100.0, right / total * 100.0)
        }
        _ => (50.0, 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.into(),
            trip_id: "t1".into(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            caption: None,
            taken_at: None,
            sort_order: None,
            created_at: Timestamp::from_millis(0),
        }
    }

    fn note(id: &str, kind: NoteKind) -> Note {
        Note {
            id: id.into(),
            trip_id: "t1".into(),
            kind,
            content: format!("note {id}"),
            date: Timestamp::from_millis(1_714_521_600_000),
        }
    }

    #[test]
    fn add_section_rejects_blank_titles() {
        let mut editor = BookEditor::default();
        assert!(editor.add_section("  ").is_none());
        assert!(editor.add_section("Day one").is_some());
        assert_eq!(editor.sections().len(), 1);
    }

    #[test]
    fn move_section_at_boundaries_is_a_noop() {
        let mut editor = BookEditor::default();
        let first = editor.add_section("first").unwrap().clone();
        let last = editor.add_section("last").unwrap().clone();

        assert!(!editor.move_section_up(first.as_str()));
        assert!(!editor.move_section_down(last.as_str()));
        assert_eq!(editor.sections()[0].title, "first");

        assert!(editor.move_section_down(first.as_str()));
        assert_eq!(editor.sections()[0].title, "last");
    }

    #[test]
    fn adding_photos_truncates_to_remaining_capacity() {
        let mut editor = BookEditor::default();
        let section = editor.add_section("s").unwrap().clone();
        let block = editor
            .add_photo_group(section.as_str(), PhotoGroupKind::Double)
            .unwrap();

        let photos = [photo("p1"), photo("p2"), photo("p3")];
        let added = editor.add_photos_to_group(section.as_str(), block.as_str(), &photos);
        assert_eq!(added, 2);

        let stored = editor.sections()[0].content[0].photos().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id.as_str(), "p1");
        assert_eq!(stored[1].id.as_str(), "p2");

        // The group is full now, further selections are dropped entirely.
        let added = editor.add_photos_to_group(section.as_str(), block.as_str(), &photos);
        assert_eq!(added, 0);
    }

    #[test]
    fn unused_photos_is_the_set_difference_over_all_groups() {
        let mut editor = BookEditor::default();
        let section = editor.add_section("s").unwrap().clone();
        let block = editor
            .add_photo_group(section.as_str(), PhotoGroupKind::Single)
            .unwrap();
        let photos = [photo("p1"), photo("p2"), photo("p3")];
        editor.add_photos_to_group(section.as_str(), block.as_str(), &photos[..1]);

        let unused = editor.unused_photos(&photos);
        let unused_ids: Vec<_> = unused.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unused_ids, ["p2", "p3"]);
    }

    #[test]
    fn move_block_within_section() {
        let mut editor = BookEditor::default();
        let section = editor.add_section("s").unwrap().clone();
        let first = editor
            .add_photo_group(section.as_str(), PhotoGroupKind::Single)
            .unwrap();
        let second = editor
            .add_photo_group(section.as_str(), PhotoGroupKind::Triple)
            .unwrap();

        assert!(!editor.move_block_up(section.as_str(), first.as_str()));
        assert!(!editor.move_block_down(section.as_str(), second.as_str()));
        assert!(editor.move_block_up(section.as_str(), second.as_str()));
        assert_eq!(editor.sections()[0].content[0].id(), &second);
    }

    #[test]
    fn remove_photo_from_group() {
        let mut editor = BookEditor::default();
        let section = editor.add_section("s").unwrap().clone();
        let block = editor
            .add_photo_group(section.as_str(), PhotoGroupKind::Double)
            .unwrap();
        editor.add_photos_to_group(section.as_str(), block.as_str(), &[photo("p1"), photo("p2")]);

        assert!(editor.remove_photo(section.as_str(), block.as_str(), "p1"));
        assert!(!editor.remove_photo(section.as_str(), block.as_str(), "p1"));
        let stored = editor.sections()[0].content[0].photos().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.as_str(), "p2");
    }

    #[test]
    fn note_blocks_are_appended() {
        let mut editor = BookEditor::default();
        let section = editor.add_section("s").unwrap().clone();
        editor.add_note_blocks(
            section.as_str(),
            &[note("n1", NoteKind::Quote), note("n2", NoteKind::Summary)],
        );
        let content = &editor.sections()[0].content;
        assert_eq!(content.len(), 2);
        assert!(matches!(content[0], ContentBlock::Quote { .. }));
        assert!(matches!(content[1], ContentBlock::Summary { .. }));
    }

    #[test]
    fn default_sections_hold_all_photos_and_notes() {
        let photos = [photo("p1"), photo("p2")];
        let notes = [note("n1", NoteKind::Quote)];
        let sections = default_sections(&photos, &notes);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, DEFAULT_SECTION_TITLE);
        assert_eq!(sections[0].content.len(), 2);

        let group = &sections[0].content[0];
        assert_eq!(group.photo_group_kind(), Some(PhotoGroupKind::Triple));
        let ids: Vec<_> = group
            .photos()
            .unwrap()
            .iter()
            .map(|stub| stub.id.as_str())
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert!(matches!(sections[0].content[1], ContentBlock::Quote { .. }));
    }

    #[test]
    fn double_column_split_is_proportional() {
        let (left, right) = double_column_split(Some(2.0), Some(1.0));
        assert!((left - 200.0 / 3.0).abs() < 1e-9);
        assert!((right - 100.0 / 3.0).abs() < 1e-9);
        assert!((left + right - 100.0).abs() < 1e-9);
    }

    #[test]
    fn double_column_split_defaults_to_even() {
        assert_eq!(double_column_split(None, Some(1.5)), (50.0, 50.0));
        assert_eq!(double_column_split(None, None), (50.0, 50.0));
        assert_eq!(double_column_split(Some(0.0), Some(1.0)), (50.0, 50.0));
    }
}
