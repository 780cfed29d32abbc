//! Inventory State
//!
//! In-memory item collection plus the draft bound to the item form.
//! Everything here is synchronous and runs on the UI thread; the only
//! async input (photo decoding) comes back through `complete_photo`.

use crate::error::PhotoError;
use crate::models::{Item, ItemField, ItemFields, ItemId, Layout};

/// What committing the draft will do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    /// Append as a new item
    #[default]
    Creating,
    /// Replace the item with this id in place
    Editing(ItemId),
}

/// Handle for one in-flight photo decode.
///
/// Only the newest ticket issued for the current draft may write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoTicket {
    generation: u64,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    next_id: u32,
    draft: ItemFields,
    mode: DraftMode,
    /// Bumped whenever the draft is replaced wholesale
    generation: u64,
    photo_seq: u64,
    viewing: Option<Item>,
    layout: Layout,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(|item| item.id)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn draft(&self) -> &ItemFields {
        &self.draft
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    /// Changes whenever the draft is replaced (commit, edit, cancel, target deleted)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing(_))
    }

    pub fn viewing(&self) -> Option<&Item> {
        self.viewing.as_ref()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    // ========================
    // Draft
    // ========================

    pub fn update_draft_field(&mut self, field: ItemField, value: String) {
        self.draft.set(field, value);
    }

    /// Start a photo decode for the current draft
    pub fn request_photo(&mut self) -> PhotoTicket {
        self.photo_seq += 1;
        PhotoTicket { generation: self.generation, seq: self.photo_seq }
    }

    /// Apply a finished decode. Returns `true` if the draft photo changed.
    ///
    /// Results for a draft that has since been committed, cancelled or
    /// swapped for another edit target are dropped, as are results that were
    /// overtaken by a newer file selection. Failures keep the previous photo.
    pub fn complete_photo(&mut self, ticket: PhotoTicket, result: Result<String, PhotoError>) -> bool {
        if ticket.generation != self.generation || ticket.seq != self.photo_seq {
            log::debug!("dropping stale photo decode {:?}", ticket);
            return false;
        }
        match result {
            Ok(data_url) => {
                self.draft.photo = Some(data_url.into());
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Commit the draft under `mode`.
    ///
    /// Returns the id of the created or updated item. Editing an item that no
    /// longer exists leaves everything untouched and returns `None`.
    pub fn commit_draft(&mut self, mode: DraftMode) -> Option<ItemId> {
        let id = match mode {
            DraftMode::Creating => {
                let id = self.allocate_id();
                self.items.push(Item { id, fields: self.draft.clone() });
                log::debug!("created item {:?}", id);
                id
            }
            DraftMode::Editing(id) => {
                let item = self.items.iter_mut().find(|item| item.id == id)?;
                item.fields = self.draft.clone();
                log::debug!("updated item {:?}", id);
                id
            }
        };
        self.reset_draft();
        Some(id)
    }

    /// Load an item into the draft for in-place editing
    pub fn begin_edit(&mut self, id: ItemId) {
        let Some(item) = self.get(id) else { return };
        self.draft = item.fields.clone();
        self.mode = DraftMode::Editing(id);
        self.generation += 1;
    }

    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.reset_draft();
        }
    }

    /// Remove an item. Deleting the edit target also discards the draft.
    pub fn delete_item(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return;
        }
        log::debug!("deleted item {:?}", id);
        if self.mode == DraftMode::Editing(id) {
            self.reset_draft();
        }
    }

    // ========================
    // Presentation
    // ========================

    /// Open the detail overlay on a snapshot of the item
    pub fn view_details(&mut self, id: ItemId) {
        if let Some(item) = self.get(id) {
            self.viewing = Some(item.clone());
        }
    }

    pub fn close_details(&mut self) {
        self.viewing = None;
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggled();
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn reset_draft(&mut self) {
        self.draft = ItemFields::default();
        self.mode = DraftMode::Creating;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fields(name: &str, size: &str, quantity: &str, details: &str) -> ItemFields {
        ItemFields {
            photo: None,
            name: name.to_string(),
            size: size.to_string(),
            quantity: quantity.to_string(),
            details: details.to_string(),
        }
    }

    fn fill_draft(inv: &mut Inventory, f: &ItemFields) {
        inv.update_draft_field(ItemField::Name, f.name.clone());
        inv.update_draft_field(ItemField::Size, f.size.clone());
        inv.update_draft_field(ItemField::Quantity, f.quantity.clone());
        inv.update_draft_field(ItemField::Details, f.details.clone());
    }

    fn add(inv: &mut Inventory, name: &str) -> ItemId {
        inv.update_draft_field(ItemField::Name, name.to_string());
        inv.commit_draft(DraftMode::Creating).unwrap()
    }

    fn values(inv: &Inventory) -> Vec<ItemFields> {
        inv.items().iter().map(|item| item.fields.clone()).collect()
    }

    fn names(inv: &Inventory) -> Vec<String> {
        inv.items().iter().map(|item| item.fields.name.clone()).collect()
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut inv = Inventory::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            add(&mut inv, name);
            assert_eq!(inv.len(), i + 1);
        }
        assert_eq!(names(&inv), vec!["a", "b", "c"]);
        assert_eq!(inv.draft(), &ItemFields::default());
    }

    #[test]
    fn test_blank_draft_is_accepted() {
        let mut inv = Inventory::new();
        assert!(inv.commit_draft(DraftMode::Creating).is_some());
        assert_eq!(values(&inv), vec![ItemFields::default()]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.delete_item(a);
        let b = add(&mut inv, "b");
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_edit_delete_scenario() {
        let mut inv = Inventory::new();
        let cotton = fields("Cotton", "M", "5", "soft");
        fill_draft(&mut inv, &cotton);
        inv.commit_draft(inv.mode()).unwrap();
        assert_eq!(values(&inv), vec![cotton.clone()]);

        let id = inv.id_at(0).unwrap();
        inv.begin_edit(id);
        assert_eq!(inv.draft(), &cotton);
        inv.update_draft_field(ItemField::Quantity, "10".to_string());
        inv.commit_draft(inv.mode()).unwrap();
        assert_eq!(values(&inv), vec![fields("Cotton", "M", "10", "soft")]);
        assert!(!inv.is_editing());

        inv.delete_item(inv.id_at(0).unwrap());
        assert!(inv.is_empty());
    }

    #[test]
    fn test_edit_without_changes_keeps_collection() {
        let mut inv = Inventory::new();
        add(&mut inv, "a");
        let b = add(&mut inv, "b");
        let before = inv.items().to_vec();

        inv.begin_edit(b);
        assert_eq!(inv.mode(), DraftMode::Editing(b));
        assert_eq!(inv.commit_draft(inv.mode()), Some(b));

        assert_eq!(inv.items(), before.as_slice());
        assert_eq!(inv.mode(), DraftMode::Creating);
        assert_eq!(inv.draft(), &ItemFields::default());
    }

    #[test]
    fn test_editing_keeps_item_visible() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.begin_edit(a);
        inv.update_draft_field(ItemField::Name, "changed".to_string());
        assert_eq!(names(&inv), vec!["a"]);
    }

    #[test]
    fn test_delete_shifts_later_items() {
        let mut inv = Inventory::new();
        for name in ["a", "b", "c", "d"] {
            add(&mut inv, name);
        }
        let c = inv.id_at(2).unwrap();
        inv.delete_item(inv.id_at(1).unwrap());
        assert_eq!(names(&inv), vec!["a", "c", "d"]);
        assert_eq!(inv.index_of(c), Some(1));
    }

    #[test]
    fn test_delete_edit_target_resets_draft() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.begin_edit(a);
        inv.update_draft_field(ItemField::Size, "XL".to_string());

        inv.delete_item(a);
        assert!(inv.is_empty());
        assert_eq!(inv.mode(), DraftMode::Creating);
        assert_eq!(inv.draft(), &ItemFields::default());
    }

    #[test]
    fn test_edit_survives_deletion_of_earlier_item() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        let b = add(&mut inv, "b");
        add(&mut inv, "c");

        inv.begin_edit(b);
        inv.update_draft_field(ItemField::Name, "b2".to_string());
        inv.delete_item(a);
        inv.commit_draft(inv.mode()).unwrap();

        assert_eq!(names(&inv), vec!["b2", "c"]);
    }

    #[test]
    fn test_commit_to_vanished_target_is_noop() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.delete_item(a);
        inv.update_draft_field(ItemField::Name, "kept".to_string());

        assert_eq!(inv.commit_draft(DraftMode::Editing(a)), None);
        assert!(inv.is_empty());
        assert_eq!(inv.draft().name, "kept");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut inv = Inventory::new();
        add(&mut inv, "a");
        let missing = ItemId(999);

        inv.begin_edit(missing);
        inv.delete_item(missing);
        inv.view_details(missing);

        assert_eq!(inv.len(), 1);
        assert!(!inv.is_editing());
        assert!(inv.viewing().is_none());
        assert_eq!(inv.id_at(5), None);
    }

    #[test]
    fn test_cancel_edit() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.begin_edit(a);
        inv.cancel_edit();
        assert_eq!(inv.mode(), DraftMode::Creating);
        assert_eq!(inv.draft(), &ItemFields::default());
        assert_eq!(names(&inv), vec!["a"]);
    }

    #[test]
    fn test_details_is_a_snapshot() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        inv.view_details(a);

        inv.begin_edit(a);
        inv.update_draft_field(ItemField::Name, "renamed".to_string());
        inv.commit_draft(inv.mode());
        inv.delete_item(a);

        assert_eq!(inv.viewing().map(|item| item.fields.name.as_str()), Some("a"));
        inv.close_details();
        assert!(inv.viewing().is_none());
    }

    #[test]
    fn test_toggle_layout_twice() {
        let mut inv = Inventory::new();
        add(&mut inv, "a");
        let before = inv.items().to_vec();

        inv.toggle_layout();
        assert_eq!(inv.layout(), Layout::List);
        inv.toggle_layout();
        assert_eq!(inv.layout(), Layout::Grid);
        assert_eq!(inv.items(), before.as_slice());
    }

    #[test]
    fn test_photo_applies_to_current_draft() {
        let mut inv = Inventory::new();
        let ticket = inv.request_photo();
        assert!(inv.complete_photo(ticket, Ok("data:image/png;base64,AAA".to_string())));
        let id = inv.commit_draft(inv.mode()).unwrap();
        assert_eq!(inv.get(id).unwrap().fields.photo.as_deref(), Some("data:image/png;base64,AAA"));
    }

    #[test]
    fn test_photo_failure_keeps_previous() {
        let mut inv = Inventory::new();
        let first = inv.request_photo();
        inv.complete_photo(first, Ok("data:old".to_string()));

        let second = inv.request_photo();
        assert!(!inv.complete_photo(second, Err(PhotoError::Read("boom".to_string()))));
        assert_eq!(inv.draft().photo.as_deref(), Some("data:old"));
    }

    #[test]
    fn test_stale_photo_after_target_switch_is_dropped() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        let b = add(&mut inv, "b");

        inv.begin_edit(a);
        let ticket = inv.request_photo();
        inv.begin_edit(b);

        assert!(!inv.complete_photo(ticket, Ok("data:late".to_string())));
        assert_eq!(inv.draft().photo, None);
        inv.commit_draft(inv.mode());
        assert!(inv.items().iter().all(|item| item.fields.photo.is_none()));
    }

    #[test]
    fn test_stale_photo_after_commit_is_dropped() {
        let mut inv = Inventory::new();
        let ticket = inv.request_photo();
        inv.commit_draft(inv.mode());
        assert!(!inv.complete_photo(ticket, Ok("data:late".to_string())));
        assert_eq!(inv.draft().photo, None);
    }

    #[test]
    fn test_photo_payload_is_shared_not_copied() {
        let mut inv = Inventory::new();
        let ticket = inv.request_photo();
        inv.complete_photo(ticket, Ok("data:image/png;base64,AAAA".to_string()));
        let draft_photo = inv.draft().photo.clone().unwrap();
        let id = inv.commit_draft(inv.mode()).unwrap();

        inv.update_draft_field(ItemField::Name, "typing".to_string());
        inv.view_details(id);

        let stored = inv.get(id).unwrap().fields.photo.clone().unwrap();
        let snapshot = inv.viewing().unwrap().fields.photo.clone().unwrap();
        assert!(Arc::ptr_eq(&draft_photo, &stored));
        assert!(Arc::ptr_eq(&stored, &snapshot));
    }

    #[test]
    fn test_draft_edits_leave_ids_unchanged() {
        let mut inv = Inventory::new();
        let a = add(&mut inv, "a");
        let b = add(&mut inv, "b");
        let before = inv.ids();

        inv.update_draft_field(ItemField::Details, "still typing".to_string());
        inv.request_photo();

        assert_eq!(before, vec![a, b]);
        assert_eq!(inv.ids(), before);
    }

    #[test]
    fn test_generation_tracks_draft_replacement() {
        let mut inv = Inventory::new();
        let start = inv.generation();

        inv.update_draft_field(ItemField::Name, "a".to_string());
        inv.request_photo();
        assert_eq!(inv.generation(), start);

        let a = inv.commit_draft(inv.mode()).unwrap();
        let after_commit = inv.generation();
        assert!(after_commit > start);

        inv.begin_edit(a);
        let after_edit = inv.generation();
        assert!(after_edit > after_commit);

        inv.cancel_edit();
        let after_cancel = inv.generation();
        assert!(after_cancel > after_edit);

        inv.begin_edit(a);
        let editing = inv.generation();
        inv.delete_item(a);
        assert!(inv.generation() > editing);
    }

    #[test]
    fn test_newer_photo_selection_wins() {
        let mut inv = Inventory::new();
        let first = inv.request_photo();
        let second = inv.request_photo();

        assert!(inv.complete_photo(second, Ok("data:second".to_string())));
        assert!(!inv.complete_photo(first, Ok("data:first".to_string())));
        assert_eq!(inv.draft().photo.as_deref(), Some("data:second"));
    }
}
