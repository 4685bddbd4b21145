//! In-memory list state for the shop screen: the form draft, the item
//! collection, the edit cursor, and the search query.

use crate::app::input::TextField;
use crate::shop::model::{FurnitureCollection, FurnitureItem};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter all furniture details")]
    MissingDetails,
}

/// Whether add/update is mirrored into the visible list while offline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfflinePolicy {
    /// Visible list always follows the mutation.
    #[default]
    AlwaysUpdate,
    /// Offline mutations are persisted but only appear after the next load.
    OnlineOnly,
}

/// Form draft: one text field per item attribute.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: TextField,
    pub kind: TextField,
    pub price: TextField,
}

impl ItemDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.is_blank() && !self.kind.is_blank() && !self.price.is_blank()
    }

    pub fn to_item(&self) -> FurnitureItem {
        FurnitureItem::new(self.name.as_str(), self.kind.as_str(), self.price.as_str())
    }

    pub fn load(&mut self, item: &FurnitureItem) {
        self.name.set(item.name.as_str());
        self.kind.set(item.kind.as_str());
        self.price.set(item.price.as_str());
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.kind.clear();
        self.price.clear();
    }
}

#[derive(Debug, Default)]
pub struct ItemListController {
    pub draft: ItemDraft,
    pub search: TextField,
    collection: FurnitureCollection,
    editing: Option<usize>,
    policy: OfflinePolicy,
}

impl ItemListController {
    pub fn new(policy: OfflinePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn collection(&self) -> &[FurnitureItem] {
        &self.collection
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Swap in a freshly loaded collection. Draft and cursor are untouched.
    pub fn replace_collection(&mut self, items: FurnitureCollection) {
        self.collection = items;
    }

    /// Commit the draft as a new item, or over the item being edited.
    ///
    /// Returns the full resulting collection, which the caller persists.
    /// On a validation failure nothing changes.
    pub fn add_or_update(&mut self, online: bool) -> Result<FurnitureCollection, ValidationError> {
        if !self.draft.is_complete() {
            return Err(ValidationError::MissingDetails);
        }

        let item = self.draft.to_item();
        let mut next = self.collection.clone();
        match self.editing {
            Some(index) if index < next.len() => next[index] = item,
            // A delete may have moved the cursor past the end
            _ => next.push(item),
        }

        if online || self.policy == OfflinePolicy::AlwaysUpdate {
            self.collection = next.clone();
        }
        self.draft.clear();
        self.editing = None;
        Ok(next)
    }

    /// Remove the item at `index`. Out of range leaves the list as is. The
    /// visible list is always updated, and the result is returned for
    /// persistence either way.
    pub fn delete(&mut self, index: usize) -> FurnitureCollection {
        if index < self.collection.len() {
            self.collection.remove(index);
        }
        self.collection.clone()
    }

    /// Load the item at `index` into the draft and mark it as being edited.
    pub fn edit(&mut self, index: usize) -> bool {
        let Some(item) = self.collection.get(index) else {
            return false;
        };
        self.draft.load(item);
        self.editing = Some(index);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.editing = None;
    }

    /// Items whose name or type contain `query`, ignoring case, paired with
    /// their index in the full collection.
    pub fn filter(&self, query: &str) -> Vec<(usize, &FurnitureItem)> {
        let needle = query.to_lowercase();
        self.collection
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&needle))
            .collect()
    }

    /// The list as rendered: the collection filtered by the search field.
    pub fn visible(&self) -> Vec<(usize, &FurnitureItem)> {
        self.filter(self.search.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_with(items: &[(&str, &str, &str)]) -> ItemListController {
        let mut ctl = ItemListController::new(OfflinePolicy::AlwaysUpdate);
        ctl.replace_collection(
            items
                .iter()
                .map(|(n, t, p)| FurnitureItem::new(*n, *t, *p))
                .collect(),
        );
        ctl
    }

    fn fill(ctl: &mut ItemListController, name: &str, kind: &str, price: &str) {
        ctl.draft.name.set(name);
        ctl.draft.kind.set(kind);
        ctl.draft.price.set(price);
    }

    #[test]
    fn rejects_blank_field_without_state_change() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300")]);
        fill(&mut ctl, "", "Chair", "10");
        assert_eq!(ctl.add_or_update(true), Err(ValidationError::MissingDetails));
        assert_eq!(ctl.collection().len(), 1);
        assert_eq!(ctl.draft.kind.as_str(), "Chair");

        fill(&mut ctl, "Stool", "   ", "10");
        assert!(ctl.add_or_update(true).is_err());
    }

    #[test]
    fn appends_when_not_editing() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300"), ("Lamp", "Light", "20")]);
        fill(&mut ctl, "Sofa", "Living", "500");
        let saved = ctl.add_or_update(true).unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[2], FurnitureItem::new("Sofa", "Living", "500"));
        assert_eq!(ctl.collection(), saved.as_slice());
        assert!(ctl.draft.name.as_str().is_empty());
        assert_eq!(ctl.editing(), None);
    }

    #[test]
    fn edit_then_submit_replaces_in_place() {
        let mut ctl = controller_with(&[
            ("Bed", "Bedroom", "300"),
            ("Lamp", "Light", "20"),
            ("Desk", "Office", "150"),
        ]);
        assert!(ctl.edit(1));
        assert_eq!(ctl.editing(), Some(1));
        assert_eq!(ctl.draft.name.as_str(), "Lamp");

        ctl.draft.price.set("25");
        let saved = ctl.add_or_update(true).unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[1], FurnitureItem::new("Lamp", "Light", "25"));
        assert_eq!(ctl.editing(), None);
    }

    #[test]
    fn stale_edit_cursor_appends() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300"), ("Lamp", "Light", "20")]);
        ctl.edit(1);
        ctl.delete(0);
        ctl.delete(0);
        let saved = ctl.add_or_update(true).unwrap();
        assert_eq!(saved, vec![FurnitureItem::new("Lamp", "Light", "20")]);
    }

    #[test]
    fn edit_out_of_range_is_ignored() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300")]);
        assert!(!ctl.edit(4));
        assert_eq!(ctl.editing(), None);
        assert!(ctl.draft.name.as_str().is_empty());
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut ctl = controller_with(&[
            ("Bed", "Bedroom", "300"),
            ("Lamp", "Light", "20"),
            ("Desk", "Office", "150"),
        ]);
        let saved = ctl.delete(0);
        let names: Vec<_> = saved.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Lamp", "Desk"]);
        assert_eq!(ctl.collection(), saved.as_slice());

        let unchanged = ctl.delete(9);
        assert_eq!(unchanged.len(), 2);
    }

    #[test]
    fn online_only_policy_hides_offline_adds() {
        let mut ctl = ItemListController::new(OfflinePolicy::OnlineOnly);
        fill(&mut ctl, "Sofa", "Living", "500");
        let saved = ctl.add_or_update(false).unwrap();
        assert_eq!(saved.len(), 1);
        assert!(ctl.collection().is_empty());
        assert!(ctl.draft.name.as_str().is_empty());

        fill(&mut ctl, "Chair", "Dining", "40");
        ctl.add_or_update(true).unwrap();
        assert_eq!(ctl.collection().len(), 1);
    }

    #[test]
    fn always_update_policy_shows_offline_adds() {
        let mut ctl = ItemListController::new(OfflinePolicy::AlwaysUpdate);
        fill(&mut ctl, "Sofa", "Living", "500");
        ctl.add_or_update(false).unwrap();
        assert_eq!(ctl.collection().len(), 1);
    }

    #[test]
    fn delete_ignores_connectivity_policy() {
        let mut ctl = ItemListController::new(OfflinePolicy::OnlineOnly);
        ctl.replace_collection(vec![
            FurnitureItem::new("Bed", "Bedroom", "300"),
            FurnitureItem::new("Lamp", "Light", "20"),
        ]);
        ctl.delete(1);
        assert_eq!(ctl.collection().len(), 1);
    }

    #[test]
    fn filter_matches_name_or_type_case_insensitively() {
        let ctl = controller_with(&[
            ("Oak Table", "Dining", "120"),
            ("Lamp", "Light", "20"),
            ("Armchair", "Living", "250"),
        ]);

        let all: Vec<_> = ctl.filter("").into_iter().map(|(i, _)| i).collect();
        assert_eq!(all, [0, 1, 2]);

        let hits: Vec<_> = ctl.filter("LI").into_iter().map(|(i, _)| i).collect();
        assert_eq!(hits, [1, 2]);

        let hits: Vec<_> = ctl.filter("table").into_iter().map(|(i, _)| i).collect();
        assert_eq!(hits, [0]);

        assert!(ctl.filter("wardrobe").is_empty());
    }

    #[test]
    fn visible_uses_search_field_and_source_indices() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300"), ("Lamp", "Light", "20")]);
        ctl.search.set("lamp");
        let visible = ctl.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 1);
    }

    #[test]
    fn cancel_edit_clears_cursor_and_draft() {
        let mut ctl = controller_with(&[("Bed", "Bedroom", "300")]);
        ctl.edit(0);
        ctl.cancel_edit();
        assert_eq!(ctl.editing(), None);
        assert!(ctl.draft.name.as_str().is_empty());
        assert_eq!(ctl.collection().len(), 1);
    }
}
