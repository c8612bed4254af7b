use serde::{Deserialize, Serialize};

use gallery_model::{Item, ItemId};

/// Snapshot of the gallery collection.
///
/// `items` is in display order; ids are unique within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState {
    pub items: Vec<Item>,
    pub selected_id: Option<ItemId>,
}

impl CollectionState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            selected_id: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_id.and_then(|id| self.get(id))
    }
}
