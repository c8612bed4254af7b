use serde::{Deserialize, Serialize};

use gallery_model::{Item, ItemId};

/// Edit commands accepted by the collection store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Replace the whole collection. The selection is kept.
    Set { items: Vec<Item> },
    /// Target `id` with subsequent `Change` commands.
    Select { id: ItemId },
    /// Edit the selected item.
    Change {
        title: String,
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    /// Attach an image reference to `item_id`, snapshotting it first.
    Add { item_id: ItemId, image_url: String },
    /// Revert `item_id` to its fallback snapshot.
    Remove { item_id: ItemId },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::Select { .. } => "select",
            Self::Change { .. } => "change",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }
}
