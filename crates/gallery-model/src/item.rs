//! Gallery items and their one-level fallback snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ItemId, ModelError, Result};

/// A photo item as delivered by the loader and edited by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    /// Pre-edit copy used to revert an image attachment. One level only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<ItemSnapshot>,
}

/// An item without its fallback.
///
/// Having no fallback field of its own keeps snapshots from chaining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            thumbnail_url: thumbnail_url.into(),
            fallback: None,
        }
    }

    /// Copy of the current fields, without the fallback.
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            id: self.id,
            title: self.title.clone(),
            url: self.url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
        }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl From<ItemSnapshot> for Item {
    fn from(snapshot: ItemSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            url: snapshot.url,
            thumbnail_url: snapshot.thumbnail_url,
            fallback: None,
        }
    }
}

/// Fails on the first id that appears twice in `items`.
pub fn ensure_unique_ids(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(ModelError::DuplicateItemId(item.id));
        }
    }
    Ok(())
}
