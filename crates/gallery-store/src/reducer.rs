//! Pure state transitions.
//!
//! A command that targets an id absent from the collection is a no-op: the
//! returned state equals the input and the outcome is
//! [`Outcome::TargetMissing`].

use gallery_model::{Item, ItemId};

use crate::{CollectionState, Command};

/// What a command did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new snapshot was produced.
    Applied,
    /// The command was valid but had nothing to do.
    Unchanged,
    /// The target item does not exist. `None` means nothing was selected.
    TargetMissing { id: Option<ItemId> },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CollectionState,
    pub outcome: Outcome,
}

impl Transition {
    fn applied(state: CollectionState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
        }
    }

    fn unchanged(state: &CollectionState, outcome: Outcome) -> Self {
        Self {
            state: state.clone(),
            outcome,
        }
    }
}

/// Apply one command to `state`, producing a new snapshot.
pub fn reduce(state: &CollectionState, command: Command) -> Transition {
    match command {
        Command::Set { items } => Transition::applied(CollectionState {
            items,
            selected_id: state.selected_id,
        }),
        Command::Select { id } => Transition::applied(CollectionState {
            items: state.items.clone(),
            selected_id: Some(id),
        }),
        Command::Change {
            title,
            url,
            image_url,
        } => {
            let Some(id) = state.selected_id else {
                return Transition::unchanged(state, Outcome::TargetMissing { id: None });
            };
            // An empty image reference means no file was picked.
            let image_url = image_url.filter(|image| !image.is_empty());
            update_item(state, id, |item| match image_url {
                Some(image) => {
                    item.title = title;
                    item.thumbnail_url = image;
                }
                None => {
                    item.fallback = Some(item.snapshot());
                    item.title = title;
                    item.thumbnail_url.clone_from(&url);
                    item.url = url;
                }
            })
        }
        Command::Add { item_id, image_url } => update_item(state, item_id, |item| {
            if item.fallback.is_none() {
                item.fallback = Some(item.snapshot());
            }
            item.url = image_url;
        }),
        Command::Remove { item_id } => {
            let Some(index) = state.position(item_id) else {
                return Transition::unchanged(
                    state,
                    Outcome::TargetMissing { id: Some(item_id) },
                );
            };
            let Some(fallback) = state.items[index].fallback.clone() else {
                return Transition::unchanged(state, Outcome::Unchanged);
            };
            let mut items = state.items.clone();
            items[index] = Item::from(fallback);
            Transition::applied(CollectionState {
                items,
                selected_id: state.selected_id,
            })
        }
    }
}

fn update_item(
    state: &CollectionState,
    id: ItemId,
    edit: impl FnOnce(&mut Item),
) -> Transition {
    let Some(index) = state.position(id) else {
        return Transition::unchanged(state, Outcome::TargetMissing { id: Some(id) });
    };
    let mut items = state.items.clone();
    edit(&mut items[index]);
    Transition::applied(CollectionState {
        items,
        selected_id: state.selected_id,
    })
}
