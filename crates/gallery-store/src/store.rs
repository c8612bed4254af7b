//! The collection store handle.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, warn};

use gallery_model::{Item, ItemId};

use crate::{CollectionState, Command, Outcome, reduce};

/// Single writer of the gallery collection.
///
/// Constructed explicitly at start-up and passed to whoever needs it. Readers
/// get immutable [`Arc`] snapshots, either on demand via [`snapshot`] or pushed
/// through a [`subscribe`] channel after every applied command.
///
/// [`snapshot`]: CollectionStore::snapshot
/// [`subscribe`]: CollectionStore::subscribe
#[derive(Debug, Default)]
pub struct CollectionStore {
    state: Arc<CollectionState>,
    subscribers: Vec<Sender<Arc<CollectionState>>>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CollectionState) -> Self {
        Self {
            state: Arc::new(state),
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot. Snapshots handed out earlier are never modified.
    pub fn snapshot(&self) -> Arc<CollectionState> {
        Arc::clone(&self.state)
    }

    /// Receive every snapshot produced from now on.
    pub fn subscribe(&mut self) -> Receiver<Arc<CollectionState>> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply one command and publish the result if it changed anything.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let name = command.name();
        let transition = reduce(&self.state, command);
        match transition.outcome {
            Outcome::Applied => {
                debug!(command = name, items = transition.state.len(), "command applied");
                self.state = Arc::new(transition.state);
                self.publish();
            }
            Outcome::Unchanged => {
                debug!(command = name, "command left collection unchanged");
            }
            Outcome::TargetMissing { id } => match id {
                Some(id) => warn!(command = name, item_id = %id, "target item not in collection"),
                None => warn!(command = name, "no item selected"),
            },
        }
        transition.outcome
    }

    fn publish(&mut self) {
        let snapshot = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.send(Arc::clone(snapshot)).is_ok());
    }

    pub fn set_items(&mut self, items: Vec<Item>) -> Outcome {
        self.dispatch(Command::Set { items })
    }

    pub fn select(&mut self, id: ItemId) -> Outcome {
        self.dispatch(Command::Select { id })
    }

    pub fn change_item(
        &mut self,
        title: impl Into<String>,
        url: impl Into<String>,
        image_url: Option<String>,
    ) -> Outcome {
        self.dispatch(Command::Change {
            title: title.into(),
            url: url.into(),
            image_url,
        })
    }

    pub fn add_image(&mut self, item_id: ItemId, image_url: impl Into<String>) -> Outcome {
        self.dispatch(Command::Add {
            item_id,
            image_url: image_url.into(),
        })
    }

    pub fn remove_image(&mut self, item_id: ItemId) -> Outcome {
        self.dispatch(Command::Remove { item_id })
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.state.selected_id
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected_item()
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
