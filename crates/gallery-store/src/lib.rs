//! Collection store for the photo gallery.
//!
//! All edits flow through [`Command`]s. [`reduce`] is the pure transition
//! function; [`CollectionStore`] is the single writer that holds the current
//! snapshot and notifies subscribers.

#![deny(unsafe_code)]

pub mod command;
pub mod reducer;
pub mod state;
pub mod store;

pub use command::Command;
pub use reducer::{Outcome, Transition, reduce};
pub use state::CollectionState;
pub use store::CollectionStore;
