pub mod error;
pub mod ids;
pub mod item;

pub use error::{ModelError, Result};
pub use ids::ItemId;
pub use item::{Item, ItemSnapshot, ensure_unique_ids};
