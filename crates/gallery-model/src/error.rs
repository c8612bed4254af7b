use thiserror::Error;

use crate::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("duplicate item id {0}")]
    DuplicateItemId(ItemId),
}

pub type Result<T> = std::result::Result<T, ModelError>;
