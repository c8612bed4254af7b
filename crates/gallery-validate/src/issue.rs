//! Validation issue types.

use serde::{Deserialize, Serialize};

use gallery_model::ItemId;

/// Form field an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Title,
    Url,
}

/// Validation issue. Each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// No item is selected, so there is nothing to edit.
    NothingSelected,
    /// The selected id does not name an item in the collection.
    UnknownItem { id: ItemId },
    /// Id field was changed away from the selected id.
    IdMismatch { selected: ItemId },
    TitleEmpty,
    InvalidUrl,
    DuplicateTitle,
    DuplicateUrl,
}

impl Issue {
    pub fn field(&self) -> Field {
        match self {
            Issue::NothingSelected | Issue::UnknownItem { .. } | Issue::IdMismatch { .. } => {
                Field::Id
            }
            Issue::TitleEmpty | Issue::DuplicateTitle => Field::Title,
            Issue::InvalidUrl | Issue::DuplicateUrl => Field::Url,
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Issue::NothingSelected => "No card selected".to_string(),
            Issue::UnknownItem { id } => format!("No card with Id: {id}"),
            Issue::IdMismatch { selected } => {
                format!("Id can't be change. Current card has Id: {selected}")
            }
            Issue::TitleEmpty => "Title should not be empty".to_string(),
            Issue::InvalidUrl => "Please enter a valid URL".to_string(),
            Issue::DuplicateTitle => "The same title already exist!".to_string(),
            Issue::DuplicateUrl => "The same url already exist!".to_string(),
        }
    }
}
