//! Field validators.

use std::sync::LazyLock;

use gallery_model::{Item, ItemId};
use regex::Regex;

/// Accepted URL shape: known scheme, host, optional path.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?|ftp|torrent|image|irc)://(-\.)?([^\s?#]+\.?)+(/[^\s]*)?$")
        .expect("Invalid URL regex")
});

pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

/// The id field is shown but locked: it must still read as the selected id.
pub fn id_matches(value: &str, selected: ItemId) -> bool {
    value.parse::<ItemId>().is_ok_and(|id| id == selected)
}

/// Case-insensitive title clash with any item other than `editing`.
pub fn title_taken(items: &[Item], title: &str, editing: Option<ItemId>) -> bool {
    items
        .iter()
        .filter(|item| Some(item.id) != editing)
        .any(|item| item.title.to_lowercase() == title.to_lowercase())
}

/// Case-insensitive url clash with any item other than `editing`.
pub fn url_taken(items: &[Item], url: &str, editing: Option<ItemId>) -> bool {
    items
        .iter()
        .filter(|item| Some(item.id) != editing)
        .any(|item| item.url.to_lowercase() == url.to_lowercase())
}
