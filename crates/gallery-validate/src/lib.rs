//! Edit surface for the gallery.
//!
//! The store trusts its inputs, so everything a user types is checked here
//! before a [`gallery_store::Command`] is built.

#![deny(unsafe_code)]

pub mod checks;
pub mod field;
pub mod form;
pub mod issue;

pub use checks::{id_matches, is_not_empty, is_valid_url, title_taken, url_taken};
pub use field::FieldInput;
pub use form::{EditForm, ValidationError};
pub use issue::{Field, Issue};
