//! Page window over an ordered sequence.
//!
//! Pages are 1-based. [`derive`] is a pure function that borrows the source
//! for one read; [`PageCursor`] remembers the current page and clamps jumps,
//! but never owns the items.

#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod window;

pub use cursor::PageCursor;
pub use error::PageError;
pub use window::{DEFAULT_PAGE_SIZE, PageSize, derive, page_count};
