#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod http;
pub mod load;
pub mod source;

pub use error::{IngestError, Result};
pub use file::JsonFileSource;
pub use http::{DEFAULT_PHOTOS_URL, HttpSource};
pub use load::{LoadState, Loader, load_into};
pub use source::{ItemSource, decode_items, source_for};
