use std::fs;
use std::path::{Path, PathBuf};

use gallery_model::Item;
use tracing::debug;

use crate::{ItemSource, Result, decode_items};

/// Items stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Item>> {
        debug!(path = %self.path.display(), "reading items file");
        let payload = fs::read_to_string(&self.path)?;
        decode_items(&payload)
    }
}
