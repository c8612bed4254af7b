//! Remote item source over HTTP.

use std::time::Duration;

use gallery_model::Item;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::{IngestError, ItemSource, Result, decode_items};

/// Public photo endpoint the gallery loads by default.
pub const DEFAULT_PHOTOS_URL: &str = "https://jsonplaceholder.typicode.com/photos";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the item list with a blocking GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ItemSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<Item>> {
        debug!(url = %self.url, "fetching items");

        let response = self
            .client
            .get(&self.url)
            .header(
                USER_AGENT,
                format!("photo-gallery/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()?;

        if !response.status().is_success() {
            return Err(IngestError::Status {
                status: response.status().as_u16(),
            });
        }

        let payload = response.text()?;
        decode_items(&payload)
    }
}
