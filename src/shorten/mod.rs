//! Link shortening through a TinyURL-style endpoint
//!
//! The endpoint answers `GET <endpoint>?url=<link>` with the short link as the
//! plain-text body. Any failure degrades to the original link.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

pub const TINYURL_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Shortener {
    client: Client,
    endpoint: String,
}

impl Default for Shortener {
    fn default() -> Self {
        Self::new(TINYURL_ENDPOINT)
    }
}

impl Shortener {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into() }
    }

    /// Short form of `url`, or `url` itself when the service does not answer 200.
    pub fn shorten(&self, url: &str) -> String {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .timeout(REQUEST_TIMEOUT)
            .send();

        match response {
            Ok(resp) if resp.status() == StatusCode::OK => match resp.text() {
                Ok(body) if !body.trim().is_empty() => {
                    let short = body.trim().to_string();
                    debug!("shortened {url} to {short}");
                    short
                }
                Ok(_) => {
                    warn!("URL shortener returned an empty body; using the original link");
                    url.to_string()
                }
                Err(err) => {
                    warn!("could not read URL shortener response: {err}; using the original link");
                    url.to_string()
                }
            },
            Ok(resp) => {
                warn!("URL shortener returned {}; using the original link", resp.status());
                url.to_string()
            }
            Err(err) => {
                warn!("URL shortener unreachable: {err}; using the original link");
                url.to_string()
            }
        }
    }
}
