pub mod media;
pub mod page;

use crate::config::GrabberConfig;
use crate::error::{GrabError, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use url::Url;

pub use media::{Download, MediaDownloader, MediaKind};
pub use page::fetch_metadata;

/// Builds the blocking HTTP client shared by the page and media requests
pub fn build_client(config: &GrabberConfig) -> Result<Client> {
    let mut builder = Client::builder().timeout(config.timeout());
    if config.no_proxy {
        builder = builder.no_proxy();
    }
    builder.build().map_err(GrabError::Client)
}

/// Parses a request target, reporting unusable URLs as request errors
pub(crate) fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| GrabError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Rejects any response that is not a plain 200
pub(crate) fn ensure_ok(response: Response) -> Result<Response> {
    let status = response.status();
    if status != StatusCode::OK {
        ::log::debug!("{} answered {}", response.url(), status);
        return Err(GrabError::HttpStatus {
            url: response.url().to_string(),
            status,
        });
    }
    Ok(response)
}
