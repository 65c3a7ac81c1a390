use crate::config::GrabberConfig;
use crate::error::{GrabError, Result};
use crate::fetchers::{ensure_ok, parse_url};
use crate::parsers;
use crate::results::PageMetadata;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

/// Fetches `url` as the configured mobile client and extracts its metadata
///
/// The response body is fed to the extractor as it arrives and is dropped
/// once extraction stops, whether or not the whole page was read.
pub fn fetch_metadata(client: &Client, config: &GrabberConfig, url: &str) -> Result<PageMetadata> {
    let target = parse_url(url)?;
    ::log::debug!("Fetching metadata from {}", target);

    let response = client
        .get(target)
        .header(USER_AGENT, config.user_agent.as_str())
        .send()
        .map_err(|source| GrabError::Request {
            url: url.to_string(),
            source,
        })?;
    let response = ensure_ok(response)?;

    let meta = parsers::extract_with_chunk_size(response, config.read_chunk_size);
    ::log::debug!("Extracted metadata: {:?}", meta);
    Ok(meta)
}
