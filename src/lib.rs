// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod progress;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::GrabberConfig;
pub use error::GrabError;
pub use fetchers::{Download, MediaDownloader, MediaKind};
pub use results::PageMetadata;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Result of a complete fetch-and-download run
#[derive(Debug, Clone)]
pub struct GrabOutcome {
    /// Metadata extracted from the page
    pub metadata: PageMetadata,
    /// The downloaded media file
    pub download: Download,
}

/// Main builder for fetching a post page and downloading its media
pub struct Grabber {
    url: String,
    config: GrabberConfig,
    seed: Option<u64>,
}

impl Grabber {
    /// Create a new Grabber for the given page URL with default configuration
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: GrabberConfig::default(),
            seed: None,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: GrabberConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, GrabError> {
        let config = GrabberConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, GrabError> {
        let config = GrabberConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the directory the media file is written to
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Enable or disable the download progress line
    pub fn with_report_progress(mut self, report: bool) -> Self {
        self.config.report_progress = report;
        self
    }

    /// Set a client-level timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = Some(seconds);
        self
    }

    /// Seed the filename generator instead of using the clock
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GrabberConfig {
        &self.config
    }

    /// Fetch the page and extract its metadata without downloading anything
    pub fn fetch_metadata(&self) -> Result<PageMetadata, GrabError> {
        let client = fetchers::build_client(&self.config)?;
        fetchers::fetch_metadata(&client, &self.config, &self.url)
    }

    /// Fetch the page, then download its video or image
    ///
    /// Stops at the first error; nothing is retried.
    pub fn run(self) -> Result<GrabOutcome, GrabError> {
        self.run_with(|_| {})
    }

    /// Like [`Grabber::run`], calling `on_metadata` between the fetch and the download
    pub fn run_with<F>(self, on_metadata: F) -> Result<GrabOutcome, GrabError>
    where
        F: FnOnce(&PageMetadata),
    {
        ::log::info!("Fetching {}", self.url);
        let client = fetchers::build_client(&self.config)?;

        let metadata = fetchers::fetch_metadata(&client, &self.config, &self.url)?;
        on_metadata(&metadata);
        Self::download(client, &self.config, self.seed, metadata)
    }

    fn download(
        client: reqwest::blocking::Client,
        config: &GrabberConfig,
        seed: Option<u64>,
        metadata: PageMetadata,
    ) -> Result<GrabOutcome, GrabError> {
        let downloader = match seed {
            Some(seed) => MediaDownloader::with_rng(
                client,
                &config.output_dir,
                StdRng::seed_from_u64(seed),
            ),
            None => MediaDownloader::new(client, &config.output_dir),
        };
        let mut downloader = downloader.report_progress(config.report_progress);

        let download = downloader.download(&metadata)?;
        ::log::info!(
            "Downloaded {} bytes to {}",
            download.bytes,
            download.path.display()
        );

        Ok(GrabOutcome { metadata, download })
    }
}
