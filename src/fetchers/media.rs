use crate::error::{GrabError, Result};
use crate::fetchers::{ensure_ok, parse_url};
use crate::progress::{TeeReader, WriteCounter};
use crate::results::PageMetadata;
use crate::utils::random_filename;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::blocking::Client;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Kind of media asset picked from the page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// File extension used for the downloaded asset
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Image => "jpeg",
        }
    }

    /// Picks the asset to download: the video when there is one, else the image
    pub fn select(meta: &PageMetadata) -> (Self, &str) {
        if meta.has_video() {
            (MediaKind::Video, &meta.video)
        } else {
            (MediaKind::Image, &meta.image)
        }
    }
}

/// A completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Generated file name
    pub filename: String,
    /// Full path the file was written to
    pub path: PathBuf,
    pub kind: MediaKind,
    /// Bytes written to disk
    pub bytes: u64,
    /// Whether a progress line was left on stdout
    pub progress_shown: bool,
}

impl Download {
    /// Message reported to the user on success
    pub fn message(&self) -> String {
        format!("Success download filename: {}", self.filename)
    }
}

impl fmt::Display for Download {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Downloads the media asset referenced by page metadata
pub struct MediaDownloader {
    client: Client,
    output_dir: PathBuf,
    report_progress: bool,
    rng: StdRng,
}

impl MediaDownloader {
    /// Create a downloader whose filename generator is seeded from the clock
    pub fn new(client: Client, output_dir: impl Into<PathBuf>) -> Self {
        Self::with_rng(client, output_dir, StdRng::seed_from_u64(clock_seed()))
    }

    /// Create a downloader with an explicit random source
    pub fn with_rng(client: Client, output_dir: impl Into<PathBuf>, rng: StdRng) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            report_progress: true,
            rng,
        }
    }

    /// Enable or disable the progress line
    pub fn report_progress(mut self, report: bool) -> Self {
        self.report_progress = report;
        self
    }

    /// Downloads the video (or image) named in `meta` under a random filename
    ///
    /// A failure while streaming leaves the partially written file in place.
    pub fn download(&mut self, meta: &PageMetadata) -> Result<Download> {
        let (kind, target) = MediaKind::select(meta);
        ::log::debug!("Selected {:?} target {:?}", kind, target);

        let url = parse_url(target)?;
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| GrabError::Request {
                url: target.to_string(),
                source,
            })?;
        let response = ensure_ok(response)?;

        let filename = random_filename(&mut self.rng, kind.extension());
        let path = self.output_dir.join(&filename);
        let mut file = File::create(&path).map_err(|source| GrabError::FileCreate {
            path: path.clone(),
            source,
        })?;

        let mut counter = WriteCounter::stdout(self.report_progress);
        let bytes = io::copy(&mut TeeReader::new(response, &mut counter), &mut file)
            .map_err(|source| GrabError::Copy {
                path: path.clone(),
                source,
            })?;
        ::log::debug!(
            "Wrote {} bytes to {} ({} counted)",
            bytes,
            path.display(),
            counter.total()
        );

        Ok(Download {
            filename,
            path,
            kind,
            bytes,
            progress_shown: counter.has_drawn(),
        })
    }
}

/// Seed for the filename generator, taken once per downloader
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
