use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "instagramd")]
#[command(about = "Downloads the video or image behind a post's Open Graph tags")]
#[command(version)]
pub struct Args {
    /// Post URL to fetch
    pub url: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to write the media file to (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not draw the download progress line
    #[arg(long)]
    pub no_progress: bool,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the extracted metadata as JSON before downloading
    #[arg(long)]
    pub print_metadata: bool,
}
