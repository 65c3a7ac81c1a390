use clap::Parser;
use instagramd::{GrabError, Grabber};
use std::process;

mod args;
use args::Args;

const USAGE: &str = "Usage ./instagramd URLIMAGE";

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let Some(url) = args.url.clone() else {
        println!("{}", USAGE);
        return;
    };

    match run(url, &args) {
        Ok((message, progress_drawn)) => {
            // the progress line has no trailing newline
            if progress_drawn {
                println!();
            }
            println!("{}", message);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run(url: String, args: &Args) -> Result<(String, bool), GrabError> {
    let mut grabber = Grabber::new(url);
    if let Some(path) = &args.config {
        grabber = grabber.with_config_file(path)?;
    }
    if let Some(dir) = &args.output_dir {
        grabber = grabber.with_output_dir(dir);
    }
    if args.no_progress {
        grabber = grabber.with_report_progress(false);
    }
    if let Some(seconds) = args.timeout {
        grabber = grabber.with_timeout(seconds);
    }
    let print_metadata = args.print_metadata;
    let outcome = grabber.run_with(|metadata| {
        if !print_metadata {
            return;
        }
        match serde_json::to_string_pretty(metadata) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::warn!("Could not render metadata: {}", e),
        }
    })?;

    Ok((outcome.download.message(), outcome.download.progress_shown))
}
