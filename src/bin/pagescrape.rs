//! Command-line front end: fetch one page, print its links and/or headlines.
//!
//! Usage:
//!   pagescrape --url <URL> [--extract links|headlines|all] [--output <FILE>]
//!
//! Diagnostics go to stderr through `tracing` (`RUST_LOG` or `-v`); the
//! report goes to stdout or the output file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rs_pagescrape::fetch::DEFAULT_USER_AGENT;
use rs_pagescrape::url_utils::validate_target_url;
use rs_pagescrape::{
    scrape, ExtractMode, FetchOptions, HttpFetcher, LinkResolution, Options, OutputTarget, Report,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagescrape", version)]
#[command(about = "Extract links and headlines from a single web page", long_about = None)]
struct Cli {
    /// URL to scrape (must start with http:// or https://)
    #[arg(short, long)]
    url: String,

    /// Elements to extract: links, headlines, or all
    #[arg(short, long, default_value = "links")]
    extract: String,

    /// Output file path (defaults to the console)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print href values as written instead of resolving them to absolute URLs
    #[arg(long)]
    raw_links: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log progress to stderr (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> rs_pagescrape::Result<()> {
    let base = validate_target_url(&cli.url)?;
    debug!(base = %base, "base URL successfully parsed");

    let target = OutputTarget::from_path(cli.output.as_deref());
    let mut sink = target.open()?;

    let Ok(mode) = cli.extract.parse::<ExtractMode>() else {
        Report::unrecognized_mode(&cli.extract).emit_warning();
        return Ok(());
    };
    debug!(mode = %mode, "extraction type set");

    let options = Options {
        mode,
        link_resolution: if cli.raw_links {
            LinkResolution::Raw
        } else {
            LinkResolution::Absolute
        },
    };
    let fetcher = HttpFetcher::new(&FetchOptions {
        timeout: Duration::from_secs(cli.timeout),
        user_agent: cli.user_agent.clone(),
    })?;

    let result = scrape(&fetcher, &base, &options)?;
    if !result.warnings.is_empty() {
        info!(skipped = result.warnings.len(), "some links were skipped");
    }

    Report::assemble(mode, &result)
        .render(&mut sink)
        .map_err(|source| rs_pagescrape::Error::Io {
            path: target.display_path(),
            source,
        })?;

    debug!("scraping process finished");
    Ok(())
}
