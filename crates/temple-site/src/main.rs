//! temple-site - Terminal Entry Point

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use temple_i18n::{FilePreferenceStore, Language, LanguageContext};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use temple_site::{app, content};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Language for this run, overriding the saved preference (not persisted)
    #[arg(short, long, value_parser = parse_language)]
    language: Option<Language>,

    /// Directory holding the language preference slot
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Skip the masthead banner
    #[arg(long)]
    no_banner: bool,

    /// Seconds between verse pairs in the carousel
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    quote_seconds: u64,
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw).ok_or_else(|| {
        let codes: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
        format!(
            "unsupported language '{raw}', expected one of: {}",
            codes.join(", ")
        )
    })
}

/// Resolve the preference slot directory: flag, then XDG state home,
/// then the home-relative default.
fn state_dir(args: &Args) -> PathBuf {
    if let Some(dir) = &args.state_dir {
        return dir.clone();
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        if !xdg.trim().is_empty() {
            return PathBuf::from(xdg).join("temple-site");
        }
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".local/state/temple-site"),
        Err(_) => PathBuf::from(".temple-site"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let catalog = content::catalog().context("embedded catalog failed to parse")?;
    let store = FilePreferenceStore::new(state_dir(&args));

    let mut ctx = match args.language {
        Some(language) => LanguageContext::with_language(catalog, Box::new(store), language),
        None => LanguageContext::new(catalog, Box::new(store)),
    };
    info!("starting with language '{}'", ctx.language());

    app::run(
        &mut ctx,
        Duration::from_secs(args.quote_seconds),
        !args.no_banner,
    )
    .await
}
