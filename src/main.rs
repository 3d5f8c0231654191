//! mailtriage - classify emails from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use mailtriage::HeadlessRequest;
use mailtriage_app::config::{default_config_path, init_config_file, load_settings, Settings};

/// mailtriage - classify emails with a remote service and draft replies
#[derive(Parser, Debug)]
#[command(name = "mailtriage")]
#[command(about = "Classify emails and suggest replies from the terminal", long_about = None)]
struct Args {
    /// Base URL of the classification service (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// History file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Classify this text without the TUI (NDJSON output)
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Classify this .txt/.pdf file without the TUI (NDJSON output)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = self
            .config
            .clone()
            .or_else(default_config_path)
            .map(|path| load_settings(&path))
            .unwrap_or_default();

        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if let Some(path) = &self.history {
            settings.storage.history_path = Some(path.clone());
        }
        settings
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(default_config_path)
            .ok_or_else(|| eyre!("No config directory on this platform"))?;
        if init_config_file(&path)? {
            eprintln!("Wrote {}", path.display());
        } else {
            eprintln!("{} already exists, leaving it untouched", path.display());
        }
        return Ok(());
    }

    mailtriage_core::logging::init()?;
    let settings = args.settings();

    match HeadlessRequest::from_args(args.text.clone(), args.file.clone()) {
        Some(request) => {
            let engine = match mailtriage::build_engine(settings) {
                Ok(engine) => engine,
                Err(e) => {
                    mailtriage::report_startup_error(&e, &mut std::io::stdout());
                    std::process::exit(1);
                }
            };
            if !mailtriage::run_headless(engine, request).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        None => Ok(mailtriage::run(settings).await?),
    }
}
