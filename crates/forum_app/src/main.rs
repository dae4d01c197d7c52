use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forum_app::commands::{self, Tap};
use forum_app::config::{AppConfig, DEFAULT_CONFIG_FILENAME};
use forum_app::logging;
use forum_logging::forum_info;

#[derive(Parser)]
#[command(name = "forum_reader", about = "Render forum comments and route taps")]
struct Args {
    /// Config file (RON). Missing file means defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// Print machine-readable JSON where supported.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify followed links into navigation actions.
    Classify {
        #[arg(required = true)]
        links: Vec<String>,
    },
    /// Render a comment HTML snippet and list its spans.
    Render { file: PathBuf },
    /// Show a thread JSON file as comment rows, then replay taps.
    Thread {
        file: PathBuf,
        /// `avatar:ROW` or `text:ROW:OFFSET`; may repeat.
        #[arg(long = "tap", value_parser = Tap::parse)]
        taps: Vec<Tap>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;
    logging::initialize(&config);
    forum_info!("forum_reader starting with config {:?}", args.config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Classify { links } => commands::classify_links(&links, args.json, &mut out),
        Command::Render { file } => commands::render_file(&file, &config, args.json, &mut out),
        Command::Thread { file, taps } => commands::show_thread(&file, &config, &taps, &mut out),
    }
}
