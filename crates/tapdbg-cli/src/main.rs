use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tapdbg::prelude::*;
use tapdbg::parse_u64;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod repl;
mod session;

use session::{OutputMode, Outcome, Session};

#[derive(Parser)]
#[command(name = "tapdbg")]
#[command(about = "Read target memory and print it as an aligned hex dump")]
struct Args {
    #[arg(short, long, env = "TAPDBG_CONFIG", default_value = "tapdbg.toml")]
    config: PathBuf,

    /// Raw memory image to serve reads from (overrides target.image)
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Address the image is mapped at (overrides target.base)
    #[arg(short, long, value_parser = parse_address)]
    base: Option<u64>,

    /// Print raw results as JSON instead of a hex dump
    #[arg(long)]
    json: bool,

    /// Command to run once, e.g. `read 0xfffff004 16`; interactive if omitted
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn parse_address(s: &str) -> std::result::Result<u64, String> {
    parse_u64(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("tapdbg=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = load_config(&args.config);
    if let Some(image) = args.image {
        config.target.image = Some(image);
    }
    if let Some(base) = args.base {
        config.target.base = base;
    }

    let image = config
        .target
        .image
        .clone()
        .context("No memory image configured, pass --image or set target.image")?;
    let tap = ImageTap::open(&image, config.target.base)
        .with_context(|| format!("Failed to open memory image {:?}", image))?;

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let mut session = Session::new(CmdRead::from_config(tap, &config), mode);

    if args.command.is_empty() {
        let stdin = io::stdin();
        return repl::run(&mut session, stdin.lock(), io::stdout());
    }

    let line = args.command.join(" ");
    if let Outcome::Output(text) = session.handle_line(&line)? {
        print!("{}", text);
    }
    Ok(())
}

fn load_config(path: &Path) -> DebuggerConfig {
    match DebuggerConfig::load(path) {
        Ok(c) => {
            info!("Loaded config from {:?}", path);
            c
        }
        Err(e) if e.is_not_found() => DebuggerConfig::default(),
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            DebuggerConfig::default()
        }
    }
}
