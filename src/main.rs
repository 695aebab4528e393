use anyhow::{Context, Result};
use clap::Parser;
use obmenu::{Escaping, MenuDescription, RenderContext};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print an Openbox pipe menu built from a JSON menu description
#[derive(Parser, Debug)]
#[command(name = "obmenu", version, about)]
struct Cli {
    /// Menu description (JSON). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Escape `& < > " '` in labels, names and commands
    #[arg(long)]
    escape: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the menu itself, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_description(input: Option<&PathBuf>) -> Result<MenuDescription> {
    match input {
        Some(path) if path.as_os_str() != "-" => MenuDescription::from_path(path)
            .with_context(|| format!("load menu description from {}", path.display())),
        _ => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("read menu description from stdin")?;
            MenuDescription::from_json_str(&json).context("parse menu description from stdin")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let description = load_description(cli.input.as_ref())?;
    let menu = description.into_pipe_menu();
    debug!(elements = menu.len(), "built pipe menu");

    let escaping = if cli.escape {
        Escaping::Xml
    } else {
        Escaping::Verbatim
    };
    let context = RenderContext::new().with_escaping(escaping);

    menu.print_out_with(&context).context("print pipe menu")?;

    Ok(())
}
