//! tagtint - paint or dump the token stream of a source file

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tagtint::config::Config;
use tagtint::render::{self, PaintOptions};
use tagtint::{Classifier, Theme};

/// Syntax-color tag markup mixed with statement code
#[derive(Parser, Debug)]
#[command(name = "tagtint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to classify (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print one row per token instead of painting
    #[arg(long)]
    tokens: bool,

    /// Show a line-number gutter
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Theme file (TOML) overriding the built-in colors
    #[arg(long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Never emit color escapes
    #[arg(long)]
    no_color: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let rust_log = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(log_filter(rust_log.as_deref(), verbose))
        .init();
}

/// `RUST_LOG` directives when set and valid, else the `-v` level
fn log_filter(rust_log: Option<&str>, verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::load();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    tracing::info!(bytes = text.len(), "read input");

    let grammar = config.grammar();
    let lines = Classifier::new(&grammar).classify(&text);

    let mut out = io::stdout().lock();
    if args.tokens {
        render::dump_tokens(&mut out, &lines)?;
        return Ok(());
    }

    let theme = match args.theme.as_ref().or(config.theme.as_ref()) {
        Some(path) => Theme::load(path)
            .map_err(|e| anyhow::anyhow!("theme {}: {}", path.display(), e))?,
        None => Theme::default(),
    };

    let options = PaintOptions {
        line_numbers: args.line_numbers || config.show_line_numbers,
        color: !args.no_color && io::stdout().is_terminal(),
    };
    render::paint(&mut out, &lines, &theme, options)?;

    // Keep the shell prompt off the last painted line
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
