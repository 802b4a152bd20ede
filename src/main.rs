use anyhow::Result;
use std::env;
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{debug, Level};

mod error;
mod path;
mod rewrite;
mod rules;
mod scan;
mod walk;

use scan::Scanner;

#[derive(StructOpt)]
#[structopt(about = "rewrites '../context/ThemeContext' imports to '@/context/ThemeContext'")]
struct Cli {
    /// Directory to scan, relative to the current directory
    #[structopt(long, parse(from_os_str), default_value = "app")]
    root: PathBuf,
    /// Log every file visited to stderr
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let Cli { root, verbose } = Cli::from_args();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(match verbose {
            true => Level::DEBUG,
            false => Level::WARN,
        })
        .init();

    let current_dir = env::current_dir()?;
    let root = current_dir.join(root);

    let stdout = io::stdout();
    let mut scanner = Scanner::new(stdout.lock()).display_relative_to(current_dir);
    let summary = scanner.run(&root, &rules::THEME_CONTEXT)?;

    debug!(
        scanned = summary.scanned,
        fixed_files = summary.fixed_files,
        writes = summary.writes,
        failures = summary.failures,
        "done"
    );

    Ok(())
}
