use std::io::{self, BufRead, Write};

use adjgraph::cli::{Command, Output, Session};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "adjgraph")]
#[command(about = "Interactive adjacency-list graph driver", long_about = None)]
struct Cli {
    /// Create a graph with this many vertices before reading commands
    #[arg(short = 'n', long)]
    vertices: Option<i64>,

    /// Print results as JSON lines instead of text reports
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Do not print the prompt
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Log graph operations at debug level (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with command output.
    let default_level = if cli.verbose { "adjgraph=debug" } else { "adjgraph=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(vertices) = cli.vertices {
        let output = session
            .execute(Command::Create { vertices })
            .context("failed to create the initial graph")?;
        emit(&mut out, &output, cli.json)?;
    } else if !cli.quiet {
        writeln!(out, "{}", adjgraph::cli::usage().trim_end())?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !cli.quiet {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                // Help requested with `-h` goes to stdout, parse errors to stderr.
                out.flush()?;
                err.print().context("failed to print command error")?;
                continue;
            }
        };
        match session.execute(command) {
            Ok(Output::Exit) => break,
            Ok(output) => emit(&mut out, &output, cli.json)?,
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    Ok(())
}

fn emit(out: &mut impl Write, output: &Output, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, output)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}
