//! cron-next: prints the next run time of every schedule line read from the input.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use cron_next::{ScheduleEntry, TestTime};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use tracing::{debug, info};

/// Calculates the next run of simple cron entries (`<minute> <hour> <command>`) starting from the test time.
#[derive(Parser, Debug)]
#[command(name = "cron-next", version, about)]
struct Cli {
    /// Test time to look for the next run from, HH:MM (24-hour).
    #[arg(short, long, env = "CRON_NEXT_TIME")]
    time: TestTime,

    /// Reference day, YYYY-MM-DD (local today by default).
    #[arg(short, long, env = "CRON_NEXT_DATE")]
    date: Option<NaiveDate>,

    /// Read schedule from the file instead of the standard input.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    info!(time = %cli.time, %today, "looking for next runs");

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            debug!(line_no, "skipping blank line");
            continue;
        }

        let entry = ScheduleEntry::parse_line(&line, today).with_context(|| format!("line {line_no}: {line:?}"))?;
        let run = entry
            .resolve(cli.time)
            .with_context(|| format!("line {line_no}: unable to resolve next run"))?;
        write!(out, "{}", run.display(entry.command())).context("failed to write output")?;
    }
    out.flush().context("failed to write output")?;

    Ok(())
}
