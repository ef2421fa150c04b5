//! Terminal front-end for the calculator.
//!
//! Reads key labels separated by whitespace, from the command line or from
//! stdin, and prints each frame the display would show.
//!
//! Usage:
//!   calcmind 5 + 3 + 2 =
//!   echo "1 0 0 + 1 0 % =" | calcmind --final-only
//!   RUST_LOG=debug calcmind --strict 9 sqrt

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use calcmind::config::{ControllerBuilder, TokenPolicy};
use calcmind::controller::Callback;

/// Drive the calculator from the terminal
#[derive(Parser, Debug)]
#[command(name = "calcmind", version, about)]
struct Args {
    /// Key labels to press; read from stdin when none are given
    keys: Vec<String>,

    /// Print only the display after the last key
    #[arg(long)]
    final_only: bool,

    /// Fail on labels that are not keys instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Text shown after a division by zero
    #[arg(long)]
    division_by_zero_message: Option<String>,

    /// Text shown after a square root of a negative number
    #[arg(long)]
    negative_radicand_message: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let final_only = args.final_only;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut write_error: Option<io::Error> = None;

    let mut builder = ControllerBuilder::new().token_policy(if args.strict {
        TokenPolicy::Reject
    } else {
        TokenPolicy::Ignore
    });
    if let Some(message) = args.division_by_zero_message {
        builder = builder.division_by_zero_message(message);
    }
    if let Some(message) = args.negative_radicand_message {
        builder = builder.negative_radicand_message(message);
    }

    let mut controller = builder
        .view(Callback(|text: &str| {
            if final_only || write_error.is_some() {
                return;
            }
            if let Err(err) = writeln!(out, "{text}") {
                write_error = Some(err);
            }
        }))
        .build()?;

    if args.keys.is_empty() {
        for line in io::stdin().lock().lines() {
            controller.feed(line?.split_whitespace())?;
        }
    } else {
        controller.feed(&args.keys)?;
    }

    let display = controller.display().to_string();
    drop(controller);

    if let Some(err) = write_error {
        return Err(err.into());
    }
    if final_only {
        writeln!(out, "{display}")?;
    }
    Ok(())
}
