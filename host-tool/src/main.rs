use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod convert;
mod error;

use convert::{convert_batch, ConvertOptions};

#[derive(Parser)]
#[command(name = "dssc-convert")]
#[command(about = "Convert 3D screen capture files to parameter reports and TGA images")]
#[command(version)]
struct Cli {
    /// Capture files to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the raw 64-byte header of each capture as hex
    #[arg(long)]
    dump_header: bool,

    /// Hide the progress bar and the batch summary
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<u8> {
    let options = ConvertOptions {
        dump_header: cli.dump_header,
    };

    let progress = if cli.quiet || cli.files.len() < 2 {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(cli.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .context("Invalid progress template")?,
        );
        pb
    };

    let started = Instant::now();
    let mut stdout = io::stdout().lock();
    let outcome = convert_batch(&cli.files, &options, &mut stdout, &progress)
        .context("Failed to write to stdout")?;
    progress.finish_and_clear();

    if !cli.quiet {
        let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
        writeln!(
            stdout,
            "Converted {} of {} file(s), {} failed, in {}",
            outcome.converted,
            cli.files.len(),
            outcome.failed,
            humantime::format_duration(elapsed)
        )
        .context("Failed to write to stdout")?;
    }

    Ok(outcome.exit_code)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
