//! sweeps - command line WAVE file resampler and bit-depth converter.

use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use sweeps_core::{BitDepth, convert, resample};
use sweeps_io::{read_wav, write_wav};

/// Lowest sample rate the front-end accepts; the core itself takes any
/// positive rate, but nothing below this is meaningful audio.
const MIN_OUTPUT_RATE: u32 = 8000;

#[derive(Parser)]
#[command(name = "sweeps")]
#[command(author, version, about = "Offline WAVE resampler and bit-depth converter", long_about = None)]
struct Cli {
    /// Input WAV file
    #[arg(value_name = "WAVE_FILE")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUT_FILE")]
    output: PathBuf,

    /// Target sample rate in Hz (8000 minimum)
    #[arg(value_name = "NEW_FREQ")]
    new_freq: u32,

    /// Target bit depth (8, 16, 24, or 32); preserved when omitted
    #[arg(value_name = "NEW_BITS")]
    new_bits: Option<u16>,
}

fn main() -> ExitCode {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.new_freq < MIN_OUTPUT_RATE {
        bail!("invalid frequency: {}", cli.new_freq);
    }
    let target_depth = match cli.new_bits {
        Some(bits) => Some(
            BitDepth::from_bits(bits).with_context(|| format!("invalid bitdepth: {bits}"))?,
        ),
        None => None,
    };

    let input = read_wav(&cli.input)
        .with_context(|| format!("loading '{}'", cli.input.display()))?;

    let frames = input.frames();
    let seconds = input.duration_secs();
    println!("converting {frames} samples ({seconds:.2} seconds).");

    let start = Instant::now();
    let mut output = resample(&input, cli.new_freq)?;
    if let Some(depth) = target_depth {
        if depth != output.depth() {
            output = convert(&output, depth)?;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    println!("complete.");
    println!(
        "conversion from {}[{}] to {}[{}] in {:.2} seconds.",
        input.sample_rate(),
        input.channels(),
        output.sample_rate(),
        output.channels(),
        elapsed
    );
    println!("\t{:.2}x realtime.", seconds / elapsed);

    write_wav(&cli.output, &output)
        .with_context(|| format!("writing '{}'", cli.output.display()))?;

    Ok(())
}
