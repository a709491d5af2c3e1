//! Discount allocation CLI
//!
//! Reads a `DiscountInput` JSON file, runs the allocation engine and
//! writes the formatted result to a file or stdout.
//!
//! Usage:
//!   allocate <input.json> [output.json]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use discount_allocator_core::DiscountInput;

#[derive(Parser, Debug)]
#[command(
    name = "allocate",
    version,
    about = "Run the discount allocation engine on a JSON input file"
)]
struct Cli {
    /// Path to a DiscountInput JSON file.
    input: PathBuf,
    /// Optional output path; results go to stdout when omitted.
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli.input, cli.output.as_deref())
}

fn run(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read input file {}", input_path.display()))?;
    let input: DiscountInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {} as a DiscountInput", input_path.display()))?;
    input.validate().context("invalid allocation input")?;

    let output = discount_allocator_engine::allocate(&input).context("allocation failed")?;
    let rendered =
        serde_json::to_string_pretty(&output).context("failed to serialize the result")?;

    match output_path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Results written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
