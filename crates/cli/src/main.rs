#![deny(unsafe_code)]
//! CLI binary for palette-ramp.
//!
//! Subcommands:
//! - `render <input>` — read a swatch row, write the gradient sheet PNG
//! - `inspect <input>` — print the extracted palette as hex colors

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use palette_ramp_core::LayoutConfig;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "palette-ramp", about = "Palette gradient sheet generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the gradient sheet for a swatch-row image.
    Render {
        /// Source image with one swatch every `stride` pixels on its top row.
        input: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "palette.png")]
        output: PathBuf,

        /// Horizontal distance between color samples in the source image.
        #[arg(long, default_value_t = 1)]
        stride: usize,

        /// Width of one output cell in pixels.
        #[arg(short = 'W', long, default_value_t = 100)]
        cell_width: usize,

        /// Height of one output cell in pixels.
        #[arg(short = 'H', long, default_value_t = 100)]
        cell_height: usize,

        /// Swatches per column before wrapping.
        #[arg(short, long, default_value_t = 8)]
        per_column: usize,

        /// Vertical offset of gradient blocks within a cell.
        #[arg(short, long, default_value_t = 50)]
        gradient_offset: usize,
    },
    /// Print the palette extracted from a swatch-row image.
    Inspect {
        /// Source image with one swatch every `stride` pixels on its top row.
        input: PathBuf,

        /// Horizontal distance between color samples in the source image.
        #[arg(long, default_value_t = 1)]
        stride: usize,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            input,
            output,
            stride,
            cell_width,
            cell_height,
            per_column,
            gradient_offset,
        } => {
            let cfg = LayoutConfig {
                sample_stride: stride,
                cell_width,
                cell_height,
                per_column,
                gradient_offset_y: gradient_offset,
            };
            let summary = palette_ramp_io::render_file(&input, &output, &cfg)?;

            if cli.json {
                let info = serde_json::json!({
                    "input": input.display().to_string(),
                    "output": output.display().to_string(),
                    "colors": summary.colors,
                    "width": summary.width,
                    "height": summary.height,
                    "config": cfg,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} colors ({}x{}) -> {}",
                    summary.colors,
                    summary.width,
                    summary.height,
                    output.display()
                );
            }
        }
        Command::Inspect { input, stride } => {
            let palette = palette_ramp_io::extract_file(&input, stride)?;
            if cli.json {
                let info = serde_json::json!({
                    "input": input.display().to_string(),
                    "colors": palette.colors(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{} colors:", palette.len());
                for color in palette.colors() {
                    println!("  {}", color.to_hex());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
