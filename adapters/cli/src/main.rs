#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that surveys a toroidal grid and prints one
//! exemplar per congruence class.
//!
//! The grid is read from a JSON file when `--grid` is given and entered
//! interactively otherwise.

mod grid_file;
mod prompt;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use torus_shapes_rendering::{write_blocks, RenderStyle, Renderer};
use torus_shapes_system_survey::survey_rows;

use crate::prompt::Console;

/// Command-line arguments accepted by the binary.
#[derive(Debug, Parser)]
#[command(
    name = "torus-shapes",
    about = "Lists the distinct shapes drawn on a toroidal grid"
)]
struct Args {
    /// JSON file holding the grid as an array of 0/1 rows.
    #[arg(long, value_name = "FILE")]
    grid: Option<PathBuf>,
    /// TOML file overriding the render glyphs and margin.
    #[arg(long, value_name = "FILE")]
    style: Option<PathBuf>,
    /// Print the direction signature after each rendered shape.
    #[arg(long)]
    signatures: bool,
}

/// Entry point for the torus-shapes command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())
}

fn run<R, W>(args: &Args, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let style = match &args.style {
        Some(path) => RenderStyle::load(path)?,
        None => RenderStyle::default(),
    };

    let rows = match &args.grid {
        Some(path) => grid_file::load(path)?,
        None => Console::new(input, &mut output)
            .read_grid()
            .context("failed to read grid from the console")?,
    };

    let registry = survey_rows(&rows).context("failed to build grid")?;
    let row_count = rows.len();
    let column_count = rows.first().map_or(0, Vec::len);
    info!(
        "found {} distinct shapes on a {row_count}x{column_count} grid",
        registry.len()
    );

    let renderer = Renderer::new(style);
    for shape in registry.iter() {
        let block = renderer.render(shape, row_count, column_count);
        write_blocks([&block], &mut output)?;
        if args.signatures {
            let written = if shape.len() > 1 {
                writeln!(output, "signature: {shape}")
            } else {
                writeln!(output, "signature: none")
            };
            written.context("failed to write shape signature")?;
        }
    }
    output.flush().context("failed to flush output")
}
