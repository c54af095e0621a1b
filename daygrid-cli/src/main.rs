mod cli_modes;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli_modes::{generate_mode, menu_mode};
use daygrid_core::Generator;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::process::{self, ExitCode};

/// daygrid — scaffold a folder per calendar day
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the base directory folders are generated under
    #[arg(long, short, exclusive = true)]
    path: bool,
    /// Generate folders for every month of this year (e.g. `daygrid --year 2026`)
    #[arg(long, short)]
    year: Option<i32>,
    /// Generate folders for a single month, 1-12 (e.g. `daygrid --year 2026 --month 3`)
    #[arg(long, short, requires = "year")]
    month: Option<u32>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daygrid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // An interrupt mid-run leaves any folders already created intact; the
    // tool is idempotent, so a re-run picks up where this one stopped.
    ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled.");
        process::exit(130);
    })
    .context("installing the interrupt handler")?;

    let generator = Generator::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions { use_color }));

    if cli.path {
        renderer.print_info(&format!("{}", generator.config.base_dir.display()));
        return Ok(());
    }

    if let Some(year) = cli.year {
        return generate_mode(year, cli.month, &renderer, &generator);
    }

    menu_mode(&renderer, &generator)
}
