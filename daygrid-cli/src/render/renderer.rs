use daygrid_core::GenerateError;
use std::path::Path;
use termimad::crossterm::style::{Color, Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            opts: match config {
                Some(config) => config,
                None => RenderOptions { use_color: true },
            },
        }
    }

    pub fn print_info(&self, message: &str) {
        println!("{message}");
    }

    /// `Generating folders for 2026-03...`
    pub fn print_generating(&self, year: i32, month: u32) {
        self.print_info(&format!("Generating folders for {year}-{month:02}..."));
    }

    /// `  Created: posts/2026/03/05-Thursday`
    pub fn print_created(&self, path: &Path) {
        let mut shown = path.display().to_string();
        if self.opts.use_color {
            shown = shown.with(Color::Green).to_string();
        }
        println!("  Created: {shown}");
    }

    pub fn print_errors(&self, errors: &[GenerateError]) {
        println!();
        self.print_info("Errors:");
        for error in errors {
            let message = match error {
                GenerateError::FileError { path, error } => {
                    format!("  Error creating {}: {:#}", path.display(), error)
                }
                GenerateError::InvalidDate { input, error } => {
                    format!("  Could not generate '{input}': {error}")
                }
            };
            if self.opts.use_color {
                println!("{}", message.with(Color::Red));
            } else {
                println!("{message}");
            }
        }
    }
}
