//! The interactive menu, the default surface when no flags are given.

use super::generate_mode::print_result;
use crate::render::Renderer;
use anyhow::{Context, Result, bail};
use daygrid_core::Generator;
use std::io::{self, Write};

pub fn menu_mode(renderer: &Renderer, generator: &Generator) -> Result<()> {
    println!("Folder Generation Tool");
    println!("======================");
    println!("1. Generate for a full year");
    println!("2. Generate for a specific month");

    let choice = prompt("Enter choice (1 or 2): ")?;
    match choice.as_str() {
        "1" => year_choice(renderer, generator),
        "2" => month_choice(renderer, generator),
        _ => {
            println!("Invalid choice.");
            Ok(())
        }
    }
}

fn year_choice(renderer: &Renderer, generator: &Generator) -> Result<()> {
    let year_input = prompt("Enter year (YYYY): ")?;
    let Some(year) = parse_year(&year_input) else {
        println!("Invalid year format.");
        return Ok(());
    };

    renderer.print_info(&format!("Generating folders for Year {year}..."));
    let result = generator.generate_year(year);
    print_result(renderer, &result, true);
    Ok(())
}

fn month_choice(renderer: &Renderer, generator: &Generator) -> Result<()> {
    let year_input = prompt("Enter year (YYYY): ")?;
    let month_input = prompt("Enter month (1-12): ")?;

    let (Some(year), Some(month)) = (parse_year(&year_input), parse_month(&month_input)) else {
        println!("Invalid input format.");
        return Ok(());
    };
    if !(1..=12).contains(&month) {
        println!("Month must be between 1 and 12.");
        return Ok(());
    }

    renderer.print_generating(year, month);
    let result = generator.generate_month(year, month);
    print_result(renderer, &result, false);
    Ok(())
}

/// Prints `message` as a prompt and reads one trimmed line from stdin.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing the prompt")?;
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("reading input")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Years are accepted as ASCII decimal digits only, like the prompt says.
fn parse_year(input: &str) -> Option<i32> {
    if !all_digits(input) {
        return None;
    }
    input.parse().ok()
}

fn parse_month(input: &str) -> Option<u32> {
    if !all_digits(input) {
        return None;
    }
    input.parse().ok()
}

fn all_digits(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_accepts_digits_only() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year("800"), Some(800));
        assert!(parse_year("").is_none());
        assert!(parse_year("20x4").is_none());
        assert!(parse_year("-2024").is_none());
        assert!(parse_year("2024 ").is_none());
    }

    #[test]
    fn parse_year_rejects_numbers_too_big_for_the_type() {
        assert!(parse_year("99999999999999999999").is_none());
    }

    #[test]
    fn parse_month_accepts_digits_only() {
        assert_eq!(parse_month("1"), Some(1));
        assert_eq!(parse_month("12"), Some(12));
        // Range is checked by the caller, not the parser.
        assert_eq!(parse_month("13"), Some(13));
        assert!(parse_month("one").is_none());
        assert!(parse_month("1.5").is_none());
    }
}
