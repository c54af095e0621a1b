use crate::render::Renderer;
use anyhow::{Result, bail};
use chrono::Datelike;
use daygrid_core::{GenerateResult, Generator};

/// Flag-driven generation: a whole year, or a single month when `month` is set.
pub fn generate_mode(
    year: i32,
    month: Option<u32>,
    renderer: &Renderer,
    generator: &Generator,
) -> Result<()> {
    let result = match month {
        Some(month) => {
            if !(1..=12).contains(&month) {
                bail!("month must be between 1 and 12, got {month}");
            }
            renderer.print_generating(year, month);
            generator.generate_month(year, month)
        }
        None => {
            renderer.print_info(&format!("Generating folders for Year {year}..."));
            generator.generate_year(year)
        }
    };
    print_result(renderer, &result, month.is_none());
    Ok(())
}

/// Renders a generation result: created folders in day order, grouped under
/// a header per month in year mode, then any per-day failures.
pub fn print_result(renderer: &Renderer, result: &GenerateResult, with_month_headers: bool) {
    let mut current_month = 0;
    for folder in &result.folders {
        if with_month_headers && folder.date.month() != current_month {
            current_month = folder.date.month();
            renderer.print_generating(folder.date.year(), current_month);
        }
        renderer.print_created(&folder.path);
    }
    renderer.print_info(&format!("{} folders created.", result.folders.len()));
    if !result.errors.is_empty() {
        renderer.print_errors(&result.errors);
    }
}
