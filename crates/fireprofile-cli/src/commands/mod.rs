pub mod completion;
pub mod config;
pub mod domain;
pub mod open;
pub mod profile;
pub mod prompt;
pub mod resolve;

use anyhow::Result;
use console::style;

/// Print validation problems as a warning and succeed; propagate anything else
pub(crate) fn warn_on_validation(result: fireprofile_core::Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_validation() => {
            eprintln!("{} {}", style("Warning:").yellow().bold(), e);
            Ok(())
        }
        other => Ok(other?),
    }
}

/// Left-align `rows` into columns under `headers`
pub(crate) fn format_columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        let mut line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        line.truncate(line.trim_end().len());
        line.push('\n');
        line
    };

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut output = line(&header);
    output.push_str(&line(&separator));
    for row in rows {
        output.push_str(&line(row));
    }
    output
}
