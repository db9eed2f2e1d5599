//! Report rendering: tabular, CSV, JSON and JSON lines.

use std::io::Write;

use clap::ValueEnum;
use tabled::settings::{Padding, Style};
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::models::AuthorStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Tabular,
    Csv,
    Json,
    JsonLines,
}

const HEADER: [&str; 4] = ["Name", "Lines", "Commits", "Files"];

pub fn render<W: Write>(records: &[AuthorStats], format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Tabular => write_tabular(records, out)?,
        Format::Csv => write_csv(records, out)?,
        Format::Json => {
            serde_json::to_writer(&mut *out, records)?;
            writeln!(out)?;
        }
        Format::JsonLines => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Commits")]
    commits: usize,
    #[tabled(rename = "Files")]
    files: usize,
}

/// Borderless left-aligned columns separated by one space, no trailing blanks.
fn write_tabular<W: Write>(records: &[AuthorStats], out: &mut W) -> std::io::Result<()> {
    let rows = records.iter().map(|record| Row {
        name: &record.name,
        lines: record.lines,
        commits: record.commits,
        files: record.files,
    });

    let mut table = Table::new(rows);
    table.with(Style::empty()).with(Padding::new(0, 1, 0, 0));

    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_csv<W: Write>(records: &[AuthorStats], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER.join(","))?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{}",
            csv_field(&record.name),
            record.lines,
            record.commits,
            record.files
        )?;
    }
    Ok(())
}
