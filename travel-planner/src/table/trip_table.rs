//! Flattened trip tables and their renderings.

use std::fmt;
use std::io;

use super::row::{COLUMNS, NormalizedStopRow};

/// Output rendering for a trip table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text grid
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of row objects
    Json,
}

/// The ordered rows of one flattened trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    rows: Vec<NormalizedStopRow>,
}

impl TripTable {
    pub fn new(rows: Vec<NormalizedStopRow>) -> Self {
        Self { rows }
    }

    /// Column names, in output order.
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[NormalizedStopRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as CSV. The header is written even for an empty table.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(COLUMNS)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the table as a JSON array of row objects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows)
    }

    /// Render the table in the given format.
    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Table => Ok(self.to_string()),
            OutputFormat::Csv => {
                let mut buf = Vec::new();
                self.write_csv(&mut buf)?;
                String::from_utf8(buf).map_err(|e| RenderError::Utf8(e.to_string()))
            }
            OutputFormat::Json => Ok(self.to_json()?),
        }
    }
}

/// Render several tables, one per trip, in the given format.
///
/// The grid and CSV renderings repeat the header for each trip and separate
/// trips with a blank line; JSON renders an array of row arrays.
pub fn render_tables(tables: &[TripTable], format: OutputFormat) -> Result<String, RenderError> {
    if format == OutputFormat::Json {
        let rows: Vec<&[NormalizedStopRow]> = tables.iter().map(TripTable::rows).collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = String::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if format == OutputFormat::Table {
            out.push_str(&format!("Trip {}\n", i + 1));
        }
        out.push_str(&table.render(format)?);
    }
    Ok(out)
}

/// Failure to render a table.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered output is not UTF-8: {0}")]
    Utf8(String),
}

impl fmt::Display for TripTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 10]> = self.rows.iter().map(NormalizedStopRow::cells).collect();

        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, &COLUMNS.map(str::to_string), &widths)?;
        for row in &cells {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    cells: &[String; 10],
    widths: &[usize; 10],
) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
