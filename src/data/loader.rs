use std::path::Path;

use super::error::LoadError;
use super::model::{PointFile, PointTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a point file and extract its X/Y/Z columns.
pub fn load_point_file(path: &Path) -> Result<PointFile, LoadError> {
    let table = load_table(path)?;
    let file = PointFile::new(path, &table)?;
    log::info!(
        "Loaded {} points ({} columns) from {}",
        file.cloud.len(),
        file.columns,
        path.display()
    );
    Ok(file)
}

/// Read a whitespace-delimited numeric table from disk.
///
/// The whole file is read before parsing, so the handle is closed by the time
/// parsing starts.
pub fn load_table(path: &Path) -> Result<PointTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        LoadError::Encoding {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    parse_table(&text)
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Layout: one row per line, values separated by any run of whitespace.
///
/// ```text
/// 0.12 -0.03 0.25
/// 0.08  0.11 -0.19   7
/// ```
///
/// Blank lines are skipped. There is no header and no comment syntax. The
/// first row fixes the column count; every following row must match it.
pub fn parse_table(text: &str) -> Result<PointTable, LoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut columns: Option<usize> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = parse_row(line, line_no)?;

        match columns {
            None => columns = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(LoadError::Ragged {
                    line: line_no,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(PointTable::from_rows(rows, columns.unwrap_or(0)))
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>, LoadError> {
    line.split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| LoadError::Parse {
                line: line_no,
                column: j + 1,
                token: tok.to_string(),
            })
        })
        .collect()
}
