//! Target squad CSV loading
//!
//! Expects a header row with `player_name` and `p` columns, in any order.
//! Extra columns are ignored; fields may be quoted. Probability bounds are
//! not checked here; the distribution builder owns that.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use crate::error::{Result, SimError};
use crate::models::TargetItem;

const NAME_COLUMN: &str = "player_name";
const PROBABILITY_COLUMN: &str = "p";

/// Load target items from a CSV file
pub fn load_target_items_csv(path: impl AsRef<Path>) -> Result<Vec<TargetItem>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_target_items(&contents)?;
    info!("Loaded {} target items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse target items from CSV text
pub fn parse_target_items(contents: &str) -> Result<Vec<TargetItem>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(contents.as_bytes());

    let header = reader.headers().map_err(|e| malformed(1, &e))?.clone();
    if header.iter().all(str::is_empty) {
        return Err(SimError::EmptyInput);
    }
    let name_idx = column_index(&header, NAME_COLUMN)?;
    let p_idx = column_index(&header, PROBABILITY_COLUMN)?;

    let mut items = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                let line = e.position().map_or(0, |pos| pos.line() as usize);
                return Err(malformed(line, &e));
            }
        }
        let line_no = record.position().map_or(0, |pos| pos.line() as usize);

        let field = |idx: usize, column: &str| {
            record.get(idx).ok_or_else(|| SimError::MalformedRow {
                line: line_no,
                message: format!("missing '{}' field", column),
            })
        };

        let name = field(name_idx, NAME_COLUMN)?;
        let raw_p = field(p_idx, PROBABILITY_COLUMN)?;
        let probability = raw_p.parse::<f64>().map_err(|e| SimError::MalformedRow {
            line: line_no,
            message: format!("invalid probability '{}': {}", raw_p, e),
        })?;

        items.push(TargetItem::new(name, probability));
    }

    if items.is_empty() {
        return Err(SimError::EmptyInput);
    }

    Ok(items)
}

fn column_index(header: &StringRecord, name: &'static str) -> Result<usize> {
    header
        .iter()
        .position(|c| c == name)
        .ok_or(SimError::MissingColumn(name))
}

fn malformed(line: usize, err: &csv::Error) -> SimError {
    SimError::MalformedRow {
        line,
        message: err.to_string(),
    }
}
