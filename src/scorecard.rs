//! UDisc scorecard export rows and the CSV reader that produces them.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// Highest hole column an export can carry.
pub const MAX_HOLES: usize = 27;
/// Holes that make up a full round.
pub const ROUND_HOLES: usize = 18;

/// The two spellings UDisc has used for the plus/minus header.
const PLUS_MINUS_HEADERS: [&str; 2] = ["+/\u{2212}", "+/-"];

/// One scorecard row exactly as exported; nothing is parsed yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub player_name: String,
    pub course_name: String,
    pub layout_name: String,
    pub start_date: String,
    pub end_date: String,
    pub total: String,
    pub round_rating: String,
    pub plus_minus: String,
    /// `holes[0]` is Hole1. Always `MAX_HOLES` long; empty cells are `None`.
    pub holes: Vec<Option<String>>,
}

impl RawRow {
    /// Score cell for a 1-based hole number.
    pub fn hole(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.holes.get(idx))
            .and_then(|cell| cell.as_deref())
    }

    /// Holes 1-18 all scored and nothing recorded past hole 18.
    pub fn is_full_round(&self) -> bool {
        let all_scored = (1..=ROUND_HOLES).all(|n| self.hole(n).is_some());
        let has_extra = (ROUND_HOLES + 1..=MAX_HOLES).any(|n| self.hole(n).is_some());
        all_scored && !has_extra
    }
}

/// Column indices for the fields we read
struct ColumnIndices {
    player_name: usize,
    start_date: usize,
    end_date: usize,
    course_name: usize,
    layout_name: usize,
    total: usize,
    round_rating: usize,
    plus_minus: Option<usize>,
    holes: Vec<Option<usize>>,
}

fn find_required_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    let find = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow::anyhow!("Required column '{}' not found", name))
    };

    let find_optional = |name: &str| -> Option<usize> { headers.iter().position(|h| h.trim() == name) };

    let mut holes = Vec::with_capacity(MAX_HOLES);
    for number in 1..=MAX_HOLES {
        let name = format!("Hole{}", number);
        // Exports only carry as many hole columns as the longest layout played
        if number <= ROUND_HOLES {
            holes.push(Some(find(&name)?));
        } else {
            holes.push(find_optional(&name));
        }
    }

    let plus_minus = PLUS_MINUS_HEADERS.iter().find_map(|name| find_optional(name));
    if plus_minus.is_none() {
        log::warn!("No plus/minus column found; publishing empty values");
    }

    Ok(ColumnIndices {
        player_name: find("PlayerName")?,
        start_date: find("StartDate")?,
        end_date: find("EndDate")?,
        course_name: find("CourseName")?,
        layout_name: find("LayoutName")?,
        total: find("Total")?,
        round_rating: find("RoundRating")?,
        plus_minus,
        holes,
    })
}

fn extract_row(record: &StringRecord, cols: &ColumnIndices) -> RawRow {
    let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

    let holes = cols
        .holes
        .iter()
        .map(|idx| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
        })
        .collect();

    RawRow {
        player_name: field(cols.player_name),
        course_name: field(cols.course_name),
        layout_name: field(cols.layout_name),
        start_date: field(cols.start_date),
        end_date: field(cols.end_date),
        total: field(cols.total),
        round_rating: field(cols.round_rating),
        plus_minus: cols.plus_minus.map(field).unwrap_or_default(),
        holes,
    }
}

/// Read every row of a scorecard export.
pub fn read_scorecards<R: std::io::Read>(source: R) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let cols = find_required_columns(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV row {}", idx + 1))?;
        rows.push(extract_row(&record, &cols));
    }
    Ok(rows)
}

/// Read a scorecard export from disk. A missing file is fatal.
pub fn read_scorecards_file(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        anyhow::bail!("CSV not found at: {}", path.display());
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input CSV {}", path.display()))?;
    read_scorecards(file)
}
