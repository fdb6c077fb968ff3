//! Record normalization: canonical names, parsed timestamps, coerced numbers
//! and the full-round / tracked-player filters.

use crate::roster::Roster;
use crate::scorecard::RawRow;
use crate::season::{Season, SeasonType};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// UDisc writes times without a colon, e.g. "2025-12-22 0349".
pub const UDISC_DATETIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// A complete, tracked round ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRound {
    pub round_id: String,
    pub player: String,
    pub course: String,
    pub layout: String,
    /// Course and layout together; layouts of one course are distinct.
    pub course_key: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total: Option<f64>,
    pub plus_minus: String,
    pub rating: Option<f64>,
    pub season: Season,
}

impl NormalizedRound {
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    pub fn season_type(&self) -> SeasonType {
        self.season.season_type
    }

    pub fn season_label(&self) -> &str {
        &self.season.label
    }
}

pub fn parse_udisc_datetime(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), UDISC_DATETIME_FORMAT)
        .with_context(|| format!("Invalid UDisc timestamp '{}'", raw))
}

/// Lenient numeric parse: anything that is not a finite number is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn course_key(course: &str, layout: &str) -> String {
    format!("{} \u{2014} {}", course.trim(), layout.trim())
}

/// Stable identifier for a round (FNV-1a over the identifying fields).
pub fn round_id(player: &str, course_key: &str, raw_start: &str, raw_total: &str) -> String {
    let combined = format!("{}|{}|{}|{}", player, course_key, raw_start, raw_total);
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in combined.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash.to_string()
}

/// Counts of rows dropped by each filter, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub incomplete: usize,
    pub untracked: usize,
}

/// Normalize every qualifying row.
///
/// Timestamps are parsed for every row before filtering, so a malformed
/// export aborts the run even if the bad row belongs to an untracked player.
pub fn normalize_rounds(rows: &[RawRow], roster: &Roster) -> Result<Vec<NormalizedRound>> {
    let (rounds, stats) = normalize_rounds_with_stats(rows, roster)?;
    log::debug!(
        "Dropped {} incomplete and {} untracked rows",
        stats.incomplete,
        stats.untracked
    );
    Ok(rounds)
}

pub fn normalize_rounds_with_stats(
    rows: &[RawRow],
    roster: &Roster,
) -> Result<(Vec<NormalizedRound>, FilterStats)> {
    let mut rounds = Vec::new();
    let mut stats = FilterStats::default();

    for (idx, row) in rows.iter().enumerate() {
        let start = parse_udisc_datetime(&row.start_date)
            .with_context(|| format!("Row {}: bad StartDate", idx + 1))?;
        let end = parse_udisc_datetime(&row.end_date)
            .with_context(|| format!("Row {}: bad EndDate", idx + 1))?;

        let player = roster.canonical_name(&row.player_name);
        if !roster.is_tracked(&player) {
            stats.untracked += 1;
            continue;
        }
        if !row.is_full_round() {
            stats.incomplete += 1;
            continue;
        }

        let season = Season::for_date(start.date()).ok_or_else(|| {
            anyhow::anyhow!("Row {}: date {} outside the supported calendar", idx + 1, start.date())
        })?;
        let course_key = course_key(&row.course_name, &row.layout_name);
        let round_id = round_id(&player, &course_key, &row.start_date, &row.total);

        rounds.push(NormalizedRound {
            round_id,
            player,
            course: row.course_name.trim().to_string(),
            layout: row.layout_name.trim().to_string(),
            course_key,
            start,
            end,
            total: parse_number(&row.total),
            plus_minus: row.plus_minus.clone(),
            rating: parse_number(&row.round_rating),
            season,
        });
    }

    Ok((rounds, stats))
}
