//! Pipeline functions for programmatic use by the CLI and tests.
//!
//! `derive` is the pure transform from raw rows to the four published
//! documents; `build` wraps it with reading the export and writing the files.

use crate::handicap::{compute_handicaps, HandicapEntry};
use crate::ladder::{compute_ladders, LadderEntry};
use crate::normalize::normalize_rounds;
use crate::players::{summarize_players, PlayerSummary};
use crate::roster::{HandicapRules, Roster};
use crate::rounds::{project_rounds, RoundRecord};
use crate::scorecard::{read_scorecards_file, RawRow};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROUNDS_FILE: &str = "rounds.json";
pub const LADDERS_FILE: &str = "ladders.json";
pub const HANDICAPS_FILE: &str = "handicaps.json";
pub const PLAYERS_FILE: &str = "players.json";

// ============================================================================
// Derive
// ============================================================================

/// The four documents produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutputs {
    pub rounds: Vec<RoundRecord>,
    pub ladders: Vec<LadderEntry>,
    pub handicaps: Vec<HandicapEntry>,
    pub players: Vec<PlayerSummary>,
}

/// Normalize the raw rows once and project them four ways.
pub fn derive(rows: &[RawRow], roster: &Roster, rules: &HandicapRules) -> Result<BuildOutputs> {
    let normalized = normalize_rounds(rows, roster)?;
    log::info!("{} of {} rows are full tracked rounds", normalized.len(), rows.len());

    Ok(BuildOutputs {
        rounds: project_rounds(&normalized),
        ladders: compute_ladders(&normalized),
        handicaps: compute_handicaps(&normalized, roster, rules),
        players: summarize_players(&normalized),
    })
}

// ============================================================================
// Build
// ============================================================================

/// Configuration for a full build.
pub struct BuildConfig {
    /// UDisc scorecard export
    pub input: PathBuf,
    /// Directory receiving the JSON documents
    pub out_dir: PathBuf,
}

/// Read the export, derive everything, and write all four documents.
/// Returns the written paths in publication order.
pub fn build(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    build_with(config, Roster::standard(), &HandicapRules::default())
}

pub fn build_with(config: &BuildConfig, roster: &Roster, rules: &HandicapRules) -> Result<Vec<PathBuf>> {
    let rows = read_scorecards_file(&config.input)?;
    log::info!("Read {} rows from {}", rows.len(), config.input.display());

    let outputs = derive(&rows, roster, rules)?;
    write_outputs(&config.out_dir, &outputs)
}

/// Serialize every document before touching disk, then write each to a
/// temporary sibling and rename it into place. On failure the remaining temp
/// files are removed; documents already renamed stay published.
pub fn write_outputs(out_dir: &Path, outputs: &BuildOutputs) -> Result<Vec<PathBuf>> {
    let documents = [
        (ROUNDS_FILE, to_json(&outputs.rounds)?),
        (LADDERS_FILE, to_json(&outputs.ladders)?),
        (HANDICAPS_FILE, to_json(&outputs.handicaps)?),
        (PLAYERS_FILE, to_json(&outputs.players)?),
    ];

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(documents.len());
    for (name, json) in &documents {
        let tmp = out_dir.join(format!("{}.tmp", name));
        if let Err(err) = fs::write(&tmp, json) {
            discard_staged(&staged);
            return Err(err).with_context(|| format!("Failed to write {}", tmp.display()));
        }
        staged.push((tmp, out_dir.join(name)));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (idx, (tmp, path)) in staged.iter().enumerate() {
        if let Err(err) = fs::rename(tmp, path) {
            discard_staged(&staged[idx..]);
            return Err(err).with_context(|| format!("Failed to write {}", path.display()));
        }
        log::info!("Wrote {}", path.display());
        written.push(path.clone());
    }
    Ok(written)
}

/// Best-effort removal of temp files that were never renamed.
fn discard_staged(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        if let Err(err) = fs::remove_file(tmp) {
            log::warn!("Could not remove {}: {}", tmp.display(), err);
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
