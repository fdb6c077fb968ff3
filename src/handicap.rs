//! Rolling handicaps relative to the tracked group's average form.
//!
//! A player's form index is the mean of their best `best` ratings among their
//! most recent `window` rated rounds. The reference rating is the mean of all
//! defined form indexes, and the handicap is the distance from it in strokes,
//! rounded to the nearest half stroke and clamped to `cap`.

use crate::normalize::NormalizedRound;
use crate::roster::{HandicapRules, Roster};
use serde::Serialize;
use std::collections::HashMap;

pub const STATUS_OK: &str = "OK";
pub const STATUS_INSUFFICIENT: &str = "No handicap yet (insufficient rated rounds)";

/// One entry of `handicaps.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandicapEntry {
    pub player: String,
    pub handicap: Option<f64>,
    pub form_index: Option<f64>,
    pub reference_rating: Option<f64>,
    pub method: String,
    pub status: String,
}

impl HandicapRules {
    /// Form index from a player's rated rounds, in any order.
    pub fn form_index(&self, rounds: &[&NormalizedRound]) -> Option<f64> {
        let mut recent: Vec<&NormalizedRound> = rounds.iter().copied().filter(|r| r.is_rated()).collect();
        recent.sort_by(|a, b| b.start.cmp(&a.start));
        recent.truncate(self.window);

        let mut ratings: Vec<f64> = recent.iter().filter_map(|r| r.rating).collect();
        if ratings.len() < self.min_rounds || ratings.is_empty() {
            return None;
        }

        ratings.sort_by(|a, b| b.total_cmp(a));
        ratings.truncate(self.best);
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }

    /// Strokes from reference, to the nearest half (ties to even), clamped.
    pub fn strokes(&self, reference: f64, form_index: f64) -> f64 {
        let raw = (reference - form_index) / self.points_per_stroke;
        let halves = (raw * 2.0).round_ties_even() / 2.0;
        halves.clamp(-self.cap, self.cap)
    }
}

/// One entry per tracked player, in name order, including players with no rounds.
pub fn compute_handicaps(
    rounds: &[NormalizedRound],
    roster: &Roster,
    rules: &HandicapRules,
) -> Vec<HandicapEntry> {
    let mut by_player: HashMap<&str, Vec<&NormalizedRound>> = HashMap::new();
    for round in rounds.iter().filter(|r| r.is_rated()) {
        by_player.entry(round.player.as_str()).or_default().push(round);
    }

    let forms: Vec<(&str, Option<f64>)> = roster
        .tracked()
        .map(|player| {
            let form = by_player
                .get(player)
                .and_then(|player_rounds| rules.form_index(player_rounds));
            (player, form)
        })
        .collect();

    let defined: Vec<f64> = forms.iter().filter_map(|(_, form)| *form).collect();
    let reference = if defined.is_empty() {
        None
    } else {
        Some(defined.iter().sum::<f64>() / defined.len() as f64)
    };
    match reference {
        Some(r) => log::info!("Reference rating {:.1} from {} players", r, defined.len()),
        None => log::info!("No player has enough rated rounds for a reference rating"),
    }

    let method = rules.method();
    forms
        .into_iter()
        .map(|(player, form_index)| {
            let handicap = match (reference, form_index) {
                (Some(reference), Some(form)) => Some(rules.strokes(reference, form)),
                _ => None,
            };
            let status = if handicap.is_some() { STATUS_OK } else { STATUS_INSUFFICIENT };
            HandicapEntry {
                player: player.to_string(),
                handicap,
                form_index,
                reference_rating: reference,
                method: method.clone(),
                status: status.to_string(),
            }
        })
        .collect()
}
