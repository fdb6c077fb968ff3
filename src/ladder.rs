//! Season ladders: sum of each player's best rated rounds per season.

use crate::normalize::NormalizedRound;
use crate::roster::BEST10_COUNT;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry of `ladders.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderEntry {
    pub season_label: String,
    pub player: String,
    pub season_total_best10: Option<f64>,
    pub rated_rounds_in_season: usize,
    pub counted_rounds: usize,
    pub best_round_rating: Option<f64>,
}

pub fn compute_ladders(rounds: &[NormalizedRound]) -> Vec<LadderEntry> {
    compute_ladders_with_count(rounds, BEST10_COUNT)
}

/// Ladder entries ordered by season label, then player. Only rated rounds
/// contribute, so a (season, player) pair without one produces no entry.
pub fn compute_ladders_with_count(rounds: &[NormalizedRound], best_count: usize) -> Vec<LadderEntry> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for round in rounds {
        if let Some(rating) = round.rating {
            groups
                .entry((round.season_label(), round.player.as_str()))
                .or_default()
                .push(rating);
        }
    }

    groups
        .into_iter()
        .map(|((season_label, player), mut ratings)| {
            ratings.sort_by(|a, b| b.total_cmp(a));
            let counted = &ratings[..ratings.len().min(best_count)];
            LadderEntry {
                season_label: season_label.to_string(),
                player: player.to_string(),
                season_total_best10: if counted.is_empty() {
                    None
                } else {
                    Some(counted.iter().sum())
                },
                rated_rounds_in_season: ratings.len(),
                counted_rounds: counted.len(),
                best_round_rating: ratings.first().copied(),
            }
        })
        .collect()
}
