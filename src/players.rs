//! Per-player round counts and rating extremes.

use crate::normalize::NormalizedRound;
use serde::Serialize;
use std::collections::BTreeMap;

/// One entry of `players.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player: String,
    pub rounds: usize,
    pub rated_rounds: usize,
    pub best_rating: Option<f64>,
    pub avg_rating: Option<f64>,
}

#[derive(Default)]
struct Tally {
    rounds: usize,
    ratings: Vec<f64>,
}

/// Summaries for every player with at least one round, in name order.
pub fn summarize_players(rounds: &[NormalizedRound]) -> Vec<PlayerSummary> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for round in rounds {
        let tally = tallies.entry(round.player.as_str()).or_default();
        tally.rounds += 1;
        if let Some(rating) = round.rating {
            tally.ratings.push(rating);
        }
    }

    tallies
        .into_iter()
        .map(|(player, tally)| {
            let rated = tally.ratings.len();
            PlayerSummary {
                player: player.to_string(),
                rounds: tally.rounds,
                rated_rounds: rated,
                best_rating: tally.ratings.iter().copied().reduce(f64::max),
                avg_rating: if rated == 0 {
                    None
                } else {
                    Some(tally.ratings.iter().sum::<f64>() / rated as f64)
                },
            }
        })
        .collect()
}
