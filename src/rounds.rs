//! Published per-round records.

use crate::normalize::NormalizedRound;
use crate::season::SeasonType;
use serde::Serialize;

const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One entry of `rounds.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    pub round_id: String,
    pub player: String,
    pub course: String,
    pub layout: String,
    pub course_key: String,
    pub start: String,
    pub end: String,
    pub total: Option<f64>,
    pub plus_minus: String,
    pub rating: Option<f64>,
    pub is_rated: bool,
    pub season_type: SeasonType,
    pub season_label: String,
}

impl From<&NormalizedRound> for RoundRecord {
    fn from(round: &NormalizedRound) -> Self {
        RoundRecord {
            round_id: round.round_id.clone(),
            player: round.player.clone(),
            course: round.course.clone(),
            layout: round.layout.clone(),
            course_key: round.course_key.clone(),
            start: round.start.format(ISO_DATETIME_FORMAT).to_string(),
            end: round.end.format(ISO_DATETIME_FORMAT).to_string(),
            total: round.total,
            plus_minus: round.plus_minus.clone(),
            rating: round.rating,
            is_rated: round.is_rated(),
            season_type: round.season_type(),
            season_label: round.season_label().to_string(),
        }
    }
}

/// Project every round, oldest first. Rounds starting at the same minute keep input order.
pub fn project_rounds(rounds: &[NormalizedRound]) -> Vec<RoundRecord> {
    let mut ordered: Vec<&NormalizedRound> = rounds.iter().collect();
    ordered.sort_by_key(|round| round.start);
    ordered.into_iter().map(RoundRecord::from).collect()
}
