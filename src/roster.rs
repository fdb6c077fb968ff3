//! Static configuration: who is tracked, known name misspellings, and the
//! numeric constants behind ladders and handicaps.

use std::collections::{BTreeSet, HashMap};

/// Number of best rated rounds that count toward a season ladder total.
pub const BEST10_COUNT: usize = 10;

/// Minimum rated rounds in the window before a form index exists.
pub const HANDICAP_MIN_ROUNDS: usize = 5;
/// How many of the most recent rated rounds are considered.
pub const HANDICAP_WINDOW: usize = 20;
/// How many of the window's best ratings are averaged.
pub const HANDICAP_BEST: usize = 8;
/// Rating points that equal one stroke.
pub const HANDICAP_POINTS_PER_STROKE: f64 = 10.0;
/// Handicaps are clamped to +/- this many strokes.
pub const HANDICAP_CAP: f64 = 6.0;

const TRACKED_PLAYERS: &[&str] = &["Armygeddon", "Jobby", "Miza", "Bucis", "Youare22"];

/// (misspelling, canonical name)
const ALIASES: &[(&str, &str)] = &[("Misa", "Miza")];

lazy_static::lazy_static! {
    static ref STANDARD_ROSTER: Roster = Roster::new(TRACKED_PLAYERS, ALIASES);
}

/// The set of tracked players plus the alias table used to canonicalize names.
#[derive(Debug, Clone)]
pub struct Roster {
    tracked: BTreeSet<String>,
    aliases: HashMap<String, String>,
}

impl Roster {
    pub fn new(tracked: &[&str], aliases: &[(&str, &str)]) -> Self {
        Roster {
            tracked: tracked.iter().map(|name| name.to_string()).collect(),
            aliases: aliases
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// The group's roster, built once per process.
    pub fn standard() -> &'static Roster {
        &STANDARD_ROSTER
    }

    /// Trim whitespace, then resolve known misspellings.
    pub fn canonical_name(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.aliases.get(trimmed) {
            Some(canonical) => canonical.clone(),
            None => trimmed.to_string(),
        }
    }

    pub fn is_tracked(&self, canonical: &str) -> bool {
        self.tracked.contains(canonical)
    }

    /// Tracked players in name order.
    pub fn tracked(&self) -> impl Iterator<Item = &str> {
        self.tracked.iter().map(String::as_str)
    }
}

/// Parameters of the rolling handicap calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct HandicapRules {
    pub min_rounds: usize,
    pub window: usize,
    pub best: usize,
    pub points_per_stroke: f64,
    pub cap: f64,
}

impl Default for HandicapRules {
    fn default() -> Self {
        Self {
            min_rounds: HANDICAP_MIN_ROUNDS,
            window: HANDICAP_WINDOW,
            best: HANDICAP_BEST,
            points_per_stroke: HANDICAP_POINTS_PER_STROKE,
            cap: HANDICAP_CAP,
        }
    }
}

impl HandicapRules {
    /// Override the rolling window size
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Override the minimum number of rated rounds
    pub fn with_min_rounds(mut self, min_rounds: usize) -> Self {
        self.min_rounds = min_rounds;
        self
    }

    /// Human-readable description published alongside every handicap.
    pub fn method(&self) -> String {
        format!(
            "best {} of last {} rated rounds; {} pts = 1 stroke",
            self.best, self.window, self.points_per_stroke
        )
    }
}
