//! Integration test for the full build
//!
//! Writes a small UDisc export into a temp directory, runs the same build the
//! binary runs, and checks the four JSON documents it produces.

use serde_json::Value;
use std::fs;
use std::path::Path;
use udisc_ladder::pipeline::{build, BuildConfig};

const HOLE_COLUMNS: usize = 21;

fn header() -> String {
    let mut cols: Vec<String> = [
        "PlayerName",
        "CourseName",
        "LayoutName",
        "StartDate",
        "EndDate",
        "Total",
        "+/\u{2212}",
        "RoundRating",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    cols.extend((1..=HOLE_COLUMNS).map(|n| format!("Hole{}", n)));
    cols.join(",")
}

/// A scorecard line with `played` holes of 3 strokes each.
fn line(player: &str, layout: &str, start: &str, rating: &str, played: usize) -> String {
    let mut cols = vec![
        player.to_string(),
        "Maple Hill".to_string(),
        layout.to_string(),
        start.to_string(),
        start.to_string(),
        (played * 3).to_string(),
        "0".to_string(),
        rating.to_string(),
    ];
    cols.extend((1..=HOLE_COLUMNS).map(|n| if n <= played { "3".to_string() } else { String::new() }));
    cols.join(",")
}

fn write_export(path: &Path, lines: &[String]) {
    let mut csv = header();
    csv.push('\n');
    for l in lines {
        csv.push_str(l);
        csv.push('\n');
    }
    fs::write(path, csv).unwrap();
}

fn read_json(dir: &Path, name: &str) -> Vec<Value> {
    let text = fs::read_to_string(dir.join(name)).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_build_writes_all_documents() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("UDisc Scorecards.csv");
    let out_dir = dir.path().join("_data");

    let mut lines = Vec::new();
    // Jobby: six rated Winter rounds, one unrated
    for (day, rating) in [(1, "910"), (2, "930"), (3, "920"), (4, "940"), (5, "900"), (6, "950")] {
        lines.push(line("Jobby", "Gold", &format!("2025-05-{:02} 0900", day), rating, 18));
    }
    lines.push(line("Jobby", "Gold", "2025-05-07 0900", "", 18));
    // Misa is an alias for Miza; five rated Summer rounds
    for day in 1..=5 {
        lines.push(line("Misa", "Blue", &format!("2025-12-{:02} 1400", day), "880", 18));
    }
    // Excluded: nine holes, twenty-one holes, untracked player
    lines.push(line("Jobby", "Gold", "2025-05-08 0900", "999", 9));
    lines.push(line("Jobby", "Gold", "2025-05-09 0900", "999", 21));
    lines.push(line("Stranger", "Gold", "2025-05-10 0900", "999", 18));
    write_export(&input, &lines);

    let written = build(&BuildConfig {
        input: input.clone(),
        out_dir: out_dir.clone(),
    })
    .unwrap();
    assert_eq!(written.len(), 4);

    let rounds = read_json(&out_dir, "rounds.json");
    assert_eq!(rounds.len(), 12);
    assert_eq!(rounds[0]["start"], "2025-05-01T09:00:00");
    assert_eq!(rounds[0]["course_key"], "Maple Hill \u{2014} Gold");
    assert_eq!(rounds[0]["season_label"], "Winter 2025");
    assert_eq!(rounds[6]["is_rated"], false);
    assert_eq!(rounds[6]["rating"], Value::Null);
    assert_eq!(rounds[11]["player"], "Miza");
    assert_eq!(rounds[11]["season_type"], "Summer");
    assert!(rounds.iter().all(|r| r["rating"] != 999.0));

    let ladders = read_json(&out_dir, "ladders.json");
    assert_eq!(ladders.len(), 2);
    assert_eq!(ladders[0]["season_label"], "Summer 2025-26");
    assert_eq!(ladders[0]["player"], "Miza");
    assert_eq!(ladders[0]["season_total_best10"], 4400.0);
    assert_eq!(ladders[1]["player"], "Jobby");
    assert_eq!(ladders[1]["season_total_best10"], 5550.0);
    assert_eq!(ladders[1]["rated_rounds_in_season"], 6);
    assert_eq!(ladders[1]["best_round_rating"], 950.0);

    let handicaps = read_json(&out_dir, "handicaps.json");
    let names: Vec<&str> = handicaps.iter().map(|h| h["player"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Armygeddon", "Bucis", "Jobby", "Miza", "Youare22"]);
    // Jobby form 925, Miza 880, reference 902.5
    assert_eq!(handicaps[2]["form_index"], 925.0);
    assert_eq!(handicaps[2]["reference_rating"], 902.5);
    assert_eq!(handicaps[2]["handicap"], -2.0);
    assert_eq!(handicaps[3]["handicap"], 2.0);
    assert_eq!(handicaps[3]["status"], "OK");
    assert_eq!(handicaps[0]["handicap"], Value::Null);
    assert_eq!(handicaps[0]["reference_rating"], 902.5);
    assert_eq!(handicaps[0]["status"], "No handicap yet (insufficient rated rounds)");
    assert_eq!(
        handicaps[0]["method"],
        "best 8 of last 20 rated rounds; 10 pts = 1 stroke"
    );

    let players = read_json(&out_dir, "players.json");
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["player"], "Jobby");
    assert_eq!(players[0]["rounds"], 7);
    assert_eq!(players[0]["rated_rounds"], 6);
    assert_eq!(players[0]["avg_rating"], 925.0);
}

#[test]
fn test_round_ids_are_stable_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    write_export(&input, &[line("Bucis", "Gold", "2025-07-01 1000", "870", 18)]);

    let mut ids = Vec::new();
    for run in ["first", "second"] {
        let out_dir = dir.path().join(run);
        build(&BuildConfig {
            input: input.clone(),
            out_dir: out_dir.clone(),
        })
        .unwrap();
        ids.push(read_json(&out_dir, "rounds.json")[0]["round_id"].clone());
    }
    assert_eq!(ids[0], ids[1]);
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("_data");
    let err = build(&BuildConfig {
        input: dir.path().join("missing.csv"),
        out_dir: out_dir.clone(),
    })
    .unwrap_err();
    assert!(err.to_string().contains("CSV not found"));
    assert!(!out_dir.exists());
}

#[test]
fn test_malformed_timestamp_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let out_dir = dir.path().join("_data");
    write_export(
        &input,
        &[
            line("Jobby", "Gold", "2025-07-01 1000", "870", 18),
            line("Jobby", "Gold", "2025-07-02 10:00", "870", 18),
        ],
    );

    let err = build(&BuildConfig { input, out_dir: out_dir.clone() }).unwrap_err();
    assert!(format!("{:#}", err).contains("Row 2"));
    assert!(!out_dir.exists());
}
