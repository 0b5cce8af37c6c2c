use std::io::Write;
use std::path::{Path, PathBuf};
use tickstat_core::{Config, Error};
use tickstat_report::Pipeline;

fn write_feed(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    path
}

fn read_report(path: &Path) -> Vec<Vec<String>> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(line.as_bytes());
            reader
                .records()
                .next()
                .unwrap()
                .unwrap()
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn value_of<'a>(rows: &'a [Vec<String>], code: &str, metric: &str) -> &'a str {
    rows.iter()
        .find(|r| r[0] == code && r[1] == metric)
        .map(|r| r[2].as_str())
        .unwrap_or_else(|| panic!("missing {code} / {metric}"))
}

// code,_,bid,ask,trade,bidvol,askvol,tradevol,type,_,date,time,_,_,conditions
const FIVE_ROW_FEED: [&str; 5] = [
    "ABC SS Equity,,99.0,101.0,,100,100,,0,,20240102,36000,,,",
    "ABC SS Equity,,99.0,101.0,100.0,,,25,1,,20240102,36010,,,XT",
    "ABC SS Equity,,99.5,100.5,,100,100,,0,,20240102,36050,,,",
    "ABC SS Equity,,99.0,101.0,,100,100,,0,,20240102,36080,,,",
    "ABC SS Equity,,99.0,101.0,100.0,,,30,1,,20240102,36110,,,XT",
];

#[test]
fn five_row_fixture_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(dir.path(), "feed.csv", &FIVE_ROW_FEED);
    let output = dir.path().join("analysis.csv");

    let summary = Pipeline::default().run_to(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 5);
    assert_eq!(summary.ticks_parsed, 5);
    assert!(summary.issues.is_empty());
    assert_eq!(summary.instruments, 1);
    assert_eq!(summary.records, 9);

    let rows = read_report(&output);
    assert_eq!(rows[0], vec!["Stock Code", "Metric", "Value"]);
    assert_eq!(rows.len(), 10);

    assert_eq!(value_of(&rows, "ABC SS Equity", "Mean Time Between Trades"), "100.0");
    assert_eq!(value_of(&rows, "ABC SS Equity", "Median Time Between Trades"), "100.0");
    assert_eq!(value_of(&rows, "ABC SS Equity", "Longest Time Between Trades"), "100.0");
    // both trades at 100.0, volumes 25 and 30
    assert_eq!(value_of(&rows, "ABC SS Equity", "Round Number Effect"), "100.0% / 50.0%");
    // spreads 2, 2, 1, 2, 2
    let mean_spread: f64 = value_of(&rows, "ABC SS Equity", "Mean Bid-Ask Spread").parse().unwrap();
    approx::assert_relative_eq!(mean_spread, 1.8, epsilon = 1e-9);
    assert_eq!(value_of(&rows, "ABC SS Equity", "Median Bid-Ask Spread"), "2.0");

    let metrics: Vec<&str> = rows[1..].iter().map(|r| r[1].as_str()).collect();
    assert_eq!(
        metrics,
        vec![
            "Mean Time Between Trades",
            "Median Time Between Trades",
            "Longest Time Between Trades",
            "Mean Time Between Tick Changes",
            "Median Time Between Tick Changes",
            "Longest Time Between Tick Changes",
            "Mean Bid-Ask Spread",
            "Median Bid-Ask Spread",
            "Round Number Effect",
        ]
    );
}

#[test]
fn auction_and_crossed_rows_are_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(
        dir.path(),
        "feed.csv",
        &[
            "ABC,,9.0,10.0,9.5,1,1,10,1,,20240102,100,,,AU",
            "ABC,,10.0,9.0,9.5,1,1,10,1,,20240102,200,,,",
            "DEF,,9.0,10.0,10.0,1,1,10,1,,20240102,300,,,",
        ],
    );
    let output = dir.path().join("analysis.csv");

    let summary = Pipeline::default().run_to(&input, &output).unwrap();
    assert_eq!(summary.cleaning.after_auction, 1);

    let rows = read_report(&output);
    assert!(rows.iter().all(|r| r[0] != "ABC"));
    assert_eq!(value_of(&rows, "DEF", "Round Number Effect"), "100.0% / 100.0%");
}

#[test]
fn quote_only_instrument_reports_zero_percent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(
        dir.path(),
        "feed.csv",
        &["QQQ,,9.0,10.0,,1,1,,0,,20240102,100,,,"],
    );
    let output = dir.path().join("analysis.csv");

    Pipeline::default().run_to(&input, &output).unwrap();
    let rows = read_report(&output);
    assert_eq!(value_of(&rows, "QQQ", "Round Number Effect"), "0.0% / 0.0%");
    assert_eq!(value_of(&rows, "QQQ", "Longest Time Between Trades"), "0.0");
}

#[test]
fn bad_rows_and_fields_do_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(
        dir.path(),
        "feed.csv",
        &[
            "ABC,,9.0,10.0,10.0,1,1,10,1,,20240102,100,,,",
            "ABC,truncated",
            "ABC,,9.0,10.0,10.0,1,1,ten,1,,20240102,160,,,",
        ],
    );
    let output = dir.path().join("analysis.csv");

    let summary = Pipeline::default().run_to(&input, &output).unwrap();
    assert_eq!(summary.rows_read, 3);
    assert_eq!(summary.ticks_parsed, 2);
    assert_eq!(summary.dropped_rows(), 1);
    assert_eq!(summary.issues.len(), 2);

    let rows = read_report(&output);
    assert_eq!(value_of(&rows, "ABC", "Mean Time Between Trades"), "60.0");
    // "ten" defaulted to 0, which is a multiple of ten
    assert_eq!(value_of(&rows, "ABC", "Round Number Effect"), "100.0% / 100.0%");
}

#[test]
fn instruments_follow_first_seen_chronological_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(
        dir.path(),
        "feed.csv",
        &[
            "ZZZ,,9.0,10.0,10.0,1,1,10,1,,20240103,100,,,",
            "MMM,,9.0,10.0,10.0,1,1,10,1,,20240102,500,,,",
            "AAA,,9.0,10.0,10.0,1,1,10,1,,20240102,900,,,",
            "ZZZ,,9.0,10.0,10.0,1,1,10,1,,20240102,100,,,",
        ],
    );
    let output = dir.path().join("analysis.csv");

    let mut config = Config::default();
    config.metrics.workers = 2;
    Pipeline::new(config).run_to(&input, &output).unwrap();

    let rows = read_report(&output);
    let order: Vec<&str> = rows[1..].iter().step_by(9).map(|r| r[0].as_str()).collect();
    assert_eq!(order, vec!["ZZZ", "MMM", "AAA"]);
}

#[test]
fn missing_input_is_fatal_with_cause() {
    let dir = tempfile::tempdir().unwrap();
    let err = Pipeline::default()
        .run_to(dir.path().join("missing.csv"), dir.path().join("out.csv"))
        .unwrap_err();

    assert!(matches!(err, Error::InputNotFound { .. }));
    assert!(err.to_string().contains("missing.csv"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn run_uses_configured_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_feed(dir.path(), "feed.csv", &FIVE_ROW_FEED);

    let mut config = Config::default();
    config.output.path = dir.path().join("custom.csv");
    let summary = Pipeline::new(config).run(&input).unwrap();

    assert_eq!(summary.output_path, dir.path().join("custom.csv"));
    assert!(summary.output_path.exists());
}
