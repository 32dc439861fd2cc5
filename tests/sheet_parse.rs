use std::fs;
use std::path::PathBuf;

use wc26_typer::model::{SheetDate, SheetTime};
use wc26_typer::sheet_parse::{UNKNOWN_PARTICIPANT, parse_sheet};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_labelled_name_and_numbered_lines() {
    let sheet = parse_sheet("Name: John Doe\n1. 2:1\n2. 0:0");
    assert_eq!(sheet.participant_name, "John Doe");
    assert_eq!(sheet.predictions.len(), 2);
    assert_eq!(sheet.predictions[0].match_number, Some(1));
    assert_eq!(sheet.predictions[0].home_score, Some(2));
    assert_eq!(sheet.predictions[0].away_score, Some(1));
    assert_eq!(sheet.predictions[1].match_number, Some(2));
    assert_eq!(sheet.predictions[1].home_score, Some(0));
    assert_eq!(sheet.predictions[1].away_score, Some(0));
}

#[test]
fn placeholder_score_cell_is_null_not_zero() {
    let sheet = parse_sheet("A 15:00 Brazil 2:_ Germany");
    assert_eq!(sheet.predictions.len(), 1);
    let p = &sheet.predictions[0];
    assert_eq!(p.home_score, Some(2));
    assert_eq!(p.away_score, None);
    assert_eq!(p.home_team.as_deref(), Some("BRA"));
    assert_eq!(p.away_team.as_deref(), Some("DEU"));
}

#[test]
fn implicit_name_line_near_the_top() {
    let sheet = parse_sheet("Jan Nowak\n1. 1:0");
    assert_eq!(sheet.participant_name, "Jan Nowak");
    assert_eq!(sheet.predictions.len(), 1);
}

#[test]
fn missing_name_falls_back_to_sentinel() {
    let sheet = parse_sheet("1. 2:1\n2. 0:2");
    assert_eq!(sheet.participant_name, UNKNOWN_PARTICIPANT);
    assert_eq!(sheet.predictions.len(), 2);
}

#[test]
fn raw_text_survives_untouched() {
    let raw = "Name: X\n???\n!!! stray ocr !!!\n1. 2:1";
    let sheet = parse_sheet(raw);
    assert_eq!(sheet.raw_text, raw);
    // Noise lines contribute nothing but cost nothing either.
    assert_eq!(sheet.predictions.len(), 1);
}

#[test]
fn one_line_yields_at_most_one_prediction() {
    // "12. 2:1" satisfies the numbered pattern; no other alternative may
    // add a second prediction for the same line.
    let sheet = parse_sheet("Name: X\n12. 2:1");
    assert_eq!(sheet.predictions.len(), 1);
    assert_eq!(sheet.predictions[0].match_number, Some(12));
}

#[test]
fn parses_full_sheet_fixture() {
    let sheet = parse_sheet(&read_fixture("sheet_full.txt"));
    assert_eq!(sheet.participant_name, "Jan Kowalski");
    assert_eq!(sheet.predictions.len(), 6);

    let first = &sheet.predictions[0];
    assert_eq!(first.group, Some('C'));
    assert_eq!(first.time, Some(SheetTime { hour: 18, minute: 0 }));
    assert_eq!(first.date, Some(SheetDate { day: 11, month: 6 }));
    assert_eq!(first.home_team.as_deref(), Some("POL"));
    assert_eq!(first.away_team.as_deref(), Some("ARG"));
    assert_eq!(first.home_score, Some(2));
    assert_eq!(first.away_score, Some(1));

    // Both boxes left blank on the second line.
    let second = &sheet.predictions[1];
    assert_eq!(second.home_team.as_deref(), Some("MEX"));
    assert_eq!(second.away_team.as_deref(), Some("SAU"));
    assert_eq!(second.home_score, None);
    assert_eq!(second.away_score, None);

    // Unknown team kept raw for review, line not dropped.
    let third = &sheet.predictions[2];
    assert_eq!(third.date, Some(SheetDate { day: 12, month: 6 }));
    assert_eq!(third.home_team.as_deref(), Some("ESP"));
    assert_eq!(third.away_team.as_deref(), Some("Wakanda"));

    // Dash-separated fixture format.
    let fourth = &sheet.predictions[3];
    assert_eq!(fourth.home_team.as_deref(), Some("BRA"));
    assert_eq!(fourth.away_team.as_deref(), Some("DEU"));
    assert_eq!(fourth.home_score, Some(1));
    assert_eq!(fourth.away_score, Some(1));

    // Numbered lines inherit the date most recently seen above them.
    let fifth = &sheet.predictions[4];
    assert_eq!(fifth.match_number, Some(38));
    assert_eq!(fifth.date, Some(SheetDate { day: 12, month: 6 }));
    assert_eq!(sheet.predictions[5].match_number, Some(39));
    assert_eq!(sheet.predictions[5].home_score, Some(1));
    assert_eq!(sheet.predictions[5].away_score, Some(1));
}

#[test]
fn polish_label_and_names_resolve() {
    let sheet = parse_sheet("Nazwisko: Kowalska\nPolska 1:0 Niemcy");
    assert_eq!(sheet.participant_name, "Kowalska");
    assert_eq!(sheet.predictions[0].home_team.as_deref(), Some("POL"));
    assert_eq!(sheet.predictions[0].away_team.as_deref(), Some("DEU"));
}
