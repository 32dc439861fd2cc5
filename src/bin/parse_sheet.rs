use std::fs;
use std::path::PathBuf;

use wc26_typer::model::format_score;
use wc26_typer::sheet_parse::parse_sheet;

// Reads one OCR text dump and prints the structured preview an admin would
// review before confirming anything. No storage involved.
fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/sheet_full.txt"));

    let raw = fs::read_to_string(&path)?;
    let sheet = parse_sheet(&raw);

    eprintln!("participant: {}", sheet.participant_name);
    eprintln!("predictions: {}", sheet.predictions.len());
    for prediction in &sheet.predictions {
        eprintln!(
            "  {:>4}  {:<14} {:<14} {}",
            prediction
                .match_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            prediction.home_team.as_deref().unwrap_or("?"),
            prediction.away_team.as_deref().unwrap_or("?"),
            format_score(prediction.home_score, prediction.away_score),
        );
    }

    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}
