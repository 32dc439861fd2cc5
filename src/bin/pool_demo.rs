use chrono::{DateTime, Utc};
use tracing_subscriber::{EnvFilter, fmt};

use wc26_typer::country::{CountryTable, Locale};
use wc26_typer::leaderboard::{aggregate_totals, build_leaderboard};
use wc26_typer::memory_store::MemoryStore;
use wc26_typer::model::{Match, MatchStatus, Participant, Stage, Team, format_score};
use wc26_typer::recalc::recalculate_all;

// Seeds an in-memory pool, records two results, recalculates, and prints
// the leaderboard the way the public page would render it.
fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut store = MemoryStore::new();
    seed_pool(&mut store)?;

    store.record_result(1, 2, 1);
    store.record_result(2, 0, 0);
    let summary = recalculate_all(&mut store)?;
    println!(
        "recalculated {} matches, {} predictions\n",
        summary.matches_processed, summary.predictions_updated
    );

    let totals = aggregate_totals(&store.participants, &store.predictions);
    let entries = build_leaderboard(&totals, &store.matches, &store.predictions);

    let table = CountryTable::builtin();
    for entry in &entries {
        let slots: Vec<String> = entry
            .next_predictions
            .iter()
            .map(|slot| format_score(slot.home_score, slot.away_score))
            .collect();
        println!(
            "{:<3} {:<10} {:>3} pts  {:>2} exact  next: {}",
            entry.rank,
            entry.name,
            entry.total_points,
            entry.exact_scores,
            slots.join("  "),
        );
    }

    if let Some(entry) = entries.first() {
        println!();
        for preview in &entry.next_matches {
            println!(
                "#{} {} {} - {} {}",
                preview.match_number,
                table.flag_emoji(&preview.home_code),
                table.display_name(&preview.home_code, Locale::En),
                table.display_name(&preview.away_code, Locale::En),
                table.flag_emoji(&preview.away_code),
            );
        }
    }
    Ok(())
}

fn seed_pool(store: &mut MemoryStore) -> anyhow::Result<()> {
    let teams = [
        team(1, "Poland", "POL", 'C'),
        team(2, "Argentina", "ARG", 'C'),
        team(3, "Mexico", "MEX", 'C'),
        team(4, "Saudi Arabia", "SAU", 'C'),
    ];

    store.add_match(group_match(1, 1, &teams[0], &teams[1], "2026-06-11T18:00:00Z")?);
    store.add_match(group_match(2, 2, &teams[2], &teams[3], "2026-06-11T21:00:00Z")?);
    store.add_match(group_match(3, 3, &teams[0], &teams[2], "2026-06-16T18:00:00Z")?);
    store.add_match(group_match(4, 4, &teams[1], &teams[3], "2026-06-16T21:00:00Z")?);

    for (id, name) in [(1, "Ania"), (2, "Bartek"), (3, "Celina")] {
        store.add_participant(Participant {
            id,
            name: name.to_string(),
            email: None,
        });
    }

    // (participant, match, home, away)
    let guesses = [
        (1, 1, 2, 1),
        (1, 2, 1, 1),
        (1, 3, 1, 0),
        (2, 1, 1, 0),
        (2, 2, 0, 0),
        (2, 4, 2, 2),
        (3, 1, 0, 2),
        (3, 3, 1, 1),
        (3, 4, 0, 1),
    ];
    for (participant_id, match_id, home, away) in guesses {
        store.upsert_prediction(participant_id, match_id, home, away);
    }
    Ok(())
}

fn team(id: u32, name: &str, code: &str, group: char) -> Team {
    Team {
        id,
        name: name.to_string(),
        code: code.to_string(),
        group: Some(group),
    }
}

fn group_match(
    id: u32,
    number: u32,
    home: &Team,
    away: &Team,
    kickoff: &str,
) -> anyhow::Result<Match> {
    Ok(Match {
        id,
        match_number: number,
        home_team: home.clone(),
        away_team: away.clone(),
        match_date: kickoff.parse::<DateTime<Utc>>()?,
        stage: Stage::Group,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
    })
}
