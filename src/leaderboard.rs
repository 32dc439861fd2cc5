use std::collections::HashMap;

use crate::model::{
    LeaderboardEntry, Match, MatchPreview, MatchStatus, Participant, ParticipantTotals,
    Prediction, PredictionSlot,
};
use crate::scoring::{GOOD_PREDICTION, PERFECT_PREDICTION};

/// Upper bound on the "next matches to watch" window.
pub const NEXT_MATCHES_LIMIT: usize = 10;

/// Fold predictions into per-participant aggregate counts. Participants
/// without a single prediction still get a zeroed row.
pub fn aggregate_totals(
    participants: &[Participant],
    predictions: &[Prediction],
) -> Vec<ParticipantTotals> {
    participants
        .iter()
        .map(|participant| {
            let mut totals = ParticipantTotals {
                participant_id: participant.id,
                name: participant.name.clone(),
                total_points: 0,
                exact_scores: 0,
                correct_outcomes: 0,
                predictions_count: 0,
            };
            for prediction in predictions
                .iter()
                .filter(|p| p.participant_id == participant.id)
            {
                totals.total_points += u32::from(prediction.points);
                totals.predictions_count += 1;
                if prediction.points == PERFECT_PREDICTION {
                    totals.exact_scores += 1;
                }
                if prediction.points == GOOD_PREDICTION {
                    totals.correct_outcomes += 1;
                }
            }
            totals
        })
        .collect()
}

/// The preview window: any live matches win outright; otherwise every
/// scheduled match on the earliest upcoming calendar day, so a whole
/// matchday groups together. Empty when nothing qualifies.
pub fn select_next_matches(matches: &[Match]) -> Vec<Match> {
    let mut candidates: Vec<&Match> = matches
        .iter()
        .filter(|m| matches!(m.status, MatchStatus::Live | MatchStatus::Scheduled))
        .collect();
    candidates.sort_by(|a, b| {
        let a_not_live = a.status != MatchStatus::Live;
        let b_not_live = b.status != MatchStatus::Live;
        a_not_live
            .cmp(&b_not_live)
            .then(a.match_date.cmp(&b.match_date))
            .then(a.match_number.cmp(&b.match_number))
    });
    candidates.truncate(NEXT_MATCHES_LIMIT);

    let live: Vec<Match> = candidates
        .iter()
        .filter(|m| m.status == MatchStatus::Live)
        .map(|m| (*m).clone())
        .collect();
    if !live.is_empty() {
        return live;
    }

    let Some(first) = candidates.first() else {
        return Vec::new();
    };
    let earliest_day = first.match_date.date_naive();
    candidates
        .iter()
        .filter(|m| m.match_date.date_naive() == earliest_day)
        .map(|m| (*m).clone())
        .collect()
}

/// Rank 1-3 as medals, numeric beyond.
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        _ => rank.to_string(),
    }
}

/// Ranked, tie-aware leaderboard. Ordering is total points desc, exact
/// scores desc, then name asc so exact ties stay deterministic. Every entry
/// carries one slot per selected match - an unsubmitted prediction is an
/// explicit null pair, not a missing column.
pub fn build_leaderboard(
    totals: &[ParticipantTotals],
    matches: &[Match],
    predictions: &[Prediction],
) -> Vec<LeaderboardEntry> {
    let selected = select_next_matches(matches);
    let previews: Vec<MatchPreview> = selected
        .iter()
        .map(|m| MatchPreview {
            match_id: m.id,
            match_number: m.match_number,
            home_code: m.home_team.code.clone(),
            away_code: m.away_team.code.clone(),
            status: m.status,
        })
        .collect();

    let by_key: HashMap<(u32, u32), &Prediction> = predictions
        .iter()
        .map(|p| ((p.participant_id, p.match_id), p))
        .collect();

    let mut ordered: Vec<&ParticipantTotals> = totals.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.exact_scores.cmp(&a.exact_scores))
            .then_with(|| a.name.cmp(&b.name))
    });

    // Carry (last points, current rank): the rank bumps only when the point
    // total changes, so equal totals share one label.
    let mut last_points: Option<u32> = None;
    let mut current_rank = 0usize;
    let mut entries = Vec::with_capacity(ordered.len());
    for row in ordered {
        if last_points != Some(row.total_points) {
            current_rank += 1;
        }
        last_points = Some(row.total_points);

        let next_predictions = selected
            .iter()
            .map(|m| match by_key.get(&(row.participant_id, m.id)) {
                Some(p) => PredictionSlot {
                    match_id: m.id,
                    home_score: Some(p.home_score),
                    away_score: Some(p.away_score),
                },
                None => PredictionSlot {
                    match_id: m.id,
                    home_score: None,
                    away_score: None,
                },
            })
            .collect();

        entries.push(LeaderboardEntry {
            participant_id: row.participant_id,
            name: row.name.clone(),
            rank: rank_label(current_rank),
            total_points: row.total_points,
            exact_scores: row.exact_scores,
            correct_outcomes: row.correct_outcomes,
            predictions_count: row.predictions_count,
            next_predictions,
            next_matches: previews.clone(),
        });
    }
    entries
}
