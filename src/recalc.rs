use thiserror::Error;
use tracing::{debug, info};

use crate::model::{Match, MatchStatus, Prediction};
use crate::scoring::calculate_points;

/// The persistence hooks the recalculator runs against. The caller owns the
/// actual storage; the core never touches it directly. Serializing
/// concurrent recalculations of one match is also the caller's job (one
/// recalculation in flight per match).
pub trait PredictionStore {
    fn match_by_id(&self, match_id: u32) -> Option<Match>;
    fn finished_matches(&self) -> Vec<Match>;
    fn predictions_for_match(&self, match_id: u32) -> Vec<Prediction>;
    fn save_points(&mut self, participant_id: u32, match_id: u32, points: u8);
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecalcError {
    #[error("match {id} not found")]
    MatchNotFound { id: u32 },
    /// The one hard failure in the crate: scoring against a match that is
    /// not finished, or finished without a recorded score, means the
    /// caller's state transition went wrong and must not be papered over.
    #[error("match {id} not finished or scores missing")]
    MatchNotResolvable { id: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecalcSummary {
    pub matches_processed: usize,
    pub predictions_updated: usize,
}

/// Re-score every prediction tied to one finished match; returns how many
/// were written.
pub fn recalculate<S: PredictionStore>(
    store: &mut S,
    match_id: u32,
) -> Result<usize, RecalcError> {
    let m = store
        .match_by_id(match_id)
        .ok_or(RecalcError::MatchNotFound { id: match_id })?;
    if m.status != MatchStatus::Finished {
        return Err(RecalcError::MatchNotResolvable { id: match_id });
    }
    let Some((actual_home, actual_away)) = m.result() else {
        return Err(RecalcError::MatchNotResolvable { id: match_id });
    };

    let predictions = store.predictions_for_match(match_id);
    for prediction in &predictions {
        let points = calculate_points(
            prediction.home_score,
            prediction.away_score,
            actual_home,
            actual_away,
        );
        store.save_points(prediction.participant_id, match_id, points);
    }
    debug!(match_id, updated = predictions.len(), "recalculated match");
    Ok(predictions.len())
}

/// Re-score every finished match. Finished matches missing a score pair are
/// counted as processed but skipped for updates - a direct [`recalculate`]
/// on such a match still fails. Idempotent: a second run writes the same
/// points again.
pub fn recalculate_all<S: PredictionStore>(store: &mut S) -> Result<RecalcSummary, RecalcError> {
    let finished = store.finished_matches();
    let mut summary = RecalcSummary {
        matches_processed: finished.len(),
        predictions_updated: 0,
    };
    for m in finished {
        if m.result().is_some() {
            summary.predictions_updated += recalculate(store, m.id)?;
        }
    }
    info!(
        matches = summary.matches_processed,
        predictions = summary.predictions_updated,
        "full recalculation done"
    );
    Ok(summary)
}
