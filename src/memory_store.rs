use crate::model::{Match, MatchStatus, Participant, Prediction};
use crate::recalc::PredictionStore;

/// Vec-backed store for tests and demos. Mirrors the collaborator contract
/// a real persistence layer would implement; the (participant, match) pair
/// stays unique across upserts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub matches: Vec<Match>,
    pub participants: Vec<Participant>,
    pub predictions: Vec<Prediction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Insert or overwrite the guess for (participant, match). Points stay
    /// whatever they were; recalculation re-establishes them.
    pub fn upsert_prediction(
        &mut self,
        participant_id: u32,
        match_id: u32,
        home_score: u8,
        away_score: u8,
    ) {
        if let Some(existing) = self
            .predictions
            .iter_mut()
            .find(|p| p.participant_id == participant_id && p.match_id == match_id)
        {
            existing.home_score = home_score;
            existing.away_score = away_score;
            return;
        }
        self.predictions.push(Prediction {
            participant_id,
            match_id,
            home_score,
            away_score,
            points: 0,
        });
    }

    /// Stable snapshot of all predictions, ordered by (match, participant).
    pub fn predictions_sorted(&self) -> Vec<Prediction> {
        let mut predictions = self.predictions.clone();
        predictions.sort_by_key(|p| (p.match_id, p.participant_id));
        predictions
    }

    /// Record the official result and flip the match to finished.
    pub fn record_result(&mut self, match_id: u32, home_score: u8, away_score: u8) {
        if let Some(m) = self.matches.iter_mut().find(|m| m.id == match_id) {
            m.home_score = Some(home_score);
            m.away_score = Some(away_score);
            m.status = MatchStatus::Finished;
        }
    }
}

impl PredictionStore for MemoryStore {
    fn match_by_id(&self, match_id: u32) -> Option<Match> {
        self.matches.iter().find(|m| m.id == match_id).cloned()
    }

    fn finished_matches(&self) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.status == MatchStatus::Finished)
            .cloned()
            .collect()
    }

    fn predictions_for_match(&self, match_id: u32) -> Vec<Prediction> {
        self.predictions
            .iter()
            .filter(|p| p.match_id == match_id)
            .cloned()
            .collect()
    }

    fn save_points(&mut self, participant_id: u32, match_id: u32, points: u8) {
        if let Some(prediction) = self
            .predictions
            .iter_mut()
            .find(|p| p.participant_id == participant_id && p.match_id == match_id)
        {
            prediction.points = points;
        }
    }
}
