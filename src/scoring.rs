/// Exact score pair.
pub const PERFECT_PREDICTION: u8 = 3;
/// Right winner or a draw called correctly, wrong exact score.
pub const GOOD_PREDICTION: u8 = 1;
pub const BAD_PREDICTION: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn of(home: u8, away: u8) -> Self {
        if home > away {
            Outcome::HomeWin
        } else if home < away {
            Outcome::AwayWin
        } else {
            Outcome::Draw
        }
    }
}

/// Points for one prediction against the official result: exact score 3,
/// correct outcome 1, anything else 0. Total over all `u8` inputs; in-domain
/// scores are 0-9.
pub fn calculate_points(
    predicted_home: u8,
    predicted_away: u8,
    actual_home: u8,
    actual_away: u8,
) -> u8 {
    if predicted_home == actual_home && predicted_away == actual_away {
        return PERFECT_PREDICTION;
    }
    if Outcome::of(predicted_home, predicted_away) == Outcome::of(actual_home, actual_away) {
        return GOOD_PREDICTION;
    }
    BAD_PREDICTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_goal_difference_sign() {
        assert_eq!(Outcome::of(2, 0), Outcome::HomeWin);
        assert_eq!(Outcome::of(0, 2), Outcome::AwayWin);
        assert_eq!(Outcome::of(1, 1), Outcome::Draw);
    }

    #[test]
    fn exact_score_beats_outcome() {
        assert_eq!(calculate_points(2, 1, 2, 1), PERFECT_PREDICTION);
        assert_eq!(calculate_points(0, 0, 0, 0), PERFECT_PREDICTION);
    }

    #[test]
    fn same_outcome_different_score_is_one_point() {
        assert_eq!(calculate_points(2, 1, 3, 0), GOOD_PREDICTION);
        assert_eq!(calculate_points(1, 1, 0, 0), GOOD_PREDICTION);
    }

    #[test]
    fn wrong_outcome_is_zero() {
        assert_eq!(calculate_points(2, 1, 1, 2), BAD_PREDICTION);
        assert_eq!(calculate_points(1, 1, 2, 1), BAD_PREDICTION);
    }
}
