use config::config;
use models::olympics::HurdleRace;
use models::{forecast_placement, Move, MoveScores, Ranking};

const CLEAR: &str = "...";
const HURDLE_IN_MIDDLE: &str = ".#.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Correct(i64),
    Incorrect { mine: i64, theirs: i64, stun: bool },
}

use self::Outcome::*;

fn incorrect(mine: i64, theirs: i64) -> Outcome {
    Incorrect {
        mine,
        theirs,
        stun: false,
    }
}

fn stunned(mine: i64, theirs: i64) -> Outcome {
    Incorrect {
        mine,
        theirs,
        stun: true,
    }
}

fn outcomes(chunk: &str, hurdle_next: bool) -> [Outcome; 4] {
    match chunk {
        CLEAR if !hurdle_next => [incorrect(2, 3), Correct(3), incorrect(1, 3), incorrect(1, 3)],
        CLEAR => [incorrect(1, 2), stunned(3, 2), Correct(2), Correct(2)],
        HURDLE_IN_MIDDLE => [stunned(1, 2), stunned(3, 2), Correct(2), stunned(2, 2)],
        _ => [Correct(1), Correct(3), Correct(2), Correct(2)],
    }
}

fn forecast(race: &HurdleRace, mine: i64, theirs: i64) -> f64 {
    let rivals = race.positions.map(|p| p + theirs).enemies;
    forecast_placement(race.positions.me + mine, rivals, Ranking::HigherIsBetter) as f64
}

pub fn score(race: &HurdleRace) -> Option<MoveScores> {
    if race.over || race.is_stunned() {
        return None;
    }
    let ahead = race.track_ahead();
    if ahead.is_empty() {
        return None;
    }
    let chunk = ahead.get(..3).unwrap_or(ahead);
    let hurdle_next = ahead.get(3..).map_or(false, |next| next.starts_with('#'));
    let bonus = config().correct_move_bonus;
    let mut scores = MoveScores::new();
    for (&m, &outcome) in Move::ALL.iter().zip(outcomes(chunk, hurdle_next).iter()) {
        scores[m] = match outcome {
            Correct(n) => forecast(race, n, n) - bonus,
            Incorrect { mine, theirs, stun } => forecast(race, if stun { 0 } else { mine }, theirs),
        };
    }
    Some(scores)
}
