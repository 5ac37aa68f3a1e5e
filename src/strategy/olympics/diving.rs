use config::config;
use models::olympics::Diving;
use models::{forecast_placement, Move, MoveScores, Ranking};

/// Forecast placement if I dive correctly, against missing this dive and
/// restarting the combo. Rivals are assumed to hit every remaining dive.
pub fn score(diving: &Diving) -> Option<MoveScores> {
    if diving.over {
        return None;
    }
    let target = diving.goal.chars().next().and_then(Move::from_letter)?;
    let dives = diving.goal.chars().count() as i64;
    let finish = |points: i64, dives: i64, combo: i64| {
        points.saturating_add(Diving::potential(dives, combo))
    };
    let rival = |e: usize| finish(diving.points.enemies[e], dives, diving.combos.enemies[e]);
    let rivals = [rival(0), rival(1)];
    let forecast = |mine: i64| forecast_placement(mine, rivals, Ranking::HigherIsBetter) as f64;

    let correct = forecast(finish(diving.points.me, dives, diving.combos.me))
        - config().correct_move_bonus;
    let incorrect = forecast(finish(diving.points.me, dives - 1, 0));
    Some(MoveScores::one_hot(target, correct, incorrect))
}
