use config::config;
use models::olympics::Skating;
use models::{Move, MoveScores};

const RISK_COST: [i64; 4] = [-1, 0, 1, 2];
const SPACES: [i64; 4] = [1, 2, 2, 3];
const TRACK_LENGTH: i64 = 10;

pub fn score(skating: &Skating) -> Option<MoveScores> {
    if skating.over || Skating::is_stunned(skating.risk.me) {
        return None;
    }
    let config = config();
    let mut scores = MoveScores::new();
    for (i, letter) in skating.risk_order.chars().take(4).enumerate() {
        let m = match Move::from_letter(letter) {
            Some(m) => m,
            None => continue,
        };
        let total_risk = skating.risk.me + RISK_COST[i];
        let landing = (skating.spaces.me + SPACES[i]) % TRACK_LENGTH;
        let collides = (0..2).any(|e| {
            Skating::is_stunned(skating.risk.enemies[e])
                && skating.spaces.enemies[e] % TRACK_LENGTH == landing
        });
        scores[m] = if total_risk >= config.skating_max_risk || collides {
            config.skating_stun_penalty
        } else {
            (total_risk - SPACES[i]) as f64
        };
    }
    Some(scores)
}
