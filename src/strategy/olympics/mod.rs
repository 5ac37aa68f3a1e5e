use config::config;
use models::olympics::{MiniGame, OlympicsSnapshot, ScoreBoard};
use models::{Move, MoveScores};
use strategy::{decide, Strategy, Turn};

pub mod archery;
pub mod diving;
pub mod hurdles;
pub mod skating;

pub fn contribution(game: &MiniGame) -> Option<MoveScores> {
    let config = config();
    let (scores, weight) = match *game {
        MiniGame::Hurdles(ref g) => (hurdles::score(g)?, config.hurdles_weight),
        MiniGame::Archery(ref g) => (archery::score(g)?, config.archery_weight),
        MiniGame::Skating(ref g) => (skating::score(g)?, config.skating_weight),
        MiniGame::Diving(ref g) => (diving::score(g)?, config.diving_weight),
    };
    Some(scores.scaled(weight))
}

#[derive(Debug, Default)]
pub struct OlympicsStrategy {
    board: ScoreBoard,
}

impl OlympicsStrategy {
    pub fn new() -> OlympicsStrategy {
        Default::default()
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }
}

impl Strategy for OlympicsStrategy {
    type Snapshot = OlympicsSnapshot;
    type Command = Move;

    fn tick(&mut self, turn: Turn, snapshot: &OlympicsSnapshot) -> Vec<Move> {
        for game in &snapshot.games {
            if self.board.observe(game) {
                info!(
                    "turn {}: {:?} finished, placements {:?}",
                    turn,
                    game.kind(),
                    game.placements()
                );
            }
        }
        debug!(
            "turn {}: reported {} tracked {} medals {}",
            turn,
            snapshot.reported_scores.me,
            self.board.my_score(),
            json!(self.board.medals())
        );

        let contributions = snapshot.games.iter().filter_map(|game| {
            let scores = contribution(game)?;
            debug!("{:?}: {}", game.kind(), json!(scores));
            Some(scores)
        });
        vec![decide(contributions)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::olympics::{MiniGameKind, Registers, GAME_OVER};
    use models::Actors;

    fn game(kind: MiniGameKind, gpu: &str, regs: Registers) -> MiniGame {
        MiniGame::new(kind, gpu, regs, 0)
    }

    fn snapshot(games: Vec<MiniGame>) -> OlympicsSnapshot {
        OlympicsSnapshot {
            reported_scores: Actors::default(),
            games,
        }
    }

    #[test]
    fn open_race_runs_right() {
        let track = ".".repeat(30);
        let games = vec![game(MiniGameKind::Hurdles, &track, [10, 8, 12, 0, 0, 0, 0])];
        let mut strategy = OlympicsStrategy::new();
        assert_eq!(strategy.tick(0, &snapshot(games)), vec![Move::Right]);
    }

    #[test]
    fn finished_games_do_not_change_the_decision() {
        let live = vec![
            game(MiniGameKind::Hurdles, "....#.....", [2, 0, 0, 0, 0, 0, 0]),
            game(MiniGameKind::Archery, "5", [3, 7, 0, 0, 1, 1, 0]),
        ];
        let mut with_finished = live.clone();
        with_finished.push(game(MiniGameKind::Skating, GAME_OVER, [9, 1, 1, 0, 0, 0, 0]));
        with_finished.push(game(MiniGameKind::Diving, GAME_OVER, [9, 1, 1, 0, 0, 0, 0]));

        let decided = OlympicsStrategy::new().tick(3, &snapshot(live));
        let mut strategy = OlympicsStrategy::new();
        assert_eq!(strategy.tick(3, &snapshot(with_finished)), decided);
        assert_eq!(strategy.board().medals().me.get(MiniGameKind::Skating).gold, 1);
        assert_eq!(strategy.board().medals().me.get(MiniGameKind::Diving).gold, 1);
        assert_eq!(strategy.board().my_score(), 6);
    }

    #[test]
    fn nothing_to_play_defaults_to_left() {
        let games = vec![
            game(MiniGameKind::Hurdles, GAME_OVER, [0; 7]),
            game(MiniGameKind::Archery, GAME_OVER, [0; 7]),
        ];
        assert_eq!(OlympicsStrategy::new().tick(99, &snapshot(games)), vec![Move::Left]);
    }

    #[test]
    fn weights_scale_contributions() {
        let shot = game(MiniGameKind::Archery, "1", [3, 4, 0, 0, 0, 0, 0]);
        let raw = match shot {
            MiniGame::Archery(ref g) => archery::score(g).unwrap(),
            _ => unreachable!(),
        };
        assert_eq!(contribution(&shot), Some(raw.scaled(config().archery_weight)));
    }
}
