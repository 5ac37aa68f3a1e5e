pub use self::medals::{MedalCounts, PlayerMedals, ScoreBoard};

use models::actors::Actors;
use models::grid::Coord;
use models::placement::{placements, Placement, Ranking};

mod medals;

pub const GAME_OVER: &str = "GAME_OVER";

pub type Registers = [i64; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MiniGameKind {
    Hurdles,
    Archery,
    Skating,
    Diving,
}

impl MiniGameKind {
    pub const ALL: [MiniGameKind; 4] = [
        MiniGameKind::Hurdles,
        MiniGameKind::Archery,
        MiniGameKind::Skating,
        MiniGameKind::Diving,
    ];

    pub fn index(self) -> usize {
        match self {
            MiniGameKind::Hurdles => 0,
            MiniGameKind::Archery => 1,
            MiniGameKind::Skating => 2,
            MiniGameKind::Diving => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<MiniGameKind> {
        MiniGameKind::ALL.get(index).cloned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HurdleRace {
    pub over: bool,
    pub track: String,
    pub positions: Actors<i64>,
    pub stun_timers: Actors<i64>,
}

impl HurdleRace {
    pub fn is_stunned(&self) -> bool {
        self.stun_timers.me > 0
    }

    pub fn track_ahead(&self) -> &str {
        let position = self.positions.me.max(0) as usize;
        self.track.get(position..).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Archery {
    pub over: bool,
    pub wind: String,
    pub cursors: Actors<Coord>,
}

impl Archery {
    pub fn current_wind(&self) -> Option<i64> {
        self.wind
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|w| w as i64)
    }

    pub fn distances(&self) -> Actors<f64> {
        self.cursors.map(|c| c.euclidean(Coord::new(0, 0)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skating {
    pub over: bool,
    pub risk_order: String,
    pub spaces: Actors<i64>,
    /// Risk level, or a negative stun countdown.
    pub risk: Actors<i64>,
}

impl Skating {
    pub fn is_stunned(risk: i64) -> bool {
        risk < 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diving {
    pub over: bool,
    pub goal: String,
    pub points: Actors<i64>,
    pub combos: Actors<i64>,
}

impl Diving {
    pub fn potential(dives: i64, combo: i64) -> i64 {
        let dives = dives.max(0);
        let triangle = dives.saturating_mul(dives.saturating_add(1)) / 2;
        dives.saturating_mul(combo).saturating_add(triangle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MiniGame {
    Hurdles(HurdleRace),
    Archery(Archery),
    Skating(Skating),
    Diving(Diving),
}

impl MiniGame {
    pub fn new(kind: MiniGameKind, gpu: &str, regs: Registers, my_index: usize) -> MiniGame {
        let over = gpu == GAME_OVER;
        let actors = |a: usize| Actors::from_players([regs[a], regs[a + 1], regs[a + 2]], my_index);
        match kind {
            MiniGameKind::Hurdles => MiniGame::Hurdles(HurdleRace {
                over,
                track: gpu.to_string(),
                positions: actors(0),
                stun_timers: actors(3),
            }),
            MiniGameKind::Archery => MiniGame::Archery(Archery {
                over,
                wind: gpu.to_string(),
                cursors: Actors::from_players(
                    [
                        Coord::new(regs[0], regs[1]),
                        Coord::new(regs[2], regs[3]),
                        Coord::new(regs[4], regs[5]),
                    ],
                    my_index,
                ),
            }),
            MiniGameKind::Skating => MiniGame::Skating(Skating {
                over,
                risk_order: gpu.to_string(),
                spaces: actors(0),
                risk: actors(3),
            }),
            MiniGameKind::Diving => MiniGame::Diving(Diving {
                over,
                goal: gpu.to_string(),
                points: actors(0),
                combos: actors(3),
            }),
        }
    }

    pub fn kind(&self) -> MiniGameKind {
        match *self {
            MiniGame::Hurdles(_) => MiniGameKind::Hurdles,
            MiniGame::Archery(_) => MiniGameKind::Archery,
            MiniGame::Skating(_) => MiniGameKind::Skating,
            MiniGame::Diving(_) => MiniGameKind::Diving,
        }
    }

    pub fn is_over(&self) -> bool {
        match *self {
            MiniGame::Hurdles(ref g) => g.over,
            MiniGame::Archery(ref g) => g.over,
            MiniGame::Skating(ref g) => g.over,
            MiniGame::Diving(ref g) => g.over,
        }
    }

    pub fn placements(&self) -> [Placement; 3] {
        match *self {
            MiniGame::Hurdles(ref g) => placements(g.positions.all(), Ranking::HigherIsBetter),
            MiniGame::Archery(ref g) => placements(g.distances().all(), Ranking::LowerIsBetter),
            MiniGame::Skating(ref g) => placements(g.spaces.all(), Ranking::HigherIsBetter),
            MiniGame::Diving(ref g) => placements(g.points.all(), Ranking::HigherIsBetter),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OlympicsSnapshot {
    pub reported_scores: Actors<i64>,
    pub games: Vec<MiniGame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind_from_registers() {
        let regs = [1, 2, 3, 4, 5, 6, 7];
        match MiniGame::new(MiniGameKind::Skating, "ULDR", regs, 2) {
            MiniGame::Skating(g) => {
                assert_eq!(g.spaces.me, 3);
                assert_eq!(g.spaces.enemies, [1, 2]);
                assert_eq!(g.risk.me, 6);
            }
            other => panic!("unexpected {:?}", other),
        }
        match MiniGame::new(MiniGameKind::Archery, "95", regs, 1) {
            MiniGame::Archery(g) => {
                assert_eq!(g.cursors.me, Coord::new(3, 4));
                assert_eq!(g.current_wind(), Some(9));
                assert_eq!(g.distances().me, 5.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn game_over_marker() {
        let game = MiniGame::new(MiniGameKind::Hurdles, GAME_OVER, [0; 7], 0);
        assert!(game.is_over());
        assert_eq!(game.kind(), MiniGameKind::Hurdles);
    }

    #[test]
    fn track_ahead_is_sliced_from_my_position() {
        match MiniGame::new(MiniGameKind::Hurdles, ".....#...", [3, 0, 0, 0, 0, 0, 0], 0) {
            MiniGame::Hurdles(g) => assert_eq!(g.track_ahead(), "..#..."),
            other => panic!("unexpected {:?}", other),
        }
        match MiniGame::new(MiniGameKind::Hurdles, "...", [7, 0, 0, 0, 0, 0, 0], 0) {
            MiniGame::Hurdles(g) => assert_eq!(g.track_ahead(), ""),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn archery_placements_prefer_smaller_distance() {
        let game = MiniGame::new(MiniGameKind::Archery, "3", [1, 1, 10, 0, -5, 5, 0], 0);
        assert_eq!(game.placements(), [1, 3, 2]);
    }

    #[test]
    fn diving_potential() {
        assert_eq!(Diving::potential(3, 0), 1 + 2 + 3);
        assert_eq!(Diving::potential(2, 4), 5 + 6);
        assert_eq!(Diving::potential(0, 4), 0);
        assert_eq!(Diving::potential(-1, 4), 0);
    }

    #[test]
    fn diving_potential_saturates() {
        assert_eq!(Diving::potential(2, i64::MAX), i64::MAX);
        assert_eq!(Diving::potential(i64::MAX, 1), i64::MAX);
    }
}
