use models::actors::Actors;
use models::olympics::{MiniGame, MiniGameKind};
use models::placement::Placement;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalCounts {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

impl MedalCounts {
    pub fn add(&mut self, placement: Placement) {
        match placement {
            1 => self.gold += 1,
            2 => self.silver += 1,
            3 => self.bronze += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerMedals {
    pub by_game: [MedalCounts; 4],
}

impl PlayerMedals {
    pub fn get(&self, kind: MiniGameKind) -> &MedalCounts {
        &self.by_game[kind.index()]
    }

    pub fn total_gold(&self) -> i64 {
        self.by_game.iter().map(|m| m.gold).sum()
    }

    pub fn total_silver(&self) -> i64 {
        self.by_game.iter().map(|m| m.silver).sum()
    }

    pub fn current_score(&self) -> i64 {
        self.total_silver() + self.total_gold() * 3
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBoard {
    medals: Actors<PlayerMedals>,
    finished: [bool; 4],
}

impl ScoreBoard {
    pub fn new() -> ScoreBoard {
        Default::default()
    }

    pub fn observe(&mut self, game: &MiniGame) -> bool {
        let index = game.kind().index();
        if !game.is_over() {
            self.finished[index] = false;
            return false;
        }
        if self.finished[index] {
            return false;
        }
        self.finished[index] = true;
        let placements = game.placements();
        self.medals.me.by_game[index].add(placements[0]);
        for i in 0..2 {
            self.medals.enemies[i].by_game[index].add(placements[i + 1]);
        }
        true
    }

    pub fn medals(&self) -> &Actors<PlayerMedals> {
        &self.medals
    }

    pub fn my_score(&self) -> i64 {
        self.medals.me.current_score()
    }
}
