use config::config;
use models::grid::{Coord, Grid};

pub type AgentId = i64;
pub type PlayerId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSpec {
    pub id: AgentId,
    pub player: PlayerId,
    pub shoot_cooldown: i64,
    pub optimal_range: i64,
    pub soaking_power: i64,
    pub splash_bombs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    LowCover,
    HighCover,
}

impl Tile {
    pub fn from_code(code: i64) -> Option<Tile> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::LowCover),
            2 => Some(Tile::HighCover),
            _ => None,
        }
    }

    pub fn cover_level(self) -> i64 {
        match self {
            Tile::Empty => 0,
            Tile::LowCover => 1,
            Tile::HighCover => 2,
        }
    }

    pub fn is_passable(self) -> bool {
        self == Tile::Empty
    }

    pub fn damage_reduction(self) -> f64 {
        match self {
            Tile::Empty => 0.0,
            Tile::LowCover => config().low_cover_reduction,
            Tile::HighCover => config().high_cover_reduction,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SquadSetup {
    pub my_id: PlayerId,
    pub roster: Vec<AgentSpec>,
    pub tiles: Grid<Tile>,
}

impl SquadSetup {
    pub fn spec(&self, id: AgentId) -> Option<&AgentSpec> {
        self.roster.iter().find(|spec| spec.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub spec: AgentSpec,
    pub pos: Coord,
    pub cooldown: i64,
    pub splash_bombs: i64,
    pub wetness: i64,
}

impl Agent {
    pub fn id(&self) -> AgentId {
        self.spec.id
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown == 0
    }

    pub fn reaches(&self, other: Coord) -> bool {
        self.pos.manhattan(other) <= self.spec.optimal_range
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SquadTurn {
    pub agents: Vec<Agent>,
    pub my_agent_count: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Battlefield<'a> {
    pub setup: &'a SquadSetup,
    pub agents: &'a [Agent],
}

impl<'a> Battlefield<'a> {
    pub fn new(setup: &'a SquadSetup, turn: &'a SquadTurn) -> Battlefield<'a> {
        Battlefield {
            setup,
            agents: &turn.agents,
        }
    }

    pub fn my_agents(&self) -> Vec<&'a Agent> {
        let my_id = self.setup.my_id;
        self.agents.iter().filter(|a| a.spec.player == my_id).collect()
    }

    pub fn enemy_agents(&self) -> Vec<&'a Agent> {
        let my_id = self.setup.my_id;
        self.agents.iter().filter(|a| a.spec.player != my_id).collect()
    }

    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.setup.tiles.get(c).cloned()
    }

    pub fn is_passable(&self, c: Coord) -> bool {
        self.tile(c).map_or(false, Tile::is_passable)
    }

    pub fn splash_hits(&self, thrower: &Agent, target: Coord) -> SplashHits {
        let area = target.splash_area();
        let my_id = self.setup.my_id;
        let mut hits = SplashHits::default();
        for agent in self.agents {
            if !area.contains(&agent.pos) {
                continue;
            }
            if agent.spec.player != my_id {
                hits.enemies += 1;
            } else if agent.id() != thrower.id() {
                hits.friendlies += 1;
            }
        }
        hits
    }

    /// Damage reduction `target` enjoys against `shooter`. Only cover tiles
    /// adjacent to the target with the shooter on the far side count.
    pub fn cover_reduction(&self, shooter: Coord, target: Coord) -> f64 {
        let best = target
            .neighbours()
            .iter()
            .filter(|&&cover| is_between(shooter, target, cover))
            .filter_map(|&cover| self.tile(cover))
            .max_by_key(|tile| tile.cover_level());
        best.map_or(0.0, Tile::damage_reduction)
    }

    pub fn effective_damage(&self, shooter: &Agent, shooter_pos: Coord, target: &Agent) -> i64 {
        let reduction = self.cover_reduction(shooter_pos, target.pos);
        (shooter.spec.soaking_power as f64 * (1.0 - reduction)).floor() as i64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashHits {
    pub enemies: usize,
    pub friendlies: usize,
}

impl SplashHits {
    pub fn is_clean(&self) -> bool {
        self.enemies > 0 && self.friendlies == 0
    }
}

fn is_between(shooter: Coord, target: Coord, cover: Coord) -> bool {
    let (sx, sy) = (cover.x - shooter.x, cover.y - shooter.y);
    let (tx, ty) = (cover.x - target.x, cover.y - target.y);
    sx * tx < 0 || sy * ty < 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::grid::Bounds;

    fn spec(id: AgentId, player: PlayerId) -> AgentSpec {
        AgentSpec {
            id,
            player,
            shoot_cooldown: 1,
            optimal_range: 4,
            soaking_power: 25,
            splash_bombs: 1,
        }
    }

    fn agent(id: AgentId, player: PlayerId, x: i64, y: i64) -> Agent {
        Agent {
            spec: spec(id, player),
            pos: Coord::new(x, y),
            cooldown: 0,
            splash_bombs: 1,
            wetness: 0,
        }
    }

    fn setup(covers: &[(i64, i64, Tile)]) -> SquadSetup {
        let mut tiles = Grid::filled(Bounds::new(8, 5), Tile::Empty);
        for &(x, y, tile) in covers {
            tiles.set(Coord::new(x, y), tile);
        }
        SquadSetup {
            my_id: 0,
            roster: vec![],
            tiles,
        }
    }

    #[test]
    fn tile_codes() {
        assert_eq!(Tile::from_code(2), Some(Tile::HighCover));
        assert_eq!(Tile::from_code(3), None);
        assert!(Tile::Empty.is_passable());
        assert!(!Tile::LowCover.is_passable());
    }

    #[test]
    fn cover_only_counts_between_shooter_and_target() {
        let setup = setup(&[(3, 2, Tile::HighCover), (4, 1, Tile::LowCover)]);
        let turn = SquadTurn {
            agents: vec![],
            my_agent_count: 0,
        };
        let field = Battlefield::new(&setup, &turn);
        let target = Coord::new(4, 2);
        assert_eq!(field.cover_reduction(Coord::new(0, 2), target), 0.75);
        assert_eq!(field.cover_reduction(Coord::new(4, 0), target), 0.5);
        assert_eq!(field.cover_reduction(Coord::new(7, 2), target), 0.0);
    }

    #[test]
    fn effective_damage_is_floored() {
        let setup = setup(&[(3, 2, Tile::LowCover)]);
        let turn = SquadTurn {
            agents: vec![agent(1, 0, 0, 2), agent(2, 1, 4, 2)],
            my_agent_count: 1,
        };
        let field = Battlefield::new(&setup, &turn);
        let (shooter, target) = (&turn.agents[0], &turn.agents[1]);
        assert_eq!(field.effective_damage(shooter, shooter.pos, target), 12);
    }

    #[test]
    fn splash_counts_sides_and_excludes_thrower() {
        let setup = setup(&[]);
        let turn = SquadTurn {
            agents: vec![
                agent(1, 0, 2, 2),
                agent(2, 0, 6, 4),
                agent(3, 1, 3, 3),
                agent(4, 1, 1, 1),
            ],
            my_agent_count: 2,
        };
        let field = Battlefield::new(&setup, &turn);
        let thrower = &turn.agents[0];
        let hits = field.splash_hits(thrower, Coord::new(2, 2));
        assert_eq!(hits, SplashHits { enemies: 2, friendlies: 0 });
        assert!(hits.is_clean());
        let hits = field.splash_hits(thrower, Coord::new(5, 3));
        assert_eq!(hits, SplashHits { enemies: 0, friendlies: 1 });
        assert!(!hits.is_clean());
        assert_eq!(field.my_agents().len(), 2);
        assert_eq!(field.enemy_agents().len(), 2);
    }
}
