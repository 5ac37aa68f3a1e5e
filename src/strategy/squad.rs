use std::cmp::Ordering;

use command::{AgentOrders, SquadAction};
use config::config;
use models::squad::{Agent, Battlefield, SquadSetup, SquadTurn};
use models::Coord;
use strategy::{first_max_by, first_min_by, Strategy, Turn};

/// The thrower must stand outside its own splash.
fn clear_of_splash(thrower: Coord, centre: Coord) -> bool {
    thrower.chebyshev(centre) > 1
}

pub fn throw_in_place(field: &Battlefield, agent: &Agent) -> Option<Coord> {
    let candidates = field
        .setup
        .tiles
        .bounds()
        .cells_within(agent.pos, config().throw_range);
    let clean = candidates.into_iter().filter_map(|centre| {
        if !clear_of_splash(agent.pos, centre) {
            return None;
        }
        let hits = field.splash_hits(agent, centre);
        if hits.is_clean() {
            Some((centre, hits.enemies))
        } else {
            None
        }
    });
    first_max_by(clean, |&(_, enemies)| enemies as f64).map(|(centre, _)| centre)
}

fn throwing_spot(field: &Battlefield, centre: Coord) -> Option<Coord> {
    let bounds = field.setup.tiles.bounds();
    (1..config().throw_range + 1)
        .flat_map(|distance| bounds.ring(centre, distance))
        .find(|&c| field.is_passable(c) && clear_of_splash(c, centre))
}

pub fn move_and_throw(field: &Battlefield, agent: &Agent) -> Option<(Coord, Coord)> {
    let bounds = field.setup.tiles.bounds();
    let mut best: Option<(Coord, Coord, usize)> = None;
    for enemy in field.enemy_agents() {
        for dx in -1..2 {
            for dy in -1..2 {
                let centre = enemy.pos.offset(dx, dy);
                if !bounds.contains(centre) {
                    continue;
                }
                let hits = field.splash_hits(agent, centre);
                if !hits.is_clean() || best.map_or(false, |(_, _, most)| hits.enemies <= most) {
                    continue;
                }
                if let Some(spot) = throwing_spot(field, centre) {
                    best = Some((spot, centre, hits.enemies));
                }
            }
        }
    }
    best.map(|(spot, centre, _)| (spot, centre))
}

pub fn needs_cover(field: &Battlefield, agent: &Agent) -> bool {
    field
        .enemy_agents()
        .iter()
        .any(|enemy| enemy.can_shoot() && enemy.reaches(agent.pos))
}

fn best_cover(field: &Battlefield, from: Coord) -> Option<Coord> {
    let mut best: Option<(Coord, i64, i64)> = None;
    for (c, tile) in field.setup.tiles.row_major() {
        let level = tile.cover_level();
        if level == 0 {
            continue;
        }
        let distance = from.manhattan(c);
        let better = best.map_or(true, |(_, best_level, best_distance)| {
            level > best_level || (level == best_level && distance < best_distance)
        });
        if better {
            best = Some((c, level, distance));
        }
    }
    best.map(|(c, _, _)| c)
}

pub fn shelter(field: &Battlefield, agent: &Agent) -> Option<Coord> {
    let cover = best_cover(field, agent.pos)?;
    let spots = cover
        .neighbours()
        .iter()
        .cloned()
        .filter(|&c| field.is_passable(c))
        .collect::<Vec<_>>();
    first_min_by(spots, |&c| agent.pos.manhattan(c) as f64)
}

pub fn shooting_target<'a>(
    field: &Battlefield<'a>,
    agent: &Agent,
    from: Coord,
) -> Option<&'a Agent> {
    if !agent.can_shoot() {
        return None;
    }
    let damage = |target: &Agent| field.effective_damage(agent, from, target);
    let cover = |target: &Agent| field.cover_reduction(from, target.pos);
    field
        .enemy_agents()
        .into_iter()
        .filter(|enemy| from.manhattan(enemy.pos) <= agent.spec.optimal_range)
        .min_by(|a, b| {
            b.wetness
                .cmp(&a.wetness)
                .then_with(|| damage(b).cmp(&damage(a)))
                .then_with(|| cover(a).partial_cmp(&cover(b)).unwrap_or(Ordering::Equal))
                .then_with(|| from.manhattan(a.pos).cmp(&from.manhattan(b.pos)))
        })
}

fn farthest_enemy<'a>(field: &Battlefield<'a>, from: Coord) -> Option<&'a Agent> {
    let enemies = field
        .enemy_agents()
        .into_iter()
        .filter(|enemy| enemy.pos != from);
    first_max_by(enemies, |enemy| from.manhattan(enemy.pos) as f64)
}

pub fn step_towards(field: &Battlefield, from: Coord, target: Coord) -> Option<Coord> {
    let sx = (target.x - from.x).signum();
    let sy = (target.y - from.y).signum();
    let mut steps = vec![from.offset(sx, sy)];
    if sx != 0 {
        steps.push(from.offset(sx, 0));
    }
    if sy != 0 {
        steps.push(from.offset(0, sy));
    }
    steps.into_iter().find(|&c| c != from && field.is_passable(c))
}

pub fn plan(field: &Battlefield, agent: &Agent) -> Vec<SquadAction> {
    if agent.splash_bombs > 0 {
        if let Some(centre) = throw_in_place(field, agent) {
            return vec![SquadAction::Throw(centre)];
        }
        if let Some((spot, centre)) = move_and_throw(field, agent) {
            return vec![SquadAction::Move(spot), SquadAction::Throw(centre)];
        }
    }

    let mut actions = vec![];
    let mut pos = agent.pos;
    if needs_cover(field, agent) {
        if let Some(spot) = shelter(field, agent) {
            if spot != pos {
                actions.push(SquadAction::Move(spot));
                pos = spot;
            }
        }
    }
    if let Some(target) = shooting_target(field, agent, pos) {
        actions.push(SquadAction::Shoot(target.id()));
    }
    if actions.is_empty() {
        let step = farthest_enemy(field, pos).and_then(|enemy| step_towards(field, pos, enemy.pos));
        actions.push(step.map_or(SquadAction::HunkerDown, SquadAction::Move));
    }
    actions
}

pub struct SquadStrategy {
    setup: SquadSetup,
}

impl SquadStrategy {
    pub fn new(setup: SquadSetup) -> SquadStrategy {
        SquadStrategy { setup }
    }
}

impl Strategy for SquadStrategy {
    type Snapshot = SquadTurn;
    type Command = AgentOrders;

    fn tick(&mut self, turn: Turn, snapshot: &SquadTurn) -> Vec<AgentOrders> {
        let field = Battlefield::new(&self.setup, snapshot);
        field
            .my_agents()
            .into_iter()
            .take(snapshot.my_agent_count)
            .map(|agent| {
                let actions = plan(&field, agent);
                debug!("turn {}: agent {} {:?}", turn, agent.id(), actions);
                AgentOrders::new(agent.id(), actions)
            })
            .collect()
    }
}
