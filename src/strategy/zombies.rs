use command::Destination;
use config::config;
use models::zombies::{zombie_time, ZombieSnapshot};
use models::Point;
use strategy::{evaluate, first_max_by, first_min_by, Rule, Strategy, Turn};

fn human_in_danger(s: &ZombieSnapshot) -> bool {
    s.humans.iter().any(|h| {
        let hero_time = s.hero_time(h.pos);
        s.zombies.iter().any(|z| zombie_time(z.next, h.pos) <= hero_time)
    })
}

fn intercept(s: &ZombieSnapshot) -> Point {
    let closest = first_min_by(s.zombies.iter(), |z| {
        s.humans
            .iter()
            .map(|h| zombie_time(z.pos, h.pos))
            .fold(f64::INFINITY, f64::min)
    });
    closest.map_or(s.hero, |z| z.pos)
}

fn several_humans(s: &ZombieSnapshot) -> bool {
    s.humans.len() > 1
}

fn guard_cluster(s: &ZombieSnapshot) -> Point {
    let range = config().hero_range;
    let mut humans: Vec<Point> = s.humans.iter().map(|h| h.pos).collect();
    while let Some(centre) = Point::centroid(&humans) {
        if humans.len() == 1 || humans.iter().any(|h| h.dist(centre) <= range) {
            return centre;
        }
        match first_max_by(0..humans.len(), |&i| humans[i].dist(centre)) {
            Some(farthest) => {
                humans.remove(farthest);
            }
            None => return centre,
        }
    }
    s.hero
}

fn always(_: &ZombieSnapshot) -> bool {
    true
}

fn chase_nearest_zombie(s: &ZombieSnapshot) -> Point {
    first_min_by(s.zombies.iter(), |z| s.hero.dist(z.pos)).map_or(s.hero, |z| z.pos)
}

const RULES: [Rule<ZombieSnapshot, Point>; 3] = [
    Rule {
        name: "human in danger",
        applies: human_in_danger,
        act: intercept,
    },
    Rule {
        name: "guard cluster",
        applies: several_humans,
        act: guard_cluster,
    },
    Rule {
        name: "nearest zombie",
        applies: always,
        act: chase_nearest_zombie,
    },
];

#[derive(Debug, Default)]
pub struct ZombieStrategy;

impl ZombieStrategy {
    pub fn new() -> ZombieStrategy {
        ZombieStrategy
    }
}

impl Strategy for ZombieStrategy {
    type Snapshot = ZombieSnapshot;
    type Command = Destination;

    fn tick(&mut self, turn: Turn, snapshot: &ZombieSnapshot) -> Vec<Destination> {
        let saveable = snapshot.saveable();
        debug!(
            "turn {}: {} of {} humans can be saved, {} zombies",
            turn,
            saveable.humans.len(),
            snapshot.humans.len(),
            snapshot.zombies.len()
        );
        let target = evaluate(&RULES, &saveable).unwrap_or(snapshot.hero);
        vec![Destination::new(target)]
    }
}
