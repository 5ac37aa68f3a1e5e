use config::config;
use models::point::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Human {
    pub id: i64,
    pub pos: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zombie {
    pub id: i64,
    pub pos: Point,
    pub next: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZombieSnapshot {
    pub hero: Point,
    pub humans: Vec<Human>,
    pub zombies: Vec<Zombie>,
}

impl ZombieSnapshot {
    pub fn hero_time(&self, target: Point) -> f64 {
        (self.hero.dist(target) - config().hero_range).max(0.0) / config().hero_speed
    }

    pub fn saveable(&self) -> ZombieSnapshot {
        let humans = self
            .humans
            .iter()
            .filter(|h| {
                let hero_time = self.hero_time(h.pos);
                self.zombies
                    .iter()
                    .all(|z| hero_time <= zombie_time(z.pos, h.pos))
            })
            .cloned()
            .collect();
        ZombieSnapshot {
            hero: self.hero,
            humans,
            zombies: self.zombies.clone(),
        }
    }
}

pub fn zombie_time(from: Point, to: Point) -> f64 {
    from.dist(to) / config().zombie_speed
}
