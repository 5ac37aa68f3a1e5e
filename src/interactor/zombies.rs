use std::io::BufRead;

use error::InputResult;
use interactor::{Game, Input};
use models::zombies::{Human, Zombie, ZombieSnapshot};
use models::Point;
use strategy::ZombieStrategy;

pub struct CodeVsZombies;

impl Game for CodeVsZombies {
    type Setup = ();
    type Snapshot = ZombieSnapshot;
    type Strategy = ZombieStrategy;

    fn read_setup<R: BufRead>(_: &mut Input<R>) -> InputResult<()> {
        Ok(())
    }

    fn read_turn<R: BufRead>(input: &mut Input<R>, _: &()) -> InputResult<Option<ZombieSnapshot>> {
        let hero = match input.next_tokens()? {
            Some(mut tokens) => Point::new(tokens.next("x")?, tokens.next("y")?),
            None => return Ok(None),
        };

        let human_count: usize = input.value("human_count")?;
        let mut humans = Vec::with_capacity(human_count);
        for _ in 0..human_count {
            let mut tokens = input.tokens()?;
            humans.push(Human {
                id: tokens.next("humanId")?,
                pos: Point::new(tokens.next("x")?, tokens.next("y")?),
            });
        }

        let zombie_count: usize = input.value("zombie_count")?;
        let mut zombies = Vec::with_capacity(zombie_count);
        for _ in 0..zombie_count {
            let mut tokens = input.tokens()?;
            zombies.push(Zombie {
                id: tokens.next("zombieId")?,
                pos: Point::new(tokens.next("x")?, tokens.next("y")?),
                next: Point::new(tokens.next("nextX")?, tokens.next("nextY")?),
            });
        }

        Ok(Some(ZombieSnapshot { hero, humans, zombies }))
    }

    fn strategy(_: &()) -> ZombieStrategy {
        ZombieStrategy::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::InputError;
    use std::io::Cursor;

    fn turn(text: &str) -> InputResult<Option<ZombieSnapshot>> {
        CodeVsZombies::read_turn(&mut Input::new(Cursor::new(text)), &())
    }

    #[test]
    fn reads_hero_humans_and_zombies() {
        let snapshot = turn("500 4500\n2\n0 100 4000\n1 0 4000\n1\n0 3000 4500 2600 4500\n")
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.hero, Point::new(500.0, 4500.0));
        assert_eq!(snapshot.humans.len(), 2);
        assert_eq!(snapshot.humans[1].pos, Point::new(0.0, 4000.0));
        assert_eq!(snapshot.zombies[0].next, Point::new(2600.0, 4500.0));
    }

    #[test]
    fn missing_coordinate_is_reported() {
        match turn("500\n") {
            Err(InputError::MissingToken { line: 1, what: "y" }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
