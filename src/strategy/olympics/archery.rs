use models::olympics::Archery;
use models::{Coord, Move, MoveScores};

pub fn score(archery: &Archery) -> Option<MoveScores> {
    if archery.over {
        return None;
    }
    let wind = archery.current_wind()?;
    let cursor = archery.cursors.me;
    Some(MoveScores::from_fn(|m| {
        let (dx, dy) = match m {
            Move::Left => (-wind, 0),
            Move::Right => (wind, 0),
            Move::Up => (0, -wind),
            Move::Down => (0, wind),
        };
        cursor.offset(dx, dy).euclidean(Coord::new(0, 0))
    }))
}
