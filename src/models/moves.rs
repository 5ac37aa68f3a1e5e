use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    /// Enumeration order; earlier moves win ties.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    fn index(self) -> usize {
        match self {
            Move::Left => 0,
            Move::Right => 1,
            Move::Up => 2,
            Move::Down => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
            Move::Up => "UP",
            Move::Down => "DOWN",
        }
    }

    pub fn from_letter(letter: char) -> Option<Move> {
        match letter {
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            'U' => Some(Move::Up),
            'D' => Some(Move::Down),
            _ => None,
        }
    }
}

impl Default for Move {
    fn default() -> Move {
        Move::Left
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = ();

    fn from_str(s: &str) -> Result<Move, ()> {
        Move::ALL
            .iter()
            .cloned()
            .find(|m| m.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveScores([f64; 4]);

impl MoveScores {
    pub fn new() -> MoveScores {
        Default::default()
    }

    pub fn from_fn<F: FnMut(Move) -> f64>(mut f: F) -> MoveScores {
        let mut scores = MoveScores::new();
        for &m in Move::ALL.iter() {
            scores[m] = f(m);
        }
        scores
    }

    pub fn one_hot(target: Move, hit: f64, miss: f64) -> MoveScores {
        MoveScores::from_fn(|m| if m == target { hit } else { miss })
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Move, f64)> + 'a {
        Move::ALL.iter().map(move |&m| (m, self[m]))
    }

    pub fn scaled(&self, k: f64) -> MoveScores {
        MoveScores::from_fn(|m| self[m] * k)
    }

    pub fn add(&mut self, other: &MoveScores) {
        for &m in Move::ALL.iter() {
            self[m] += other[m];
        }
    }
}

impl Index<Move> for MoveScores {
    type Output = f64;

    fn index(&self, m: Move) -> &f64 {
        &self.0[m.index()]
    }
}

impl IndexMut<Move> for MoveScores {
    fn index_mut(&mut self, m: Move) -> &mut f64 {
        &mut self.0[m.index()]
    }
}

impl Serialize for MoveScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (m, score) in self.iter() {
            map.serialize_entry(m.as_str(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn parses_keywords_and_letters() {
        assert_eq!("RIGHT".parse::<Move>(), Ok(Move::Right));
        assert!("right".parse::<Move>().is_err());
        assert_eq!(Move::from_letter('U'), Some(Move::Up));
        assert_eq!(Move::from_letter('X'), None);
    }

    #[test]
    fn one_hot_and_add() {
        let mut scores = MoveScores::one_hot(Move::Up, 1.0, 3.0);
        scores.add(&MoveScores::from_fn(|_| 0.5));
        assert_eq!(scores[Move::Up], 1.5);
        assert_eq!(scores[Move::Left], 3.5);
        assert_eq!(scores.scaled(2.0)[Move::Down], 7.0);
    }

    #[test]
    fn serializes_as_keyword_map() {
        let scores = MoveScores::one_hot(Move::Left, 1.0, 2.0);
        assert_eq!(
            serde_json::to_string(&scores).unwrap(),
            r#"{"LEFT":1.0,"RIGHT":2.0,"UP":2.0,"DOWN":2.0}"#
        );
    }
}
