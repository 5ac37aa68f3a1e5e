//! Ranking of three actors on a comparable metric.
//!
//! Ties share the better rank: an actor equal to the leader is first, an
//! actor equal to the median is second.

use std::cmp::Ordering;

pub type Placement = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    HigherIsBetter,
    LowerIsBetter,
}

impl Ranking {
    pub fn at_least<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            Ranking::HigherIsBetter => a >= b,
            Ranking::LowerIsBetter => a <= b,
        }
    }

    fn best_first<T: PartialOrd>(self, a: &T, b: &T) -> Ordering {
        let ordering = b.partial_cmp(a).unwrap_or(Ordering::Equal);
        match self {
            Ranking::HigherIsBetter => ordering,
            Ranking::LowerIsBetter => ordering.reverse(),
        }
    }
}

pub fn placements<T: PartialOrd + Copy>(values: [T; 3], ranking: Ranking) -> [Placement; 3] {
    let mut sorted = values;
    sorted.sort_by(|a, b| ranking.best_first(a, b));
    let (leader, middle) = (sorted[0], sorted[1]);
    let place = |value: T| {
        if ranking.at_least(value, leader) {
            1
        } else if ranking.at_least(value, middle) {
            2
        } else {
            3
        }
    };
    [place(values[0]), place(values[1]), place(values[2])]
}

pub fn forecast_placement<T: PartialOrd + Copy>(
    mine: T,
    rivals: [T; 2],
    ranking: Ranking,
) -> Placement {
    let beats_first = ranking.at_least(mine, rivals[0]);
    let beats_second = ranking.at_least(mine, rivals[1]);
    if beats_first && beats_second {
        1
    } else if beats_first || beats_second {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_values() {
        assert_eq!(placements([10, 8, 12], Ranking::HigherIsBetter), [2, 3, 1]);
        assert_eq!(placements([10.0, 8.0, 12.0], Ranking::LowerIsBetter), [2, 1, 3]);
    }

    #[test]
    fn ties_share_the_better_rank() {
        assert_eq!(placements([5, 5, 1], Ranking::HigherIsBetter), [1, 1, 3]);
        assert_eq!(placements([5, 1, 1], Ranking::HigherIsBetter), [1, 2, 2]);
        assert_eq!(placements([7, 7, 7], Ranking::LowerIsBetter), [1, 1, 1]);
    }

    #[test]
    fn forecast() {
        assert_eq!(forecast_placement(13, [11, 15], Ranking::HigherIsBetter), 2);
        assert_eq!(forecast_placement(15, [15, 11], Ranking::HigherIsBetter), 1);
        assert_eq!(forecast_placement(3, [11, 15], Ranking::HigherIsBetter), 3);
        assert_eq!(forecast_placement(3.0, [11.0, 15.0], Ranking::LowerIsBetter), 1);
    }
}
