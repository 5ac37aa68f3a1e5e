use models::{Move, MoveScores};

/// First candidate with the smallest key. NaN keys never win.
pub fn first_min_by<T, I, F>(candidates: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for candidate in candidates {
        let k = key(&candidate);
        if k.is_nan() {
            continue;
        }
        if best.as_ref().map_or(true, |&(_, b)| k < b) {
            best = Some((candidate, k));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// First candidate with the largest key. NaN keys never win.
pub fn first_max_by<T, I, F>(candidates: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    first_min_by(candidates, |c| -key(c))
}

pub fn best_move(scores: &MoveScores) -> Move {
    first_min_by(scores.iter(), |&(_, score)| score)
        .map(|(m, _)| m)
        .unwrap_or_default()
}

pub fn decide<I: IntoIterator<Item = MoveScores>>(contributions: I) -> Move {
    let mut total: Option<MoveScores> = None;
    for scores in contributions {
        total.get_or_insert_with(MoveScores::new).add(&scores);
    }
    match total {
        Some(total) => {
            debug!("total {}", json!(total));
            best_move(&total)
        }
        None => Move::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64;

    #[test]
    fn ties_go_to_the_first_candidate() {
        assert_eq!(first_min_by(vec![3, 1, 2, 1], |&v| v as f64), Some(1));
        assert_eq!(first_min_by(vec!["a", "b"], |_| 0.0), Some("a"));
        assert_eq!(first_max_by(vec![(0, 5), (1, 7), (2, 7)], |&(_, v)| v as f64), Some((1, 7)));
        assert_eq!(first_min_by(Vec::<i64>::new(), |&v| v as f64), None);
    }

    #[test]
    fn nan_never_wins() {
        let keys = [f64::NAN, 2.0, f64::NAN, 1.0];
        assert_eq!(first_min_by(0..4, |&i| keys[i]), Some(3));
        assert_eq!(first_max_by(0..4, |&i| keys[i]), Some(1));
        assert_eq!(first_min_by(0..1, |&i| keys[i]), None);
    }

    #[test]
    fn all_tied_picks_left() {
        assert_eq!(best_move(&MoveScores::from_fn(|_| 2.0)), Move::Left);
        assert_eq!(decide(Vec::<MoveScores>::new()), Move::Left);
        let flat = MoveScores::from_fn(|_| 1.0);
        assert_eq!(decide(vec![flat, flat]), Move::Left);
    }

    #[test]
    fn contributions_are_summed() {
        let archery = MoveScores::one_hot(Move::Down, 0.0, 3.0);
        let hurdles = MoveScores::one_hot(Move::Right, 1.0, 2.0);
        // DOWN = 2, RIGHT = 4
        assert_eq!(decide(vec![archery, hurdles]), Move::Down);
    }
}
