pub use self::cellularena::CellularenaStrategy;
pub use self::olympics::OlympicsStrategy;
pub use self::rules::{evaluate, Rule};
pub use self::selector::{best_move, decide, first_max_by, first_min_by};
pub use self::squad::SquadStrategy;
pub use self::strategy::{Strategy, Turn};
#[cfg(feature = "debug")]
pub use self::timing_wrapper::TimingWrapper;
pub use self::zombies::ZombieStrategy;

pub mod cellularena;
pub mod olympics;
pub mod squad;
pub mod zombies;

mod rules;
mod selector;
mod strategy;
#[cfg(feature = "debug")]
mod timing_wrapper;
