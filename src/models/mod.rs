pub use self::actors::Actors;
pub use self::grid::{Bounds, Coord, Grid};
pub use self::moves::{Move, MoveScores};
pub use self::placement::{forecast_placement, placements, Placement, Ranking};
pub use self::point::Point;

pub mod cellularena;
pub mod olympics;
pub mod squad;
pub mod zombies;

mod actors;
mod grid;
mod moves;
mod placement;
mod point;
