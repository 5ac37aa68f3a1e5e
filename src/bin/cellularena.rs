extern crate codingame_bots;

use codingame_bots::interactor::{launch, Cellularena};

fn main() {
    launch::<Cellularena>();
}
