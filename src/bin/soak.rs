extern crate codingame_bots;

use codingame_bots::interactor::{launch, Soak};

fn main() {
    launch::<Soak>();
}
