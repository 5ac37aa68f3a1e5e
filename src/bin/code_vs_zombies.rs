extern crate codingame_bots;

use codingame_bots::interactor::{launch, CodeVsZombies};

fn main() {
    launch::<CodeVsZombies>();
}
