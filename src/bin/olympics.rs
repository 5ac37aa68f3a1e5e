extern crate codingame_bots;

use codingame_bots::interactor::{launch, Olympics};

fn main() {
    launch::<Olympics>();
}
