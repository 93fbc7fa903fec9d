use flownet::problems::{self, PlacingKnights};

fn main() {
    problems::main::<PlacingKnights>();
}
