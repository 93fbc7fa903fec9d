use flownet::problems::{self, KingdomDefence};

fn main() {
    problems::main::<KingdomDefence>();
}
