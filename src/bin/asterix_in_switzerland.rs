use flownet::problems::{self, AsterixInSwitzerland};

fn main() {
    problems::main::<AsterixInSwitzerland>();
}
