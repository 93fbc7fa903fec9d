use flownet::problems::{self, Fleetrace};

fn main() {
    problems::main::<Fleetrace>();
}
