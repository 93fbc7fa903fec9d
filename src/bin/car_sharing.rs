use flownet::problems::{self, CarSharing};

fn main() {
    problems::main::<CarSharing>();
}
