use flownet::problems::{self, Marathon};

fn main() {
    problems::main::<Marathon>();
}
