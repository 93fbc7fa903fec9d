use flownet::problems::{self, India};

fn main() {
    problems::main::<India>();
}
