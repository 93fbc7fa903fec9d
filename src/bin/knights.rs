use flownet::problems::{self, Knights};

fn main() {
    problems::main::<Knights>();
}
