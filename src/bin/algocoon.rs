use flownet::problems::{self, Algocoon};

fn main() {
    problems::main::<Algocoon>();
}
