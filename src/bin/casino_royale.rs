use flownet::problems::{self, CasinoRoyale};

fn main() {
    problems::main::<CasinoRoyale>();
}
