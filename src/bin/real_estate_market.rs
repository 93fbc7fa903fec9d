use flownet::problems::{self, RealEstateMarket};

fn main() {
    problems::main::<RealEstateMarket>();
}
