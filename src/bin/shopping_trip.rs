use flownet::problems::{self, ShoppingTrip};

fn main() {
    problems::main::<ShoppingTrip>();
}
