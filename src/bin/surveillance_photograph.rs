use flownet::problems::{self, SurveillancePhotograph};

fn main() {
    problems::main::<SurveillancePhotograph>();
}
