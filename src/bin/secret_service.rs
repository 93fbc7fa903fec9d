use flownet::problems::{self, SecretService};

fn main() {
    problems::main::<SecretService>();
}
