//! Contest-style problems modelled as flow networks.
//!
//! Every problem reads a test-case count followed by that many cases from
//! standard input and prints one answer line per case.

pub mod algocoon;
pub mod asterix_in_switzerland;
pub mod car_sharing;
pub mod casino_royale;
pub mod fleetrace;
pub mod india;
pub mod kingdom_defence;
pub mod knights;
pub mod marathon;
pub mod placing_knights;
pub mod real_estate_market;
pub mod secret_service;
pub mod shopping_trip;
pub mod surveillance_photograph;

use log::{error, info};
use std::io::{self, Read, Write};

use crate::error::Result;
use crate::io::Scanner;

pub use algocoon::Algocoon;
pub use asterix_in_switzerland::AsterixInSwitzerland;
pub use car_sharing::CarSharing;
pub use casino_royale::CasinoRoyale;
pub use fleetrace::Fleetrace;
pub use india::India;
pub use kingdom_defence::KingdomDefence;
pub use knights::Knights;
pub use marathon::Marathon;
pub use placing_knights::PlacingKnights;
pub use real_estate_market::RealEstateMarket;
pub use secret_service::SecretService;
pub use shopping_trip::ShoppingTrip;
pub use surveillance_photograph::SurveillancePhotograph;

/// A problem with its own input grammar and answer format.
pub trait Problem {
    /// Parsed input of a single test case.
    type Case;

    fn parse(sc: &mut Scanner<'_>) -> Result<Self::Case>;

    /// Solves one test case, returning its answer line without the newline.
    fn solve(case: &Self::Case) -> Result<String>;
}

/// Solves every test case in `input`, returning the answers in input order.
pub fn run<P: Problem>(input: &str) -> Result<Vec<String>> {
    let mut sc = Scanner::new(input);
    let t = sc.usize()?;
    let mut answers = Vec::with_capacity(t);
    for i in 0..t {
        let case = P::parse(&mut sc)?;
        let answer = P::solve(&case)?;
        info!("case {}: {}", i + 1, answer);
        answers.push(answer);
    }
    Ok(answers)
}

/// Entry point shared by the problem binaries: stdin to stdout, errors to the log.
pub fn main<P: Problem>() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run_stdio::<P>() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run_stdio<P: Problem>() -> Result<()> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    let answers = run::<P>(&input)?;
    let mut out = io::BufWriter::new(io::stdout().lock());
    for answer in answers {
        writeln!(out, "{}", answer)?;
    }
    out.flush()?;
    Ok(())
}
