//! Find a route through a scenario and draw it.
//!
//! Run: cargo run --bin conduit-route [scenario.toml]
//!
//! Without an argument the built-in scenario is used. Set `RUST_LOG=debug`
//! for per-search statistics.

use anyhow::Context;
use conduit_demos::{Scenario, render};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;

    let scenario = match std::env::args().nth(1) {
        Some(file) => {
            let src = std::fs::read_to_string(&file).with_context(|| format!("reading {file}"))?;
            Scenario::from_toml(&src)?
        }
        None => Scenario::default(),
    };

    let outcome = scenario.run()?;
    print!("{}", render(&scenario, outcome.path()));
    println!("{outcome}");
    Ok(())
}
