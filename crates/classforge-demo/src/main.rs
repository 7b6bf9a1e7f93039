//! Console walkthrough of the preset classes
//!
//! Builds the three preset characters and runs them through the stock
//! session: a mage casting, a fighter swinging, and a paladin doing both.

use anyhow::Result;
use clap::Parser;
use classforge_core::StateSeed;
use classforge_skills::{fighter, mage, paladin, Caster, Fighter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "classforge-demo", about = "classforge preset class walkthrough")]
struct Args {
    /// Enable debug-level tracing (skill binding, ability invocation)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scorcher = mage()
        .with_state(
            StateSeed::new()
                .with("health", 150)
                .with("stamina", 100)
                .with("mana", 120),
        )
        .named("Scorcher");

    scorcher.cast("fireball")?;
    println!("{}", status_line(scorcher.status(), "mana"));

    let slasher = fighter()
        .with_state(StateSeed::new().with("health", 150).with("stamina", 100))
        .named("Slasher");

    slasher.fight()?;
    println!("{}", status_line(slasher.status(), "stamina"));

    let pally = paladin()
        .with_state(
            StateSeed::new()
                .with("health", 150)
                .with("stamina", 80)
                .with("mana", 100),
        )
        .named("Holy Roller");

    pally.fight()?;
    pally.fight()?;
    pally.cast("Ice storm")?;
    pally.cast("Dante's Inferno")?;

    for (field, value) in pally.status().entries() {
        println!("  {field}: {value}");
    }

    Ok(())
}

fn status_line(status: &classforge_core::StatusView, field: &str) -> String {
    let value = status
        .get(field)
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    format!("  {field}: {value}")
}
