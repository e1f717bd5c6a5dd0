use anyhow::Context;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::io;

use config::Config;
use driver::{terminal::TerminalDriver, Driver};
use game::{Catalog, Game, PUZZLES};

mod config;
mod driver;
mod game;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read puzzle catalog {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("failed to load puzzle catalog {}", path.display()))?
        }
        None => PUZZLES.clone(),
    };
    info!("Loaded {} puzzles", catalog.puzzles().len());

    let rng = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let game = Game::new(catalog, rng);
    let mut driver = TerminalDriver::new(game, io::stdin().lock(), io::stdout());
    driver.play()?;

    Ok(())
}
