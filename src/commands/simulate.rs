//! Dataset interaction simulation.
//!
//! Stands in for real API round-trips against the labelled clip dataset:
//! one response for the violent sample clip, one for the calm sample clip,
//! each printed the way the upload pipeline would log them.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

use crate::config::{self, EmoscoreConfig};
use crate::scoring::Classification;

pub struct SimulateConfig {
    pub seed: Option<u64>,
}

pub fn handle_simulate(config: SimulateConfig) -> Result<()> {
    let app_config = config::load_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            run_simulation(&app_config, &mut rng, &mut out)?;
        }
        None => run_simulation(&app_config, &mut rand::thread_rng(), &mut out)?,
    }

    log::info!("Simulated dataset interaction complete");
    Ok(())
}

/// Emit one violent and one calm response over the dataset categories.
pub fn run_simulation<R: Rng, W: Write>(
    app_config: &EmoscoreConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    let generator = app_config.score_generator();
    let categories = &app_config.categories.dataset;

    let responses = [
        (
            app_config.dataset.positive_clip(),
            Classification::Violent,
        ),
        (app_config.dataset.negative_clip(), Classification::Calm),
    ];

    for (clip, classification) in responses {
        let scores = generator.generate(categories.iter().cloned(), classification, rng);
        writeln!(
            out,
            "API Response for {}: {}",
            clip.display(),
            serde_json::to_string(&scores)?
        )?;
    }

    writeln!(out, "Simulated dataset interaction complete.")?;
    Ok(())
}
