//! Photo processing command.
//!
//! The photo is never decoded: every submitted photo is classified as
//! violent and scored over the attacker categories. The path is only
//! echoed into the log so operators can correlate output with uploads.

use anyhow::Result;
use std::path::PathBuf;

use crate::config;
use crate::io::output::{write_score_file, JsonWriter, ScoreWriter};
use crate::scoring::{Classification, ScoreMap};

pub struct ProcessConfig {
    pub photo_path: PathBuf,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub fn handle_process(config: ProcessConfig) -> Result<()> {
    let app_config = config::load_config();
    let scores = process_photo(&app_config, config.seed);

    log::debug!(
        "Scored photo {} over {} categories",
        config.photo_path.display(),
        scores.len()
    );

    match config.output {
        Some(path) => {
            write_score_file(&scores, &path)?;
            log::info!("Wrote scores to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            JsonWriter::compact(stdout.lock()).write_scores(&scores)?;
        }
    }

    Ok(())
}

/// Generate attacker-category scores for a photo. All photos are
/// classified as violent.
pub fn process_photo(app_config: &config::EmoscoreConfig, seed: Option<u64>) -> ScoreMap {
    let generator = app_config.score_generator();
    let categories = app_config.categories.photo.iter().cloned();

    match seed {
        Some(seed) => generator.generate_seeded(categories, Classification::Violent, seed),
        None => generator.generate(categories, Classification::Violent, &mut rand::thread_rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmoscoreConfig;
    use crate::scoring::ScoreRange;

    #[test]
    fn process_photo_scores_all_attacker_categories() {
        let config = EmoscoreConfig::default();
        let scores = process_photo(&config, None);

        assert_eq!(scores.len(), 3);
        for category in ["Aggression", "Hostility", "Frustration"] {
            let score = scores
                .get(category)
                .unwrap_or_else(|| panic!("missing category {category}"));
            assert!(ScoreRange::VIOLENT.contains(*score));
        }
    }

    #[test]
    fn process_photo_respects_configured_categories() {
        let mut config = EmoscoreConfig::default();
        config.categories.photo = vec!["Menace".to_string()];

        let scores = process_photo(&config, None);
        assert_eq!(scores.len(), 1);
        assert!(scores.contains_key("Menace"));
    }

    #[test]
    fn process_photo_is_deterministic_when_seeded() {
        let config = EmoscoreConfig::default();
        let a = process_photo(&config, Some(99));
        let b = process_photo(&config, Some(99));
        assert_eq!(a, b);
    }
}
