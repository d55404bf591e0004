//! Configuration loaded from `.emoscore.toml`.
//!
//! The file is searched upward from the current directory with a bounded
//! depth. A missing file is normal and falls back to defaults; a malformed
//! file warns and falls back rather than aborting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::scoring::{ScoreGenerator, ScoreRange};

pub const CONFIG_FILE_NAME: &str = ".emoscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Category label sets for the two scoring surfaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoriesConfig {
    /// Attacker-related categories used when processing a photo.
    #[serde(default = "default_photo_categories")]
    pub photo: Vec<String>,

    /// Emotion categories used for the dataset simulation.
    #[serde(default = "default_dataset_categories")]
    pub dataset: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            photo: default_photo_categories(),
            dataset: default_dataset_categories(),
        }
    }
}

fn default_photo_categories() -> Vec<String> {
    ["Aggression", "Hostility", "Frustration"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_dataset_categories() -> Vec<String> {
    [
        "fear",
        "anger",
        "sadness",
        "anxiety",
        "panic",
        "resistance",
        "terror",
        "stress",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Score ranges per classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangesConfig {
    #[serde(default = "default_violent_range")]
    pub violent: ScoreRange,

    #[serde(default = "default_calm_range")]
    pub calm: ScoreRange,
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            violent: default_violent_range(),
            calm: default_calm_range(),
        }
    }
}

fn default_violent_range() -> ScoreRange {
    ScoreRange::VIOLENT
}

fn default_calm_range() -> ScoreRange {
    ScoreRange::CALM
}

/// Placeholder dataset locations used by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    #[serde(default = "default_positive_dir")]
    pub positive_dir: PathBuf,

    #[serde(default = "default_negative_dir")]
    pub negative_dir: PathBuf,

    #[serde(default = "default_positive_sample")]
    pub positive_sample: String,

    #[serde(default = "default_negative_sample")]
    pub negative_sample: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            positive_dir: default_positive_dir(),
            negative_dir: default_negative_dir(),
            positive_sample: default_positive_sample(),
            negative_sample: default_negative_sample(),
        }
    }
}

fn default_positive_dir() -> PathBuf {
    PathBuf::from("data/Parsed_Capuchinbird_Clips")
}

fn default_negative_dir() -> PathBuf {
    PathBuf::from("data/Parsed_Not_Capuchinbird_Clips")
}

fn default_positive_sample() -> String {
    "sample_violent.wav".to_string()
}

fn default_negative_sample() -> String {
    "sample_not_violent.wav".to_string()
}

impl DatasetConfig {
    /// Path of the clip scored as violent.
    pub fn positive_clip(&self) -> PathBuf {
        self.positive_dir.join(&self.positive_sample)
    }

    /// Path of the clip scored as calm.
    pub fn negative_clip(&self) -> PathBuf {
        self.negative_dir.join(&self.negative_sample)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmoscoreConfig {
    #[serde(default)]
    pub categories: CategoriesConfig,

    #[serde(default)]
    pub ranges: RangesConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl EmoscoreConfig {
    /// Build a generator from the configured ranges, reverting to the
    /// defaults when a range fails validation.
    pub fn score_generator(&self) -> ScoreGenerator {
        match ScoreGenerator::new(self.ranges.violent, self.ranges.calm) {
            Ok(generator) => generator,
            Err(e) => {
                log::warn!("Invalid score ranges in config: {e}. Using defaults.");
                ScoreGenerator::default()
            }
        }
    }
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, validating the score ranges.
pub fn parse_config(contents: &str) -> Result<EmoscoreConfig, String> {
    let config = toml::from_str::<EmoscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.ranges.violent.validate() {
        return Err(format!("Invalid violent range: {e}"));
    }
    if let Err(e) = config.ranges.calm.validate() {
        return Err(format!("Invalid calm range: {e}"));
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<EmoscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {e}", config_path.display());
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.emoscore.toml`, walking up from
/// the current directory. Falls back to defaults when none is found.
pub fn load_config() -> EmoscoreConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return EmoscoreConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}
