// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod io;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{load_config, EmoscoreConfig};
pub use crate::io::output::{write_score_file, JsonWriter, ScoreWriter};
pub use crate::scoring::{
    generate_scores, Classification, ScoreGenerator, ScoreMap, ScoreRange,
};
