//! Score generation for simulated Hume-style emotion responses.
//!
//! Every score is an independent uniform draw from one of two ranges
//! selected by the classification of the input: violent material
//! scores in `[5.0, 10.0]`, calm material in `[0.0, 6.0]`. No model runs
//! behind this; the output is placeholder data shaped like a real
//! per-category emotion response.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Mapping from category label to generated score.
///
/// A `BTreeMap` keeps serialization order stable and collapses duplicate
/// labels, which are meaningless in the input.
pub type ScoreMap = BTreeMap<String, f64>;

/// Classification of the material being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Scores drawn from the high range.
    Violent,
    /// Scores drawn from the low range.
    Calm,
}

impl Classification {
    pub fn from_flag(is_violent: bool) -> Self {
        if is_violent {
            Classification::Violent
        } else {
            Classification::Calm
        }
    }
}

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("score range minimum {min} exceeds maximum {max}")]
    Inverted { min: f64, max: f64 },
    #[error("score range bounds must be finite, got [{min}, {max}]")]
    NonFinite { min: f64, max: f64 },
}

/// Inclusive range scores are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const VIOLENT: ScoreRange = ScoreRange {
        min: 5.0,
        max: 10.0,
    };
    pub const CALM: ScoreRange = ScoreRange { min: 0.0, max: 6.0 };

    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        let range = ScoreRange { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), RangeError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(RangeError::NonFinite {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(RangeError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Generates per-category scores from a pair of classification ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGenerator {
    violent: ScoreRange,
    calm: ScoreRange,
}

impl Default for ScoreGenerator {
    fn default() -> Self {
        ScoreGenerator {
            violent: ScoreRange::VIOLENT,
            calm: ScoreRange::CALM,
        }
    }
}

impl ScoreGenerator {
    pub fn new(violent: ScoreRange, calm: ScoreRange) -> Result<Self, RangeError> {
        violent.validate()?;
        calm.validate()?;
        Ok(ScoreGenerator { violent, calm })
    }

    pub fn range_for(&self, classification: Classification) -> ScoreRange {
        match classification {
            Classification::Violent => self.violent,
            Classification::Calm => self.calm,
        }
    }

    /// Draw one score per category from the range selected by
    /// `classification`. An empty category set yields an empty map.
    pub fn generate<R, I, S>(
        &self,
        categories: I,
        classification: Classification,
        rng: &mut R,
    ) -> ScoreMap
    where
        R: Rng,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let range = self.range_for(classification);
        categories
            .into_iter()
            .map(|cat| (cat.into(), range.sample(rng)))
            .collect()
    }

    /// Seeded variant for reproducible output.
    pub fn generate_seeded<I, S>(
        &self,
        categories: I,
        classification: Classification,
        seed: u64,
    ) -> ScoreMap
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(categories, classification, &mut rng)
    }
}

/// Generate scores with the default ranges and the thread RNG.
///
/// `is_violent` selects the `[5.0, 10.0]` range; otherwise `[0.0, 6.0]`.
pub fn generate_scores<I, S>(categories: I, is_violent: bool) -> ScoreMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ScoreGenerator::default().generate(
        categories,
        Classification::from_flag(is_violent),
        &mut rand::thread_rng(),
    )
}
