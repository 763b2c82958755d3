use log::{debug, info};
use rug::Integer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    point::SampleSet,
    rec::{rec_from_pts, Mismatch, Model, RecError, Strategy},
    sample::{FormatError, Sample},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Rec(#[from] RecError),
}

/// Options for processing a sample
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the reduced model `f(x) = x^2 + c` if fewer than three
    /// points are selected
    pub fallback: bool,
    /// Check the model against the remaining points
    pub verify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback: false,
            verify: true,
        }
    }
}

/// Outcome of processing a single sample
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Solution {
    /// Declared number of entries
    pub n: usize,
    /// Number of points used for reconstruction
    pub k: usize,
    /// All decoded points
    pub points: SampleSet,
    /// The reconstructed constant term
    pub constant: Integer,
    pub strategy: Strategy,
    pub model: Model,
    /// Points that disagree with the model
    pub mismatches: Vec<Mismatch>,
}

/// Decode a sample and reconstruct its constant term with default settings
pub fn process(sample: &Sample) -> Result<Solution, Error> {
    process_with(sample, &Settings::default())
}

pub fn process_with(
    sample: &Sample,
    settings: &Settings,
) -> Result<Solution, Error> {
    let points = sample.decode()?;
    let k = sample.k();
    let strategy = if settings.fallback {
        Strategy::with_fallback(k)
    } else {
        Strategy::General
    };
    let rec = rec_from_pts(&points, k, strategy)?;
    let mismatches = if settings.verify {
        rec.verify(&points)
    } else {
        Vec::new()
    };
    info!("Constant term: {}", rec.constant());
    if !mismatches.is_empty() {
        debug!("{} inconsistent point(s)", mismatches.len());
    }
    let strategy = rec.strategy();
    let model = rec.model().clone();
    Ok(Solution {
        n: sample.n(),
        k,
        points,
        constant: rec.into_constant(),
        strategy,
        model,
        mismatches,
    })
}

/// Parse a JSON record and process it
pub fn process_json_str(
    json: &str,
    settings: &Settings,
) -> Result<Solution, Error> {
    let sample = Sample::from_json_str(json)?;
    process_with(&sample, settings)
}
