/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
pub mod traits;

/// Polynomials
pub mod algebra;

/// Decoding of digit strings in bases 2 to 36
pub mod decode;

/// Sample points
pub mod point;

/// Orchestration: from an encoded sample to its constant term
pub mod process;

/// Constant term reconstruction algorithms
pub mod rec;

/// Encoded samples as supplied by a loader
pub mod sample;

pub use decode::decode;
pub use point::{Point, SampleSet};
pub use process::{process, process_with, Error, Settings, Solution};
pub use rec::{reconstruct, reconstruct_with, Strategy};
pub use rug::{Integer, Rational};
