use rug::{Integer, Rational};
use thiserror::Error;

use crate::point::{first_duplicate_x, Point};

#[derive(Clone, Debug, Error, Eq, PartialEq, Hash)]
pub enum RecError {
    #[error("Cannot reconstruct from k = {k} points: {available} point(s) available")]
    InsufficientPoints { k: usize, available: usize },
    #[error("Repeated abscissa x = {0}")]
    DuplicateX(Integer),
    #[error("Constant term {0} is not an integer")]
    NonIntegerResult(Rational),
    #[error("The reduced model needs fewer than 3 points, got k = {k}")]
    ReducedModel { k: usize },
}

/// Select the first `k` points, checking that reconstruction is possible
pub(crate) fn select(pts: &[Point], k: usize) -> Result<&[Point], RecError> {
    if k < 1 || pts.len() < k {
        return Err(RecError::InsufficientPoints {
            k,
            available: pts.len(),
        });
    }
    let selected = &pts[..k];
    if let Some(x) = first_duplicate_x(selected) {
        return Err(RecError::DuplicateX(x.clone()));
    }
    Ok(selected)
}
