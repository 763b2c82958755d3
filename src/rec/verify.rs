use std::fmt::{self, Display};

use log::debug;
use rug::{Integer, Rational};

use crate::{point::Point, traits::Eval};

/// A point that disagrees with the reconstructed model
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Mismatch {
    /// The observed point
    pub point: Point,
    /// The model value at the observed abscissa
    pub predicted: Rational,
}

impl Mismatch {
    /// Observed minus predicted value
    pub fn difference(&self) -> Rational {
        Rational::from(self.point.y().clone()) - &self.predicted
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "point {} deviates from model value {} by {}",
            self.point,
            self.predicted,
            self.difference()
        )
    }
}

/// Compare the model against each point, collecting all disagreements
///
/// Arithmetic is exact, so any nonzero difference is reported.
pub fn verify<'a, M>(
    pts: impl IntoIterator<Item = &'a Point>,
    model: &M,
) -> Vec<Mismatch>
where
    M: Eval<Integer, Output = Rational>,
{
    let mut res = Vec::new();
    for pt in pts {
        let predicted = model.eval(pt.x());
        if predicted != Rational::from(pt.y().clone()) {
            let mismatch = Mismatch {
                point: pt.clone(),
                predicted,
            };
            debug!("Inconsistent sample: {mismatch}");
            res.push(mismatch);
        }
    }
    res
}
