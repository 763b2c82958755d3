use log::debug;
use rug::{Integer, Rational};

use crate::{
    algebra::poly::dense::DensePoly,
    point::Point,
    rec::{
        lagrange, newton, reduced,
        util::{select, RecError},
        verify::{verify, Mismatch},
    },
    traits::Eval,
};

/// With fewer selected points than this, `Strategy::with_fallback`
/// chooses the reduced model. From this number on the reduced model is
/// rejected.
pub const MIN_GENERAL_PTS: usize = 3;

/// How the constant term is reconstructed from the selected points
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Strategy {
    /// Assume `f(x) = x^2 + c` and solve with the first selected point
    ///
    /// Only valid for fewer than three selected points.
    Reduced,
    /// Exact Lagrange interpolation through all selected points
    #[default]
    General,
}

impl Strategy {
    /// The reduced model for fewer than three points, otherwise the
    /// general one
    pub fn with_fallback(k: usize) -> Self {
        if k < MIN_GENERAL_PTS {
            Self::Reduced
        } else {
            Self::General
        }
    }
}

/// The polynomial model implied by a reconstruction
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Model {
    /// `f(x) = x^2 + c`
    Reduced { c: Integer },
    /// Interpolating polynomial through the selected points
    General(DensePoly<Rational>),
}

impl Model {
    /// The model as a dense polynomial
    pub fn to_poly(&self) -> DensePoly<Rational> {
        match self {
            Self::Reduced { c } => DensePoly::from_coeff(vec![
                Rational::from(c.clone()),
                Rational::new(),
                Rational::from(1),
            ]),
            Self::General(poly) => poly.clone(),
        }
    }
}

impl Eval<Integer> for Model {
    type Output = Rational;

    fn eval(&self, x: &Integer) -> Self::Output {
        match self {
            Self::Reduced { c } => Rational::from(reduced::eval(c, x)),
            Self::General(poly) => poly.eval(x),
        }
    }
}

/// Result of a successful reconstruction
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Reconstruction {
    constant: Integer,
    strategy: Strategy,
    model: Model,
    k: usize,
}

impl Reconstruction {
    /// The reconstructed constant term
    pub fn constant(&self) -> &Integer {
        &self.constant
    }

    pub fn into_constant(self) -> Integer {
        self.constant
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Number of points the reconstruction was computed from
    pub fn k(&self) -> usize {
        self.k
    }

    /// All coefficients of the model, in increasing power
    pub fn coefficients(&self) -> DensePoly<Rational> {
        self.model.to_poly()
    }

    /// Check the model against the points that did not determine it
    ///
    /// `pts` has to be the sample set passed to `rec_from_pts`. For the
    /// reduced model every point except the first is checked, for the
    /// general model every point beyond the first `k`.
    pub fn verify(&self, pts: &[Point]) -> Vec<Mismatch> {
        let skip = match self.strategy {
            Strategy::Reduced => 1,
            Strategy::General => self.k,
        };
        let remaining = pts.get(skip..).unwrap_or_default();
        let mismatches = verify(remaining, &self.model);
        debug!(
            "{} of {} remaining point(s) disagree with the model",
            mismatches.len(),
            remaining.len()
        );
        mismatches
    }
}

/// Reconstruct the constant term from the first `k` points
///
/// Always interpolates the selected points exactly with Lagrange's
/// formula, see `reconstruct_with` for the reduced model.
pub fn reconstruct(pts: &[Point], k: usize) -> Result<Integer, RecError> {
    reconstruct_with(pts, k, Strategy::General)
}

/// Reconstruct the constant term from the first `k` points with the
/// given strategy
///
/// `Strategy::Reduced` requires `k < MIN_GENERAL_PTS`.
pub fn reconstruct_with(
    pts: &[Point],
    k: usize,
    strategy: Strategy,
) -> Result<Integer, RecError> {
    let selected = select_for(pts, k, strategy)?;
    match strategy {
        Strategy::Reduced => Ok(reduced::constant_term(&selected[0])),
        Strategy::General => general_constant(selected),
    }
}

/// Reconstruct the constant term together with the full model
pub fn rec_from_pts(
    pts: &[Point],
    k: usize,
    strategy: Strategy,
) -> Result<Reconstruction, RecError> {
    debug!(
        "Reconstruction from {k} of {} point(s), strategy {strategy:?}",
        pts.len()
    );
    let selected = select_for(pts, k, strategy)?;
    let (constant, model) = match strategy {
        Strategy::Reduced => {
            let c = reduced::constant_term(&selected[0]);
            (c.clone(), Model::Reduced { c })
        }
        Strategy::General => {
            let c = general_constant(selected)?;
            let poly: DensePoly<Rational> = newton::interpolate(selected).into();
            debug_assert_eq!(poly.constant(), Rational::from(c.clone()));
            debug!("Interpolating polynomial: {poly}");
            (c, Model::General(poly))
        }
    };
    debug!("Constant term: {constant}");
    Ok(Reconstruction {
        constant,
        strategy,
        model,
        k,
    })
}

fn select_for(
    pts: &[Point],
    k: usize,
    strategy: Strategy,
) -> Result<&[Point], RecError> {
    let selected = select(pts, k)?;
    if strategy == Strategy::Reduced && k >= MIN_GENERAL_PTS {
        return Err(RecError::ReducedModel { k });
    }
    Ok(selected)
}

fn general_constant(selected: &[Point]) -> Result<Integer, RecError> {
    let c = lagrange::value_at_zero(selected);
    if *c.denom() != 1 {
        return Err(RecError::NonIntegerResult(c));
    }
    let (num, _) = c.into_numer_denom();
    Ok(num)
}
