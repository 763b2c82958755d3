/// Constant term via Lagrange interpolation at zero
pub(crate) mod lagrange;
/// Interpolating polynomial via Newton divided differences
pub(crate) mod newton;
/// Reduced quadratic model `f(x) = x^2 + c`
pub mod reduced;
/// Consistency check against points not used for reconstruction
pub mod verify;

mod model;
mod util;

pub use model::{
    rec_from_pts, reconstruct, reconstruct_with, Model, Reconstruction,
    Strategy, MIN_GENERAL_PTS,
};
pub use util::RecError;
pub use verify::Mismatch;
