use std::ops::{Index, IndexMut};

use log::{debug, trace};
use rug::{Integer, Rational};

use crate::{
    algebra::poly::dense::DensePoly,
    point::Point,
    traits::{Eval, One, Zero},
};

/// Polynomial in Newton form
///
/// `c_0 + c_1 (x - x_0) + c_2 (x - x_0) (x - x_1) + ...`
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NewtonPoly {
    coeff: Vec<Rational>,
    val: Vec<Integer>,
}

impl NewtonPoly {
    pub fn coeff(&self) -> &[Rational] {
        &self.coeff
    }

    /// The interpolation nodes `x_0, ..., x_{n-2}` of the basis
    pub fn val(&self) -> &[Integer] {
        &self.val
    }
}

/// Interpolate the given points with Newton divided differences
///
/// The abscissas must be pairwise distinct.
pub fn interpolate(pts: &[Point]) -> NewtonPoly {
    debug!("Newton interpolation through {} points", pts.len());
    let mut a = TriangleMatrix::<Rational>::with_row_capacity(pts.len());
    let mut x = Vec::with_capacity(pts.len());
    for pt in pts {
        let i = a.nrows();
        x.push(pt.x().clone());
        a.add_zero_row();
        a[(i, 0)] = Rational::from(pt.y().clone());
        for j in 1..=i {
            let num = Rational::from(&a[(i, j - 1)] - &a[(j - 1, j - 1)]);
            let den = Integer::from(&x[i] - &x[j - 1]);
            debug_assert!(den != 0);
            a[(i, j)] = num / Rational::from(den);
        }
        trace!("Divided difference {i}: {}", a[(i, i)]);
    }
    let coeff = Vec::from_iter((0..a.nrows()).map(|d| a[(d, d)].clone()));
    x.truncate(coeff.len().saturating_sub(1));
    NewtonPoly { coeff, val: x }
}

impl Eval<Integer> for NewtonPoly {
    type Output = Rational;

    fn eval(&self, x: &Integer) -> Self::Output {
        let Some((last, rest)) = self.coeff.split_last() else {
            return Rational::new();
        };
        let mut res = last.clone();
        for (c, y) in rest.iter().zip(&self.val).rev() {
            res *= Rational::from(Integer::from(x - y));
            res += c;
        }
        res
    }
}

impl From<&NewtonPoly> for DensePoly<Rational> {
    fn from(p: &NewtonPoly) -> Self {
        let Some((last, rest)) = p.coeff().split_last() else {
            return Self::new();
        };
        debug_assert_eq!(rest.len(), p.val().len());
        let mut prod = Self::one();
        let mut res = Self::zero();
        for (a, y) in rest.iter().zip(p.val()) {
            let mut term = prod.clone();
            term *= a;
            res += &term;
            prod.mul_linear(&Rational::from(y.clone()));
        }
        prod *= last;
        res += &prod;
        res
    }
}

impl From<NewtonPoly> for DensePoly<Rational> {
    fn from(p: NewtonPoly) -> Self {
        Self::from(&p)
    }
}

// lower-triangular table of divided differences
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct TriangleMatrix<T> {
    elem: Vec<T>,
    nrows: usize,
}

impl<T> TriangleMatrix<T> {
    fn with_row_capacity(nrow: usize) -> Self {
        let capacity = row_start(nrow);
        Self {
            elem: Vec::with_capacity(capacity),
            nrows: 0,
        }
    }

    fn nrows(&self) -> usize {
        self.nrows
    }
}

impl<T: Clone + Zero> TriangleMatrix<T> {
    fn add_zero_row(&mut self) {
        self.nrows += 1;
        self.elem.resize(self.elem.len() + self.nrows, T::zero())
    }
}

impl<T> Index<(usize, usize)> for TriangleMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.elem[row_start(index.0) + index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for TriangleMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.elem[row_start(index.0) + index.1]
    }
}

fn row_start(nrow: usize) -> usize {
    (nrow * (nrow + 1)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rec::lagrange::value_at_zero;

    fn pts(xy: &[(i64, i64)]) -> Vec<Point> {
        xy.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn quadratic() {
        // f(x) = x^2 + 3
        let pts = pts(&[(1, 4), (2, 7), (3, 12)]);
        let newton = interpolate(&pts);
        assert_eq!(newton.coeff().len(), 3);
        assert_eq!(newton.val().len(), 2);
        let poly: DensePoly<Rational> = (&newton).into();
        assert_eq!(poly.coeff(), &[Rational::from(3), Rational::new(), Rational::from(1)]);
        for x in -5..5 {
            let x = Integer::from(x);
            assert_eq!(newton.eval(&x), poly.eval(&x));
        }
    }

    #[test]
    fn agrees_with_lagrange() {
        let pts = pts(&[(2, 9), (-3, 1), (7, 100), (4, -6), (11, 0)]);
        let poly: DensePoly<Rational> = interpolate(&pts).into();
        assert_eq!(poly.constant(), value_at_zero(&pts));
        for pt in &pts {
            assert_eq!(poly.eval(pt.x()), Rational::from(pt.y().clone()));
        }
    }

    #[test]
    fn degenerate() {
        let empty = interpolate(&[]);
        assert!(DensePoly::<Rational>::from(&empty).is_zero());
        assert_eq!(empty.eval(&Integer::from(3)), 0);

        // collinear points give a linear polynomial
        let pts = pts(&[(0, 1), (1, 3), (2, 5), (3, 7)]);
        let poly = DensePoly::<Rational>::from(interpolate(&pts));
        assert_eq!(poly.degree(), Some(1));
    }
}
