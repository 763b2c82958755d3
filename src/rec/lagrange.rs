use log::trace;
use rug::{Integer, Rational};

use crate::point::Point;

/// Lagrange basis polynomial of the `i`th point, evaluated at zero
///
/// `L_i(0) = prod_{j != i} (-x_j) / (x_i - x_j)`
///
/// The abscissas must be pairwise distinct.
pub fn basis_at_zero(pts: &[Point], i: usize) -> Rational {
    let xi = pts[i].x();
    let mut num = Integer::from(1);
    let mut den = Integer::from(1);
    for (j, pt) in pts.iter().enumerate() {
        if j == i {
            continue;
        }
        let xj = pt.x();
        num *= xj;
        den *= Integer::from(xi - xj);
    }
    if (pts.len() - 1) % 2 == 1 {
        num = -num;
    }
    debug_assert!(den != 0);
    Rational::from((num, den))
}

/// Value at zero of the unique polynomial of degree at most `pts.len() - 1`
/// through the given points
///
/// The abscissas must be pairwise distinct.
pub fn value_at_zero(pts: &[Point]) -> Rational {
    let mut res = Rational::new();
    for (i, pt) in pts.iter().enumerate() {
        let mut term = basis_at_zero(pts, i);
        trace!("Point {pt}: L(0) = {term}");
        term *= Rational::from(pt.y().clone());
        res += term;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(xy: &[(i64, i64)]) -> Vec<Point> {
        xy.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn quadratic() {
        // f(x) = x^2 + 3
        let pts = pts(&[(1, 4), (2, 7), (3, 12)]);
        assert_eq!(value_at_zero(&pts), 3);
    }

    #[test]
    fn basis_sums_to_one() {
        let pts = pts(&[(3, 0), (5, 0), (7, 0), (-2, 0)]);
        let sum = (0..pts.len()).fold(Rational::new(), |acc, i| {
            acc + basis_at_zero(&pts, i)
        });
        assert_eq!(sum, 1);
    }

    #[test]
    fn single_point() {
        let pts = pts(&[(4, 17)]);
        assert_eq!(basis_at_zero(&pts, 0), 1);
        assert_eq!(value_at_zero(&pts), 17);
    }

    #[test]
    fn non_integer() {
        // line through (1, 0) and (3, 1) has f(0) = -1/2
        let pts = pts(&[(1, 0), (3, 1)]);
        assert_eq!(value_at_zero(&pts), Rational::from((-1, 2)));
    }

    #[test]
    fn unordered_abscissas() {
        // f(x) = 2x^2 - 5x + 11
        let f = |x: i64| 2 * x * x - 5 * x + 11;
        let pts = pts(&[(6, f(6)), (-1, f(-1)), (2, f(2))]);
        assert_eq!(value_at_zero(&pts), 11);
    }
}
