use std::{
    fmt::{self, Display},
    ops::{AddAssign, MulAssign, SubAssign},
};

use rug::{Integer, Rational};

use crate::traits::{Eval, One, Zero};

/// Univariate polynomial stored as coefficients of increasing power
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DensePoly<T> {
    coeff: Vec<T>,
}

impl<T> DensePoly<T> {
    pub fn new() -> Self {
        Self { coeff: Vec::new() }
    }

    pub fn coeff(&self) -> &[T] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<T> {
        self.coeff
    }

    pub fn degree(&self) -> Option<usize> {
        if self.coeff.is_empty() {
            None
        } else {
            Some(self.coeff.len() - 1)
        }
    }
}

impl<T: Zero> DensePoly<T> {
    pub fn from_coeff(coeff: Vec<T>) -> Self {
        let mut res = Self { coeff };
        res.delete_trailing_zeroes();
        res
    }

    pub fn from_coeff_unchecked(coeff: Vec<T>) -> Self {
        debug_assert!(!matches!(coeff.last(), Some(c) if c.is_zero()));
        Self { coeff }
    }

    /// The coefficient of `x^0`
    pub fn constant(&self) -> T
    where
        T: Clone,
    {
        self.coeff.first().cloned().unwrap_or_else(T::zero)
    }

    pub fn nterms(&self) -> usize {
        self.coeff.iter().filter(|c| !c.is_zero()).count()
    }

    fn delete_trailing_zeroes(&mut self) {
        let last_nonzero = self
            .coeff
            .iter()
            .rposition(|c| !c.is_zero())
            .map(|pos| pos + 1)
            .unwrap_or_default();
        self.coeff.truncate(last_nonzero);
    }
}

impl<T: Zero + Clone> DensePoly<T>
where
    for<'a> T: MulAssign<&'a T> + SubAssign<&'a T>,
{
    /// Multiply by the linear factor `x - root`
    pub fn mul_linear(&mut self, root: &T) {
        if self.coeff.is_empty() {
            return;
        }
        let mut res = Vec::with_capacity(self.coeff.len() + 1);
        res.push(T::zero());
        res.extend(self.coeff.iter().cloned());
        for (pow, c) in self.coeff.iter().enumerate() {
            let mut shift = c.clone();
            shift *= root;
            res[pow] -= &shift;
        }
        self.coeff = res;
        self.delete_trailing_zeroes()
    }
}

impl<T: Zero> AddAssign<&DensePoly<T>> for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: &Self) {
        if self.coeff.len() < rhs.coeff.len() {
            self.coeff.resize_with(rhs.coeff.len(), || T::zero())
        }
        for (lhs, rhs) in self.coeff.iter_mut().zip(rhs.coeff.iter()) {
            *lhs += rhs;
        }
        self.delete_trailing_zeroes()
    }
}

impl<T: Zero> MulAssign<&T> for DensePoly<T>
where
    for<'a> T: MulAssign<&'a T>,
{
    fn mul_assign(&mut self, rhs: &T) {
        for c in &mut self.coeff {
            *c *= rhs
        }
        self.delete_trailing_zeroes()
    }
}

impl<T> Zero for DensePoly<T> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.coeff.is_empty()
    }
}

impl<T: One> One for DensePoly<T> {
    fn one() -> Self {
        Self {
            coeff: vec![T::one()],
        }
    }

    fn is_one(&self) -> bool {
        self.coeff.len() == 1 && self.coeff[0].is_one()
    }
}

impl Eval<Rational> for DensePoly<Rational> {
    type Output = Rational;

    fn eval(&self, x: &Rational) -> Self::Output {
        self.coeff.iter().rev().fold(Rational::new(), |mut acc, c| {
            acc *= x;
            acc += c;
            acc
        })
    }
}

impl Eval<Integer> for DensePoly<Rational> {
    type Output = Rational;

    fn eval(&self, x: &Integer) -> Self::Output {
        self.eval(&Rational::from(x.clone()))
    }
}

impl Eval<Integer> for DensePoly<Integer> {
    type Output = Integer;

    fn eval(&self, x: &Integer) -> Self::Output {
        self.coeff.iter().rev().fold(Integer::new(), |mut acc, c| {
            acc *= x;
            acc += c;
            acc
        })
    }
}

impl From<DensePoly<Integer>> for DensePoly<Rational> {
    fn from(p: DensePoly<Integer>) -> Self {
        let coeff = p.coeff.into_iter().map(Rational::from).collect();
        Self::from_coeff_unchecked(coeff)
    }
}

impl<T: Display + Zero + One> Display for DensePoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coeff.is_empty() {
            return write!(f, "0");
        }
        let mut terms = self
            .coeff
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(pow, c)| match pow {
                0 => format!("{c}"),
                1 if c.is_one() => "x".to_owned(),
                1 => format!("({c})*x"),
                _ if c.is_one() => format!("x^{pow}"),
                _ => format!("({c})*x^{pow}"),
            });
        if let Some(first) = terms.next() {
            write!(f, "{first}")?;
        }
        for term in terms {
            write!(f, " + {term}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeff: &[i32]) -> DensePoly<Rational> {
        DensePoly::from_coeff(coeff.iter().map(|&c| Rational::from(c)).collect())
    }

    #[test]
    fn trailing_zeroes() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.nterms(), 2);
        assert!(poly(&[0, 0]).is_zero());
        assert_eq!(poly(&[]).constant(), 0);
    }

    #[test]
    fn eval() {
        // 3 + x^2
        let p = poly(&[3, 0, 1]);
        assert_eq!(p.eval(&Integer::from(0)), 3);
        assert_eq!(p.eval(&Integer::from(2)), 7);
        assert_eq!(p.eval(&Rational::from((1, 2))), Rational::from((13, 4)));
    }

    #[test]
    fn mul_linear() {
        // (x - 2) * (x + 3) = x^2 + x - 6
        let mut p = DensePoly::<Rational>::one();
        p.mul_linear(&Rational::from(2));
        p.mul_linear(&Rational::from(-3));
        assert_eq!(p, poly(&[-6, 1, 1]));
    }

    #[test]
    fn add_and_scale() {
        let mut p = poly(&[1, 1]);
        p += &poly(&[0, -1, 2]);
        assert_eq!(p, poly(&[1, 0, 2]));
        p *= &Rational::from((1, 2));
        let expected = DensePoly::from_coeff(vec![
            Rational::from((1, 2)),
            Rational::new(),
            Rational::from(1),
        ]);
        assert_eq!(p, expected);
        p += &poly(&[0, 0, -1]);
        assert_eq!(p.degree(), Some(0));
    }

    #[test]
    fn display() {
        assert_eq!(poly(&[3, 0, 1]).to_string(), "3 + x^2");
        assert_eq!(poly(&[]).to_string(), "0");
        let p = DensePoly::from_coeff(vec![Rational::from((1, 2)), Rational::from(1)]);
        assert_eq!(p.to_string(), "1/2 + x");
    }
}
