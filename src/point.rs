use std::{
    fmt::{self, Display},
    ops::Deref,
};

use itertools::Itertools;
use rug::Integer;

use crate::rec::RecError;

/// A sample point `(x, y)` of the polynomial to be reconstructed
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    x: Integer,
    y: Integer,
}

impl Point {
    pub fn new(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &Integer {
        &self.x
    }

    pub fn y(&self) -> &Integer {
        &self.y
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sample points in input order, with pairwise distinct `x`
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SampleSet {
    pts: Vec<Point>,
}

impl SampleSet {
    /// Construct a sample set, rejecting repeated `x` values
    pub fn new(pts: Vec<Point>) -> Result<Self, RecError> {
        if let Some(dup) = first_duplicate_x(&pts) {
            return Err(RecError::DuplicateX(dup.clone()));
        }
        Ok(Self { pts })
    }

    pub fn from_points_unchecked(pts: Vec<Point>) -> Self {
        Self { pts }
    }
}

impl Deref for SampleSet {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.pts
    }
}

impl FromIterator<Point> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points_unchecked(iter.into_iter().collect())
    }
}

impl Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.pts.iter().format(", "))
    }
}

pub(crate) fn first_duplicate_x(pts: &[Point]) -> Option<&Integer> {
    pts.iter().map(|pt| pt.x()).duplicates().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let pts = SampleSet::new(vec![Point::new(1, 4), Point::new(2, 7)]).unwrap();
        assert_eq!(pts.to_string(), "[(1, 4), (2, 7)]");
        assert_eq!(pts.len(), 2);
        assert_eq!(*pts[1].y(), 7);
    }

    #[test]
    fn duplicate_x() {
        let pts = vec![Point::new(1, 4), Point::new(2, 7), Point::new(2, 8)];
        assert_eq!(
            SampleSet::new(pts.clone()),
            Err(RecError::DuplicateX(Integer::from(2)))
        );
        let unchecked = SampleSet::from_points_unchecked(pts);
        assert_eq!(unchecked.len(), 3);
    }
}
