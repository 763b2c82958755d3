use rug::Integer;

use crate::point::Point;

/// Constant term of `f(x) = x^2 + c` through the given point
pub fn constant_term(anchor: &Point) -> Integer {
    let x = anchor.x();
    anchor.y().clone() - Integer::from(x * x)
}

/// Value of `f(x) = x^2 + c` at `x`
pub fn eval(c: &Integer, x: &Integer) -> Integer {
    Integer::from(x * x) + c
}
