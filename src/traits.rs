use rug::{Integer, Rational};

pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}

macro_rules! impl_zero_one {
    ( $( $x:ty ),* ) => {
        $(
            impl Zero for $x {
                fn zero() -> Self {
                    <$x>::new()
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }

            impl One for $x {
                fn one() -> Self {
                    <$x>::from(1)
                }

                fn is_one(&self) -> bool {
                    *self == 1
                }
            }
        )*
    };
}

impl_zero_one!(Integer, Rational);
