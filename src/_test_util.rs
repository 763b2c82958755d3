use std::iter::repeat_with;

use itertools::Itertools;
use rand::Rng;
use rug::{integer::Order, Integer};

use crate::{
    algebra::poly::dense::DensePoly,
    point::{Point, SampleSet},
    traits::Eval,
};

// random signed integer with up to `max_u64_digits` 64-bit limbs
pub fn rand_int(mut rng: impl Rng, max_u64_digits: usize) -> Integer {
    let len = rng.gen_range(1..=max_u64_digits);
    let parts = Vec::from_iter((0..len).map(|_| rng.gen::<u64>()));
    let int = Integer::from_digits(&parts, Order::Lsf);
    if rng.gen() {
        int
    } else {
        -int
    }
}

// generate a random integer polynomial of degree at most `max_pow`
pub fn gen_poly(
    max_pow: usize,
    max_u64_digits: usize,
    mut rng: impl Rng,
) -> DensePoly<Integer> {
    let nterms = rng.gen_range(0..=max_pow + 1);
    let coeff = repeat_with(|| rand_int(&mut rng, max_u64_digits))
        .take(nterms)
        .collect();
    DensePoly::from_coeff(coeff)
}

// `n` distinct abscissas, mostly small, occasionally beyond 64 bits
pub fn gen_abscissas(n: usize, mut rng: impl Rng) -> Vec<Integer> {
    repeat_with(|| {
        if rng.gen_ratio(1, 4) {
            rand_int(&mut rng, 2)
        } else {
            Integer::from(rng.gen_range(-100i64..=100))
        }
    })
    .unique()
    .take(n)
    .collect()
}

// exact samples of `poly` at the given abscissas
pub fn sample(poly: &DensePoly<Integer>, xs: Vec<Integer>) -> SampleSet {
    xs.into_iter()
        .map(|x| {
            let y = poly.eval(&x);
            Point::new(x, y)
        })
        .collect()
}
