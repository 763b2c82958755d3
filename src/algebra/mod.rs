/// Polynomials
pub mod poly;
