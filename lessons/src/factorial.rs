//! Iterative factorial.

use num_bigint::BigUint;

/// Compute `n!` by multiplying `1..=n`. `0! = 1`.
pub fn factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}
