use num_integer::Integer;

use crate::error::{FractionError, Result};

/// Greatest common divisor of `a` and `b`. `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> u64 {
    //unsigned, as gcd(i64::MIN, 0) = 2^63
    wide_gcd(a as i128, b as i128) as u64
}

/// Least common multiple `|a * b| / gcd(a, b)`. `lcm(0, x)` is 0.
pub fn lcm(a: i64, b: i64) -> Result<i64> {
    let result = (a as i128).lcm(&(b as i128));
    fit(result).ok_or_else(|| FractionError::overflow(format!("lcm({}, {})", a, b)))
}

pub(crate) fn wide_gcd(a: i128, b: i128) -> i128 {
    a.gcd(&b)
}

/// Narrows an intermediate value back to the storage type.
/// `i64::MIN` is rejected so that negation of a stored value is always defined.
pub(crate) fn fit(value: i128) -> Option<i64> {
    i64::try_from(value).ok().filter(|v| *v != i64::MIN)
}
