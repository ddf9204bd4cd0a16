use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::Neg,
};

use crate::error::{FractionError, Result};

use super::{
    integer::{fit, wide_gcd},
    mixed_number::MixedNumber,
    operand::AsFraction,
};

/// A rational number kept in lowest terms with a positive denominator.
///
/// The only way to obtain a value is through [`Fraction::new`] (or the conversions that delegate to it),
/// so two fractions are mathematically equal exactly when their fields are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates `numerator / denominator` in reduced form.
    ///
    /// Fails with [`FractionError::DivisionByZero`] when the denominator is zero.
    /// Parts that reduce to `i64::MIN` are out of range and give [`FractionError::Overflow`].
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /**
     * Reduction and sign normalisation happen here and nowhere else.
     * Arithmetic passes its cross-multiplied intermediates in unreduced, which cannot overflow an i128 for i64 inputs.
     */
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        let common = wide_gcd(numerator, denominator);
        let (numerator, denominator) = (numerator / common, denominator / common);
        let overflow = || FractionError::overflow(format!("{}/{}", numerator, denominator));
        let (numerator, denominator) = if denominator < 0 {
            (
                numerator.checked_neg().ok_or_else(overflow)?,
                denominator.checked_neg().ok_or_else(overflow)?,
            )
        } else {
            (numerator, denominator)
        };

        match (fit(numerator), fit(denominator)) {
            (Some(numerator), Some(denominator)) => Ok(Self {
                numerator,
                denominator,
            }),
            _ => Err(FractionError::overflow(format!(
                "{}/{}",
                numerator, denominator
            ))),
        }
    }

    pub const fn zero() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }

    pub const fn one() -> Self {
        Self {
            numerator: 1,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// 1/self
    pub fn recip(&self) -> Result<Self> {
        Self::from_wide(self.denominator as i128, self.numerator as i128)
    }

    /// Compares with a fraction or an integer.
    pub fn equals<T>(&self, other: T) -> Result<bool>
    where
        T: AsFraction,
    {
        Ok(*self == other.as_fraction()?)
    }

    /**
     * Approximates the fraction as a float.
     * Whole numbers and zero are refused with an InvalidState error: only genuine fractions are converted.
     */
    pub fn to_decimal(&self) -> Result<f64> {
        if self.numerator == 0 || self.denominator == 1 {
            return Err(FractionError::invalid_state("convert to a decimal", self));
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_whole(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if the absolute value of the fraction is strictly between 0 and 1.
    pub fn is_proper(&self) -> bool {
        self.numerator != 0 && self.numerator.abs() < self.denominator
    }

    /// Returns true if the fraction is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    /// Returns true if the fraction is less than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns true if the reduced numerator is exactly 1.
    pub fn is_unit(&self) -> bool {
        self.numerator == 1
    }

    /// Two fractions are adjacent if the absolute value of their difference is a unit fraction
    /// over the product of their denominators.
    pub fn is_adjacent_to<T>(&self, other: T) -> Result<bool>
    where
        T: AsFraction,
    {
        let other = other.as_fraction()?;
        let (lhs, rhs) = self.cross(&other);
        Ok((lhs - rhs).abs() == 1)
    }

    pub fn mixed_number(&self) -> Result<MixedNumber> {
        if self.denominator == 1 && self.numerator != 0 {
            return Err(FractionError::invalid_state(
                "write as a mixed number",
                self,
            ));
        }
        Ok(MixedNumber::new(
            self.numerator / self.denominator,
            self.numerator % self.denominator,
            self.denominator,
        ))
    }

    /// Renders `"{whole} + {remainder}/{denominator}"`, or the plain fraction if there is no whole part.
    pub fn to_mixed_string(&self) -> Result<String> {
        Ok(self.mixed_number()?.to_string())
    }

    /// Numerators scaled to the common denominator `self.denominator * other.denominator`.
    pub(crate) fn cross(&self, other: &Self) -> (i128, i128) {
        (
            self.numerator as i128 * other.denominator as i128,
            other.numerator as i128 * self.denominator as i128,
        )
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Debug for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fraction({})", self)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.denominator == 1 && self.numerator == *other
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from(value: (i64, i64)) -> Result<Self> {
        Self::new(value.0, value.1)
    }
}

impl TryFrom<Fraction> for f64 {
    type Error = FractionError;

    fn try_from(value: Fraction) -> Result<Self> {
        value.to_decimal()
    }
}

//======================== primitive types ========================//

macro_rules! from {
    ($t:ident) => {
        impl From<$t> for Fraction {
            fn from(value: $t) -> Self {
                Self {
                    numerator: value as i64,
                    denominator: 1,
                }
            }
        }
    };
}

from!(i8);
from!(i16);
from!(i32);
from!(u8);
from!(u16);
from!(u32);

impl TryFrom<i64> for Fraction {
    type Error = FractionError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value, 1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        error::FractionError,
        math::{fraction::Fraction, integer::gcd},
    };

    fn f(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn initialization() {
        let fraction = f(0, 1);
        assert_eq!(fraction.numerator(), 0);
        assert_eq!(fraction.denominator(), 1);

        let fraction = f(5, 10);
        assert_eq!(fraction.numerator(), 1);
        assert_eq!(fraction.denominator(), 2);

        let fraction = f(1, 4);
        assert_eq!(fraction.numerator(), 1);
        assert_eq!(fraction.denominator(), 4);

        assert_eq!(Fraction::default(), f(0, 1));
    }

    #[test]
    fn zero_denominator() {
        for numerator in [-7, -1, 0, 1, 6, i64::MAX] {
            assert_eq!(
                Fraction::new(numerator, 0),
                Err(FractionError::DivisionByZero)
            );
        }
    }

    #[test]
    fn sign_canonical() {
        assert_eq!(f(-1, -4), f(1, 4));
        assert_eq!(f(1, -4), f(-1, 4));
        assert_eq!(f(1, -4).numerator(), -1);
        assert_eq!(f(1, -4).denominator(), 4);
        assert_eq!(f(0, -3), Fraction::zero());
    }

    #[test]
    fn reduction_invariant() {
        for numerator in -30..=30 {
            for denominator in (-12..=12).filter(|d| *d != 0) {
                let fraction = f(numerator, denominator);
                assert!(fraction.denominator() > 0);
                assert_eq!(
                    gcd(fraction.numerator(), fraction.denominator()),
                    1,
                    "{}/{} reduced to {}",
                    numerator,
                    denominator,
                    fraction
                );
                //same ratio: n * d' == n' * d
                assert_eq!(
                    numerator as i128 * fraction.denominator() as i128,
                    fraction.numerator() as i128 * denominator as i128
                );
            }
        }
    }

    #[test]
    fn construction_idempotent() {
        let reduced = f(-14, 9);
        let again = f(reduced.numerator(), reduced.denominator());
        assert_eq!(again.numerator(), -14);
        assert_eq!(again.denominator(), 9);
    }

    #[test]
    fn storage_range() {
        assert_eq!(f(i64::MAX, i64::MAX), Fraction::one());
        assert_eq!(f(i64::MIN, 2).numerator(), i64::MIN / 2);
        assert!(matches!(
            Fraction::new(i64::MIN, 1),
            Err(FractionError::Overflow { .. })
        ));
        assert!(matches!(
            Fraction::new(1, i64::MIN),
            Err(FractionError::Overflow { .. })
        ));
        assert_eq!(f(i64::MIN, i64::MIN), Fraction::one());
    }

    #[test]
    fn str_representation() {
        assert_eq!(f(3, 4).to_string(), "3/4");
        assert_eq!(f(5, 2).to_string(), "5/2");
        assert_eq!(f(6, 1).to_string(), "6/1");
        assert_eq!(f(0, 8).to_string(), "0/1");
        assert_eq!(f(3, -9).to_string(), "-1/3");
        assert_eq!(format!("{:?}", f(2, 4)), "Fraction(1/2)");
    }

    #[test]
    fn equality() {
        assert_eq!(f(2, 3), f(4, 6));
        assert_ne!(f(2, 3), f(1, 2));
        assert_ne!(f(2, 3), f(0, 1));
        assert!(f(5, 1) == 5i64);
        assert!(5i64 == f(10, 2));
        assert!(f(5, 2) != 2i64);
        assert_eq!(f(5, 1).equals(5), Ok(true));
        assert_eq!(f(2, 3).equals(f(4, 6)), Ok(true));
        assert_eq!(f(2, 3).equals(&f(1, 2)), Ok(false));
        assert!(matches!(
            f(2, 3).equals(u64::MAX),
            Err(FractionError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn ordering() {
        assert!(f(1, 3) < f(1, 2));
        assert!(f(-1, 2) < f(-1, 3));
        assert!(f(7, 3) > Fraction::from(2));
        let mut values = vec![f(3, 2), f(-5, 4), f(0, 1), f(1, 3), f(-1, 7)];
        values.sort();
        assert_eq!(
            values,
            vec![f(-5, 4), f(-1, 7), f(0, 1), f(1, 3), f(3, 2)]
        );
        assert_eq!(f(i64::MAX, 2).max(f(i64::MAX - 1, 2)), f(i64::MAX, 2));
    }

    #[test]
    fn hashing_follows_value() {
        let set: HashSet<Fraction> = [f(1, 2), f(2, 4), f(-3, -6), f(1, 3)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn float_conversion() {
        assert_eq!(f(1, 4).to_decimal(), Ok(0.25));
        assert_eq!(f(-3, 8).to_decimal(), Ok(-0.375));
        assert_eq!(f64::try_from(f(1, 2)), Ok(0.5));
        assert!(matches!(
            f(12, 3).to_decimal(),
            Err(FractionError::InvalidState { .. })
        ));
        assert!(matches!(
            f(1, 1).to_decimal(),
            Err(FractionError::InvalidState { .. })
        ));
        assert!(matches!(
            f(0, 5).to_decimal(),
            Err(FractionError::InvalidState { .. })
        ));
    }

    #[test]
    fn zero_check() {
        assert!(f(0, 5).is_zero());
        assert!(!f(1, 5).is_zero());
    }

    #[test]
    fn whole_check() {
        assert!(f(7, 1).is_whole());
        assert!(f(14, 2).is_whole());
        assert!(!f(7, 5).is_whole());
    }

    #[test]
    fn proper_check() {
        assert!(!f(5, 3).is_proper());
        assert!(f(1, 2).is_proper());
        assert!(f(-1, 2).is_proper());
        assert!(!f(4, 1).is_proper());
        assert!(!f(0, 1).is_proper());
    }

    #[test]
    fn unit_check() {
        assert!(f(1, 5).is_unit());
        assert!(f(7, 14).is_unit());
        assert!(!f(3, 2).is_unit());
        assert!(!f(-1, 5).is_unit());
        assert!(!f(0, 7).is_unit());
        //1/1 is a unit fraction as well
        assert!(f(5, 5).is_unit());
    }

    #[test]
    fn adjacent_check() {
        assert_eq!(f(2, 3).is_adjacent_to(f(3, 4)), Ok(true));
        assert_eq!(f(3, 4).is_adjacent_to(f(2, 3)), Ok(true));
        assert_eq!(f(5, 2).is_adjacent_to(f(3, 4)), Ok(false));
        assert_eq!(f(1, 2).is_adjacent_to(1), Ok(true));
        assert_eq!(f(0, 1).is_adjacent_to(f(1, 2)), Ok(true));
        assert_eq!(f(0, 1).is_adjacent_to(f(2, 3)), Ok(false));
        assert!(matches!(
            f(1, 2).is_adjacent_to(i128::MAX),
            Err(FractionError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn reciprocal() {
        assert_eq!(f(-2, 3).recip(), Ok(f(-3, 2)));
        assert_eq!(Fraction::zero().recip(), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn negation_and_abs() {
        assert_eq!(-f(2, 3), f(-2, 3));
        assert_eq!(-&f(-2, 3), f(2, 3));
        assert_eq!(f(-2, 3).abs(), f(2, 3));
        let extreme = f(-i64::MAX, 1);
        assert_eq!((-extreme).numerator(), i64::MAX);
    }

    #[test]
    fn sign_checks() {
        assert!(f(1, 1).is_positive());
        assert!(!f(1, 1).is_negative());
        assert!(f(3, -4).is_negative());
        assert!(!f(3, -4).is_positive());
        assert!(!Fraction::zero().is_positive());
        assert!(!Fraction::zero().is_negative());
    }

    #[test]
    fn from_integers() {
        assert_eq!(Fraction::from(-3i32), f(-3, 1));
        assert_eq!(Fraction::from(200u8), f(200, 1));
        assert_eq!(Fraction::try_from(9i64), Ok(f(9, 1)));
        assert_eq!(Fraction::try_from((6i64, -4i64)), Ok(f(-3, 2)));
        assert!(Fraction::try_from(i64::MIN).is_err());
    }
}
