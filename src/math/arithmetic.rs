use std::ops::{Add, Div, Mul, Sub};

use num_traits::checked_pow;

use crate::error::{FractionError, Result};

use super::{fraction::Fraction, operand::AsFraction};

/**
 * Every operation cross-multiplies the raw parts in i128 and hands the result to the constructor,
 * which is the only place where reduction and sign normalisation happen.
 */
impl Fraction {
    pub fn checked_add<T>(&self, rhs: T) -> Result<Fraction>
    where
        T: AsFraction,
    {
        let rhs = rhs.as_fraction()?;
        let (lhs_scaled, rhs_scaled) = self.cross(&rhs);
        Fraction::from_wide(lhs_scaled + rhs_scaled, self.common_denominator(&rhs))
    }

    pub fn checked_sub<T>(&self, rhs: T) -> Result<Fraction>
    where
        T: AsFraction,
    {
        let rhs = rhs.as_fraction()?;
        let (lhs_scaled, rhs_scaled) = self.cross(&rhs);
        Fraction::from_wide(lhs_scaled - rhs_scaled, self.common_denominator(&rhs))
    }

    pub fn checked_mul<T>(&self, rhs: T) -> Result<Fraction>
    where
        T: AsFraction,
    {
        let rhs = rhs.as_fraction()?;
        Fraction::from_wide(
            self.numerator() as i128 * rhs.numerator() as i128,
            self.common_denominator(&rhs),
        )
    }

    /// Fails with [`FractionError::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div<T>(&self, rhs: T) -> Result<Fraction>
    where
        T: AsFraction,
    {
        let rhs = rhs.as_fraction()?;
        if rhs.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Fraction::from_wide(
            self.numerator() as i128 * rhs.denominator() as i128,
            self.denominator() as i128 * rhs.numerator() as i128,
        )
    }

    /**
     * Raises the fraction to an integer power. A negative exponent inverts the fraction first,
     * so zero to a negative power fails with DivisionByZero.
     *
     * Exponents whose magnitude does not fit a u32 are rejected with InvalidExponent.
     */
    pub fn pow<E>(&self, exponent: E) -> Result<Fraction>
    where
        E: TryInto<i64> + ToString + Copy,
    {
        let exp = exponent
            .try_into()
            .ok()
            .and_then(|exp: i64| u32::try_from(exp.unsigned_abs()).ok().map(|abs| (exp, abs)));
        let Some((exp, abs)) = exp else {
            return Err(FractionError::invalid_exponent(exponent));
        };

        let (base_numerator, base_denominator) = if exp < 0 {
            (self.denominator() as i128, self.numerator() as i128)
        } else {
            (self.numerator() as i128, self.denominator() as i128)
        };

        if base_denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        let power = |base: i128| {
            checked_pow(base, abs as usize)
                .ok_or_else(|| FractionError::overflow(format!("({})^{}", self, exp)))
        };
        Fraction::from_wide(power(base_numerator)?, power(base_denominator)?)
    }

    fn common_denominator(&self, rhs: &Fraction) -> i128 {
        self.denominator() as i128 * rhs.denominator() as i128
    }
}

//======================== operators ========================//

macro_rules! operator {
    ($trait:ident, $method:ident, $checked:ident, $rhs:ty) => {
        impl $trait<$rhs> for Fraction {
            type Output = Result<Fraction>;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl<'a> $trait<$rhs> for &'a Fraction {
            type Output = Result<Fraction>;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.$checked(rhs)
            }
        }
    };
}

macro_rules! operators {
    ($rhs:ty) => {
        operator!(Add, add, checked_add, $rhs);
        operator!(Sub, sub, checked_sub, $rhs);
        operator!(Mul, mul, checked_mul, $rhs);
        operator!(Div, div, checked_div, $rhs);
    };
}

operators!(Fraction);
operators!(&Fraction);
operators!(i64);
