use crate::error::{FractionError, Result};

use super::fraction::Fraction;

/// Right-hand operands of fraction operations: fractions are taken as they are,
/// integers `n` are read as `n/1`.
pub trait AsFraction {
    fn as_fraction(&self) -> Result<Fraction>;
}

impl AsFraction for Fraction {
    fn as_fraction(&self) -> Result<Fraction> {
        Ok(*self)
    }
}

impl<T> AsFraction for &T
where
    T: AsFraction + ?Sized,
{
    fn as_fraction(&self) -> Result<Fraction> {
        (**self).as_fraction()
    }
}

macro_rules! exact {
    ($t:ident) => {
        impl AsFraction for $t {
            fn as_fraction(&self) -> Result<Fraction> {
                Ok(Fraction::from(*self))
            }
        }
    };
}

macro_rules! narrowed {
    ($t:ident) => {
        impl AsFraction for $t {
            fn as_fraction(&self) -> Result<Fraction> {
                i64::try_from(*self)
                    .ok()
                    .and_then(|value| Fraction::new(value, 1).ok())
                    .ok_or_else(|| {
                        log::trace!("cannot coerce {} into a fraction", self);
                        FractionError::invalid_operand(self)
                    })
            }
        }
    };
}

exact!(i8);
exact!(i16);
exact!(i32);
exact!(u8);
exact!(u16);
exact!(u32);
narrowed!(i64);
narrowed!(i128);
narrowed!(isize);
narrowed!(u64);
narrowed!(u128);
narrowed!(usize);
