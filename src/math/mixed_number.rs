use std::fmt::Display;

/// A fraction split into an integer part and a remainder over the original denominator.
///
/// The whole part is truncated toward zero and the remainder carries the sign of the numerator,
/// so `-5/2` becomes `-2 + -1/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedNumber {
    whole: i64,
    remainder: i64,
    denominator: i64,
}

impl MixedNumber {
    pub(crate) fn new(whole: i64, remainder: i64, denominator: i64) -> Self {
        Self {
            whole,
            remainder,
            denominator,
        }
    }

    pub fn whole(&self) -> i64 {
        self.whole
    }

    pub fn remainder(&self) -> i64 {
        self.remainder
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl Display for MixedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.whole != 0 {
            write!(f, "{} + {}/{}", self.whole, self.remainder, self.denominator)
        } else {
            write!(f, "{}/{}", self.remainder, self.denominator)
        }
    }
}
