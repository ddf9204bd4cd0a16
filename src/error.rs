use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("[Fraction] the denominator cannot be zero")]
    DivisionByZero,

    #[error("[Fraction] the operand `{operand}` cannot be used as a fraction")]
    InvalidOperand { operand: String },

    #[error("[Fraction] the exponent `{exponent}` is not supported, expected an integer within ±{max}", max = u32::MAX)]
    InvalidExponent { exponent: String },

    #[error("[Fraction] cannot {operation} the fraction {fraction}")]
    InvalidState {
        operation: &'static str,
        fraction: String,
    },

    #[error("[Fraction] integer overflow when evaluating `{operation}`")]
    Overflow { operation: String },
}

impl FractionError {
    pub fn invalid_operand<T>(operand: T) -> Self
    where
        T: ToString,
    {
        Self::InvalidOperand {
            operand: operand.to_string(),
        }
    }

    pub fn invalid_exponent<T>(exponent: T) -> Self
    where
        T: ToString,
    {
        Self::InvalidExponent {
            exponent: exponent.to_string(),
        }
    }

    pub fn invalid_state<T>(operation: &'static str, fraction: T) -> Self
    where
        T: ToString,
    {
        Self::InvalidState {
            operation,
            fraction: fraction.to_string(),
        }
    }

    pub fn overflow<T>(operation: T) -> Self
    where
        T: ToString,
    {
        let operation = operation.to_string();
        log::debug!("overflow in {}", operation);
        Self::Overflow { operation }
    }
}

pub type Result<T> = core::result::Result<T, FractionError>;
