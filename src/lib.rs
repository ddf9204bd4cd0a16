pub mod fraction_framework {
    pub mod command;
    pub mod input;
    pub mod output;
}
pub mod fraction_commands {
    pub mod command_compute;
    pub mod command_demo;
    pub mod command_inspect;
}
pub mod math {
    pub mod arithmetic;
    pub mod fraction;
    pub mod integer;
    pub mod mixed_number;
    pub mod operand;
}
pub mod error;

pub use error::{FractionError, Result};
pub use math::{fraction::Fraction, mixed_number::MixedNumber, operand::AsFraction};
