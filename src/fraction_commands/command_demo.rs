use std::fmt::Write;

use anyhow::Result;

use crate::{
    error::FractionError,
    fraction_framework::{
        command::FractionCommand,
        output::{CommandOutput, OutputType},
    },
    math::fraction::Fraction,
};

pub const DEMO: FractionCommand = FractionCommand::Command {
    name_short: "demo",
    name_long: None,
    explanation_short: "Print a tour of the fraction operations.",
    explanation_long: Some(
        "Print a tour of the fraction operations on 1/4 and 3/2, followed by one example of every kind of failure.",
    ),
    input_types: &[],
    input_names: &[],
    input_helps: &[],
    execute: |_| Ok(CommandOutput::String(demo()?)),
    output_type: &OutputType::String,
};

pub fn demo() -> Result<String> {
    let mut f = String::new();

    let a = Fraction::new(1, 4)?;
    let b = Fraction::new(3, 2)?;

    writeln!(f, "a = {}, b = {}", a, b)?;
    writeln!(f, "a + b = {}", (a + b)?)?;
    writeln!(f, "a - b = {}", (a - b)?)?;
    writeln!(f, "a * b = {}", (a * b)?)?;
    writeln!(f, "a / b = {}", (a / b)?)?;
    writeln!(f, "b is whole: {}", b.is_whole())?;
    writeln!(f, "a is adjacent to b: {}", a.is_adjacent_to(b)?)?;
    writeln!(f, "a as a decimal: {}", a.to_decimal()?)?;
    writeln!(f, "a as a mixed number: {}", a.to_mixed_string()?)?;
    writeln!(f, "b as a mixed number: {}", b.to_mixed_string()?)?;
    writeln!(f, "a is a unit fraction: {}", a.is_unit())?;
    writeln!(f, "a is proper: {}", a.is_proper())?;
    writeln!(f, "a is zero: {}", a.is_zero())?;
    writeln!(f, "a == b: {}", a == b)?;
    writeln!(f, "a ^ -2 = {}", a.pow(-2)?)?;
    writeln!(f, "a is whole: {}", a.is_whole())?;
    writeln!(f, "a = {}", a)?;

    writeln!(f)?;
    writeln!(f, "failures:")?;
    let failures = [
        Fraction::new(6, 0).map(|_| ()),
        Fraction::new(2, 3)?.checked_div(Fraction::new(0, 5)?).map(|_| ()),
        a.equals(u64::MAX).map(|_| ()),
        a.pow(i64::MAX).map(|_| ()),
        Fraction::new(12, 3)?.to_decimal().map(|_| ()),
        Fraction::new(2, 1)?.to_mixed_string().map(|_| ()),
        Fraction::new(i64::MAX, 1)?.checked_add(1).map(|_| ()),
    ];
    for failure in failures {
        if let Err(err) = failure {
            writeln!(f, "{}: {}", diagnostic(&err), err)?;
        }
    }

    Ok(f)
}

fn diagnostic(err: &FractionError) -> &'static str {
    match err {
        FractionError::DivisionByZero => "the denominator cannot be zero",
        FractionError::InvalidOperand { .. } => "the operand is not a fraction",
        FractionError::InvalidExponent { .. } => "the exponent is not usable",
        FractionError::InvalidState { .. } => "the value is not a proper fraction",
        FractionError::Overflow { .. } => "the result is too large",
    }
}
