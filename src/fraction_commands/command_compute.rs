use anyhow::{Context, Result};

use crate::{
    fraction_framework::{
        command::FractionCommand,
        input::{Input, InputType},
        output::{CommandOutput, OutputType},
    },
    math::{fraction::Fraction, integer},
};

pub const COMPUTE: FractionCommand = FractionCommand::Group {
    name_short: "comp",
    name_long: Some("compute"),
    explanation_short: "Compute with fractions.",
    explanation_long: None,
    children: &[&COMPUTE_BINARY, &COMPUTE_LCM, &COMPUTE_POWER, &COMPUTE_RELATION],
};

pub const COMPUTE_BINARY: FractionCommand = FractionCommand::Command {
    name_short: "bin",
    name_long: Some("binary"),
    explanation_short: "Apply an arithmetic operator to two fractions.",
    explanation_long: Some(
        "Apply an arithmetic operator to two fractions, each given as a numerator and a denominator. The result is a fraction in lowest terms.",
    ),
    input_types: &[
        &InputType::Integer,
        &InputType::Integer,
        &InputType::Operator,
        &InputType::Integer,
        &InputType::Integer,
    ],
    input_names: &["NUMERATOR_1", "DENOMINATOR_1", "OPERATOR", "NUMERATOR_2", "DENOMINATOR_2"],
    input_helps: &[
        "The numerator of the first fraction.",
        "The denominator of the first fraction.",
        "The operator.",
        "The numerator of the second fraction.",
        "The denominator of the second fraction.",
    ],
    execute: |inputs| {
        let lhs = read_fraction(&inputs[0], &inputs[1])?;
        let operator = inputs[2].to_operator()?;
        let rhs = read_fraction(&inputs[3], &inputs[4])?;
        log::info!("compute {} {:?} {}", lhs, operator, rhs);
        operator
            .apply(&lhs, &rhs)
            .with_context(|| format!("Applying {:?} to {} and {}.", operator, lhs, rhs))
    },
    output_type: &OutputType::Fraction,
};

pub const COMPUTE_RELATION: FractionCommand = FractionCommand::Command {
    name_short: "rel",
    name_long: Some("relation"),
    explanation_short: "Test whether two fractions are equal or adjacent.",
    explanation_long: None,
    input_types: &[
        &InputType::Integer,
        &InputType::Integer,
        &InputType::Relation,
        &InputType::Integer,
        &InputType::Integer,
    ],
    input_names: &["NUMERATOR_1", "DENOMINATOR_1", "RELATION", "NUMERATOR_2", "DENOMINATOR_2"],
    input_helps: &[
        "The numerator of the first fraction.",
        "The denominator of the first fraction.",
        "The relation to test.",
        "The numerator of the second fraction.",
        "The denominator of the second fraction.",
    ],
    execute: |inputs| {
        let lhs = read_fraction(&inputs[0], &inputs[1])?;
        let relation = inputs[2].to_relation()?;
        let rhs = read_fraction(&inputs[3], &inputs[4])?;
        log::info!("test {} {:?} {}", lhs, relation, rhs);
        relation
            .apply(&lhs, &rhs)
            .with_context(|| format!("Testing {:?} on {} and {}.", relation, lhs, rhs))
    },
    output_type: &OutputType::Bool,
};

pub const COMPUTE_POWER: FractionCommand = FractionCommand::Command {
    name_short: "pow",
    name_long: Some("power"),
    explanation_short: "Raise a fraction to an integer power.",
    explanation_long: None,
    input_types: &[&InputType::Integer, &InputType::Integer, &InputType::Integer],
    input_names: &["NUMERATOR", "DENOMINATOR", "EXPONENT"],
    input_helps: &[
        "The numerator of the fraction.",
        "The denominator of the fraction.",
        "The exponent; negative exponents invert the fraction.",
    ],
    execute: |inputs| {
        let base = read_fraction(&inputs[0], &inputs[1])?;
        let exponent = inputs[2].to_integer()?;
        log::info!("compute ({})^{}", base, exponent);
        Ok(CommandOutput::Fraction(
            base.pow(exponent)
                .with_context(|| format!("Raising {} to the power {}.", base, exponent))?,
        ))
    },
    output_type: &OutputType::Fraction,
};

pub const COMPUTE_LCM: FractionCommand = FractionCommand::Command {
    name_short: "lcm",
    name_long: None,
    explanation_short: "Compute the least common multiple of two integers.",
    explanation_long: None,
    input_types: &[&InputType::Integer, &InputType::Integer],
    input_names: &["A", "B"],
    input_helps: &["The first integer.", "The second integer."],
    execute: |inputs| {
        let a = inputs[0].to_integer()?;
        let b = inputs[1].to_integer()?;
        Ok(CommandOutput::Integer(integer::lcm(a, b)?))
    },
    output_type: &OutputType::Integer,
};

pub fn read_fraction(numerator: &Input, denominator: &Input) -> Result<Fraction> {
    let numerator = numerator.to_integer()?;
    let denominator = denominator.to_integer()?;
    Fraction::new(numerator, denominator)
        .with_context(|| format!("Creating the fraction {}/{}.", numerator, denominator))
}
