use std::fmt::Write;

use anyhow::Result;

use crate::{
    fraction_commands::command_compute::read_fraction,
    fraction_framework::{
        command::FractionCommand,
        input::InputType,
        output::{CommandOutput, OutputType},
    },
    math::fraction::Fraction,
};

pub const INSPECT: FractionCommand = FractionCommand::Command {
    name_short: "ins",
    name_long: Some("inspect"),
    explanation_short: "Show the reduced form of a fraction and its properties.",
    explanation_long: None,
    input_types: &[&InputType::Integer, &InputType::Integer],
    input_names: &["NUMERATOR", "DENOMINATOR"],
    input_helps: &[
        "The numerator of the fraction.",
        "The denominator of the fraction.",
    ],
    execute: |inputs| {
        let fraction = read_fraction(&inputs[0], &inputs[1])?;
        Ok(CommandOutput::String(inspect(&fraction)?))
    },
    output_type: &OutputType::String,
};

pub fn inspect(fraction: &Fraction) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "fraction\t{}", fraction)?;
    writeln!(f, "numerator\t{}", fraction.numerator())?;
    writeln!(f, "denominator\t{}", fraction.denominator())?;
    match fraction.mixed_number() {
        Ok(mixed) => writeln!(f, "mixed number\t{}", mixed)?,
        Err(_) => writeln!(f, "mixed number\tnone, the fraction is a whole number")?,
    }
    match fraction.to_decimal() {
        Ok(decimal) => writeln!(f, "decimal\t{}", decimal)?,
        Err(_) => writeln!(f, "decimal\tnone, the fraction is zero or a whole number")?,
    }
    writeln!(f, "zero\t{}", fraction.is_zero())?;
    writeln!(f, "whole\t{}", fraction.is_whole())?;
    writeln!(f, "proper\t{}", fraction.is_proper())?;
    writeln!(f, "unit\t{}", fraction.is_unit())?;
    writeln!(f, "positive\t{}", fraction.is_positive())?;
    writeln!(f, "negative\t{}", fraction.is_negative())?;
    Ok(f)
}

#[cfg(test)]
mod tests {
    use crate::math::fraction::Fraction;

    use super::inspect;

    #[test]
    fn inspect_proper() {
        let text = inspect(&Fraction::new(-6, -8).unwrap()).unwrap();
        let expected = "fraction\t3/4\n\
            numerator\t3\n\
            denominator\t4\n\
            mixed number\t3/4\n\
            decimal\t0.75\n\
            zero\tfalse\n\
            whole\tfalse\n\
            proper\ttrue\n\
            unit\tfalse\n\
            positive\ttrue\n\
            negative\tfalse\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn inspect_whole() {
        let text = inspect(&Fraction::new(-12, 3).unwrap()).unwrap();
        assert!(text.starts_with("fraction\t-4/1\n"));
        assert!(text.contains("mixed number\tnone, the fraction is a whole number\n"));
        assert!(text.contains("decimal\tnone, the fraction is zero or a whole number\n"));
        assert!(text.contains("whole\ttrue\n"));
        assert!(text.contains("negative\ttrue\n"));
    }
}
