use std::fmt::Display;

use anyhow::{Result, anyhow};
use clap::{ArgMatches, ValueEnum, builder::ValueParser, value_parser};

use crate::{
    fraction_framework::output::CommandOutput, math::fraction::Fraction,
};

pub enum Input {
    Integer(i64),
    Operator(Operator),
    Relation(Relation),
}

impl Input {
    pub fn get_type(&self) -> InputType {
        match self {
            Input::Integer(_) => InputType::Integer,
            Input::Operator(_) => InputType::Operator,
            Input::Relation(_) => InputType::Relation,
        }
    }

    pub fn to_integer(&self) -> Result<i64> {
        match self {
            Input::Integer(i) => Ok(*i),
            _ => Err(anyhow!("expected an integer, got {}", self.get_type())),
        }
    }

    pub fn to_operator(&self) -> Result<Operator> {
        match self {
            Input::Operator(o) => Ok(*o),
            _ => Err(anyhow!("expected an operator, got {}", self.get_type())),
        }
    }

    pub fn to_relation(&self) -> Result<Relation> {
        match self {
            Input::Relation(r) => Ok(*r),
            _ => Err(anyhow!("expected a relation, got {}", self.get_type())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputType {
    Integer,
    Operator,
    Relation,
}

impl InputType {
    pub fn get_parser(&self) -> ValueParser {
        match self {
            InputType::Integer => value_parser!(i64).into(),
            InputType::Operator => value_parser!(Operator).into(),
            InputType::Relation => value_parser!(Relation).into(),
        }
    }

    pub fn read(&self, cli_matches: &ArgMatches, cli_id: &str) -> Result<Input> {
        match self {
            InputType::Integer => cli_matches
                .get_one::<i64>(cli_id)
                .map(|value| Input::Integer(*value)),
            InputType::Operator => cli_matches
                .get_one::<Operator>(cli_id)
                .map(|value| Input::Operator(*value)),
            InputType::Relation => cli_matches
                .get_one::<Relation>(cli_id)
                .map(|value| Input::Relation(*value)),
        }
        .ok_or_else(|| anyhow!("argument was not given"))
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InputType::Integer => "integer",
                InputType::Operator => "operator",
                InputType::Relation => "relation",
            }
        )
    }
}

/// Arithmetic operators offered on the command line.
#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn apply(&self, lhs: &Fraction, rhs: &Fraction) -> Result<CommandOutput> {
        Ok(CommandOutput::Fraction(match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }?))
    }
}

/// Relations between two fractions offered on the command line.
#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum Relation {
    Eq,
    Adjacent,
}

impl Relation {
    pub fn apply(&self, lhs: &Fraction, rhs: &Fraction) -> Result<CommandOutput> {
        Ok(CommandOutput::Bool(match self {
            Relation::Eq => lhs.equals(rhs),
            Relation::Adjacent => lhs.is_adjacent_to(rhs),
        }?))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        fraction_framework::{
            input::{Input, InputType, Operator, Relation},
            output::export_to_string,
        },
        math::fraction::Fraction,
    };

    #[test]
    fn operators() {
        let lhs = Fraction::new(2, 3).unwrap();
        let rhs = Fraction::new(3, 4).unwrap();

        let sum = Operator::Add.apply(&lhs, &rhs).unwrap();
        assert_eq!(export_to_string(sum).unwrap(), "17/12\nApproximately 1.4167\n");

        let adjacent = Relation::Adjacent.apply(&lhs, &rhs).unwrap();
        assert_eq!(export_to_string(adjacent).unwrap(), "true\n");

        assert!(Operator::Div.apply(&lhs, &Fraction::zero()).is_err());
    }

    #[test]
    fn input_accessors() {
        let input = Input::Integer(-3);
        assert_eq!(input.get_type(), InputType::Integer);
        assert_eq!(input.to_integer().unwrap(), -3);
        assert!(input.to_operator().is_err());
        assert_eq!(Input::Operator(Operator::Mul).to_operator().unwrap(), Operator::Mul);
        assert_eq!(Input::Relation(Relation::Eq).get_type(), InputType::Relation);
        assert!(Input::Relation(Relation::Eq).to_operator().is_err());
    }
}
