use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::path::PathBuf;

use crate::fraction_commands::{command_compute, command_demo, command_inspect};

use super::{
    input::{Input, InputType},
    output::{self, CommandOutput, OutputType},
};

pub const FRACTION_COMMANDS: FractionCommand = FractionCommand::Group {
    name_short: "exact-fraction",
    name_long: None,
    explanation_short: "Exact arithmetic on fractions in lowest terms.",
    explanation_long: None,
    children: &[
        &command_compute::COMPUTE,
        &command_demo::DEMO,
        &command_inspect::INSPECT,
    ],
};

pub const ARG_SHORT_OUTPUT: char = 'o';
pub const ARG_ID_OUTPUT: &str = "output";

pub enum FractionCommand {
    Group {
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,
        children: &'static [&'static FractionCommand],
    },
    Command {
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,

        input_types: &'static [&'static InputType], //one per fixed-position parameter
        input_names: &'static [&'static str],
        input_helps: &'static [&'static str],

        execute: fn(inputs: Vec<Input>) -> Result<CommandOutput>,
        output_type: &'static OutputType,
    },
}

impl FractionCommand {
    pub fn build_cli(&self) -> Command {
        let mut command;
        match self {
            FractionCommand::Group {
                name_short,
                name_long,
                explanation_short,
                explanation_long,
                children,
            } => {
                let name = if let Some(x) = name_long { x } else { name_short };
                command = Command::new(*name)
                    .about(*explanation_short)
                    .subcommand_required(true)
                    .allow_external_subcommands(false);

                if name_long.is_some() {
                    command = command.alias(*name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(*l);
                }

                for child in children.iter() {
                    command = command.subcommand(child.build_cli());
                }
            }
            FractionCommand::Command {
                name_short,
                name_long,
                explanation_short,
                explanation_long,
                input_types,
                input_names,
                input_helps,
                ..
            } => {
                let name = if let Some(x) = name_long { x } else { name_short };
                command = Command::new(*name).about(*explanation_short);

                if name_long.is_some() {
                    command = command.alias(*name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(*l);
                }

                for (i, (input_name, (input_type, input_help))) in input_names
                    .iter()
                    .zip(input_types.iter().zip(input_helps.iter()))
                    .enumerate()
                {
                    let arg = Arg::new(Self::cli_id(input_name, i))
                        .action(ArgAction::Set)
                        .value_name(*input_name)
                        .help(*input_help)
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(input_type.get_parser());

                    command = command.arg(arg);
                }

                command = command.arg(
                    Arg::new(ARG_ID_OUTPUT)
                        .short(ARG_SHORT_OUTPUT)
                        .long(ARG_ID_OUTPUT)
                        .action(ArgAction::Set)
                        .value_name("FILE")
                        .help("Saves the result to a file.")
                        .required(false)
                        .value_parser(value_parser!(PathBuf)),
                );
            }
        };
        command
    }

    pub fn long_name(&self) -> &str {
        match self {
            FractionCommand::Group {
                name_short,
                name_long,
                ..
            }
            | FractionCommand::Command {
                name_short,
                name_long,
                ..
            } => name_long.unwrap_or(*name_short),
        }
    }

    fn cli_id(input_name: &str, index: usize) -> String {
        format!("{}x{}", input_name, index)
    }

    /// Reads the fixed-position parameters of a command from the parsed command line.
    pub fn read_inputs(&self, cli_matches: &ArgMatches) -> Result<Vec<Input>> {
        let FractionCommand::Command {
            input_types,
            input_names,
            ..
        } = self
        else {
            return Err(anyhow!("{} is a group of commands", self.long_name()));
        };

        let mut inputs = vec![];
        for (i, (input_type, input_name)) in input_types.iter().zip(input_names.iter()).enumerate() {
            log::info!("Reading {}", input_name);
            let input = input_type
                .read(cli_matches, &Self::cli_id(input_name, i))
                .with_context(|| format!("Reading parameter {}.", input_name))?;
            inputs.push(input);
        }
        Ok(inputs)
    }

    pub fn execute(&self, cli_matches: &ArgMatches) -> Result<()> {
        match self {
            FractionCommand::Group { children, .. } => {
                for child in children.iter() {
                    if let Some(sub_matches) = cli_matches.subcommand_matches(child.long_name()) {
                        return child.execute(sub_matches);
                    }
                }
            }
            FractionCommand::Command {
                execute,
                output_type,
                ..
            } => {
                let inputs = self.read_inputs(cli_matches)?;

                log::info!("Starting {}", self.long_name());

                let result = (execute)(inputs)?;

                if &&result.get_type() != output_type {
                    return Err(anyhow!(
                        "Output type {} does not match the declared output of {}.",
                        result.get_type(),
                        output_type
                    ));
                }

                if let Some(to_file) = cli_matches.get_one::<PathBuf>(ARG_ID_OUTPUT) {
                    log::info!("Writing result to {:?} as {} {}", to_file, output_type.get_article(), output_type);
                    output::export_object(to_file, result)?;
                } else {
                    log::info!("Writing result as {} {}", output_type.get_article(), output_type);
                    print!("{}", output::export_to_string(result)?);
                }

                return Ok(());
            }
        }
        Err(anyhow!("command not recognised"))
    }
}
