use anyhow::{Context, Result};
use std::{
    fmt::{self, Display},
    fs::File,
    io::Write,
    path::PathBuf,
};

use crate::math::fraction::Fraction;

pub enum CommandOutput {
    String(String),
    Bool(bool),
    Integer(i64),
    Fraction(Fraction),
}

impl CommandOutput {
    pub fn get_type(&self) -> OutputType {
        match self {
            CommandOutput::String(_) => OutputType::String,
            CommandOutput::Bool(_) => OutputType::Bool,
            CommandOutput::Integer(_) => OutputType::Integer,
            CommandOutput::Fraction(_) => OutputType::Fraction,
        }
    }

    pub fn export(&self, f: &mut dyn Write) -> Result<()> {
        match self {
            CommandOutput::String(s) => Ok(write!(f, "{}", s)?),
            CommandOutput::Bool(b) => Ok(writeln!(f, "{}", b)?),
            CommandOutput::Integer(i) => Ok(writeln!(f, "{}", i)?),
            CommandOutput::Fraction(fr) => {
                writeln!(f, "{}", fr)?;
                //whole numbers and zero have no decimal form
                if let Ok(decimal) = fr.to_decimal() {
                    writeln!(f, "Approximately {:.4}", decimal)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputType {
    String,
    Bool,
    Integer,
    Fraction,
}

impl OutputType {
    pub fn get_article(&self) -> &str {
        match self {
            OutputType::Integer => "an",
            _ => "a",
        }
    }
}

impl Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputType::String => "text",
                OutputType::Bool => "boolean",
                OutputType::Integer => "integer",
                OutputType::Fraction => "fraction",
            }
        )
    }
}

pub fn export_object(to_file: &PathBuf, object: CommandOutput) -> Result<()> {
    let file = File::create(to_file).with_context(|| format!("Writing result to file {:?}.", to_file))?;
    let mut writer = std::io::BufWriter::new(&file);
    object
        .export(&mut writer)
        .with_context(|| format!("Writing result to file {:?}.", to_file))?;
    writer
        .flush()
        .with_context(|| format!("Writing result to file {:?}.", to_file))
}

pub fn export_to_string(object: CommandOutput) -> Result<String> {
    let mut f = vec![];
    object.export(&mut f)?;
    Ok(String::from_utf8(f)?)
}
