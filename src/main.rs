use anyhow::{Context, Result};
use clap::{Args, FromArgMatches, crate_version};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use exact_fraction::fraction_framework::command::FRACTION_COMMANDS;

pub fn main() -> Result<()> {
    let command = FRACTION_COMMANDS.build_cli();
    let command = command.version(crate_version!());
    let command = Verbosity::<WarnLevel>::augment_args(command);
    let cli_matches = command.get_matches();

    let verbosity = Verbosity::<WarnLevel>::from_arg_matches(&cli_matches)?;
    Builder::new().filter_level(verbosity.log_level_filter()).init();

    log::info!("exact-fraction starting");

    FRACTION_COMMANDS.execute(&cli_matches).context("Executing exact-fraction")
}
