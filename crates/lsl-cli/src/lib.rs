use std::ffi::OsString;

use clap::Parser;
use lsl_api::LslApiError;

mod build;
mod cli_args;
mod error_map;
mod events;

#[cfg(test)]
pub(crate) use build::{batch_output, build_output};
pub(crate) use cli_args::{BatchArgs, BuildArgs, Cli, EventsArgs, Mode};
pub(crate) use error_map::emit_error;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, LslApiError> {
    match cli.command {
        Mode::Build(args) => build::run_build(args),
        Mode::Batch(args) => build::run_batch(args),
        Mode::Events(args) => Ok(events::run_events(args)),
    }
}
