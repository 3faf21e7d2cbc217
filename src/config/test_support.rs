use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::FloodArgs;
use crate::error::{AppError, AppResult};

pub(super) fn parse_with_matches(raw: &[&str]) -> AppResult<(FloodArgs, ArgMatches)> {
    let matches = FloodArgs::command().try_get_matches_from(raw.iter().copied())?;
    let args = FloodArgs::from_arg_matches(&matches).map_err(AppError::from)?;
    Ok((args, matches))
}
