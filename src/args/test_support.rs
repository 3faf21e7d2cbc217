use clap::Parser;

use crate::error::{AppError, AppResult};

use super::FloodArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<FloodArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    FloodArgs::try_parse_from(args).map_err(AppError::from)
}
