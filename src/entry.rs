use std::ffi::OsString;
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app;
use crate::args::{DEFAULT_CONFIG_FILES, FloodArgs};
use crate::config::{apply_config, load_config};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        app::run_local(&args).await?;
        Ok(())
    })
}

fn parse_args() -> AppResult<Option<(FloodArgs, ArgMatches)>> {
    let mut cmd = FloodArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = FloodArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    #[test]
    fn help_only_without_arguments() -> AppResult<()> {
        let with_url: Vec<OsString> = ["floodgate", "--url", "http://t"]
            .iter()
            .map(OsString::from)
            .collect();
        if should_show_help(&with_url) {
            return Err(AppError::validation("Arguments should suppress help"));
        }
        let bare = [OsString::from("floodgate")];
        if should_show_help(&bare) == has_default_config() {
            return Err(AppError::validation(
                "Bare invocation shows help unless a default config exists",
            ));
        }
        Ok(())
    }
}
