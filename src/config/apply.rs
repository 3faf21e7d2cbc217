use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{FloodArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments that were not set on the
/// command line.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut FloodArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "rps")
        && let Some(rps) = config.rps
    {
        args.rps = ensure_positive_u64(rps, "rps")?;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration.as_ref()
    {
        args.duration = to_duration(duration, "duration")?;
    }

    if !is_cli(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = ensure_positive_usize(workers, "workers")?;
    }

    apply_toggles(args, matches, config);

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = to_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = to_duration(timeout, "connect_timeout")?;
    }

    if !is_cli(matches, "malformed_percent")
        && let Some(percent) = config.malformed_percent
    {
        args.malformed_percent = percent;
    }

    if !is_cli(matches, "jitter_percent")
        && let Some(percent) = config.jitter_percent
    {
        args.jitter_percent = percent;
    }

    if !is_cli(matches, "jitter_delay")
        && let Some(delay) = config.jitter_delay.as_ref()
    {
        args.jitter_delay = to_duration(delay, "jitter_delay")?;
    }

    if !is_cli(matches, "report_interval")
        && let Some(interval) = config.report_interval.as_ref()
    {
        args.report_interval = to_duration(interval, "report_interval")?;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn apply_toggles(args: &mut FloodArgs, matches: &ArgMatches, config: &ConfigFile) {
    let toggles: [(&str, Option<bool>, &mut bool); 8] = [
        ("random_ua", config.random_ua, &mut args.random_ua),
        ("random_params", config.random_params, &mut args.random_params),
        ("random_headers", config.random_headers, &mut args.random_headers),
        ("random_methods", config.random_methods, &mut args.random_methods),
        ("malformed", config.malformed, &mut args.malformed),
        ("http_flood", config.http_flood, &mut args.http_flood),
        ("bypass_cache", config.bypass_cache, &mut args.bypass_cache),
        ("keep_alive", config.keep_alive, &mut args.keep_alive),
    ];
    for (name, value, target) in toggles {
        if !is_cli(matches, name)
            && let Some(value) = value
        {
            *target = value;
        }
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &str) -> AppResult<std::time::Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidField {
            field: field.to_owned(),
            source: err,
        })
    })
}
