use clap::{ArgAction, Parser};
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_DURATION, DEFAULT_JITTER_DELAY, DEFAULT_JITTER_PERCENT,
    DEFAULT_MALFORMED_PERCENT, DEFAULT_REPORT_INTERVAL, DEFAULT_RPS, DEFAULT_TIMEOUT,
    DEFAULT_WORKERS,
};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_percent, parse_positive_u64, parse_positive_usize,
};
use super::types::{PositiveU64, PositiveUsize};
use crate::random::Percent;

// Boolean switches take an optional value: `--flag`, `--flag=false` and
// `--flag off` all work.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Bounded-duration HTTP traffic generator for exercising rate limiters and caches you operate."
)]
pub struct FloodArgs {
    /// Target URL
    #[arg(long, short)]
    pub url: Option<String>,

    /// Target requests per second across all workers
    #[arg(long = "rps", short = 'r', default_value = DEFAULT_RPS, value_parser = parse_positive_u64)]
    pub rps: PositiveU64,

    /// Run duration (bare number is seconds; supports us/ms/s/m/h)
    #[arg(long = "duration", short = 'd', default_value = DEFAULT_DURATION, value_parser = parse_duration_arg)]
    pub duration: Duration,

    /// Number of concurrent workers
    #[arg(long = "workers", short = 'w', default_value = DEFAULT_WORKERS, value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Send a random User-Agent (only with --random-headers)
    #[arg(
        long = "random-ua",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub random_ua: bool,

    /// Append cache-busting query parameters
    #[arg(
        long = "random-params",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub random_params: bool,

    /// Send a randomized browser-like header set
    #[arg(
        long = "random-headers",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub random_headers: bool,

    /// Pick GET, HEAD or OPTIONS at random
    #[arg(
        long = "random-methods",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub random_methods: bool,

    /// Occasionally add inconsistent protocol headers
    #[arg(
        long = "malformed",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub malformed: bool,

    /// Drop responses without reading the body (false drains every body)
    #[arg(
        long = "http-flood",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub http_flood: bool,

    /// Defeat intermediary caches (same query parameters as --random-params)
    #[arg(
        long = "bypass-cache",
        default_value = "true",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub bypass_cache: bool,

    /// Per-request timeout (supports us/ms/s/m/h)
    #[arg(long = "timeout", default_value = DEFAULT_TIMEOUT, value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Timeout for establishing a new connection (supports us/ms/s/m/h)
    #[arg(long = "connect-timeout", default_value = DEFAULT_CONNECT_TIMEOUT, value_parser = parse_duration_arg)]
    pub connect_timeout: Duration,

    /// Reuse connections between requests
    #[arg(
        long = "keep-alive",
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub keep_alive: bool,

    /// Chance, in percent, that a request gets malformed headers
    #[arg(long = "malformed-percent", default_value = DEFAULT_MALFORMED_PERCENT, value_parser = parse_percent)]
    pub malformed_percent: Percent,

    /// Chance, in percent, of a short pause after a request when not flooding
    #[arg(long = "jitter-percent", default_value = DEFAULT_JITTER_PERCENT, value_parser = parse_percent)]
    pub jitter_percent: Percent,

    /// Length of the pause taken on a jitter roll
    #[arg(long = "jitter-delay", default_value = DEFAULT_JITTER_DELAY, value_parser = parse_duration_arg)]
    pub jitter_delay: Duration,

    /// Interval between live progress lines
    #[arg(long = "report-interval", default_value = DEFAULT_REPORT_INTERVAL, value_parser = parse_duration_arg)]
    pub report_interval: Duration,

    /// Disable color output
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        default_value = "false",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_bool_env
    )]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by FLOODGATE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./floodgate.toml or ./floodgate.json if present.
    #[arg(long)]
    pub config: Option<String>,
}
