use crate::args::FloodArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::request::{MalformedPolicy, RequestToggles};
use crate::runner::{JitterPolicy, RunConfig};
use crate::transport::{BodyPolicy, TransportConfig};

/// Derives the immutable run configuration from parsed arguments.
///
/// # Errors
///
/// Returns an error when no target URL was given or the resulting
/// configuration is invalid.
pub(crate) fn run_config(args: &FloodArgs) -> AppResult<RunConfig> {
    let Some(url) = args.url.clone() else {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };
    if let Err(err) = url::Url::parse(&url) {
        tracing::warn!("Target URL '{}' does not parse ({}); every request will fail", url, err);
    }

    let config = RunConfig {
        rate: args.rps.get(),
        duration: args.duration,
        workers: args.workers.get(),
        url,
        toggles: RequestToggles {
            random_ua: args.random_ua,
            random_params: args.random_params,
            random_headers: args.random_headers,
            random_methods: args.random_methods,
            malformed: args.malformed,
            bypass_cache: args.bypass_cache,
        },
        body_policy: BodyPolicy::from_flood_flag(args.http_flood),
        malformed: MalformedPolicy {
            percent: args.malformed_percent,
        },
        jitter: JitterPolicy {
            percent: args.jitter_percent,
            delay: args.jitter_delay,
        },
        report_interval: args.report_interval,
        transport: TransportConfig {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            keep_alive: args.keep_alive,
        },
    };
    config.validate()?;
    Ok(config)
}
