use crate::runner::RunConfig;

use super::summary::format_duration;

pub(super) fn banner_lines(config: &RunConfig) -> Vec<String> {
    let toggles = config.toggles;
    vec![
        "floodgate: bounded load run".to_owned(),
        format!("  Target URL: {}", config.url),
        format!("  Target RPS: {}", config.rate),
        format!("  Duration: {}", format_duration(config.duration)),
        format!("  Workers: {}", config.workers),
        format!("  Random User-Agents: {}", toggles.random_ua),
        format!("  Random Parameters: {}", toggles.random_params),
        format!("  Random Headers: {}", toggles.random_headers),
        format!("  Random Methods: {}", toggles.random_methods),
        format!(
            "  Malformed Requests: {} ({}%)",
            toggles.malformed, config.malformed.percent
        ),
        format!("  Response Handling: {}", config.body_policy.as_str()),
        format!("  Cache Bypass: {}", toggles.bypass_cache),
        format!("  Keep-Alive: {}", config.transport.keep_alive),
        format!("  Expected Total: {}", config.expected_total()),
        format!("  Per-Worker Quota: {}", config.per_worker_quota()),
    ]
}

pub(super) fn print_banner(config: &RunConfig) {
    for line in banner_lines(config) {
        println!("{}", line);
    }
    println!();
}
