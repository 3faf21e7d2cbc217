/// Config files picked up from the working directory when `--config` is not
/// given, in lookup order.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["floodgate.toml", "floodgate.json"];

pub(super) const DEFAULT_RPS: &str = "100000";
pub(super) const DEFAULT_DURATION: &str = "10";
pub(super) const DEFAULT_WORKERS: &str = "2000";
pub(super) const DEFAULT_TIMEOUT: &str = "5s";
pub(super) const DEFAULT_CONNECT_TIMEOUT: &str = "2s";
pub(super) const DEFAULT_MALFORMED_PERCENT: &str = "30";
pub(super) const DEFAULT_JITTER_PERCENT: &str = "5";
pub(super) const DEFAULT_JITTER_DELAY: &str = "100us";
pub(super) const DEFAULT_REPORT_INTERVAL: &str = "1s";
