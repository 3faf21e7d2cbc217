//! Per-request construction: method, cache-busting URL, header set, and the
//! optional malformed mutation.
mod builder;
mod catalog;
mod spec;

#[cfg(test)]
mod tests;

pub use builder::{MalformedPolicy, RequestBuilder, RequestToggles};
pub use catalog::{
    ACCEPT_LANGUAGES, CACHE_CONTROLS, IP_SPOOF_HEADERS, REFERRERS, REQUESTED_WITH, USER_AGENTS,
};
pub use spec::{HttpMethod, RequestSpec};
