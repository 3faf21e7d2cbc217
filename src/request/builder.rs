use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use http::header::{self, HeaderMap, HeaderName, HeaderValue};

use crate::error::RequestBuildError;
use crate::random::{Percent, RandomSource};

use super::catalog::{
    ACCEPT_LANGUAGES, CACHE_CONTROLS, IP_SPOOF_HEADERS, REFERRERS, REQUESTED_WITH, USER_AGENTS,
};
use super::spec::{HttpMethod, RequestSpec};

/// IMF-fixdate as used by `If-Modified-Since`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const STALE_VALIDATOR_AGE: Duration = Duration::from_secs(24 * 60 * 60);
const MAX_BOGUS_CONTENT_LENGTH: u32 = 999_999;

const SESSION_ID_LEN: usize = 32;
const REQUEST_ID_LEN: usize = 16;
const ETAG_LEN: usize = 24;

/// Which randomizations apply to each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestToggles {
    pub random_ua: bool,
    pub random_params: bool,
    pub random_headers: bool,
    pub random_methods: bool,
    pub malformed: bool,
    pub bypass_cache: bool,
}

impl RequestToggles {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            random_ua: true,
            random_params: true,
            random_headers: true,
            random_methods: true,
            malformed: true,
            bypass_cache: true,
        }
    }

    #[must_use]
    pub const fn cache_busting(self) -> bool {
        self.random_params || self.bypass_cache
    }
}

/// Odds of a malformed mutation once the `malformed` toggle is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedPolicy {
    pub percent: Percent,
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        Self {
            percent: Percent::clamped(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    toggles: RequestToggles,
    malformed: MalformedPolicy,
}

impl RequestBuilder {
    #[must_use]
    pub fn new(base_url: impl Into<String>, toggles: RequestToggles) -> Self {
        Self {
            base_url: base_url.into(),
            toggles,
            malformed: MalformedPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn toggles(&self) -> RequestToggles {
        self.toggles
    }

    /// Builds a fresh request stamped with the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error when a generated header value is rejected.
    pub fn build<R: RandomSource>(&self, rng: &mut R) -> Result<RequestSpec, RequestBuildError> {
        self.build_at(rng, SystemTime::now())
    }

    /// Builds a request as if issued at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error when a generated header value is rejected.
    pub fn build_at<R: RandomSource>(
        &self,
        rng: &mut R,
        now: SystemTime,
    ) -> Result<RequestSpec, RequestBuildError> {
        let method = if self.toggles.random_methods {
            *rng.random_choice(&HttpMethod::ALL)?
        } else {
            HttpMethod::Get
        };

        let url = if self.toggles.cache_busting() {
            self.cache_busted_url(rng, now)
        } else {
            self.base_url.clone()
        };

        let mut headers = HeaderMap::new();
        if self.toggles.random_headers {
            self.insert_random_headers(rng, &mut headers)?;
        }

        let malformed = self.toggles.malformed && rng.chance(self.malformed.percent);
        if malformed {
            insert_malformed_headers(rng, &mut headers, now)?;
        }

        Ok(RequestSpec {
            method,
            url,
            headers,
            malformed,
        })
    }

    fn cache_busted_url<R: RandomSource>(&self, rng: &mut R, now: SystemTime) -> String {
        let since_epoch = now.duration_since(UNIX_EPOCH).unwrap_or_default();
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}_={}&cb={}&rand={}&t={}&v={}",
            self.base_url,
            separator,
            since_epoch.as_nanos(),
            rng.random_string(12),
            rng.random_string(8),
            since_epoch.as_secs(),
            rng.random_string(6),
        )
    }

    fn insert_random_headers<R: RandomSource>(
        &self,
        rng: &mut R,
        headers: &mut HeaderMap,
    ) -> Result<(), RequestBuildError> {
        if self.toggles.random_ua {
            headers.insert(header::USER_AGENT, pick(rng, &USER_AGENTS)?);
        }

        // One address for every spoofing header so the story is consistent.
        let fake_ip = spoofed_ipv4(rng);
        let ip_value = dynamic_value("x-forwarded-for", &fake_ip)?;
        for name in IP_SPOOF_HEADERS {
            headers.insert(HeaderName::from_static(name), ip_value.clone());
        }

        headers.insert(header::REFERER, pick(rng, &REFERRERS)?);
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(header::ACCEPT_LANGUAGE, pick(rng, &ACCEPT_LANGUAGES)?);
        headers.insert(
            header::ACCEPT_ENCODING,
            HeaderValue::from_static("gzip, deflate, br"),
        );
        headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
        headers.insert(header::CACHE_CONTROL, pick(rng, &CACHE_CONTROLS)?);
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            pick(rng, &REQUESTED_WITH)?,
        );
        headers.insert(
            HeaderName::from_static("x-session-id"),
            dynamic_value("x-session-id", &rng.random_string(SESSION_ID_LEN))?,
        );
        headers.insert(
            HeaderName::from_static("x-request-id"),
            dynamic_value("x-request-id", &rng.random_string(REQUEST_ID_LEN))?,
        );
        Ok(())
    }
}

/// Adds protocol edge cases. Values are sent as-is; the body stays empty so
/// `Content-Length` never matches it.
fn insert_malformed_headers<R: RandomSource>(
    rng: &mut R,
    headers: &mut HeaderMap,
    now: SystemTime,
) -> Result<(), RequestBuildError> {
    headers.insert(
        header::CONTENT_LENGTH,
        HeaderValue::from(rng.random_int(1, MAX_BOGUS_CONTENT_LENGTH)),
    );
    headers.insert(header::RANGE, HeaderValue::from_static("bytes=0-"));
    headers.insert(
        header::IF_NONE_MATCH,
        dynamic_value("if-none-match", &rng.random_string(ETAG_LEN))?,
    );
    headers.insert(
        header::IF_MODIFIED_SINCE,
        dynamic_value("if-modified-since", &stale_http_date(now))?,
    );
    Ok(())
}

pub(super) fn stale_http_date(now: SystemTime) -> String {
    let stale = now.checked_sub(STALE_VALIDATOR_AGE).unwrap_or(UNIX_EPOCH);
    DateTime::<Utc>::from(stale)
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

fn spoofed_ipv4<R: RandomSource>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_int(1, 254),
        rng.random_int(1, 254),
        rng.random_int(1, 254),
        rng.random_int(1, 254)
    )
}

fn pick<R: RandomSource>(
    rng: &mut R,
    set: &'static [&'static str],
) -> Result<HeaderValue, RequestBuildError> {
    Ok(HeaderValue::from_static(*rng.random_choice(set)?))
}

fn dynamic_value(header: &'static str, value: &str) -> Result<HeaderValue, RequestBuildError> {
    HeaderValue::from_str(value)
        .map_err(|source| RequestBuildError::InvalidHeaderValue { header, source })
}
