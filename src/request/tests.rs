use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use http::header;

use super::builder::stale_http_date;
use super::*;
use crate::random::{Percent, SecureRandom};

const BASE_URL: &str = "http://target.test/asset.json";

fn fixed_now() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

fn header_str<'spec>(spec: &'spec RequestSpec, name: &str) -> Result<&'spec str, String> {
    spec.headers
        .get(name)
        .ok_or_else(|| format!("missing header {}", name))?
        .to_str()
        .map_err(|err| format!("header {} not ascii: {}", name, err))
}

#[test]
fn plain_request_is_bare_get() -> Result<(), String> {
    let builder = RequestBuilder::new(BASE_URL, RequestToggles::default());
    let mut rng = SecureRandom::seeded(1);
    for _ in 0..50 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        if spec.method != HttpMethod::Get {
            return Err(format!("expected GET, got {}", spec.method));
        }
        if spec.url != BASE_URL {
            return Err(format!("url changed: {}", spec.url));
        }
        if !spec.headers.is_empty() {
            return Err(format!("unexpected headers: {:?}", spec.headers));
        }
        if spec.malformed {
            return Err("plain request flagged malformed".to_owned());
        }
    }
    Ok(())
}

#[test]
fn random_methods_cover_the_method_set() -> Result<(), String> {
    let toggles = RequestToggles {
        random_methods: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles);
    let mut rng = SecureRandom::seeded(2);
    let mut seen = HashSet::new();
    for _ in 0..300 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        seen.insert(spec.method.as_str());
    }
    if seen.len() != HttpMethod::ALL.len() {
        return Err(format!("methods seen: {:?}", seen));
    }
    Ok(())
}

#[test]
fn cache_busting_appends_unique_query() -> Result<(), String> {
    let toggles = RequestToggles {
        random_params: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles);
    let mut rng = SecureRandom::seeded(3);
    let now = fixed_now();

    let first = builder.build_at(&mut rng, now).map_err(|err| err.to_string())?;
    let second = builder.build_at(&mut rng, now).map_err(|err| err.to_string())?;
    if first.url == second.url {
        return Err("cache-busting URLs repeated".to_owned());
    }

    let prefix = format!("{}?", BASE_URL);
    if !first.url.starts_with(&prefix) {
        return Err(format!("unexpected url {}", first.url));
    }
    let parsed = url::Url::parse(&first.url).map_err(|err| err.to_string())?;
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let expected = [
        ("_", "1700000000000000000".len()),
        ("cb", 12),
        ("rand", 8),
        ("t", "1700000000".len()),
        ("v", 6),
    ];
    if pairs.len() != expected.len() {
        return Err(format!("unexpected params {:?}", pairs));
    }
    for ((key, value), (want_key, want_len)) in pairs.iter().zip(expected) {
        if key != want_key || value.len() != want_len {
            return Err(format!("param {}={} does not match {}", key, value, want_key));
        }
    }
    if pairs.first().map(|(_, value)| value.as_str()) != Some("1700000000000000000") {
        return Err("nanosecond timestamp mismatch".to_owned());
    }
    if pairs.get(3).map(|(_, value)| value.as_str()) != Some("1700000000") {
        return Err("second timestamp mismatch".to_owned());
    }
    Ok(())
}

#[test]
fn bypass_cache_alone_busts_and_respects_existing_query() -> Result<(), String> {
    let toggles = RequestToggles {
        bypass_cache: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new("http://target.test/search?q=1", toggles);
    let mut rng = SecureRandom::seeded(4);
    let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
    if !spec.url.starts_with("http://target.test/search?q=1&_=") {
        return Err(format!("unexpected url {}", spec.url));
    }
    Ok(())
}

#[test]
fn random_headers_share_one_spoofed_address() -> Result<(), String> {
    let toggles = RequestToggles {
        random_headers: true,
        random_ua: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles);
    let mut rng = SecureRandom::seeded(5);

    for _ in 0..100 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        let forwarded = header_str(&spec, "x-forwarded-for")?;
        for name in IP_SPOOF_HEADERS {
            if header_str(&spec, name)? != forwarded {
                return Err(format!("{} disagrees with x-forwarded-for", name));
            }
        }
        let octets: Vec<u32> = forwarded
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|err| err.to_string()))
            .collect::<Result<_, _>>()?;
        if octets.len() != 4 || octets.iter().any(|octet| !(1..=254).contains(octet)) {
            return Err(format!("bad spoofed address {}", forwarded));
        }

        if !USER_AGENTS.contains(&header_str(&spec, "user-agent")?) {
            return Err("user agent outside catalog".to_owned());
        }
        if !REFERRERS.contains(&header_str(&spec, "referer")?) {
            return Err("referer outside catalog".to_owned());
        }
        if !ACCEPT_LANGUAGES.contains(&header_str(&spec, "accept-language")?) {
            return Err("accept-language outside catalog".to_owned());
        }
        if !CACHE_CONTROLS.contains(&header_str(&spec, "cache-control")?) {
            return Err("cache-control outside catalog".to_owned());
        }
        if !REQUESTED_WITH.contains(&header_str(&spec, "x-requested-with")?) {
            return Err("x-requested-with outside catalog".to_owned());
        }
        if header_str(&spec, "accept")? != "*/*" || header_str(&spec, "pragma")? != "no-cache" {
            return Err("fixed headers changed".to_owned());
        }
        if header_str(&spec, "accept-encoding")? != "gzip, deflate, br" {
            return Err("accept-encoding changed".to_owned());
        }
        if header_str(&spec, "x-session-id")?.len() != 32 {
            return Err("session id length".to_owned());
        }
        if header_str(&spec, "x-request-id")?.len() != 16 {
            return Err("request id length".to_owned());
        }
    }
    Ok(())
}

#[test]
fn empty_referer_is_a_valid_pick() -> Result<(), String> {
    let toggles = RequestToggles {
        random_headers: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles);
    let mut rng = SecureRandom::seeded(6);
    for _ in 0..2_000 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        if header_str(&spec, "referer")?.is_empty() {
            return Ok(());
        }
    }
    Err("empty referer never chosen".to_owned())
}

#[test]
fn user_agent_requires_random_headers() -> Result<(), String> {
    let mut rng = SecureRandom::seeded(7);

    let ua_only = RequestToggles {
        random_ua: true,
        ..RequestToggles::default()
    };
    let spec = RequestBuilder::new(BASE_URL, ua_only)
        .build(&mut rng)
        .map_err(|err| err.to_string())?;
    if !spec.headers.is_empty() {
        return Err("random_ua alone must not add headers".to_owned());
    }

    let headers_only = RequestToggles {
        random_headers: true,
        ..RequestToggles::default()
    };
    let spec = RequestBuilder::new(BASE_URL, headers_only)
        .build(&mut rng)
        .map_err(|err| err.to_string())?;
    if spec.headers.contains_key(header::USER_AGENT) {
        return Err("user agent set without random_ua".to_owned());
    }
    Ok(())
}

#[test]
fn malformed_mutation_sets_edge_case_headers() -> Result<(), String> {
    let toggles = RequestToggles {
        malformed: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles).with_malformed_policy(MalformedPolicy {
        percent: Percent::HUNDRED,
    });
    let mut rng = SecureRandom::seeded(8);
    let now = fixed_now();
    let spec = builder.build_at(&mut rng, now).map_err(|err| err.to_string())?;

    if !spec.malformed {
        return Err("expected malformed flag".to_owned());
    }
    let length: u32 = header_str(&spec, "content-length")?
        .parse()
        .map_err(|err| format!("content-length not numeric: {}", err))?;
    if !(1..=999_999).contains(&length) {
        return Err(format!("content-length {} out of range", length));
    }
    if header_str(&spec, "range")? != "bytes=0-" {
        return Err("range header".to_owned());
    }
    if header_str(&spec, "if-none-match")?.len() != 24 {
        return Err("if-none-match length".to_owned());
    }
    if header_str(&spec, "if-modified-since")? != "Mon, 13 Nov 2023 22:13:20 GMT" {
        return Err(format!(
            "unexpected if-modified-since {}",
            header_str(&spec, "if-modified-since")?
        ));
    }
    if header_str(&spec, "if-modified-since")? != stale_http_date(now) {
        return Err("stale date helper disagrees".to_owned());
    }
    Ok(())
}

#[test]
fn malformed_policy_zero_never_mutates() -> Result<(), String> {
    let toggles = RequestToggles {
        malformed: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles).with_malformed_policy(MalformedPolicy {
        percent: Percent::ZERO,
    });
    let mut rng = SecureRandom::seeded(9);
    for _ in 0..500 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        if spec.malformed || !spec.headers.is_empty() {
            return Err("0% policy produced a malformed request".to_owned());
        }
    }
    Ok(())
}

#[test]
fn default_malformed_rate_is_near_thirty_percent() -> Result<(), String> {
    let toggles = RequestToggles {
        malformed: true,
        ..RequestToggles::default()
    };
    let builder = RequestBuilder::new(BASE_URL, toggles);
    let mut rng = SecureRandom::seeded(10);
    let mut malformed = 0u32;
    for _ in 0..10_000 {
        let spec = builder.build(&mut rng).map_err(|err| err.to_string())?;
        if spec.malformed {
            malformed = malformed.saturating_add(1);
        }
    }
    if !(2_700..=3_300).contains(&malformed) {
        return Err(format!("{} malformed out of 10000", malformed));
    }
    Ok(())
}
