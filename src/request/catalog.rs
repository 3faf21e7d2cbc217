pub const USER_AGENTS: [&str; 15] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/91.0.4472.80 Mobile/15E148 Safari/604.1",
    "curl/7.68.0",
    "Wget/1.20.3 (linux-gnu)",
    "python-requests/2.25.1",
    "PostmanRuntime/7.28.4",
    "Apache-HttpClient/4.5.13 (Java/11.0.11)",
    "Go-http-client/1.1",
    "fasthttp",
    "axios/0.21.1",
    "node-fetch/1.0.0",
];

/// Referer pool. The empty entry and the hostile origins are deliberate.
pub const REFERRERS: [&str; 11] = [
    "https://www.google.com/search?q=test",
    "https://www.facebook.com/",
    "https://www.reddit.com/r/programming",
    "https://twitter.com/",
    "https://www.youtube.com/",
    "https://github.com/",
    "https://stackoverflow.com/",
    "https://news.ycombinator.com/",
    "",
    "https://attacker.com",
    "https://bot.network",
];

pub const ACCEPT_LANGUAGES: [&str; 3] = ["en-US,en;q=0.9", "en-GB,en;q=0.8", "fr-FR,fr;q=0.9"];

pub const CACHE_CONTROLS: [&str; 4] = ["no-cache", "no-store", "max-age=0", "must-revalidate"];

pub const REQUESTED_WITH: [&str; 3] = ["XMLHttpRequest", "fetch", "axios"];

/// Headers that all carry the same spoofed client address.
pub const IP_SPOOF_HEADERS: [&str; 6] = [
    "x-forwarded-for",
    "x-real-ip",
    "x-originating-ip",
    "x-client-ip",
    "cf-connecting-ip",
    "true-client-ip",
];
