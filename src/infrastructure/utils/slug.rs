use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("valid slug pattern"));

const FALLBACK_SLUG: &str = "article";
const SUFFIX_LEN: usize = 4;

/// Lowercases, turns whitespace runs into `-` and strips everything outside
/// `[A-Za-z0-9_-]`. Accented letters are dropped, not transliterated.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let slug = NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned();

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Last four base-36 digits of the unix time in milliseconds.
pub fn time_suffix(now: DateTime<Utc>) -> String {
    let encoded = to_base36(now.timestamp_millis().max(0) as u64);
    let start = encoded.len().saturating_sub(SUFFIX_LEN);
    encoded[start..].to_string()
}

pub fn with_suffix(slug: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", slug, time_suffix(now))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
