//! Source resolution: keyword expansion into concrete list URLs.

use crate::error::UpdateError;

/// URLs behind the `spamhaus` keyword (DROP, EDROP, DROPv6).
const SPAMHAUS_URLS: &[&str] = &[
    "https://www.spamhaus.org/drop/drop.txt",
    "https://www.spamhaus.org/drop/edrop.txt",
    "https://www.spamhaus.org/drop/dropv6.txt",
];

/// URL behind the `cymru` keyword (Team Cymru full bogons).
const CYMRU_URLS: &[&str] = &["http://www.team-cymru.org/Services/Bogons/fullbogons-ipv4.txt"];

/// Expand a whitespace-separated sources string into an ordered URL list.
///
/// Keywords are matched case-insensitively as whole tokens; any other token
/// is passed through as a literal URL. Order is preserved and duplicates are
/// kept (deduplication happens on entries, not sources). An empty sources
/// string is a configuration error.
pub fn resolve_sources(spec: &str) -> Result<Vec<String>, UpdateError> {
    let mut urls = Vec::new();

    for token in spec.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "spamhaus" => urls.extend(SPAMHAUS_URLS.iter().map(|u| u.to_string())),
            "cymru" => urls.extend(CYMRU_URLS.iter().map(|u| u.to_string())),
            _ => urls.push(token.to_string()),
        }
    }

    if urls.is_empty() {
        return Err(UpdateError::Config("Sources string is empty".to_string()));
    }

    Ok(urls)
}
