//! Parsing and validation of downloaded list content.

use std::net::IpAddr;

use crate::error::UpdateError;

/// Parse raw downloaded text for one source into validated entries.
///
/// Lines are comment-stripped (`;` and `#`), trimmed, and validated; entry
/// text is retained verbatim, `/prefix` included. Lines failing validation
/// are dropped silently since they are assumed to be blank/comment noise.
/// A source yielding zero valid entries is treated as a broken or garbage
/// response, not an empty-but-valid list, and fails the whole run.
pub fn parse_entries(raw: &str, url: &str) -> Result<Vec<String>, UpdateError> {
    let entries: Vec<String> = raw
        .lines()
        .map(strip_comment)
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_valid_entry(line))
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(UpdateError::InvalidSourceData {
            url: url.to_string(),
        });
    }

    Ok(entries)
}

/// Cut a trailing `;` or `#` comment and any whitespace preceding it.
fn strip_comment(line: &str) -> &str {
    match line.find([';', '#']) {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// Check that an entry is `ip` or `ip/prefix-length`.
///
/// The address part must parse as IPv4 or IPv6. A prefix, when present, must
/// be a plain decimal within bounds for the address family (32 for IPv4,
/// 128 for IPv6). The entry text itself is never normalized: two textually
/// different spellings of the same address stay distinct.
pub fn is_valid_entry(entry: &str) -> bool {
    let (addr_part, prefix) = match entry.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (entry, None),
    };

    let addr: IpAddr = match addr_part.parse() {
        Ok(addr) => addr,
        Err(_) => return false,
    };

    match prefix {
        None => true,
        Some(p) => {
            let max: u8 = if addr.is_ipv4() { 32 } else { 128 };
            p.parse::<u8>().is_ok_and(|n| n <= max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_addresses() {
        let raw = "192.0.2.1\n198.51.100.0/24\n2001:db8::/32\n";
        let entries = parse_entries(raw, "http://example.com/a.txt").unwrap();
        assert_eq!(entries, vec!["192.0.2.1", "198.51.100.0/24", "2001:db8::/32"]);
    }

    #[test]
    fn test_parse_strips_hash_comments() {
        let raw = "# header\n192.0.2.1 # trailing\n198.51.100.1\n";
        let entries = parse_entries(raw, "u").unwrap();
        assert_eq!(entries, vec!["192.0.2.1", "198.51.100.1"]);
    }

    #[test]
    fn test_parse_strips_semicolon_comments() {
        let raw = "192.0.2.0/24 ; SBL12345\n; whole line comment\n";
        let entries = parse_entries(raw, "u").unwrap();
        assert_eq!(entries, vec!["192.0.2.0/24"]);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_blank_runs() {
        let raw = "192.0.2.1\r\n\r\n\n\n198.51.100.1\r\n";
        let entries = parse_entries(raw, "u").unwrap();
        assert_eq!(entries, vec!["192.0.2.1", "198.51.100.1"]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let raw = "  192.0.2.1  \n\t198.51.100.0/24\t\n";
        let entries = parse_entries(raw, "u").unwrap();
        assert_eq!(entries, vec!["192.0.2.1", "198.51.100.0/24"]);
    }

    #[test]
    fn test_parse_drops_invalid_lines_silently() {
        let raw = "192.0.2.1\nnot-an-ip\n999.1.1.1\n198.51.100.1\n";
        let entries = parse_entries(raw, "u").unwrap();
        assert_eq!(entries, vec!["192.0.2.1", "198.51.100.1"]);
    }

    #[test]
    fn test_parse_empty_source_is_fatal() {
        let err = parse_entries("", "http://example.com/b.txt").unwrap_err();
        match err {
            UpdateError::InvalidSourceData { url } => {
                assert_eq!(url, "http://example.com/b.txt");
            }
            other => panic!("expected InvalidSourceData, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_comment_only_source_is_fatal() {
        let raw = "# comment one\n; comment two\n\n";
        assert!(matches!(
            parse_entries(raw, "u"),
            Err(UpdateError::InvalidSourceData { .. })
        ));
    }

    #[test]
    fn test_valid_entry_plain() {
        assert!(is_valid_entry("192.0.2.1"));
        assert!(is_valid_entry("0.0.0.0"));
        assert!(is_valid_entry("255.255.255.255"));
        assert!(is_valid_entry("::1"));
        assert!(is_valid_entry("2001:db8::1"));
    }

    #[test]
    fn test_valid_entry_with_prefix() {
        assert!(is_valid_entry("192.0.2.0/24"));
        assert!(is_valid_entry("10.0.0.0/8"));
        assert!(is_valid_entry("0.0.0.0/0"));
        assert!(is_valid_entry("2001:db8::/32"));
        assert!(is_valid_entry("::/128"));
    }

    #[test]
    fn test_valid_entry_rejects_bad_address() {
        assert!(!is_valid_entry(""));
        assert!(!is_valid_entry("hello world"));
        assert!(!is_valid_entry("256.0.0.1"));
        assert!(!is_valid_entry("1.2.3"));
        assert!(!is_valid_entry("1.2.3.4.5"));
    }

    #[test]
    fn test_valid_entry_rejects_out_of_range_prefix() {
        assert!(!is_valid_entry("192.0.2.0/33"));
        assert!(!is_valid_entry("2001:db8::/129"));
        assert!(!is_valid_entry("192.0.2.0/-1"));
        assert!(!is_valid_entry("192.0.2.0/abc"));
        assert!(!is_valid_entry("192.0.2.0/"));
    }

    #[test]
    fn test_valid_entry_no_normalization() {
        // Both spellings are valid and remain distinct entries
        assert!(is_valid_entry("2001:db8:0:0:0:0:0:1"));
        assert!(is_valid_entry("2001:db8::1"));
    }
}
