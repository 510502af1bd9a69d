//! Display labels derived from rendered URLs.
//!
//! A label is the URL's network location as written (host, plus a port when
//! one is written explicitly), cut down to [`MAX_LABEL_LENGTH`] characters.
//! Case and non-ASCII characters are kept, so a value substituted into the
//! host shows up unchanged.

use url::Url;

/// Longest label, in characters, before truncation applies.
pub const MAX_LABEL_LENGTH: usize = 30;

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "...";

/// Computes the display label for a rendered URL.
///
/// Never fails: a URL that does not parse, or has no host, yields an empty
/// label.
///
/// # Examples
///
/// ```
/// use osint_hub::utils::display_label::display_label;
///
/// assert_eq!(display_label("https://github.com/alice"), "github.com");
/// assert_eq!(display_label("not a url"), "");
/// ```
pub fn display_label(url: &str) -> String {
    truncate_label(&network_location(url))
}

/// Extracts `host[:port]` from `url` as written, or an empty string.
///
/// The `url` crate decides whether there is a host at all; the text comes from
/// the raw authority with any `userinfo@` removed.
pub fn network_location(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    match raw_authority(url.trim()) {
        Some(authority) if !authority.is_empty() => authority.to_string(),
        _ => match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        },
    }
}

/// The slice between `://` and the first `/`, `?` or `#`, minus userinfo.
fn raw_authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];

    Some(match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    })
}

/// Truncates `host` to [`MAX_LABEL_LENGTH`] characters, replacing the tail with
/// [`ELLIPSIS`] when it is longer.
pub fn truncate_label(host: &str) -> String {
    if host.chars().count() <= MAX_LABEL_LENGTH {
        return host.to_string();
    }

    let keep = MAX_LABEL_LENGTH - ELLIPSIS.len();
    let mut label: String = host.chars().take(keep).collect();
    label.push_str(ELLIPSIS);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_label_plain_host() {
        assert_eq!(display_label("https://crt.sh/?q=example.com"), "crt.sh");
    }

    #[test]
    fn test_label_subdomain_from_value() {
        assert_eq!(
            display_label("https://alice.bandcamp.com/"),
            "alice.bandcamp.com"
        );
    }

    #[test]
    fn test_label_keeps_explicit_port() {
        assert_eq!(display_label("http://example.com:8080/x"), "example.com:8080");
    }

    #[test]
    fn test_label_keeps_port_as_written() {
        assert_eq!(display_label("https://example.com:443/x"), "example.com:443");
    }

    #[test]
    fn test_label_keeps_host_case() {
        assert_eq!(
            display_label("https://Alice.bandcamp.com/"),
            "Alice.bandcamp.com"
        );
    }

    #[test]
    fn test_label_keeps_unicode_host() {
        assert_eq!(display_label("https://ünï.bandcamp.com/"), "ünï.bandcamp.com");
    }

    #[test]
    fn test_label_drops_userinfo() {
        assert_eq!(display_label("https://user:pw@Example.com:8443/"), "Example.com:8443");
    }

    #[test]
    fn test_label_truncates_unicode_host_by_characters() {
        let label = display_label("https://ünïcödé-ünïcödé-ünïcödé-ünïcödé.example/");
        assert_eq!(label.chars().count(), MAX_LABEL_LENGTH);
        assert!(label.starts_with("ünïcödé-ünïcödé-"));
        assert!(label.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_label_ignores_fragment_and_query() {
        assert_eq!(display_label("https://urlscan.io/search/#a.com"), "urlscan.io");
    }

    #[test]
    fn test_label_unparseable_is_empty() {
        assert_eq!(display_label(""), "");
        assert_eq!(display_label("example.com/path"), "");
    }

    #[test]
    fn test_label_without_host_is_empty() {
        assert_eq!(display_label("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_label_truncates_long_host() {
        let label = display_label("https://dnssec-debugger.verisignlabs.com/example.com");
        assert_eq!(label, "dnssec-debugger.verisignlab...");
        assert_eq!(label.len(), MAX_LABEL_LENGTH);
    }

    #[test]
    fn test_truncate_exact_limit_is_unchanged() {
        let host = "a".repeat(MAX_LABEL_LENGTH);
        assert_eq!(truncate_label(&host), host);
    }

    #[test]
    fn test_truncate_one_over_limit() {
        let host = "b".repeat(MAX_LABEL_LENGTH + 1);
        let label = truncate_label(&host);
        assert_eq!(label, format!("{}...", "b".repeat(27)));
    }

    proptest! {
        #[test]
        fn prop_truncated_label_is_bounded(host in "[a-z0-9.-]{0,80}") {
            let label = truncate_label(&host);
            prop_assert!(label.chars().count() <= MAX_LABEL_LENGTH);

            if host.chars().count() > MAX_LABEL_LENGTH {
                prop_assert!(label.ends_with(ELLIPSIS));
                prop_assert_eq!(&label[..27], &host[..27]);
            } else {
                prop_assert_eq!(label, host);
            }
        }
    }
}
