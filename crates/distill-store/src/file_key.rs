//! Figma file keys and share URLs.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::StoreError;

fn key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(?:file|design)/([a-zA-Z0-9]+)").unwrap())
}

/// The alphanumeric identifier of a Figma file.
///
/// Always non-empty ASCII alphanumerics, so it is safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey(String);

impl FileKey {
    /// Pull the key out of a share URL such as
    /// `https://www.figma.com/design/AbC123/Landing`.
    ///
    /// The first `/file/` or `/design/` segment followed by at least one
    /// alphanumeric character wins. The host is not checked.
    pub fn from_url(url: &str) -> Option<FileKey> {
        let url = url.trim();
        let url = url.strip_suffix('/').unwrap_or(url);
        let captures = key_re().captures(url)?;
        Some(FileKey(captures[1].to_owned()))
    }

    /// Accept either a share URL or a bare key.
    pub fn parse(input: &str) -> Result<FileKey, StoreError> {
        if let Some(key) = FileKey::from_url(input) {
            return Ok(key);
        }
        let bare = input.trim();
        if !bare.is_empty() && bare.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(FileKey(bare.to_owned()));
        }
        Err(StoreError::InvalidKey(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FileKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileKey::parse(s)
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// True for an absolute `figma.com` URL whose path names a file or design.
///
/// Parsing follows the WHATWG URL rules, so backslash separators and
/// percent-encoded hosts normalize the way a browser would.
pub fn is_figma_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let host_ok = matches!(parsed.host_str(), Some("figma.com" | "www.figma.com"));
    let path = parsed.path();
    host_ok && (path.contains("/file/") || path.contains("/design/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(url: &str) -> Option<String> {
        FileKey::from_url(url).map(|k| k.to_string())
    }

    // =========================================================================
    // from_url
    // =========================================================================

    #[test]
    fn test_design_url() {
        assert_eq!(
            key("https://www.figma.com/design/AbC123xyz/Landing-Page?node-id=0-1"),
            Some("AbC123xyz".into())
        );
    }

    #[test]
    fn test_file_url_without_www() {
        assert_eq!(key("https://figma.com/file/KEY42/"), Some("KEY42".into()));
    }

    #[test]
    fn test_trailing_slash_and_whitespace() {
        assert_eq!(key("  https://www.figma.com/file/abc/  "), Some("abc".into()));
    }

    #[test]
    fn test_key_stops_at_non_alphanumeric() {
        assert_eq!(key("https://figma.com/file/ab-cd"), Some("ab".into()));
    }

    #[test]
    fn test_later_segment_used_when_first_is_empty() {
        assert_eq!(key("https://figma.com/file/-/design/Real1"), Some("Real1".into()));
    }

    #[test]
    fn test_no_key() {
        assert_eq!(key("https://figma.com/proto/abc"), None);
        assert_eq!(key("https://figma.com/file/"), None);
        assert_eq!(key(""), None);
    }

    #[test]
    fn test_host_not_checked() {
        assert_eq!(key("https://example.com/design/X1"), Some("X1".into()));
    }

    // =========================================================================
    // parse
    // =========================================================================

    #[test]
    fn test_parse_bare_key() {
        assert_eq!(FileKey::parse(" abc123 ").unwrap().as_str(), "abc123");
        assert_eq!("XYZ".parse::<FileKey>().unwrap().as_str(), "XYZ");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = FileKey::parse("not a key").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(ref s) if s == "not a key"));
        assert!(FileKey::parse("").is_err());
        assert!(FileKey::parse("../etc").is_err());
    }

    // =========================================================================
    // is_figma_url
    // =========================================================================

    #[test]
    fn test_valid_figma_urls() {
        assert!(is_figma_url("https://www.figma.com/file/abc/Title"));
        assert!(is_figma_url("https://figma.com/design/abc"));
        assert!(is_figma_url("http://FIGMA.com:443/design/abc"));
    }

    #[test]
    fn test_figma_url_normalized_like_a_browser() {
        assert!(is_figma_url("https://figma.com\\file\\abc"));
        assert!(is_figma_url("https://figma%2Ecom/file/abc"));
        assert!(is_figma_url("  https://www.figma.com/design/abc  "));
    }

    #[test]
    fn test_invalid_figma_urls() {
        assert!(!is_figma_url("https://example.com/file/abc"));
        assert!(!is_figma_url("https://figma.com.evil.io/file/abc"));
        assert!(!is_figma_url("https://figma.com/proto/abc"));
        assert!(!is_figma_url("https://figma.com/?next=/file/abc"));
        assert!(!is_figma_url("figma.com/file/abc"));
        assert!(!is_figma_url("not a url"));
    }
}
