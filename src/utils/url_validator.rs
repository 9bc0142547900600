//! Destination URL validation.
//!
//! Accepts loosely typed input such as `golang.org` or `example.com/x` and
//! turns it into an absolute URL, defaulting the scheme to `https://`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Scheme prefixes accepted as-is (compared case-insensitively).
const KNOWN_SCHEMES: &[&str] = &["http://", "https://", "ftp://"];

const DEFAULT_SCHEME: &str = "https://";

/// Optional scheme, dot-separated host labels ending in an alphabetic TLD,
/// optional port, then any path/query/fragment without whitespace.
///
/// Everything up to the port is matched ASCII-only; with Unicode case folding
/// `[a-z]` would also accept signs such as U+212A.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i-u:(?:(?:https?|ftp)://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::[0-9]{1,5})?)(?:[/?#]\S*)?$",
    )
    .expect("URL pattern is valid")
});

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL does not match the accepted format: {0}")]
    Malformed(String),

    #[error("URL could not be parsed: {0}")]
    Unparseable(String),
}

/// A destination URL that passed [`validate_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(String);

impl ValidatedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a raw destination and defaults its scheme.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Without an `http://`, `https://` or `ftp://` prefix, `https://` is prepended
/// 3. The host must be at least two labels with an alphabetic TLD of 2+ letters
/// 4. Path, query and fragment may not contain whitespace
///
/// The result is otherwise returned exactly as submitted; hosts are not
/// lowercased and no trailing slash is added.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::Malformed`] when the pattern does not match and
/// [`UrlValidationError::Unparseable`] for values the pattern admits but no
/// URL parser would (such as an out-of-range port).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("example.com/x").unwrap().as_str(), "https://example.com/x");
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<ValidatedUrl, UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let candidate = if has_known_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    if !URL_REGEX.is_match(&candidate) {
        return Err(UrlValidationError::Malformed(candidate));
    }

    Url::parse(&candidate).map_err(|e| UrlValidationError::Unparseable(e.to_string()))?;

    Ok(ValidatedUrl(candidate))
}

fn has_known_scheme(input: &str) -> bool {
    KNOWN_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
