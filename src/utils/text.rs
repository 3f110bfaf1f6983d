use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid slug pattern"));

static REPEATED_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/{2,}").expect("valid slash pattern"));

/// Builds a URL slug from a title
///
/// Letters and digits of any script are kept, so Arabic titles produce Arabic
/// slugs; every other run of characters collapses into a single `-`.
///
/// # Examples
/// ```
/// use edu_cms_client::utils::text::slugify;
/// assert_eq!(slugify("  Study in Germany: 2025 Guide! "), "study-in-germany-2025-guide");
/// assert_eq!(slugify("الدراسة في ألمانيا"), "الدراسة-في-ألمانيا");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Joins the API base URL and an endpoint path
///
/// Absolute URLs are returned untouched. Leading slashes on the endpoint and
/// trailing slashes on the base are normalised so that exactly one separator
/// remains.
#[must_use]
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let endpoint = REPEATED_SLASHES.replace_all(endpoint.trim_start_matches('/'), "/");
    format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
}
