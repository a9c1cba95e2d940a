//! Signature base string construction for OAuth 1.0 (RFC 5849, section 3.4.1).
//!
//! ```text
//! UPPERCASE(method) & encode(base string URI) & encode(normalized parameters)
//! ```
//!
//! Each component is normalized so that client and server arrive at the same
//! bytes regardless of how the request was transmitted.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::AuthError;
use crate::request::SignedRequest;

/// The set of characters that must be percent-encoded.
///
/// All characters except the RFC 3986 unreserved set
/// (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) are encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value per RFC 5849, section 3.6.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::base_string::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Build the full signature base string from its components.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::base_string::build_base_string;
///
/// let base = build_base_string("post", "http://example.com/request", "a=1&b=2");
/// assert_eq!(base, "POST&http%3A%2F%2Fexample.com%2Frequest&a%3D1%26b%3D2");
/// ```
#[must_use]
pub fn build_base_string(method: &str, base_url: &str, normalized_params: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(normalized_params)
    )
}

/// Build the base string URI: scheme and host lowercased, default port
/// removed, query and fragment excluded.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::base_string::normalize_url;
///
/// assert_eq!(normalize_url("HTTP", "Example.com:80", "/r%20v/X"), "http://example.com/r%20v/X");
/// assert_eq!(normalize_url("https", "www.example.net:8080", "/?q=1"), "https://www.example.net:8080/");
/// ```
#[must_use]
pub fn normalize_url(scheme: &str, host: &str, path_and_query: &str) -> String {
    let scheme = scheme.to_ascii_lowercase();
    let host = host.to_ascii_lowercase();

    let default_port = match scheme.as_str() {
        "http" => Some(":80"),
        "https" => Some(":443"),
        _ => None,
    };
    let host = default_port
        .and_then(|port| host.strip_suffix(port))
        .unwrap_or(host.as_str());

    let path = path_and_query
        .split(['?', '#'])
        .next()
        .filter(|p| !p.is_empty())
        .unwrap_or("/");

    format!("{scheme}://{host}{path}")
}

/// Normalize request parameters per RFC 5849, section 3.4.1.3.2.
///
/// `oauth_signature` is excluded. Names and values are encoded, sorted by
/// name then value, and joined as `name=value` pairs separated by `&`.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::base_string::normalize_params;
///
/// let params = vec![
///     ("b".to_owned(), "2 q".to_owned()),
///     ("a".to_owned(), "1".to_owned()),
///     ("oauth_signature".to_owned(), "ignored".to_owned()),
/// ];
/// assert_eq!(normalize_params(&params), "a=1&b=2%20q");
/// ```
#[must_use]
pub fn normalize_params(params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .filter(|(name, _)| name != "oauth_signature")
        .map(|(name, value)| (percent_encode(name), percent_encode(value)))
        .collect();

    encoded.sort_unstable();

    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Reconstruct the base string URI of an incoming request.
///
/// The scheme comes from an absolute request URI, then from
/// `X-Forwarded-Proto` when `trust_proxy` is set, then from the transport.
/// The host comes from `X-Forwarded-Host` when `trust_proxy` is set, then the
/// URI authority, then the `Host` header.
///
/// # Errors
///
/// Returns [`AuthError::MalformedCredentials`] if none of those sources names
/// a host.
pub fn request_base_url(
    request: &SignedRequest<'_>,
    trust_proxy: bool,
) -> Result<String, AuthError> {
    let uri = &request.parts().uri;

    let forwarded = |name: &str| {
        request
            .header(name)
            .filter(|_| trust_proxy)
            .and_then(|v| v.split(',').next())
            .map(str::trim)
    };

    let transport = if request.is_secure() { "https" } else { "http" };
    let scheme = uri
        .scheme_str()
        .or_else(|| forwarded("x-forwarded-proto"))
        .unwrap_or(transport);

    let host = forwarded("x-forwarded-host")
        .or_else(|| uri.authority().map(http::uri::Authority::as_str))
        .or_else(|| request.header(http::header::HOST.as_str()))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AuthError::malformed("request host cannot be determined"))?;

    Ok(normalize_url(scheme, host, uri.path()))
}
