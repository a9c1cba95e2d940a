//! `Authorization: OAuth ...` header parsing.
//!
//! The header has the format:
//!
//! ```text
//! OAuth realm="Example", oauth_consumer_key="abc123", oauth_signature="tgsF...%3D", ...
//! ```
//!
//! Every value is percent-encoded inside double quotes. The `realm` parameter
//! only names the protection space and is never part of the signature.

use percent_encoding::percent_decode_str;

use crate::error::AuthError;

/// The authorization scheme token.
pub const OAUTH_SCHEME: &str = "OAuth";

/// Check whether an `Authorization` header value uses the `OAuth` scheme.
#[must_use]
pub fn is_oauth(auth_header: &str) -> bool {
    auth_header
        .split_once(' ')
        .is_some_and(|(scheme, _)| scheme.eq_ignore_ascii_case(OAUTH_SCHEME))
}

/// Parse an `OAuth` `Authorization` header into decoded `(name, value)` pairs.
///
/// Parameter order is preserved and `realm` is dropped.
///
/// # Errors
///
/// Returns [`AuthError::MalformedCredentials`] if the scheme is not `OAuth`,
/// the parameter list is empty, a parameter is not `name="value"`, or a
/// decoded name or value is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::header::parse_authorization_header;
///
/// let params = parse_authorization_header(
///     r#"OAuth realm="Photos", oauth_consumer_key="abc123", oauth_callback="http%3A%2F%2Fexample.com%2Fcb""#,
/// )
/// .unwrap();
/// assert_eq!(params[0], ("oauth_consumer_key".to_owned(), "abc123".to_owned()));
/// assert_eq!(params[1].1, "http://example.com/cb");
/// ```
pub fn parse_authorization_header(header: &str) -> Result<Vec<(String, String)>, AuthError> {
    let (scheme, rest) = header
        .trim()
        .split_once(' ')
        .ok_or_else(|| AuthError::malformed("authorization header has no parameters"))?;

    if !scheme.eq_ignore_ascii_case(OAUTH_SCHEME) {
        return Err(AuthError::malformed(format!(
            "unexpected authorization scheme: {scheme}"
        )));
    }

    let mut params = Vec::new();
    for part in rest.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (name, quoted) = part
            .split_once('=')
            .ok_or_else(|| AuthError::malformed(format!("invalid parameter: {part}")))?;
        let value = quoted
            .trim()
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .ok_or_else(|| AuthError::malformed(format!("unquoted parameter value: {part}")))?;

        let name = decode(name.trim())?;
        if name.is_empty() {
            return Err(AuthError::malformed(format!("invalid parameter: {part}")));
        }
        if name == "realm" {
            continue;
        }
        params.push((name, decode(value)?));
    }

    if params.is_empty() {
        return Err(AuthError::malformed("authorization header has no parameters"));
    }

    Ok(params)
}

fn decode(value: &str) -> Result<String, AuthError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| AuthError::malformed(format!("parameter is not valid UTF-8: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "OAuth oauth_callback=\"http%3A%2F%2Fmacbook-air.local.jaredhanson.net%3A3001%2Foauth%2Fcallback\",\
        oauth_consumer_key=\"abc123\",oauth_nonce=\"fNyKdt8ZTgTVdEABtUMFzcXRxF4a230q\",\
        oauth_signature_method=\"HMAC-SHA1\",oauth_timestamp=\"1341176111\",oauth_version=\"1.0\",\
        oauth_signature=\"tgsFsPL%2BDDQmfEz6hbCywhO%2BrE4%3D\"";

    #[test]
    fn test_should_detect_oauth_header() {
        assert!(is_oauth("OAuth oauth_consumer_key=\"k\""));
        assert!(is_oauth("oauth oauth_consumer_key=\"k\""));
        assert!(!is_oauth("Bearer token"));
        assert!(!is_oauth("OAuth"));
    }

    #[test]
    fn test_should_parse_and_decode_header() {
        let params = parse_authorization_header(HEADER).unwrap();
        assert_eq!(params.len(), 7);
        assert_eq!(
            params[0],
            (
                "oauth_callback".to_owned(),
                "http://macbook-air.local.jaredhanson.net:3001/oauth/callback".to_owned()
            )
        );
        assert_eq!(
            params[6],
            (
                "oauth_signature".to_owned(),
                "tgsFsPL+DDQmfEz6hbCywhO+rE4=".to_owned()
            )
        );
    }

    #[test]
    fn test_should_drop_realm_parameter() {
        let params =
            parse_authorization_header("OAuth realm=\"Clients\", oauth_consumer_key=\"abc\"")
                .unwrap();
        assert_eq!(params, vec![("oauth_consumer_key".to_owned(), "abc".to_owned())]);
    }

    #[test]
    fn test_should_accept_spaces_after_commas() {
        let params =
            parse_authorization_header("OAuth oauth_nonce=\"n\",  oauth_timestamp=\"1\"").unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[1].0, "oauth_timestamp");
    }

    #[test]
    fn test_should_reject_other_schemes() {
        let result = parse_authorization_header("Bearer abc");
        assert!(matches!(result, Err(AuthError::MalformedCredentials(_))));
    }

    #[test]
    fn test_should_reject_unquoted_or_empty_parameters() {
        assert!(parse_authorization_header("OAuth oauth_nonce=abc").is_err());
        assert!(parse_authorization_header("OAuth oauth_nonce").is_err());
        assert!(parse_authorization_header("OAuth realm=\"only\"").is_err());
        assert!(parse_authorization_header("OAuth").is_err());
    }

    #[test]
    fn test_should_reject_values_that_are_not_utf8() {
        let result =
            parse_authorization_header("OAuth oauth_nonce=\"%FF%FE\", oauth_consumer_key=\"abc\"");
        assert!(matches!(result, Err(AuthError::MalformedCredentials(_))));
    }
}
