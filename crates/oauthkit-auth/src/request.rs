//! The view of an incoming HTTP request that the verifier works on.

use http::request::Parts;

/// Media type of bodies whose parameters take part in the signature.
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// An incoming request presented for OAuth verification.
///
/// Wraps the request head, an optional already-buffered body, and whether the
/// request arrived over an encrypted transport (used when the request URI is
/// in origin form and carries no scheme).
///
/// # Examples
///
/// ```
/// use oauthkit_auth::SignedRequest;
///
/// let (parts, ()) = http::Request::builder()
///     .method("POST")
///     .uri("/oauth/request_token")
///     .header("host", "127.0.0.1:3000")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// let request = SignedRequest::new(&parts).with_body(b"status=hello").with_secure(false);
/// assert_eq!(request.method(), "POST");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SignedRequest<'a> {
    parts: &'a Parts,
    body: Option<&'a [u8]>,
    secure: bool,
}

impl<'a> SignedRequest<'a> {
    /// Create a request view without a body over a plain transport.
    #[must_use]
    pub fn new(parts: &'a Parts) -> Self {
        Self {
            parts,
            body: None,
            secure: false,
        }
    }

    /// Attach the buffered request body.
    #[must_use]
    pub fn with_body(mut self, body: &'a [u8]) -> Self {
        self.body = Some(body);
        self
    }

    /// Mark whether the request arrived over TLS.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// The request head.
    #[must_use]
    pub fn parts(&self) -> &'a Parts {
        self.parts
    }

    /// The HTTP method as sent.
    #[must_use]
    pub fn method(&self) -> &'a str {
        self.parts.method.as_str()
    }

    /// Whether the request arrived over TLS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// The `Authorization` header value, if present and valid ASCII.
    #[must_use]
    pub fn authorization(&self) -> Option<&'a str> {
        self.header(http::header::AUTHORIZATION.as_str())
    }

    /// A header value as a string, if present and valid ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decoded query-string parameters, in request order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.parts
            .uri
            .query()
            .map(|q| decode_pairs(q.as_bytes()))
            .unwrap_or_default()
    }

    /// Decoded form body parameters.
    ///
    /// Empty unless the body is `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        match self.body {
            Some(body) if self.is_form_encoded() => decode_pairs(body),
            _ => Vec::new(),
        }
    }

    fn is_form_encoded(&self) -> bool {
        self.header(http::header::CONTENT_TYPE.as_str())
            .and_then(|ct| ct.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED))
    }
}

fn decode_pairs(input: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(input).into_owned().collect()
}
