//! End-to-end tests for the consumer strategy, driven by recorded client
//! requests against `127.0.0.1:3000`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use anyhow::anyhow;
use async_trait::async_trait;
use oauthkit_auth::lookup::{StaticConsumerStore, StaticTokenStore};
use oauthkit_auth::{
    AuthError, AuthInfo, Challenge, Consumer, ConsumerLookup, ConsumerStrategy, Lookup,
    MemoryNonceValidator, NonceValidator, NonceVerdict, Outcome, OutcomeHandler, SignedRequest,
    TokenGrant, TokenLookup,
};
use serde_json::{Value, json};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

const REQUEST_TOKEN_AUTH: &str = "OAuth oauth_callback=\"http%3A%2F%2Fmacbook-air.local.jaredhanson.net%3A3001%2Foauth%2Fcallback\",\
    oauth_consumer_key=\"abc123\",oauth_nonce=\"fNyKdt8ZTgTVdEABtUMFzcXRxF4a230q\",\
    oauth_signature_method=\"HMAC-SHA1\",oauth_timestamp=\"1341176111\",oauth_version=\"1.0\",\
    oauth_signature=\"tgsFsPL%2BDDQmfEz6hbCywhO%2BrE4%3D\"";

const ACCESS_TOKEN_AUTH: &str = "OAuth oauth_consumer_key=\"abc123\",oauth_nonce=\"KyEf2M5ptWGDcz04jMScA2iJHkXHzkUW\",\
    oauth_signature_method=\"HMAC-SHA1\",oauth_timestamp=\"1341178687\",oauth_token=\"wM9YRRm5\",\
    oauth_verifier=\"qriPjOnc\",oauth_version=\"1.0\",oauth_signature=\"ZP5%2FtXZcUiiD2HXKrevCL5FjY%2FM%3D\"";

const CALLBACK_URL: &str = "http://macbook-air.local.jaredhanson.net:3001/oauth/callback";
const TOKEN_SECRET: &str = "rxt0E5hKbslOEtzxD43hclL28XBZLJsF";

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: String,
}

fn parts(path: &str, authorization: &str) -> http::request::Parts {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("host", "127.0.0.1:3000")
        .header("authorization", authorization)
        .body(())
        .unwrap()
        .into_parts()
        .0
}

fn request_token_parts() -> http::request::Parts {
    parts("/oauth/request_token", REQUEST_TOKEN_AUTH)
}

fn access_token_parts() -> http::request::Parts {
    parts("/oauth/access_token", ACCESS_TOKEN_AUTH)
}

/// Consumer lookup with a scripted answer.
enum Consumers {
    Accept,
    Reject,
    Fail,
}

#[async_trait]
impl ConsumerLookup for Consumers {
    type Identity = User;

    async fn lookup_consumer(&self, consumer_key: &str) -> anyhow::Result<Lookup<Consumer<User>>> {
        match self {
            Self::Accept if consumer_key == "abc123" => Ok(Lookup::Found(Consumer {
                identity: User { id: "1".to_owned() },
                secret: "ssh-secret".to_owned(),
            })),
            Self::Accept => Err(anyhow!("something is wrong")),
            Self::Reject => Ok(Lookup::Rejected),
            Self::Fail => Err(anyhow!("consumer callback failure")),
        }
    }
}

/// Token lookup that must never be consulted.
struct UnreachableTokens;

#[async_trait]
impl TokenLookup for UnreachableTokens {
    async fn lookup_token(&self, token: &str) -> anyhow::Result<Lookup<TokenGrant>> {
        panic!("token lookup should not be called (token {token})");
    }
}

/// Token lookup with a scripted answer.
enum Tokens {
    Accept,
    AcceptWithInfo,
    Reject,
    Fail,
}

#[async_trait]
impl TokenLookup for Tokens {
    async fn lookup_token(&self, token: &str) -> anyhow::Result<Lookup<TokenGrant>> {
        if token != "wM9YRRm5" {
            return Err(anyhow!("something is wrong"));
        }
        match self {
            Self::Accept => Ok(Lookup::Found(TokenGrant::new(TOKEN_SECRET))),
            Self::AcceptWithInfo => {
                let Value::Object(info) = json!({ "verifier": "x1y2z3", "userID": "456" }) else {
                    unreachable!()
                };
                Ok(Lookup::Found(TokenGrant::new(TOKEN_SECRET).with_info(info)))
            }
            Self::Reject => Ok(Lookup::Rejected),
            Self::Fail => Err(anyhow!("token callback failure")),
        }
    }
}

/// Nonce validator with a scripted answer that checks what it receives.
struct Nonces {
    expect_timestamp: u64,
    expect_nonce: &'static str,
    verdict: anyhow::Result<NonceVerdict>,
}

impl Nonces {
    fn new(expect_timestamp: u64, expect_nonce: &'static str, verdict: anyhow::Result<NonceVerdict>) -> Self {
        Self {
            expect_timestamp,
            expect_nonce,
            verdict,
        }
    }
}

#[async_trait]
impl NonceValidator for Nonces {
    async fn validate_nonce(&self, timestamp: u64, nonce: &str) -> anyhow::Result<NonceVerdict> {
        assert_eq!(timestamp, self.expect_timestamp);
        assert_eq!(nonce, self.expect_nonce);
        match &self.verdict {
            Ok(verdict) => Ok(*verdict),
            Err(err) => Err(anyhow!("{err}")),
        }
    }
}

/// Nonce validator that only counts how often it is consulted.
struct CountingNonces(Arc<AtomicUsize>);

#[async_trait]
impl NonceValidator for CountingNonces {
    async fn validate_nonce(&self, _timestamp: u64, _nonce: &str) -> anyhow::Result<NonceVerdict> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(NonceVerdict::Fresh)
    }
}

fn strategy(
    consumers: Consumers,
    tokens: impl TokenLookup + 'static,
) -> ConsumerStrategy<User> {
    init_tracing();
    ConsumerStrategy::builder()
        .consumer_lookup(consumers)
        .token_lookup(tokens)
        .build()
        .unwrap()
}

fn strategy_with_nonces(
    consumers: Consumers,
    tokens: impl TokenLookup + 'static,
    nonces: impl NonceValidator + 'static,
) -> ConsumerStrategy<User> {
    init_tracing();
    ConsumerStrategy::builder()
        .consumer_lookup(consumers)
        .token_lookup(tokens)
        .nonce_validator(nonces)
        .build()
        .unwrap()
}

fn expect_success(outcome: Outcome<User>) -> (User, AuthInfo) {
    match outcome {
        Outcome::Authenticated { identity, info } => (identity, info),
        other => panic!("expected success, got {other:?}"),
    }
}

fn expect_challenge(outcome: Outcome<User>) -> String {
    match outcome {
        Outcome::Challenged { challenge, status } => {
            assert!(status.is_none(), "challenge should use the default status");
            challenge.to_string()
        }
        other => panic!("expected challenge, got {other:?}"),
    }
}

fn expect_error(outcome: Outcome<User>) -> AuthError {
    match outcome {
        Outcome::Failed(err) => err,
        other => panic!("expected error, got {other:?}"),
    }
}

// Requests without a token (temporary credential requests).

#[tokio::test]
async fn test_should_authenticate_request_without_token() {
    let parts = request_token_parts();
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (user, info) = expect_success(outcome);
    assert_eq!(user.id, "1");
    assert_eq!(info.scheme, "OAuth");
    assert_eq!(info.oauth.callback_url.as_deref(), Some(CALLBACK_URL));
    assert!(info.oauth.token.is_none());
    assert_eq!(
        serde_json::to_value(&info).unwrap(),
        json!({ "scheme": "OAuth", "oauth": { "callbackURL": CALLBACK_URL } })
    );
}

#[tokio::test]
async fn test_should_authenticate_request_without_token_when_nonce_is_fresh() {
    let nonces = Nonces::new(1_341_176_111, "fNyKdt8ZTgTVdEABtUMFzcXRxF4a230q", Ok(NonceVerdict::Fresh));
    let parts = request_token_parts();
    let outcome = strategy_with_nonces(Consumers::Accept, UnreachableTokens, nonces)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (user, info) = expect_success(outcome);
    assert_eq!(user.id, "1");
    assert_eq!(info.oauth.callback_url.as_deref(), Some(CALLBACK_URL));
}

#[tokio::test]
async fn test_should_challenge_rejected_consumer_without_token() {
    let parts = request_token_parts();
    let outcome = strategy(Consumers::Reject, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="consumer_key_rejected""#
    );
}

#[tokio::test]
async fn test_should_challenge_replayed_nonce_without_token() {
    let nonces = Nonces::new(1_341_176_111, "fNyKdt8ZTgTVdEABtUMFzcXRxF4a230q", Ok(NonceVerdict::Replayed));
    let parts = request_token_parts();
    let outcome = strategy_with_nonces(Consumers::Accept, UnreachableTokens, nonces)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="nonce_used""#
    );
}

#[tokio::test]
async fn test_should_report_consumer_lookup_error_verbatim() {
    let nonce_calls = Arc::new(AtomicUsize::new(0));
    let parts = access_token_parts();
    let outcome = strategy_with_nonces(
        Consumers::Fail,
        UnreachableTokens,
        CountingNonces(Arc::clone(&nonce_calls)),
    )
    .authenticate(&SignedRequest::new(&parts))
    .await;

    let err = expect_error(outcome);
    assert!(matches!(err, AuthError::Collaborator(_)));
    assert_eq!(err.to_string(), "consumer callback failure");
    assert_eq!(nonce_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_should_report_nonce_validator_error_verbatim() {
    let nonces = Nonces::new(
        1_341_176_111,
        "fNyKdt8ZTgTVdEABtUMFzcXRxF4a230q",
        Err(anyhow!("validate callback failure")),
    );
    let parts = request_token_parts();
    let outcome = strategy_with_nonces(Consumers::Accept, UnreachableTokens, nonces)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(expect_error(outcome).to_string(), "validate callback failure");
}

// Requests with a token (token credential requests).

#[tokio::test]
async fn test_should_authenticate_request_with_token() {
    let parts = access_token_parts();
    let outcome = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (user, info) = expect_success(outcome);
    assert_eq!(user.id, "1");
    assert_eq!(info.scheme, "OAuth");
    assert_eq!(info.oauth.token.as_deref(), Some("wM9YRRm5"));
    assert_eq!(info.oauth.verifier.as_deref(), Some("qriPjOnc"));
    assert!(info.extra.is_empty());
}

#[tokio::test]
async fn test_should_preserve_info_supplied_by_token_lookup() {
    let parts = access_token_parts();
    let outcome = strategy(Consumers::Accept, Tokens::AcceptWithInfo)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (user, info) = expect_success(outcome);
    assert_eq!(user.id, "1");
    assert_eq!(info.oauth.token.as_deref(), Some("wM9YRRm5"));
    assert_eq!(info.oauth.verifier.as_deref(), Some("qriPjOnc"));
    assert_eq!(info.get("verifier"), Some(&json!("x1y2z3")));
    assert_eq!(info.get("userID"), Some(&json!("456")));
}

#[tokio::test]
async fn test_should_authenticate_request_with_token_when_nonce_is_fresh() {
    let nonces = Nonces::new(1_341_178_687, "KyEf2M5ptWGDcz04jMScA2iJHkXHzkUW", Ok(NonceVerdict::Fresh));
    let parts = access_token_parts();
    let outcome = strategy_with_nonces(Consumers::Accept, Tokens::Accept, nonces)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (_, info) = expect_success(outcome);
    assert_eq!(info.oauth.token.as_deref(), Some("wM9YRRm5"));
    assert_eq!(info.oauth.verifier.as_deref(), Some("qriPjOnc"));
}

#[tokio::test]
async fn test_should_challenge_rejected_consumer_with_token() {
    let parts = access_token_parts();
    let outcome = strategy(Consumers::Reject, Tokens::AcceptWithInfo)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="consumer_key_rejected""#
    );
}

#[tokio::test]
async fn test_should_challenge_rejected_token() {
    let parts = access_token_parts();
    let outcome = strategy(Consumers::Accept, Tokens::Reject)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="token_rejected""#
    );
}

#[tokio::test]
async fn test_should_report_token_lookup_error_verbatim() {
    let parts = access_token_parts();
    let outcome = strategy(Consumers::Accept, Tokens::Fail)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(expect_error(outcome).to_string(), "token callback failure");
}

#[tokio::test]
async fn test_should_challenge_replayed_nonce_with_token() {
    let nonces = Nonces::new(1_341_178_687, "KyEf2M5ptWGDcz04jMScA2iJHkXHzkUW", Ok(NonceVerdict::Replayed));
    let parts = access_token_parts();
    let outcome = strategy_with_nonces(Consumers::Accept, Tokens::Accept, nonces)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="nonce_used""#
    );
}

// Signature and structural failures.

#[tokio::test]
async fn test_should_challenge_invalid_signature() {
    let tampered = ACCESS_TOKEN_AUTH.replace("qriPjOnc", "tampered");
    let parts = parts("/oauth/access_token", &tampered);
    let outcome = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="signature_invalid""#
    );
}

#[tokio::test]
async fn test_should_challenge_signature_for_other_host() {
    let parts = http::Request::builder()
        .method("POST")
        .uri("/oauth/request_token")
        .header("host", "evil.example.com")
        .header("authorization", REQUEST_TOKEN_AUTH)
        .body(())
        .unwrap()
        .into_parts()
        .0;
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert!(expect_challenge(outcome).ends_with(r#"oauth_problem="signature_invalid""#));
}

#[tokio::test]
async fn test_should_skip_replay_guard_after_signature_mismatch() {
    let nonce_calls = Arc::new(AtomicUsize::new(0));
    let tampered = REQUEST_TOKEN_AUTH.replace("tgsFsPL", "AAAAAAA");
    let parts = parts("/oauth/request_token", &tampered);
    let outcome = strategy_with_nonces(
        Consumers::Accept,
        UnreachableTokens,
        CountingNonces(Arc::clone(&nonce_calls)),
    )
    .authenticate(&SignedRequest::new(&parts))
    .await;

    assert!(expect_challenge(outcome).ends_with(r#"oauth_problem="signature_invalid""#));
    assert_eq!(nonce_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_should_fail_on_unsupported_signature_method() {
    let rsa = REQUEST_TOKEN_AUTH.replace("HMAC-SHA1", "RSA-SHA1");
    let parts = parts("/oauth/request_token", &rsa);
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert!(matches!(
        expect_error(outcome),
        AuthError::UnsupportedSignatureMethod(method) if method == "RSA-SHA1"
    ));
}

#[tokio::test]
async fn test_should_fail_on_malformed_credentials_before_any_lookup() {
    let parts = parts("/oauth/request_token", "OAuth oauth_consumer_key=\"abc123\"");
    let outcome = strategy(Consumers::Fail, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert!(matches!(
        expect_error(outcome),
        AuthError::MalformedCredentials(_)
    ));
}

#[tokio::test]
async fn test_should_fail_on_non_oauth_scheme() {
    let parts = parts("/oauth/request_token", "Basic YWxhZGRpbjpvcGVuc2VzYW1l");
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert!(matches!(
        expect_error(outcome),
        AuthError::MalformedCredentials(_)
    ));
}

// Parameters outside the Authorization header.

const STATUS_HEADER_PARAMS: &str = "oauth_consumer_key=\"abc123\",oauth_nonce=\"Zb3cHt8yNw5qJd1f\",\
    oauth_signature_method=\"HMAC-SHA1\",oauth_timestamp=\"1341180100\",oauth_token=\"wM9YRRm5\",\
    oauth_version=\"1.0\"";

fn status_parts(signature: &str, content_type: &str) -> http::request::Parts {
    http::Request::builder()
        .method("POST")
        .uri("/statuses?page=2")
        .header("host", "127.0.0.1:3000")
        .header("content-type", content_type)
        .header(
            "authorization",
            format!("OAuth {STATUS_HEADER_PARAMS},oauth_signature=\"{signature}\""),
        )
        .body(())
        .unwrap()
        .into_parts()
        .0
}

#[tokio::test]
async fn test_should_authenticate_query_credentials() {
    let parts = http::Request::builder()
        .method("GET")
        .uri(
            "/photos?size=original&file=vacation%20pic.jpg&oauth_consumer_key=abc123\
             &oauth_signature_method=HMAC-SHA1&oauth_version=1.0&oauth_nonce=Qx7pLm2vRt9sWk4n\
             &oauth_timestamp=1341180000&oauth_signature=Fy%2FjEGiSdlDADYu363K7PBoFCRg%3D",
        )
        .header("host", "127.0.0.1:3000")
        .body(())
        .unwrap()
        .into_parts()
        .0;
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    let (user, info) = expect_success(outcome);
    assert_eq!(user.id, "1");
    assert!(info.oauth.token.is_none());
}

#[tokio::test]
async fn test_should_sign_query_and_form_body_params() {
    let parts = status_parts(
        "2wep6L%2FpPMhaVQhYes0BcLR12Mo%3D",
        "application/x-www-form-urlencoded",
    );
    let request = SignedRequest::new(&parts).with_body(b"status=hello+world");
    let outcome = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&request)
        .await;

    let (_, info) = expect_success(outcome);
    assert_eq!(info.oauth.token.as_deref(), Some("wM9YRRm5"));
}

#[tokio::test]
async fn test_should_exclude_json_body_from_signature() {
    let body: &[u8] = br#"{"status":"hello world"}"#;

    let parts = status_parts("yo48NHx7pgxyrs%2FzP3hcGWogF2A%3D", "application/json");
    let outcome = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts).with_body(body))
        .await;
    assert!(outcome.is_authenticated());

    // A signature that covered body parameters does not match a JSON body.
    let parts = status_parts("2wep6L%2FpPMhaVQhYes0BcLR12Mo%3D", "application/json");
    let outcome = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts).with_body(body))
        .await;
    assert_eq!(
        expect_challenge(outcome),
        r#"OAuth realm="Clients", oauth_problem="signature_invalid""#
    );
}

#[tokio::test]
async fn test_should_fail_when_request_host_is_unknown() {
    let parts = http::Request::builder()
        .method("POST")
        .uri("/oauth/request_token")
        .header("authorization", REQUEST_TOKEN_AUTH)
        .body(())
        .unwrap()
        .into_parts()
        .0;
    let outcome = strategy(Consumers::Accept, UnreachableTokens)
        .authenticate(&SignedRequest::new(&parts))
        .await;

    assert!(matches!(
        expect_error(outcome),
        AuthError::MalformedCredentials(_)
    ));
}

// In-memory collaborators.

#[tokio::test]
async fn test_should_authenticate_with_static_stores() {
    init_tracing();
    let strategy = ConsumerStrategy::builder()
        .consumer_lookup(StaticConsumerStore::new(vec![(
            "abc123".to_owned(),
            User { id: "1".to_owned() },
            "ssh-secret".to_owned(),
        )]))
        .token_lookup(StaticTokenStore::new(vec![(
            "wM9YRRm5".to_owned(),
            TokenGrant::new(TOKEN_SECRET),
        )]))
        .build()
        .unwrap();

    let parts = access_token_parts();
    let (user, _) = expect_success(strategy.authenticate(&SignedRequest::new(&parts)).await);
    assert_eq!(user, User { id: "1".to_owned() });
}

#[tokio::test]
async fn test_should_refuse_replay_with_memory_nonce_validator() {
    init_tracing();
    let validator = MemoryNonceValidator::new(std::time::Duration::from_secs(u64::MAX / 4));
    let strategy = ConsumerStrategy::builder()
        .consumer_lookup(Consumers::Accept)
        .token_lookup(UnreachableTokens)
        .nonce_validator(validator)
        .build()
        .unwrap();

    let parts = request_token_parts();
    let first = strategy.authenticate(&SignedRequest::new(&parts)).await;
    assert!(first.is_authenticated());

    let replay = strategy.authenticate(&SignedRequest::new(&parts)).await;
    assert_eq!(
        expect_challenge(replay),
        r#"OAuth realm="Clients", oauth_problem="nonce_used""#
    );
}

// Host dispatch.

struct StatusResponder;

impl OutcomeHandler<User> for StatusResponder {
    type Output = (u16, Option<String>);

    fn on_success(&mut self, _identity: User, _info: AuthInfo) -> Self::Output {
        (200, None)
    }

    fn on_challenge(
        &mut self,
        challenge: Challenge,
        status: Option<http::StatusCode>,
    ) -> Self::Output {
        let status = status.unwrap_or(http::StatusCode::UNAUTHORIZED);
        (status.as_u16(), Some(challenge.to_string()))
    }

    fn on_error(&mut self, _err: AuthError) -> Self::Output {
        (500, None)
    }
}

#[tokio::test]
async fn test_should_dispatch_outcomes_to_host_actions() {
    let parts = access_token_parts();

    let accepted = strategy(Consumers::Accept, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts))
        .await;
    assert_eq!(accepted.dispatch(&mut StatusResponder), (200, None));

    let rejected = strategy(Consumers::Accept, Tokens::Reject)
        .authenticate(&SignedRequest::new(&parts))
        .await;
    assert_eq!(
        rejected.dispatch(&mut StatusResponder),
        (
            401,
            Some(r#"OAuth realm="Clients", oauth_problem="token_rejected""#.to_owned())
        )
    );

    let failed = strategy(Consumers::Fail, Tokens::Accept)
        .authenticate(&SignedRequest::new(&parts))
        .await;
    assert_eq!(failed.dispatch(&mut StatusResponder), (500, None));
}
