//! OAuth 1.0a request signing (HMAC-SHA1, RFC 5849).

use base64::Engine;
use derive_getters::Getters;
use fabula_error::{ConfigError, FabulaResult};
use hmac::{Hmac, Mac};
use rand::distributions::{Alphanumeric, DistString};
use sha1::Sha1;
use std::fmt;

const CONSUMER_KEY_VAR: &str = "API_KEY";
const CONSUMER_SECRET_VAR: &str = "API_SECRET";
const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
const ACCESS_TOKEN_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET";

const NONCE_LENGTH: usize = 32;

/// Percent-encode per RFC 3986: everything but `A-Z a-z 0-9 - . _ ~`.
///
/// ```
/// assert_eq!(fabula_social::percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// ```
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// The four secrets of a user-context OAuth 1.0a app.
#[derive(Clone, Getters)]
pub struct OAuthCredentials {
    /// Consumer (API) key
    consumer_key: String,
    /// Consumer (API) secret
    consumer_secret: String,
    /// Access token
    access_token: String,
    /// Access token secret
    access_token_secret: String,
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

impl OAuthCredentials {
    /// Create credentials from explicit values.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Read `API_KEY`, `API_SECRET`, `ACCESS_TOKEN` and `ACCESS_TOKEN_SECRET`
    /// from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing variable.
    pub fn from_env() -> FabulaResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve the four secrets through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing or blank variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FabulaResult<Self> {
        let require = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::missing_env(var))
        };

        Ok(Self {
            consumer_key: require(CONSUMER_KEY_VAR)?,
            consumer_secret: require(CONSUMER_SECRET_VAR)?,
            access_token: require(ACCESS_TOKEN_VAR)?,
            access_token_secret: require(ACCESS_TOKEN_SECRET_VAR)?,
        })
    }
}

/// Produces `Authorization` headers for signed requests.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    /// Create a signer for the given credentials.
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header for a request, using a fresh nonce and
    /// the current time.
    ///
    /// `url` must not carry a query string; pass query parameters in `params`.
    /// JSON bodies are not part of the signature.
    pub fn authorization_header(&self, method: &str, url: &str, params: &[(&str, &str)]) -> String {
        let nonce = Alphanumeric.sample_string(&mut rand::thread_rng(), NONCE_LENGTH);
        let timestamp = chrono::Utc::now().timestamp();
        self.authorization_header_with(method, url, params, &nonce, timestamp)
    }

    /// Build the `Authorization` header with a caller-supplied nonce and
    /// timestamp.
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: i64,
    ) -> String {
        let timestamp = timestamp.to_string();
        let mut oauth_params = vec![
            ("oauth_consumer_key", self.credentials.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_token", self.credentials.access_token.as_str()),
            ("oauth_version", "1.0"),
        ];

        let signature = self.signature(method, url, &oauth_params, params);
        oauth_params.push(("oauth_signature", signature.as_str()));
        oauth_params.sort_by(|a, b| a.0.cmp(b.0));

        let fields = oauth_params
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", fields)
    }

    /// The signature base string: method, URL and the normalized parameters.
    pub fn signature_base_string(
        method: &str,
        url: &str,
        oauth_params: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> String {
        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(key, value)| (percent_encode(key), percent_encode(value)))
            .collect();
        encoded.sort();

        let normalized = encoded
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}&{}&{}",
            method.to_ascii_uppercase(),
            percent_encode(url),
            percent_encode(&normalized)
        )
    }

    fn signature(
        &self,
        method: &str,
        url: &str,
        oauth_params: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> String {
        let base = Self::signature_base_string(method, url, oauth_params, params);
        let key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_token_secret)
        );

        let mut mac =
            Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
        mac.update(base.as_bytes());

        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}
