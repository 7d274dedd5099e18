//! Social platform error types.

/// Specific failure conditions when talking to the social API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// Network or transport failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The API answered with an unexpected status
    #[display("Request returned an error: {} {}", status, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Post was created but the response carried no id
    #[display("Created post response contained no id")]
    MissingPostId,
}

/// Social platform error with location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{SocialError, SocialErrorKind};
///
/// let err = SocialError::new(SocialErrorKind::Api {
///     status: 403,
///     body: "forbidden".to_string(),
/// });
/// assert!(format!("{}", err).contains("403 forbidden"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
