//! Narrative generation error types.

/// Specific failure conditions of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Network or transport failure
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The API answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Response decoded but carried no choices
    #[display("Response contained no choices")]
    EmptyChoices,

    /// Request could not be assembled
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use fabula_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Api {
///     status: 429,
///     message: "slow down".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at {}:{}", kind, file, line)]
pub struct GenerationError {
    /// The specific error kind
    pub kind: GenerationErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
