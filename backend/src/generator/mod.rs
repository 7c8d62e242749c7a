pub mod gemini;
pub mod prompts;

use std::fmt;

use futures::future::BoxFuture;

pub use gemini::GeminiClient;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// The request never got a response (DNS, TLS, timeout).
    Transport(String),
    /// The model API answered with a non-success status.
    Upstream { status: u16, body: String },
    RateLimited,
    /// The reply did not contain the expected JSON shape.
    Malformed(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Transport(e) => write!(f, "request to model API failed: {}", e),
            GeneratorError::Upstream { status, body } => write!(f, "model API returned {}: {}", status, body),
            GeneratorError::RateLimited => write!(f, "model API rate limit reached"),
            GeneratorError::Malformed(e) => write!(f, "unexpected model reply: {}", e),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Produces `count` short prize texts for a theme.
pub trait PrizeGenerator: Send + Sync {
    fn generate<'a>(&'a self, theme: &'a str, count: usize) -> BoxFuture<'a, Result<Vec<String>, GeneratorError>>;
}
