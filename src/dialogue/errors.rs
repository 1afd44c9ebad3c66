//! Error types surfaced by dialogue providers.
use std::fmt;

use super::broker::DialogueProviderKind;

/// Failure categories a provider can report for one generation attempt.
#[derive(Debug, Clone)]
pub enum DialogueErrorKind {
    RateLimited { retry_after_seconds: f32 },
    ProviderFailure { message: String },
    EmptyCompletion,
}

impl DialogueErrorKind {
    pub fn rate_limited(retry_after_seconds: f32) -> Self {
        Self::RateLimited {
            retry_after_seconds,
        }
    }

    pub fn provider_failure(message: impl Into<String>) -> Self {
        Self::ProviderFailure {
            message: message.into(),
        }
    }
}

impl fmt::Display for DialogueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited {
                retry_after_seconds,
            } => write!(f, "Rate limited. Retry after {:.2}s", retry_after_seconds),
            Self::ProviderFailure { message } => write!(f, "Provider failure: {}", message),
            Self::EmptyCompletion => write!(f, "Provider returned an empty completion"),
        }
    }
}

/// Full error with provider metadata.
#[derive(Debug, Clone)]
pub struct DialogueError {
    pub provider: DialogueProviderKind,
    pub kind: DialogueErrorKind,
}

impl DialogueError {
    pub fn new(provider: DialogueProviderKind, kind: DialogueErrorKind) -> Self {
        Self { provider, kind }
    }
}

impl fmt::Display for DialogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dialogue error ({}): {}", self.provider, self.kind)
    }
}

impl std::error::Error for DialogueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_error_variants() {
        let rate_limited = DialogueErrorKind::rate_limited(2.5);
        match rate_limited {
            DialogueErrorKind::RateLimited {
                retry_after_seconds,
            } => assert_eq!(retry_after_seconds, 2.5),
            _ => panic!("expected rate limited variant"),
        }

        let provider_failure = DialogueErrorKind::provider_failure("unreachable");
        assert!(matches!(
            provider_failure,
            DialogueErrorKind::ProviderFailure { .. }
        ));

        let error = DialogueError::new(DialogueProviderKind::OpenAi, provider_failure);
        assert!(error.to_string().contains("openai"));
        assert!(error.to_string().contains("unreachable"));

        let empty = DialogueError::new(DialogueProviderKind::Scripted, DialogueErrorKind::EmptyCompletion);
        assert!(empty.to_string().contains("empty completion"));
    }
}
