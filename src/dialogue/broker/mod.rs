//! Dialogue broker trait and the available provider backends.

pub mod config;
pub mod openai;
pub mod scripted;

pub use openai::OpenAiDialogueBroker;
pub use scripted::ScriptedBroker;

use std::fmt;

use super::{errors::DialogueError, types::{DialogueRequest, DialogueResponse}};

/// Dialogue provider flavours we can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueProviderKind {
    OpenAi,
    Scripted,
}

impl fmt::Display for DialogueProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OpenAi => "openai",
            Self::Scripted => "scripted",
        };
        write!(f, "{}", label)
    }
}

/// Contract every dialogue backend must satisfy.
///
/// Implementations report failures through `Err`; turning a failure into the
/// canned fallback reply is the caller's job, at a single boundary.
pub trait DialogueBroker: Send + Sync {
    fn provider_kind(&self) -> DialogueProviderKind;

    fn process(&self, request: &DialogueRequest<'_>) -> Result<DialogueResponse, DialogueError>;
}
