//! Deterministic offline broker for development runs and tests.
use crate::dialogue::{
    errors::{DialogueError, DialogueErrorKind},
    types::{DialogueRequest, DialogueResponse},
};

use super::{DialogueBroker, DialogueProviderKind};

const SCRIPTED_FAILURE_MESSAGE: &str = "scripted provider failure";

enum ScriptedMode {
    Echo,
    Canned(String),
    Failing,
}

/// Broker that never leaves the process: echoes persona flavour text, returns
/// a fixed line, or fails on demand.
pub struct ScriptedBroker {
    mode: ScriptedMode,
}

impl ScriptedBroker {
    /// Persona- and mood-flavoured stand-in replies for dry runs.
    pub fn echo() -> Self {
        Self {
            mode: ScriptedMode::Echo,
        }
    }

    /// Always replies with the given line.
    pub fn canned(reply: impl Into<String>) -> Self {
        Self {
            mode: ScriptedMode::Canned(reply.into()),
        }
    }

    /// Always reports a provider failure, for exercising the fallback path.
    pub fn failing() -> Self {
        Self {
            mode: ScriptedMode::Failing,
        }
    }
}

impl DialogueBroker for ScriptedBroker {
    fn provider_kind(&self) -> DialogueProviderKind {
        DialogueProviderKind::Scripted
    }

    fn process(&self, request: &DialogueRequest<'_>) -> Result<DialogueResponse, DialogueError> {
        match &self.mode {
            ScriptedMode::Echo => Ok(DialogueResponse::new(
                self.provider_kind(),
                format!(
                    "{} the {} answers in a {} tone.",
                    request.persona.name,
                    request.persona.role.to_lowercase(),
                    request.mood.label()
                ),
            )),
            ScriptedMode::Canned(reply) => {
                Ok(DialogueResponse::new(self.provider_kind(), reply.clone()))
            }
            ScriptedMode::Failing => Err(DialogueError::new(
                self.provider_kind(),
                DialogueErrorKind::provider_failure(SCRIPTED_FAILURE_MESSAGE),
            )),
        }
    }
}
