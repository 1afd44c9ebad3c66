//! Dialogue module hosting broker abstractions, prompt assembly, and types.
pub mod broker;
pub mod errors;
pub mod prompt;
pub mod types;

pub use broker::{DialogueBroker, DialogueProviderKind, OpenAiDialogueBroker, ScriptedBroker};
pub use errors::{DialogueError, DialogueErrorKind};
pub use types::{DialogueRequest, DialogueResponse};

/// Canned reply substituted when a provider fails, naming the persona.
pub fn fallback_reply(persona_name: &str) -> String {
    format!(
        "*{} seems distracted and doesn't respond clearly*",
        persona_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::{Mood, PersonaRegistry};

    #[test]
    fn fallback_reply_names_the_persona() {
        let reply = fallback_reply("Marcus");
        assert_eq!(
            reply,
            "*Marcus seems distracted and doesn't respond clearly*"
        );
    }

    #[test]
    fn reexports_are_usable() {
        let registry = PersonaRegistry::builtin();
        let request = DialogueRequest::new(registry.get(0), Mood::Neutral, "Current message: hi");

        let broker = ScriptedBroker::canned("Well met.");
        let response = broker
            .process(&request)
            .expect("canned broker should reply");
        assert_eq!(response.content, "Well met.");

        let error = DialogueError::new(
            DialogueProviderKind::OpenAi,
            DialogueErrorKind::provider_failure("not yet implemented"),
        );
        assert!(error.to_string().contains("openai"));
    }
}
