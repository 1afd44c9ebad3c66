//! Shared request/response types exposed by the dialogue module.
use crate::npc::{Mood, Persona};

/// Everything a provider needs to voice one NPC reply.
#[derive(Debug, Clone)]
pub struct DialogueRequest<'a> {
    pub persona: &'a Persona,
    pub mood: Mood,
    pub context: String,
}

impl<'a> DialogueRequest<'a> {
    pub fn new(persona: &'a Persona, mood: Mood, context: impl Into<String>) -> Self {
        Self {
            persona,
            mood,
            context: context.into(),
        }
    }
}

/// Generated reply returned by dialogue providers.
#[derive(Debug, Clone)]
pub struct DialogueResponse {
    pub provider: super::broker::DialogueProviderKind,
    pub content: String,
}

impl DialogueResponse {
    pub fn new(
        provider: super::broker::DialogueProviderKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            content: content.into(),
        }
    }
}
