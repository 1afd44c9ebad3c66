//! Per-player session state: persona assignment, mood, and bounded history.
use std::{
    collections::{BTreeMap, VecDeque},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::npc::{Mood, PersonaRegistry};

/// Most recent player utterances kept for prompt context.
pub const HISTORY_CAPACITY: usize = 3;

const CONTEXT_HEADER: &str = "Recent conversation:";
const CONTEXT_CURRENT_PREFIX: &str = "Current message: ";

/// Unique identifier for a player, as found in the input log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Mutable record tracked for one player across the run.
///
/// The persona slot never changes once created; mood and history do.
#[derive(Debug, Clone)]
pub struct PlayerState {
    persona_slot: usize,
    mood: Mood,
    history: VecDeque<String>,
}

impl PlayerState {
    fn new(persona_slot: usize) -> Self {
        Self {
            persona_slot,
            mood: Mood::default(),
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn persona_slot(&self) -> usize {
        self.persona_slot
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Appends an utterance, evicting the oldest past capacity.
    pub fn remember(&mut self, text: impl Into<String>) {
        while self.history.len() >= HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(text.into());
    }

    /// Copy of the current history, oldest first.
    pub fn history_snapshot(&self) -> Vec<String> {
        self.history.iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Lazily-populated map of player sessions for one run.
#[derive(Debug, Default)]
pub struct SessionStore {
    players: BTreeMap<PlayerId, PlayerState>,
}

impl SessionStore {
    /// Fetches the state for a player, creating it (and fixing the persona
    /// assignment) on first contact.
    pub fn ensure(&mut self, player: PlayerId, registry: &PersonaRegistry) -> &mut PlayerState {
        self.players
            .entry(player)
            .or_insert_with(|| PlayerState::new(registry.slot_for(player)))
    }

    pub fn get(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(&player)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerState)> {
        self.players.iter().map(|(id, state)| (*id, state))
    }
}

/// Renders prior utterances plus the incoming message into LLM input text.
///
/// The current message is never part of its own history block; callers append
/// it to the buffer only after the response is generated.
pub fn render_context(history: &[String], current_message: &str) -> String {
    let mut lines = Vec::with_capacity(history.len() + 2);
    if !history.is_empty() {
        lines.push(CONTEXT_HEADER.to_string());
        for (index, utterance) in history.iter().enumerate() {
            lines.push(format!("{}. Player: {}", index + 1, utterance));
        }
    }
    lines.push(format!("{CONTEXT_CURRENT_PREFIX}{current_message}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_capped_and_fifo() {
        let registry = PersonaRegistry::builtin();
        let mut store = SessionStore::default();
        let state = store.ensure(PlayerId::new(5), &registry);

        for text in ["one", "two", "three", "four"] {
            state.remember(text);
        }

        assert_eq!(state.history_len(), HISTORY_CAPACITY);
        assert_eq!(state.history_snapshot(), vec!["two", "three", "four"]);
    }

    #[test]
    fn persona_slot_survives_repeated_lookups() {
        let registry = PersonaRegistry::builtin();
        let mut store = SessionStore::default();
        let slot = store.ensure(PlayerId::new(4), &registry).persona_slot();
        assert_eq!(slot, 1);

        store.ensure(PlayerId::new(4), &registry).set_mood(Mood::Angry);
        assert_eq!(store.ensure(PlayerId::new(4), &registry).persona_slot(), slot);
    }

    #[test]
    fn context_lists_history_oldest_first() {
        let rendered = render_context(
            &["greetings".to_string(), "any work?".to_string()],
            "thank you",
        );
        assert_eq!(
            rendered,
            "Recent conversation:\n1. Player: greetings\n2. Player: any work?\nCurrent message: thank you"
        );
    }

    #[test]
    fn context_without_history_has_no_header() {
        let rendered = render_context(&[], "hello");
        assert_eq!(rendered, "Current message: hello");
    }

    #[test]
    fn evicted_utterance_leaves_the_rendered_context() {
        let mut state = PlayerState::new(0);
        for text in ["first", "second", "third", "fourth"] {
            state.remember(text);
        }
        let rendered = render_context(&state.history_snapshot(), "fifth");
        assert!(!rendered.contains("first"));
        assert!(rendered.contains("1. Player: second"));
    }
}
