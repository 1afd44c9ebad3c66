//! Immutable NPC persona catalog and the per-player assignment rule.
use crate::session::PlayerId;

/// Fixed descriptive profile of one NPC archetype.
///
/// Mood is deliberately absent: it lives in the per-player session record, so
/// the catalog stays shared read-only state.
#[derive(Debug, Clone)]
pub struct Persona {
    pub key: String,
    pub name: String,
    pub role: String,
    pub background: String,
    pub quirks: Vec<String>,
}

impl Persona {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        background: impl Into<String>,
        quirks: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            role: role.into(),
            background: background.into(),
            quirks,
        }
    }

    /// Quirks joined for prompt embedding.
    pub fn quirk_line(&self) -> String {
        self.quirks.join(", ")
    }
}

/// Ordered catalog of personas. Never empty.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Builds a registry from catalog entries, falling back to the built-in
    /// cast when none are supplied.
    pub fn new(personas: Vec<Persona>) -> Self {
        if personas.is_empty() {
            Self::builtin()
        } else {
            Self { personas }
        }
    }

    /// The three stock villagers of Aethermoor.
    pub fn builtin() -> Self {
        let quirks = |entries: &[&str]| entries.iter().map(|entry| entry.to_string()).collect();
        Self {
            personas: vec![
                Persona::new(
                    "village_guard",
                    "Marcus",
                    "Village Guard",
                    "A veteran soldier who protects the village",
                    quirks(&["Always mentions his war stories", "Suspicious of strangers"]),
                ),
                Persona::new(
                    "merchant",
                    "Elena",
                    "Merchant",
                    "A traveling trader with exotic goods",
                    quirks(&["Always trying to make a sale", "Knows gossip from other towns"]),
                ),
                Persona::new(
                    "blacksmith",
                    "Thorin",
                    "Blacksmith",
                    "Master craftsman who forges weapons and tools",
                    quirks(&["Speaks in short sentences", "Proud of his work"]),
                ),
            ],
        }
    }

    /// Round-robin slot for a player, derived from the numeric id alone so the
    /// assignment is independent of arrival order.
    pub fn slot_for(&self, player: PlayerId) -> usize {
        (player.value() % self.personas.len() as u64) as usize
    }

    pub fn get(&self, slot: usize) -> &Persona {
        &self.personas[slot % self.personas.len()]
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
