//! NPC persona catalog, mood state machine, and their configuration.
pub mod config;
pub mod mood;
pub mod persona;

pub use config::NpcTuning;
pub use mood::{next_mood, Mood, MoodTriggers};
pub use persona::{Persona, PersonaRegistry};
