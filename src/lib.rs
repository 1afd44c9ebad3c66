//! Offline batch processor that replays player chat logs against scripted
//! NPCs, tracking a discrete per-player mood and a bounded conversation
//! history while generating in-character replies through an LLM provider.
pub mod cli;
pub mod dialogue;
pub mod npc;
pub mod runner;
pub mod session;
