//! Interaction records persisted as one JSON object per line.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{npc::Mood, session::PlayerId};

/// One logged unit of input message, generated reply, and bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: NaiveDateTime,
    pub player_id: PlayerId,
    pub player_message: String,
    pub npc_name: String,
    pub npc_role: String,
    pub npc_mood: Mood,
    pub npc_reply: String,
    /// History snapshot taken before the current message entered the buffer.
    pub conversation_state: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json_lines() {
        let record = InteractionRecord {
            timestamp: "2024-01-01T10:00:00".parse().expect("valid timestamp"),
            player_id: PlayerId::new(3),
            player_message: "hello there".to_string(),
            npc_name: "Marcus".to_string(),
            npc_role: "Village Guard".to_string(),
            npc_mood: Mood::Friendly,
            npc_reply: "Well met, traveler.".to_string(),
            conversation_state: vec!["first words".to_string()],
        };

        let line = serde_json::to_string(&record).expect("record should serialize");
        assert!(line.contains("\"player_id\":3"));
        assert!(line.contains("\"npc_mood\":\"friendly\""));
        assert!(line.contains("2024-01-01T10:00:00"));

        let parsed: InteractionRecord =
            serde_json::from_str(&line).expect("record should deserialize");
        assert_eq!(parsed.npc_name, "Marcus");
        assert_eq!(parsed.conversation_state, vec!["first words"]);
    }
}
