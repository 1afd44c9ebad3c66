//! Discrete NPC mood state machine driven by keyword triggers.
use std::fmt;

use serde::{Deserialize, Serialize};

const ANGRY_TRIGGERS: &[&str] = &["stupid", "useless", "idiot", "hate", "terrible", "awful"];
const HELPFUL_TRIGGERS: &[&str] = &[
    "help",
    "please",
    "quest",
    "where",
    "how",
    "guide",
    "direction",
];
const FRIENDLY_TRIGGERS: &[&str] = &["hello", "hi", "nice", "good", "thank"];
const CONFUSED_TRIGGERS: &[&str] = &["confused", "lost", "understand"];

/// Emotional state attached to one player's NPC interaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Neutral,
    Friendly,
    Angry,
    Helpful,
    Confused,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Angry => "angry",
            Self::Helpful => "helpful",
            Self::Confused => "confused",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercased trigger words, one disjoint set per reachable mood.
#[derive(Debug, Clone)]
pub struct MoodTriggers {
    pub angry: Vec<String>,
    pub helpful: Vec<String>,
    pub friendly: Vec<String>,
    pub confused: Vec<String>,
}

impl Default for MoodTriggers {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|word| word.to_string()).collect();
        Self {
            angry: owned(ANGRY_TRIGGERS),
            helpful: owned(HELPFUL_TRIGGERS),
            friendly: owned(FRIENDLY_TRIGGERS),
            confused: owned(CONFUSED_TRIGGERS),
        }
    }
}

/// Total transition function over the mood state machine.
///
/// Case-insensitive substring matching, first set wins (angry > helpful >
/// friendly > confused). Without a match, anger cools to neutral and every
/// other mood carries over.
pub fn next_mood(current: Mood, message_text: &str, triggers: &MoodTriggers) -> Mood {
    let lowered = message_text.to_lowercase();
    let matches = |words: &[String]| words.iter().any(|word| lowered.contains(word.as_str()));

    if matches(&triggers.angry) {
        Mood::Angry
    } else if matches(&triggers.helpful) {
        Mood::Helpful
    } else if matches(&triggers.friendly) {
        Mood::Friendly
    } else if matches(&triggers.confused) {
        Mood::Confused
    } else if current == Mood::Angry {
        Mood::Neutral
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(current: Mood, text: &str) -> Mood {
        next_mood(current, text, &MoodTriggers::default())
    }

    #[test]
    fn triggers_map_to_their_mood() {
        assert_eq!(advance(Mood::Neutral, "you are USELESS"), Mood::Angry);
        assert_eq!(advance(Mood::Neutral, "please point the way"), Mood::Helpful);
        assert_eq!(advance(Mood::Neutral, "hello there"), Mood::Friendly);
        assert_eq!(advance(Mood::Neutral, "I am so lost"), Mood::Confused);
    }

    #[test]
    fn angry_wins_over_other_triggers_in_one_message() {
        assert_eq!(
            advance(Mood::Friendly, "hello, please help, you idiot"),
            Mood::Angry
        );
    }

    #[test]
    fn angry_decays_to_neutral_exactly_once() {
        let cooled = advance(Mood::Angry, "the weather turned");
        assert_eq!(cooled, Mood::Neutral);
        assert_eq!(advance(cooled, "the weather turned"), Mood::Neutral);
    }

    #[test]
    fn non_angry_moods_hold_without_triggers() {
        for mood in [Mood::Neutral, Mood::Friendly, Mood::Helpful, Mood::Confused] {
            assert_eq!(advance(mood, "the weather turned"), mood);
        }
    }

    #[test]
    fn transition_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(advance(Mood::Confused, "thank you kindly"), Mood::Friendly);
        }
    }

    #[test]
    fn default_trigger_sets_are_disjoint() {
        let triggers = MoodTriggers::default();
        let sets = [
            &triggers.angry,
            &triggers.helpful,
            &triggers.friendly,
            &triggers.confused,
        ];
        for (index, set) in sets.iter().enumerate() {
            for other in sets.iter().skip(index + 1) {
                for word in set.iter() {
                    assert!(!other.contains(word), "{word} appears in two trigger sets");
                }
            }
        }
    }
}
