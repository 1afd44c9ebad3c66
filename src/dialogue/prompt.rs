//! Prompt assembly for persona- and mood-conditioned NPC replies.
use crate::npc::{Mood, Persona};

const WORLD_CONTEXT: &str = "\
You are an NPC (Non-Player Character) in \"Chronicles of Aethermoor\", a medieval \
fantasy RPG set in a bustling village at the crossroads of ancient kingdoms. The \
village is a safe haven for adventurers, traders, and travelers seeking quests, \
supplies, and information. It contains a Market Square, a Blacksmith Quarter, the \
Guard Barracks, a Tavern District, Temple Grounds, and mysterious ruins and ancient \
forests nearby. Players are adventurers of any experience level; your interactions \
shape their journey.";

const ROLEPLAY_RULES: &str = "\
Roleplay guidelines:
1. Stay in character; never mention being an AI or a game mechanic.
2. Keep responses to 1-2 sentences maximum.
3. Express mood through word choice and tone, not by naming the mood.
4. Naturally weave in your personality quirks.
5. Always give the player something useful: information, direction, or flavor.
6. Use medieval fantasy language, avoiding modern slang.";

const NEUTRAL_GUIDANCE: &str = "\
You are professional but not overly warm. Give straightforward, helpful information \
and show mild interest in the player's goals.";

const FRIENDLY_GUIDANCE: &str = "\
You are welcoming and enthusiastic. Offer extra help, share local gossip, and show \
genuine interest in the player's journey.";

const ANGRY_GUIDANCE: &str = "\
You are irritated. Be curt and somewhat hostile with short, gruff responses, but \
still provide basic information since you have a job to do.";

const HELPFUL_GUIDANCE: &str = "\
You are eager to assist. Provide detailed information, practical advice, and \
warnings, showing expertise in your field.";

const CONFUSED_GUIDANCE: &str = "\
You are uncertain and puzzled by the request. Ask clarifying follow-up questions \
and give incomplete information while trying to understand.";

const RESPONSE_INSTRUCTION: &str =
    "Respond in character to the adventurer's latest message.";

/// Fixed behavioral guidance block for a mood value.
pub fn mood_guidance(mood: Mood) -> &'static str {
    match mood {
        Mood::Neutral => NEUTRAL_GUIDANCE,
        Mood::Friendly => FRIENDLY_GUIDANCE,
        Mood::Angry => ANGRY_GUIDANCE,
        Mood::Helpful => HELPFUL_GUIDANCE,
        Mood::Confused => CONFUSED_GUIDANCE,
    }
}

/// System prompt embedding the world text, persona fields, and mood guidance.
pub fn system_prompt(persona: &Persona, mood: Mood) -> String {
    let mut sections = Vec::with_capacity(4);
    sections.push(WORLD_CONTEXT.to_string());
    sections.push(format!(
        "Your character:\nName: {}\nRole: {}\nBackground: {}\nPersonality quirks: {}\nCurrent emotional state: {}",
        persona.name,
        persona.role,
        persona.background,
        persona.quirk_line(),
        mood.label()
    ));
    sections.push(mood_guidance(mood).to_string());
    sections.push(ROLEPLAY_RULES.to_string());
    sections.join("\n\n")
}

/// User message wrapping the rendered conversation context.
pub fn user_message(context: &str) -> String {
    format!("{context}\n{RESPONSE_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::PersonaRegistry;

    #[test]
    fn system_prompt_embeds_persona_and_mood() {
        let registry = PersonaRegistry::builtin();
        let prompt = system_prompt(registry.get(2), Mood::Angry);
        assert!(prompt.contains("Name: Thorin"));
        assert!(prompt.contains("Role: Blacksmith"));
        assert!(prompt.contains("Speaks in short sentences"));
        assert!(prompt.contains("Current emotional state: angry"));
        assert!(prompt.contains("irritated"));
    }

    #[test]
    fn every_mood_has_distinct_guidance() {
        let moods = [
            Mood::Neutral,
            Mood::Friendly,
            Mood::Angry,
            Mood::Helpful,
            Mood::Confused,
        ];
        for (index, mood) in moods.iter().enumerate() {
            for other in moods.iter().skip(index + 1) {
                assert_ne!(mood_guidance(*mood), mood_guidance(*other));
            }
        }
    }

    #[test]
    fn user_message_keeps_the_context_first() {
        let message = user_message("Current message: hello");
        assert!(message.starts_with("Current message: hello"));
        assert!(message.ends_with(RESPONSE_INSTRUCTION));
    }
}
