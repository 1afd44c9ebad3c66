//! NPC tuning loaded from `config/npc.toml`: trigger words and catalog overrides.
use std::{fs, path::Path};

use log::warn;
use serde::Deserialize;

use super::{
    mood::MoodTriggers,
    persona::{Persona, PersonaRegistry},
};

pub const DEFAULT_CONFIG_PATH: &str = "config/npc.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawNpcConfig {
    #[serde(default)]
    triggers: RawTriggers,
    #[serde(default)]
    personas: Vec<RawPersona>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTriggers {
    angry: Vec<String>,
    helpful: Vec<String>,
    friendly: Vec<String>,
    confused: Vec<String>,
}

impl Default for RawTriggers {
    fn default() -> Self {
        let defaults = MoodTriggers::default();
        Self {
            angry: defaults.angry,
            helpful: defaults.helpful,
            friendly: defaults.friendly,
            confused: defaults.confused,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawPersona {
    key: String,
    name: String,
    role: String,
    background: String,
    #[serde(default)]
    quirks: Vec<String>,
}

/// Runtime NPC tuning: the persona catalog plus the mood trigger sets.
#[derive(Debug, Clone)]
pub struct NpcTuning {
    pub registry: PersonaRegistry,
    pub triggers: MoodTriggers,
}

impl NpcTuning {
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawNpcConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to built-in tuning.",
                        path.display(),
                        err
                    );
                    RawNpcConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to built-in tuning.",
                    path.display(),
                    err
                );
                RawNpcConfig::default().into()
            }
        }
    }
}

impl Default for NpcTuning {
    fn default() -> Self {
        RawNpcConfig::default().into()
    }
}

impl From<RawNpcConfig> for NpcTuning {
    fn from(value: RawNpcConfig) -> Self {
        // Earlier sets claim contested words so precedence stays unambiguous.
        let angry = normalise_keywords(&value.triggers.angry, &[]);
        let helpful = normalise_keywords(&value.triggers.helpful, &[&angry]);
        let friendly = normalise_keywords(&value.triggers.friendly, &[&angry, &helpful]);
        let confused =
            normalise_keywords(&value.triggers.confused, &[&angry, &helpful, &friendly]);

        let personas = value
            .personas
            .into_iter()
            .filter(|raw| !raw.key.trim().is_empty() && !raw.name.trim().is_empty())
            .map(|raw| {
                Persona::new(
                    raw.key.trim(),
                    raw.name.trim(),
                    raw.role.trim(),
                    raw.background.trim(),
                    raw.quirks
                        .into_iter()
                        .map(|quirk| quirk.trim().to_string())
                        .filter(|quirk| !quirk.is_empty())
                        .collect(),
                )
            })
            .collect();

        Self {
            registry: PersonaRegistry::new(personas),
            triggers: MoodTriggers {
                angry,
                helpful,
                friendly,
                confused,
            },
        }
    }
}

fn normalise_keywords(keywords: &[String], claimed: &[&Vec<String>]) -> Vec<String> {
    keywords
        .iter()
        .map(|keyword| keyword.trim().to_ascii_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| !claimed.iter().any(|set| set.contains(keyword)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_matches_builtin_sets() {
        let tuning = NpcTuning::default();
        assert_eq!(tuning.registry.len(), 3);
        assert!(tuning.triggers.angry.contains(&"useless".to_string()));
        assert!(tuning.triggers.helpful.contains(&"quest".to_string()));
    }

    #[test]
    fn contested_keywords_stay_with_the_higher_precedence_set() {
        let raw: RawNpcConfig = toml::from_str(
            r#"
            [triggers]
            angry = ["Hate", "grr "]
            helpful = ["hate", "help"]
            friendly = ["HELP", "hello"]
            confused = ["hello", "lost"]
            "#,
        )
        .expect("inline toml should parse");

        let tuning = NpcTuning::from(raw);
        assert_eq!(tuning.triggers.angry, vec!["hate", "grr"]);
        assert_eq!(tuning.triggers.helpful, vec!["help"]);
        assert_eq!(tuning.triggers.friendly, vec!["hello"]);
        assert_eq!(tuning.triggers.confused, vec!["lost"]);
    }

    #[test]
    fn persona_overrides_replace_the_builtin_cast() {
        let raw: RawNpcConfig = toml::from_str(
            r#"
            [[personas]]
            key = "innkeeper"
            name = "Greta"
            role = "Innkeeper"
            background = "Runs the Gilded Goose"
            quirks = ["Hums while working"]
            "#,
        )
        .expect("inline toml should parse");

        let tuning = NpcTuning::from(raw);
        assert_eq!(tuning.registry.len(), 1);
        assert_eq!(tuning.registry.get(0).name, "Greta");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tuning = NpcTuning::load_or_default(Path::new("config/does_not_exist.toml"));
        assert_eq!(tuning.registry.len(), 3);
    }
}
