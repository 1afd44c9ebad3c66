//! Batch runner: loads the message log and replays it in timestamp order.
pub mod record;

pub use record::InteractionRecord;

use std::{
    collections::BTreeMap,
    fmt, fs,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Deserialize;

use crate::{
    dialogue::{
        broker::config::OpenAiConfigError, fallback_reply, DialogueBroker, DialogueRequest,
    },
    npc::{next_mood, Mood, MoodTriggers, PersonaRegistry},
    session::{render_context, PlayerId, SessionStore},
};

/// Raw timestamped message from the input batch.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerMessage {
    pub player_id: PlayerId,
    pub text: String,
    pub timestamp: NaiveDateTime,
}

/// Fatal errors that abort a run before or during processing.
///
/// Reply generation failures never appear here; those are absorbed at the
/// fallback boundary and the run continues.
#[derive(Debug)]
pub enum RunError {
    Config(OpenAiConfigError),
    InputUnreadable { path: PathBuf, message: String },
    InputMalformed { path: PathBuf, message: String },
    Sink { path: PathBuf, message: String },
}

impl RunError {
    fn sink(path: &Path, message: impl Into<String>) -> Self {
        Self::Sink {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::InputUnreadable { path, message } => {
                write!(f, "could not read input file {}: {}", path.display(), message)
            }
            Self::InputMalformed { path, message } => {
                write!(f, "could not parse input file {}: {}", path.display(), message)
            }
            Self::Sink { path, message } => {
                write!(
                    f,
                    "could not write interaction log {}: {}",
                    path.display(),
                    message
                )
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<OpenAiConfigError> for RunError {
    fn from(err: OpenAiConfigError) -> Self {
        Self::Config(err)
    }
}

/// End-of-run accounting printed to the operator console.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_messages: usize,
    pub unique_players: usize,
    pub mood_counts: BTreeMap<Mood, u64>,
    pub history_lengths: Vec<(PlayerId, usize)>,
}

impl RunSummary {
    pub fn print(&self) {
        println!();
        println!("{}", "=".repeat(60));
        println!("INTERACTION SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Total messages processed: {}", self.total_messages);
        println!("Unique players: {}", self.unique_players);
        println!();
        println!("Interactions by mood:");
        for (mood, count) in &self.mood_counts {
            println!("  {}: {} interactions", mood, count);
        }
        println!();
        println!("Player conversation lengths:");
        for (player, length) in &self.history_lengths {
            println!("  {}: {} messages in history", player, length);
        }
    }
}

/// Replays the whole input batch through the broker, writing one JSON line
/// per interaction to `output` (recreated fresh each run).
pub fn run(
    input: &Path,
    output: &Path,
    registry: &PersonaRegistry,
    triggers: &MoodTriggers,
    broker: &dyn DialogueBroker,
) -> Result<RunSummary, RunError> {
    let mut messages = load_messages(input)?;
    sort_chronologically(&mut messages);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| RunError::sink(output, err.to_string()))?;
        }
    }
    let mut sink = BufWriter::new(
        File::create(output).map_err(|err| RunError::sink(output, err.to_string()))?,
    );

    let total = messages.len();
    println!("Processing {} messages in chronological order...", total);
    println!("{}", "-".repeat(60));

    let mut sessions = SessionStore::default();
    let mut mood_counts: BTreeMap<Mood, u64> = BTreeMap::new();

    for (index, message) in messages.iter().enumerate() {
        println!(
            "[{}/{}] Processing message from {}",
            index + 1,
            total,
            message.player_id
        );

        let record = process_message(message, &mut sessions, registry, triggers, broker);
        *mood_counts.entry(record.npc_mood).or_insert(0) += 1;

        let line = serde_json::to_string(&record)
            .map_err(|err| RunError::sink(output, err.to_string()))?;
        writeln!(sink, "{}", line).map_err(|err| RunError::sink(output, err.to_string()))?;

        println!("{}: {}", message.player_id, record.player_message);
        println!(
            "-> {} ({}, {}): {}",
            record.npc_name, record.npc_role, record.npc_mood, record.npc_reply
        );
        println!("{}", "-".repeat(40));
    }

    sink.flush()
        .map_err(|err| RunError::sink(output, err.to_string()))?;

    let summary = RunSummary {
        total_messages: total,
        unique_players: sessions.len(),
        mood_counts,
        history_lengths: sessions
            .iter()
            .map(|(player, state)| (player, state.history_len()))
            .collect(),
    };
    summary.print();
    info!("Interaction log written to {}", output.display());

    Ok(summary)
}

/// Handles one message: mood advance, context build, reply generation with
/// the fallback substitution, then the history update.
fn process_message(
    message: &PlayerMessage,
    sessions: &mut SessionStore,
    registry: &PersonaRegistry,
    triggers: &MoodTriggers,
    broker: &dyn DialogueBroker,
) -> InteractionRecord {
    let state = sessions.ensure(message.player_id, registry);
    let mood = next_mood(state.mood(), &message.text, triggers);
    state.set_mood(mood);

    let snapshot = state.history_snapshot();
    let persona = registry.get(state.persona_slot());
    let context = render_context(&snapshot, &message.text);

    let reply = match broker.process(&DialogueRequest::new(persona, mood, context)) {
        Ok(response) => response.content,
        Err(err) => {
            warn!(
                "Reply generation failed for {} ({}); substituting fallback",
                message.player_id, err
            );
            fallback_reply(&persona.name)
        }
    };

    // The current message joins the history only after the reply exists, so
    // it never appears in its own context.
    state.remember(message.text.clone());

    InteractionRecord {
        timestamp: message.timestamp,
        player_id: message.player_id,
        player_message: message.text.clone(),
        npc_name: persona.name.clone(),
        npc_role: persona.role.clone(),
        npc_mood: mood,
        npc_reply: reply,
        conversation_state: snapshot,
    }
}

fn load_messages(path: &Path) -> Result<Vec<PlayerMessage>, RunError> {
    let raw = fs::read_to_string(path).map_err(|err| RunError::InputUnreadable {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|err| RunError::InputMalformed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Stable ascending sort; ties keep their input-file order.
fn sort_chronologically(messages: &mut [PlayerMessage]) {
    messages.sort_by_key(|message| message.timestamp);
}
