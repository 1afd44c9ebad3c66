//! Command line arguments for the batch replayer.
use std::path::PathBuf;

use clap::Parser;

/// Replays a log of player chat messages against scripted NPCs.
#[derive(Debug, Parser)]
#[command(name = "npc-replay", version)]
pub struct Args {
    /// JSON array of timestamped player messages.
    #[arg(long, short, default_value = "players.json")]
    pub input: PathBuf,

    /// Destination for the newline-delimited interaction log.
    #[arg(long, short, default_value = "logs/run.jsonl")]
    pub output: PathBuf,

    /// NPC tuning file (personas and mood trigger words).
    #[arg(long, default_value = crate::npc::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Use the offline scripted broker instead of the OpenAI API.
    #[arg(long)]
    pub scripted: bool,
}
