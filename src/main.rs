use std::{path::Path, process::ExitCode};

use clap::Parser;
use log::{error, info};

use npc_replay::{
    cli::Args,
    dialogue::{broker::config::OpenAiConfig, DialogueBroker, OpenAiDialogueBroker, ScriptedBroker},
    npc::NpcTuning,
    runner::{self, RunError},
};

fn main() -> ExitCode {
    load_secrets_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let tuning = NpcTuning::load_or_default(&args.config);

    let broker: Box<dyn DialogueBroker> = if args.scripted {
        info!("Using the offline scripted broker");
        Box::new(ScriptedBroker::echo())
    } else {
        let config = OpenAiConfig::from_env()?;
        Box::new(OpenAiDialogueBroker::new(config)?)
    };

    runner::run(
        &args.input,
        &args.output,
        &tuning.registry,
        &tuning.triggers,
        broker.as_ref(),
    )?;

    Ok(())
}

fn load_secrets_env() {
    const SECRETS_FILE: &str = "secrets.env";

    let path = Path::new(SECRETS_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", SECRETS_FILE, err);
    }
}
