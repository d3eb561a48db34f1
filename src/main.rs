use clap::Parser;
use highroll::application::engine::GameEngine;
use highroll::domain::play::{PlayPayload, PlayResponse};
use highroll::domain::validation::ErrorResult;
use highroll::error::GameError;
use highroll::infrastructure::rng::ThreadRngOutcomeGenerator;
use highroll::interfaces::messaging::gateway::MessageGateway;
use highroll::interfaces::messaging::publisher::ChannelPublisher;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input play messages, one JSON object per line. Reads stdin when omitted.
    input: Option<PathBuf>,
}

/// JSON-lines transport around the message gateway: each input line is a play
/// message, results are printed to stdout (the results topic) and validation
/// errors to stderr (the errors queue).
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let engine = GameEngine::new(Box::new(ThreadRngOutcomeGenerator::new()));
    let (play_tx, play_rx) = mpsc::channel::<PlayPayload>(64);
    let (results_tx, mut results_rx) = mpsc::channel::<PlayResponse>(64);
    let (errors_tx, mut errors_rx) = mpsc::channel::<ErrorResult>(64);

    let publisher = Box::new(ChannelPublisher::new(results_tx, errors_tx));
    let gateway = MessageGateway::new(engine, play_rx, publisher);
    let gateway_task = tokio::spawn(gateway.run());

    let results_task = tokio::spawn(async move {
        while let Some(response) = results_rx.recv().await {
            println!("{}", serde_json::to_string(&response)?);
        }
        Ok::<(), GameError>(())
    });
    let errors_task = tokio::spawn(async move {
        while let Some(errors) = errors_rx.recv().await {
            eprintln!("{}", serde_json::to_string(&errors)?);
        }
        Ok::<(), GameError>(())
    });

    let reader: Box<dyn BufRead> = match cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayPayload>(&line) {
            Ok(payload) => {
                // A closed channel means the gateway stopped; its task result
                // carries the reason.
                if play_tx.send(payload).await.is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("skipping malformed play message: {e}"),
        }
    }
    drop(play_tx);

    gateway_task.await.into_diagnostic()?.into_diagnostic()?;
    results_task.await.into_diagnostic()?.into_diagnostic()?;
    errors_task.await.into_diagnostic()?.into_diagnostic()?;

    Ok(())
}
