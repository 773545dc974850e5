//! # Crypto Blog Client
//!
//! Terminal front end for the post feed. Reads commands from stdin and
//! redraws the feed after every command and every settled backend call.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use cryptoblog_core::{Session, SubmitOutcome};
use cryptoblog_infra::{HttpPostBackend, TracingDiagnosticSink};

mod app;
mod command;
mod config;
mod render;
mod telemetry;

use app::{App, Event, Flow};
use command::{Command, HELP};
use config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    telemetry::init_telemetry(&config);

    let backend =
        HttpPostBackend::new(config.api_url.as_str()).context("failed to build HTTP client")?;
    tracing::info!(api_url = %config.api_url, "Starting Crypto Blog client");

    let session = Session::new(Arc::new(backend), Arc::new(TracingDiagnosticSink));
    let (events_tx, mut events) = mpsc::unbounded_channel();
    let app = App::new(Arc::new(session), events_tx);

    app.mount();
    tokio::task::yield_now().await;
    draw(&app)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(command) => match app.handle(command) {
                        Flow::Exit => break,
                        Flow::Help => println!("{HELP}"),
                        Flow::Redraw => {
                            // Let a just-spawned backend call raise the busy flag first.
                            tokio::task::yield_now().await;
                            draw(&app)?;
                        }
                    },
                    Err(e) => println!("{e}"),
                }
            }
            Some(event) = events.recv() => {
                if let Event::Submitted(SubmitOutcome::Invalid(errors)) = &event {
                    tracing::debug!(%errors, "Post not submitted");
                }
                draw(&app)?;
            }
        }
    }

    Ok(())
}

fn draw(app: &App) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", render::render(&app.view()))?;
    out.flush()
}
