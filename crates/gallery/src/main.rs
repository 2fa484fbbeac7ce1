mod app;
mod error;
mod message;
mod render;

use app::{App, OutputMode};
use error::AppResult;
use message::Message;
use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
    process::ExitCode,
};

const USAGE: &str = "usage: grid-gallery <props.json> [--json]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(props_path) = args.next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let output = if args.any(|arg| arg == "--json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    match run(&props_path, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(props_path: &Path, output: OutputMode) -> AppResult<()> {
    let mut app = App::load(props_path, output)?;
    let mut stdout = io::stdout().lock();
    app.draw(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(message) = Message::parse(&line) else {
            tracing::warn!("Unknown command: {}", line.trim());
            continue;
        };
        if message == Message::Quit {
            break;
        }

        match app.update(message) {
            Ok(true) => app.draw(&mut stdout)?,
            Ok(false) => {}
            Err(err) => tracing::warn!("{err}"),
        }
    }

    tracing::debug!("Leaving at page {}", app.gallery().offset() + 1);
    Ok(())
}
