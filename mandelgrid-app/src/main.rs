mod command;
mod session;
mod settings;

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use crate::command::Command;
use crate::session::RenderSession;
use crate::settings::Settings;

const USAGE: &str = "usage: mandelgrid [settings.json] [command...]\n\
    commands: in | out | left | right | up | down | zoom:<f> | pan:<fx>,<fy> |\n\
    \x20         center:<x>,<y> | click:<px>,<py> | iter:<n>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1).peekable();
    if args.peek().is_some_and(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let settings = match args.next_if(|a| a.ends_with(".json")) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let commands = match args.map(|a| a.parse::<Command>()).collect::<Result<Vec<_>, _>>() {
        Ok(commands) => commands,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = RenderSession::new(settings);
    for command in commands {
        if let Err(e) = session.apply(command) {
            error!("Command {command:?} rejected: {e}");
            return ExitCode::FAILURE;
        }
    }

    info!(bounds = ?session.viewport().bounds(), "Navigation replayed");

    match session.render() {
        Ok(frame) => {
            let (xmin, ymin, xmax, ymax) = frame.request.viewport.bounds();
            let interior = frame.grid.interior_count();
            info!(
                width = frame.request.width,
                height = frame.request.height,
                max_iter = frame.request.max_iter,
                xmin,
                ymin,
                xmax,
                ymax,
                interior,
                escaped = frame.grid.data.len() - interior,
                elapsed_ms = frame.elapsed.as_millis(),
                pixels = frame.image.pixels.len(),
                "Frame ready"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Render failed: {e}");
            ExitCode::FAILURE
        }
    }
}
