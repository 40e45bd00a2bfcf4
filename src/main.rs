//! Kalaha engine binary.
//!
//! Reads commands from stdin and writes replies to stdout, one line per
//! command. Diagnostics go to stderr through `tracing`; set `RUST_LOG` to
//! raise the level.

use std::io::{self, BufRead};

use kalaha::engine::Engine;
use kalaha::protocol::parser::{parse_command, Command};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = line?;

        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Kalaha => engine.handle_kalaha(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, value.as_deref()) {
                    tracing::warn!(error = %e, "setoption ignored");
                }
            }
            Command::NewGame => engine.handle_newgame(&mut out)?,
            Command::Position { notation } => engine.handle_position(&mut out, &notation)?,
            Command::Play { id, pit } => engine.handle_play(&mut out, id, pit)?,
            Command::Show { id } => engine.handle_show(&mut out, id)?,
            Command::Delete { id } => engine.handle_delete(&mut out, id)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
