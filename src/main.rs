extern crate tic_tac_toe;

use std::io::{self, BufRead};

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use tic_tac_toe::config::Config;
use tic_tac_toe::view::{Input, Session, SessionError, TerminalView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(io::stderr)
        .init();

    let marks = config.marks()?;
    let view = TerminalView::new(io::stdout(), marks);
    let mut session = Session::new(view)?;
    if config.autostart {
        session.handle(Input::Play)?;
    }

    info!("waiting for input");
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(err) => {
                warn!(%err, "unrecognized input");
                continue;
            }
        };
        match session.handle(input) {
            Ok(state) => debug!(?state, "input applied"),
            // already logged by the session, keep listening
            Err(SessionError::Game(_)) => {}
            Err(err @ SessionError::Render(_)) => {
                error!(%err, "unable to draw the game");
                return Err(err.into());
            }
        }
    }

    Ok(())
}
