use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Move, Square};
use lib::game::{Game, Setup};
use tracing::{info, instrument, warn};

/// Plays an interactive game of chess on the terminal.
///
/// Moves are entered in coordinate notation, e.g. `e2e4`.
/// Entering a square alone lists where the piece on it may move.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The starting setup in RON notation, e.g. `(board: "8/8/8/8/8/8/8/K6k", turn: black)`.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::default();
        let mut game = Game::new(self.setup);

        let outcome = loop {
            io.send(format_args!("{:#}", game.board()))?;

            if let Some(o) = game.outcome() {
                break Some(o);
            } else if game.is_check() {
                io.send(format_args!("{} is in check", game.turn()))?;
            }

            io.prompt(format_args!("{} to move: ", game.turn()))?;

            let Some(line) = io.recv()? else {
                break None;
            };

            match line.trim() {
                "" => continue,
                input => {
                    if let Ok(whence) = input.parse::<Square>() {
                        let targets: Vec<_> =
                            game.moves_from(whence).map(|s| s.to_string()).collect();
                        io.send(targets.join(" "))?;
                    } else {
                        match input.parse::<Move>() {
                            Err(e) => warn!("{e}"),
                            Ok(m) => match game.execute(m) {
                                Err(e) => warn!("{e}"),
                                Ok(()) => info!(%m, turn = %game.turn()),
                            },
                        }
                    }
                }
            }
        };

        let history: Vec<_> = game.history().iter().map(Move::to_string).collect();

        match outcome {
            Some(o) => io.send(o)?,
            None => io.send("game interrupted")?,
        }

        io.send(history.join(" "))?;
        io.flush()?;

        Ok(())
    }
}
