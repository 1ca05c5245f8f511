use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Square;
use lib::game::{Game, Setup};
use tracing::{info, instrument};

/// Lists the legal moves of the side to move.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The setup in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,

    /// Only list moves of the piece on this square.
    square: Option<Square>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::default();
        let game = Game::new(self.setup);

        let moves: Vec<_> = match self.square {
            None => game.moves().collect(),
            Some(whence) => game
                .moves()
                .filter(|m| m.whence() == whence)
                .collect(),
        };

        info!(count = moves.len(), check = game.is_check(), outcome = ?game.outcome());

        for m in moves {
            io.send(m)?;
        }

        io.flush()?;

        Ok(())
    }
}
