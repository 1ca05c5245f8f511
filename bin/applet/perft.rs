use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::Setup;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaf nodes of the legal move tree up to some depth.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// The setup in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,

    /// The depth of the move tree.
    depth: u8,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::default();

        let timer = Instant::now();
        let nodes = self.setup.board.perft(self.setup.turn, self.depth);
        let elapsed = timer.elapsed();

        info!(depth = self.depth, nodes, ?elapsed);

        io.send(nodes)?;
        io.flush()?;

        Ok(())
    }
}
