use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod io;

use cli::Cli;

fn main() -> Result<(), Anyhow> {
    Cli::parse().execute()
}
