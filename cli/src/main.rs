use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

mod command;
mod game;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Avoid the bombs!", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Grid size of the first board
    #[arg(long)]
    size: Option<String>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut game = game::Game::new(args.seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Avoid the Bombs!\n{}", command::HELP)?;
    if let Some(size) = args.size {
        game.handle(command::Command::New(size), &mut stdout)?;
    }

    for line in stdin.lock().lines() {
        if let game::Flow::Quit = game.handle_line(&line?, &mut stdout)? {
            break;
        }
        stdout.flush()?;
    }

    log::debug!("Bye");
    Ok(())
}
