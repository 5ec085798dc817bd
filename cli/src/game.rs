use std::io::{self, Write};

use bombgrid_core::{GameConfig, GameError, RevealOutcome, Session};

use crate::command::{self, Command, Target};
use crate::render::BoardView;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal driver: turns commands into engine calls and prints the result.
#[derive(Debug)]
pub struct Game {
    session: Session,
    seed: Option<u64>,
    boards_started: u64,
}

impl Game {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            session: Session::new(),
            seed,
            boards_started: 0,
        }
    }

    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match command::parse(line) {
            Ok(command) => self.handle(command, out),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::New(size) => match self.start(&size) {
                Ok(_) => self.show(out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Open(target) => self.open(target, out)?,
            Command::Show => self.show(out)?,
            Command::Restart => {
                self.session.restart();
                writeln!(out, "Grid cleared. Type `new N` to start again.")?;
            }
            Command::Help => writeln!(out, "{}", command::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn start(&mut self, input: &str) -> Result<GameConfig, GameError> {
        let config = match self.seed {
            Some(seed) => {
                let config: GameConfig = input.parse()?;
                self.session
                    .start_with_seed(config, seed.wrapping_add(self.boards_started));
                config
            }
            None => self.session.start_from_input(input)?,
        };
        self.boards_started += 1;
        log::info!(
            "Started board #{} ({}x{}, {} mines)",
            self.boards_started,
            config.size(),
            config.size(),
            config.mine_count()
        );
        Ok(config)
    }

    fn open(&mut self, target: Target, out: &mut impl Write) -> io::Result<()> {
        let outcome = match target {
            Target::Index(index) => self.session.reveal(index),
            Target::Coords(coords) => self.session.reveal_at(coords),
        };

        match outcome {
            Ok(outcome) => self.report(outcome, out),
            Err(GameError::InvalidIndex) => {
                log::warn!("Ignoring reveal outside the grid: {target:?}");
                writeln!(out, "{}", GameError::InvalidIndex)
            }
            Err(err) => writeln!(out, "{err}"),
        }
    }

    fn report(&self, outcome: RevealOutcome, out: &mut impl Write) -> io::Result<()> {
        if !outcome.has_update() {
            log::debug!("Reveal had no effect: {outcome:?}");
        }
        self.show(out)?;
        if outcome.hit_mine() {
            writeln!(out, "Boom! You hit a bomb. Game Over!")?;
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        match self.session.snapshot() {
            Some(board) => writeln!(out, "{}", BoardView(&board)),
            None => writeln!(out, "No grid yet. Type `new N` with N >= 2."),
        }
    }
}
