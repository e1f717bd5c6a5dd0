use log::debug;
use std::io::{BufRead, Write};

use super::{Driver, DriverError};
use crate::game::{Game, GameStatus, Outcome, Randomness, GROUP_SIZE};
use command::{Command, HELP};

mod command;
mod render;

/// A driver which plays the game over a line-based text interface, e.g. stdin and stdout.
pub struct TerminalDriver<I, O, R> {
    /// The game being played.
    game: Game<R>,
    /// Where player commands are read from.
    input: I,
    /// Where the board and messages are written.
    output: O,
}

impl<I: BufRead, O: Write, R: Randomness> TerminalDriver<I, O, R> {
    pub fn new(game: Game<R>, input: I, output: O) -> Self {
        TerminalDriver {
            game,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Find the board word matching what the player typed. An exact match wins over one
    /// that only differs by case.
    fn resolve(&self, typed: &str) -> Option<String> {
        let words = self.game.remaining_words();
        words
            .iter()
            .find(|w| *w == typed)
            .or_else(|| words.iter().find(|w| w.eq_ignore_ascii_case(typed)))
            .cloned()
    }

    fn select(&mut self, typed: &[String]) -> Result<(), DriverError> {
        if typed.is_empty() {
            let example = self.example_word().to_owned();
            writeln!(self.output, "Name the words to select, e.g. 'select {}'.", example)?;
        }
        let mut toggled = Vec::new();
        for typed in typed {
            let Some(word) = self.resolve(typed) else {
                writeln!(self.output, "{:?} is not on the board.", typed)?;
                continue;
            };
            if toggled.contains(&word) {
                writeln!(self.output, "Skipping repeated {:?}.", word)?;
                continue;
            }
            if !self.game.is_selected(&word) && self.game.selection().len() == GROUP_SIZE {
                writeln!(self.output, "You can only select {} words.", GROUP_SIZE)?;
                continue;
            }
            self.game.toggle_select(&word);
            toggled.push(word);
        }
        Ok(())
    }

    fn example_word(&self) -> &str {
        self.game
            .remaining_words()
            .first()
            .map(|w| w.as_str())
            .unwrap_or("WORD")
    }

    fn submit(&mut self) -> Result<(), DriverError> {
        let Some(result) = self.game.submit_guess() else {
            if !self.game.is_over() {
                writeln!(self.output, "Select {} words to submit.", GROUP_SIZE)?;
            }
            return Ok(());
        };

        writeln!(self.output, "{}", result.outcome)?;
        if let Outcome::Correct(category) = &result.outcome {
            debug!("Player found {:?}", category.name);
        }
        if result.status == GameStatus::Lost {
            writeln!(self.output, "The connections you missed:")?;
            for category in &result.revealed {
                writeln!(self.output, "{}", render::category_line(category))?;
            }
        }
        Ok(())
    }

    /// Carry out one command. Returns `false` once the player wants to stop.
    fn handle(&mut self, command: Command) -> Result<bool, DriverError> {
        debug!("Command: {:?}", command);
        match command {
            Command::Select(words) => self.select(&words)?,
            Command::Submit => self.submit()?,
            Command::Deselect => self.game.clear_selection(),
            Command::Shuffle => self.game.shuffle_remaining(),
            Command::NewGame => self.game.start(),
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Nothing => {}
            Command::Unknown(verb) => {
                writeln!(self.output, "Unknown command {:?}, type 'help' for a list.", verb)?;
                return Ok(true);
            }
        }
        render::board(&mut self.output, &self.game)?;
        Ok(true)
    }
}

impl<I: BufRead, O: Write, R: Randomness> Driver for TerminalDriver<I, O, R> {
    fn play(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "Find the four groups of four. Type 'help' for commands.")?;
        render::board(&mut self.output, &self.game)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle(Command::parse(&line))? {
                break;
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }
}
