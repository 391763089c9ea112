//! Prompt loop that plays one game over a reader and writer.

use crate::render::Renderer;
use anyhow::Result;
use resumable_tictactoe::{GameState, Marker, MoveError, SaveSlot};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A player completed a line.
    Won(Marker),
    /// The board filled with no line.
    Draw,
    /// The game was saved for later.
    Saved,
    /// Input ended before the game did; nothing was saved.
    Abandoned,
}

/// One interactive game: prompts on `output`, answers on `input`.
pub struct Session<R, W> {
    input: R,
    output: W,
    slot: SaveSlot,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session bound to a save slot.
    pub fn new(input: R, output: W, slot: SaveSlot, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            slot,
            renderer,
        }
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until a win, a draw, save-and-quit, or end of input.
    ///
    /// `resume` answers the load prompt up front; `None` asks the player.
    ///
    /// # Errors
    ///
    /// Fails only if the console itself cannot be read or written. Save-slot
    /// problems are reported to the player and the game carries on.
    #[instrument(skip(self), fields(slot = %self.slot.path().display()))]
    pub fn run(&mut self, resume: Option<bool>) -> Result<SessionOutcome> {
        let banner = self.renderer.banner();
        self.output.write_all(banner.as_bytes())?;

        let outcome = match self.start(resume)? {
            Some(state) => self.play(state)?,
            None => SessionOutcome::Abandoned,
        };

        writeln!(self.output, "Thanks for playing!\n")?;
        self.output.flush()?;
        info!(?outcome, "Session ended");
        Ok(outcome)
    }

    /// Picks the starting state. `None` means input ended at the prompt.
    fn start(&mut self, resume: Option<bool>) -> Result<Option<GameState>> {
        let resume = match resume {
            Some(answer) => answer,
            None => match self.prompt("Do you want to load the previous game? (y/n): ")? {
                Some(answer) => answer.trim().eq_ignore_ascii_case("y"),
                None => return Ok(None),
            },
        };

        if !resume {
            return Ok(Some(GameState::new()));
        }

        let state = match self.slot.load() {
            Ok(Some(state)) => {
                writeln!(self.output, "Game loaded successfully!\n")?;
                state
            }
            Ok(None) => {
                writeln!(self.output, "No saved game found. Starting a new game.\n")?;
                GameState::new()
            }
            Err(e) if e.is_corrupt() => {
                writeln!(self.output, "Saved game is damaged ({e}). Starting a new game.\n")?;
                GameState::new()
            }
            Err(e) => {
                warn!(error = %e, "Could not read save slot");
                writeln!(self.output, "Could not read saved game ({e}). Starting a new game.\n")?;
                GameState::new()
            }
        };
        Ok(Some(state))
    }

    fn play(&mut self, mut state: GameState) -> Result<SessionOutcome> {
        loop {
            let board = self.renderer.board(state.board());
            self.output.write_all(board.as_bytes())?;

            let marker = state.current_marker();
            let player = state.current_player();
            let question = format!(
                "Player {} ({}), choose a move (1-9) or 0 to save and quit: ",
                player,
                self.renderer.marker(marker)
            );
            let Some(answer) = self.prompt(&question)? else {
                info!("Input closed mid-game");
                return Ok(SessionOutcome::Abandoned);
            };

            let Some(choice) = parse_choice(&answer) else {
                writeln!(self.output, "Invalid input. Please enter a number between 1 and 9.")?;
                continue;
            };

            if choice == 0 {
                match self.slot.save(&state) {
                    Ok(()) => {
                        writeln!(self.output, "\nGame state saved! Come back soon.\n")?;
                        return Ok(SessionOutcome::Saved);
                    }
                    Err(e) => {
                        warn!(error = %e, "Save failed");
                        writeln!(self.output, "Could not save the game: {e}")?;
                        continue;
                    }
                }
            }

            let number = u8::try_from(choice).unwrap_or(u8::MAX);
            match state.apply_move(number) {
                Ok(pos) => debug!(%pos, %marker, "Placed"),
                Err(MoveError::OutOfRange(_)) => {
                    writeln!(self.output, "Invalid move. Choose a position from 1 to 9.")?;
                    continue;
                }
                Err(MoveError::CellOccupied(_)) => {
                    writeln!(self.output, "That cell is already taken. Try another.")?;
                    continue;
                }
            }

            if state.check_winner(marker) {
                let board = self.renderer.board(state.board());
                self.output.write_all(board.as_bytes())?;
                writeln!(
                    self.output,
                    "Player {} ({}) wins! Congrats!",
                    player,
                    self.renderer.marker(marker)
                )?;
                self.clear_slot()?;
                return Ok(SessionOutcome::Won(marker));
            }

            if state.is_draw() {
                let board = self.renderer.board(state.board());
                self.output.write_all(board.as_bytes())?;
                writeln!(self.output, "It's a draw! Good game!")?;
                self.clear_slot()?;
                return Ok(SessionOutcome::Draw);
            }
        }
    }

    /// A finished game must not be resumable.
    fn clear_slot(&mut self) -> Result<()> {
        if let Err(e) = self.slot.delete() {
            warn!(error = %e, "Could not remove save record after game end");
            writeln!(self.output, "Could not remove the old saved game: {e}")?;
        }
        Ok(())
    }

    /// Writes `question` and reads one line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Reads a menu choice. Any integer is `Some`; values too large for `i64`
/// saturate so they are rejected as out of range rather than as non-numbers.
fn parse_choice(answer: &str) -> Option<i64> {
    let answer = answer.trim();
    let digits = answer.strip_prefix(['-', '+']).unwrap_or(answer);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(answer.parse::<i64>().unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("5\n"), Some(5));
        assert_eq!(parse_choice("  0 "), Some(0));
        assert_eq!(parse_choice("-3"), Some(-3));
        assert_eq!(parse_choice("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_choice("-99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice("-"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("4x"), None);
    }
}
