//! Text codec for the persisted game record.
//!
//! Layout, one field per line:
//!
//! ```text
//! X-O        row 0
//! -X-        row 1
//! --O        row 2
//! X          marker to place next
//! Player Turn: 1
//! N          completion flag, reserved: `save` always writes N
//! ```

use super::PersistenceError;
use crate::{Board, Cell, GameState, Marker};
use tracing::instrument;

const PLAYER_PREFIX: &str = "Player Turn: ";
const FLAG_OPEN: &str = "N";
const FLAG_COMPLETED: &str = "Y";
const REQUIRED_LINES: usize = 5;

/// The persisted form of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    board: Board,
    marker: Marker,
    player: u8,
    completed: bool,
}

impl GameRecord {
    /// Captures the parts of a game state that are saved.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            marker: state.current_marker(),
            player: state.current_player(),
            completed: false,
        }
    }

    /// Restores the game state this record describes.
    pub fn into_state(self) -> GameState {
        GameState::from_parts(self.board, self.marker)
    }

    /// Saved board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Saved marker to place next.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Saved player number to move next.
    pub fn player(&self) -> u8 {
        self.player
    }

    /// Reserved completion flag. Carried through the record but never acted on.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Renders the record as text, newline-terminated.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(32);
        for row in self.board.rows() {
            out.extend(row.iter().map(|cell| cell.symbol()));
            out.push('\n');
        }
        out.push(self.marker.symbol());
        out.push('\n');
        out.push_str(PLAYER_PREFIX);
        out.push_str(&self.player.to_string());
        out.push('\n');
        out.push_str(if self.completed { FLAG_COMPLETED } else { FLAG_OPEN });
        out.push('\n');
        out
    }

    /// Parses and validates record text.
    ///
    /// The first five lines are required. The completion flag line is optional;
    /// only `Y` reads as set, and it never fails validation. Anything after it
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::CorruptRecord`] naming the first line that
    /// does not match the layout.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn decode(text: &str) -> Result<Self, PersistenceError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < REQUIRED_LINES {
            return Err(PersistenceError::corrupt(
                lines.len() + 1,
                format!(
                    "expected at least {} lines, found {}",
                    REQUIRED_LINES,
                    lines.len()
                ),
            ));
        }

        let mut rows = [[Cell::Empty; 3]; 3];
        for (idx, row) in rows.iter_mut().enumerate() {
            *row = decode_row(lines[idx], idx + 1)?;
        }

        let marker = decode_marker(lines[3])?;
        let player = decode_player(lines[4])?;

        if marker.player_number() != player {
            return Err(PersistenceError::corrupt(
                5,
                format!("player {} does not play {}", player, marker),
            ));
        }

        let completed = lines.get(REQUIRED_LINES) == Some(&FLAG_COMPLETED);

        Ok(Self {
            board: Board::from_rows(rows),
            marker,
            player,
            completed,
        })
    }
}

fn decode_row(line: &str, line_no: usize) -> Result<[Cell; 3], PersistenceError> {
    let mut chars = line.chars();
    let mut row = [Cell::Empty; 3];
    for cell in row.iter_mut() {
        let symbol = chars.next().ok_or_else(|| {
            PersistenceError::corrupt(line_no, format!("row {:?} is shorter than 3 cells", line))
        })?;
        *cell = Cell::from_symbol(symbol).ok_or_else(|| {
            PersistenceError::corrupt(line_no, format!("unexpected cell symbol {:?}", symbol))
        })?;
    }
    if chars.next().is_some() {
        return Err(PersistenceError::corrupt(
            line_no,
            format!("row {:?} is longer than 3 cells", line),
        ));
    }
    Ok(row)
}

fn decode_marker(line: &str) -> Result<Marker, PersistenceError> {
    let mut chars = line.chars();
    match (chars.next().and_then(Marker::from_symbol), chars.next()) {
        (Some(marker), None) => Ok(marker),
        _ => Err(PersistenceError::corrupt(
            4,
            format!("expected marker X or O, found {:?}", line),
        )),
    }
}

fn decode_player(line: &str) -> Result<u8, PersistenceError> {
    match line.strip_prefix(PLAYER_PREFIX) {
        Some("1") => Ok(1),
        Some("2") => Ok(2),
        _ => Err(PersistenceError::corrupt(
            5,
            format!("expected \"{}1\" or \"{}2\", found {:?}", PLAYER_PREFIX, PLAYER_PREFIX, line),
        )),
    }
}
