//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The symbol a player places.
///
/// Player 1 always plays `X` and moves first; player 2 always plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Marker {
    /// Player 1's marker.
    X,
    /// Player 2's marker.
    O,
}

impl Marker {
    /// Returns the other player's marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Storage and display character.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Parses a storage character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Marker::X),
            'O' => Some(Marker::O),
            _ => None,
        }
    }

    /// The player number that owns this marker (1 or 2).
    pub fn player_number(self) -> u8 {
        match self {
            Marker::X => 1,
            Marker::O => 2,
        }
    }

    /// The marker owned by a player number.
    pub fn from_player_number(player: u8) -> Option<Self> {
        match player {
            1 => Some(Marker::X),
            2 => Some(Marker::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Storage character: `-`, `X` or `O`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Marked(marker) => marker.symbol(),
        }
    }

    /// Parses a storage character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Cell::Empty),
            other => Marker::from_symbol(other).map(Cell::Marked),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Cells addressed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from rows of cells.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        let (row, col) = pos.coords();
        self.cells[row][col]
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Open positions in move-number order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Writes a marker into a cell. Callers check emptiness first.
    pub(crate) fn place(&mut self, pos: Position, marker: Marker) {
        let (row, col) = pos.coords();
        self.cells[row][col] = Cell::Marked(marker);
    }
}

/// Terminal-condition summary of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A player completed a line.
    Won(Marker),
    /// The board is full with no line.
    Draw,
}

/// Complete game state: the board and whose turn it is.
///
/// The current player number is derived from the current marker, so the two
/// always move in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Marker,
}

impl GameState {
    /// Creates a new game: empty board, X to move, player 1.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Marker::X,
        }
    }

    /// Rebuilds a state from a saved board and turn.
    #[instrument(skip(board))]
    pub fn from_parts(board: Board, current: Marker) -> Self {
        Self { board, current }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker the next move places.
    pub fn current_marker(&self) -> Marker {
        self.current
    }

    /// Player (1 or 2) who moves next.
    pub fn current_player(&self) -> u8 {
        self.current.player_number()
    }

    /// Places the current marker at move number `number` (1-9) and passes the turn.
    ///
    /// Returns the filled position. On error nothing changes, including the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `number` is not 1-9
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker
    #[instrument(skip(self), fields(marker = %self.current))]
    pub fn apply_move(&mut self, number: u8) -> Result<Position, MoveError> {
        let pos = Position::from_number(number).ok_or(MoveError::OutOfRange(number))?;

        if !self.board.is_empty_at(pos) {
            debug!(?pos, "Rejected move onto occupied cell");
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.place(pos, self.current);
        self.current = self.current.opponent();
        debug!(?pos, next = %self.current, "Move applied");
        Ok(pos)
    }

    /// True iff `marker` fills any row, column or diagonal.
    pub fn check_winner(&self, marker: Marker) -> bool {
        rules::check_winner(&self.board, marker)
    }

    /// True iff no empty cells remain.
    ///
    /// A full board may also hold a winning line; check winners first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Win/draw status, checking the marker that moved last before fullness.
    pub fn status(&self) -> GameStatus {
        let last = self.current.opponent();
        if self.check_winner(last) {
            GameStatus::Won(last)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_symbols() {
        for symbol in ['-', 'X', 'O'] {
            let cell = Cell::from_symbol(symbol).expect("valid symbol");
            assert_eq!(cell.symbol(), symbol);
        }
        assert_eq!(Cell::from_symbol('x'), None);
        assert_eq!(Cell::from_symbol(' '), None);
    }

    #[test]
    fn test_marker_player_numbers() {
        assert_eq!(Marker::X.player_number(), 1);
        assert_eq!(Marker::O.player_number(), 2);
        assert_eq!(Marker::from_player_number(2), Some(Marker::O));
        assert_eq!(Marker::from_player_number(3), None);
    }

    #[test]
    fn test_status_prefers_win_on_full_board() {
        // X O X / O X O / O X X  - X completes the main diagonal on the last move
        let x = Cell::Marked(Marker::X);
        let o = Cell::Marked(Marker::O);
        let board = Board::from_rows([[x, o, x], [o, x, o], [o, x, x]]);
        let state = GameState::from_parts(board, Marker::O);
        assert!(state.is_draw());
        assert_eq!(state.status(), GameStatus::Won(Marker::X));
    }

    #[test]
    fn test_empty_positions() {
        let mut state = GameState::new();
        state.apply_move(1).expect("open cell");
        state.apply_move(9).expect("open cell");
        let open = state.board().empty_positions();
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::TopLeft));
        assert!(!open.contains(&Position::BottomRight));
    }
}
