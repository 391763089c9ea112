//! Fixed mapping between move numbers (1-9) and board coordinates.

use tracing::instrument;

/// A cell address on the board, numbered 1-9 left-to-right, top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (move 1)
    TopLeft,
    /// Top-center (move 2)
    TopCenter,
    /// Top-right (move 3)
    TopRight,
    /// Middle-left (move 4)
    MiddleLeft,
    /// Center (move 5)
    Center,
    /// Middle-right (move 6)
    MiddleRight,
    /// Bottom-left (move 7)
    BottomLeft,
    /// Bottom-center (move 8)
    BottomCenter,
    /// Bottom-right (move 9)
    BottomRight,
}

/// Row/column for each position, indexed by `number() - 1`.
const COORDS: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

impl Position {
    /// All 9 positions in move-number order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a move number. Returns `None` outside 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// The move number (1-9) a player types to pick this cell.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based `(row, col)` of this cell.
    pub fn coords(self) -> (usize, usize) {
        COORDS[self as usize]
    }

    /// Creates a position from zero-based coordinates.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self::ALL[row * 3 + col])
        } else {
            None
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}
