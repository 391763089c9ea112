//! Text rendering of the board and markers.

use crossterm::style::{Color, Stylize, style};
use resumable_tictactoe::{Board, Cell, Marker};

const SEPARATOR: &str = "   -----------";

/// Formats game output for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer, with or without terminal colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A marker symbol, blue for X and red for O when colored.
    pub fn marker(&self, marker: Marker) -> String {
        if !self.color {
            return marker.symbol().to_string();
        }
        let color = match marker {
            Marker::X => Color::Blue,
            Marker::O => Color::Red,
        };
        style(marker.symbol()).with(color).to_string()
    }

    fn cell(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => " ".to_string(),
            Cell::Marked(marker) => self.marker(marker),
        }
    }

    /// Greeting shown once per session.
    pub fn banner(&self) -> String {
        format!(
            "Welcome to Tic Tac Toe!\nPlayer 1: {}\nPlayer 2: {}\n\n",
            self.marker(Marker::X),
            self.marker(Marker::O)
        )
    }

    /// The position guide followed by the current board.
    pub fn board(&self, board: &Board) -> String {
        let mut out = String::from("\n   TIC TAC TOE\n   Positions:\n");
        for row in 0..3u8 {
            let first = row * 3 + 1;
            out.push_str(&format!("    {} | {} | {}\n", first, first + 1, first + 2));
            if row < 2 {
                out.push_str(SEPARATOR);
                out.push('\n');
            }
        }

        out.push_str("\n   Game Board:\n");
        for (idx, row) in board.rows().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|cell| self.cell(*cell)).collect();
            out.push_str("    ");
            out.push_str(&cells.join(" | "));
            out.push('\n');
            if idx < 2 {
                out.push_str(SEPARATOR);
                out.push('\n');
            }
        }
        out.push('\n');
        out
    }
}
