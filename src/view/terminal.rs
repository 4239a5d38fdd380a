use std::io::{self, Write};

use super::{GameView, Marks, StatusLine};
use crate::game::Board;

const ROW_SEPARATOR: &str = "---+---+---";

/// Draws the game as plain text into any writer.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
    marks: Marks,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, marks: Marks) -> Self {
        Self { out, marks }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameView for TerminalView<W> {
    fn render_board(&mut self, board: &Board) -> io::Result<()> {
        for (i, row) in board.iter().enumerate() {
            if i > 0 {
                writeln!(self.out, "{ROW_SEPARATOR}")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|piece| format!(" {} ", self.marks.mark(*piece)))
                .collect();
            writeln!(self.out, "{}", cells.join("|"))?;
        }
        self.out.flush()
    }

    fn render_status(&mut self, status: StatusLine) -> io::Result<()> {
        writeln!(self.out, "{status}")?;
        self.out.flush()
    }
}
