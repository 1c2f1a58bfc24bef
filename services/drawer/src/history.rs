//! History grid: every pool number laid out ten per row, drawn ones marked.

use serde::Serialize;
use shared::HISTORY_GRID_COLUMNS;
use std::fmt;

use crate::session::DrawSession;

pub const HISTORY_TITLE: &str = "Drawn numbers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryCell {
    pub number: u32,
    pub row: u32,
    pub column: u32,
    pub drawn: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryGrid {
    cells: Vec<HistoryCell>,
}

impl HistoryGrid {
    pub fn from_session(session: &DrawSession) -> Self {
        let min = session.range().min;
        let cells = session
            .pool()
            .iter()
            .map(|&number| {
                let offset = number - min;
                HistoryCell {
                    number,
                    row: offset / HISTORY_GRID_COLUMNS,
                    column: offset % HISTORY_GRID_COLUMNS,
                    drawn: session.is_drawn(number),
                }
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[HistoryCell] {
        &self.cells
    }

    pub fn rows(&self) -> u32 {
        self.cells.last().map_or(0, |c| c.row + 1)
    }

    pub fn drawn_count(&self) -> usize {
        self.cells.iter().filter(|c| c.drawn).count()
    }
}

impl fmt::Display for HistoryGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HISTORY_TITLE}")?;
        for row in self.cells.chunk_by(|a, b| a.row == b.row) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    if cell.drawn {
                        format!("[{:>2}]", cell.number)
                    } else {
                        format!(" {:>2} ", cell.number)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
