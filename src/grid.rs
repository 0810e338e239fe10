use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::solver::Solution;


/// `(row, column)`, zero-based from the top-left corner.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Traversable.
    Path,
    /// Blocked.
    Wall,
}

impl Cell {
    pub(crate) fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "P" => Some(Cell::Path),
            "W" => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Path => 'P',
            Cell::Wall => 'W',
        }
    }
}

/// A validated maze. Only [`crate::parse`] builds these, so the invariants below always hold:
/// the grid is rectangular and non-empty, and `start`/`end` are in bounds on `Path` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    name: String,
    /// Row-major, `rows * cols` long.
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,

    start: Coord,
    end: Coord,
}

impl Grid {
    pub(crate) fn new(name: String, cells: Vec<Cell>, cols: usize, start: Coord, end: Coord) -> Self {
        debug_assert!(cols > 0 && cells.len() % cols == 0);
        let rows = cells.len() / cols;

        Self { name, cells, rows, cols, start, end }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Coord {
        self.start
    }
    pub fn end(&self) -> Coord {
        self.end
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    pub fn cell(&self, (row, col): Coord) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index((row, col))])
        } else {
            None
        }
    }
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Path)
    }

    #[inline]
    pub(crate) fn index(&self, (row, col): Coord) -> usize {
        row * self.cols + col
    }

    /// Serialize a solved path as the maze name, the move count, then one `row-col` line
    /// per step between `Start` and `End` markers.
    pub fn render_path_summary(&self, solution: &Solution) -> String {
        let mut str = String::new();

        // fmt::Write into a String cannot fail
        let _ = writeln!(str, "{}", self.name);
        let _ = writeln!(str, "Moves: {}", solution.moves());
        str.push_str("Start\n");
        for (row, col) in solution.path() {
            let _ = writeln!(str, "{}-{}", row, col);
        }
        str.push_str("End\n");

        str
    }

    /// Name, endpoints, and the grid with cells comma-separated per row.
    pub fn render_description(&self) -> String {
        let mut str = String::with_capacity(self.rows * self.cols * 2 + self.name.len() + 32);
        let _ = write!(str, "{}", self);
        str
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Start: {}-{}", self.start.0, self.start.1)?;
        writeln!(f, "End: {}-{}", self.end.0, self.end.1)?;

        for row in self.cells.chunks(self.cols) {
            for (x, cell) in row.iter().enumerate() {
                if x > 0 { f.write_char(',')?; }
                f.write_char(cell.symbol())?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}
