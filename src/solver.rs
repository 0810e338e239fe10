use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::{Endpoint, MazeError};
use crate::grid::{Cell, Coord, Grid};


/// Up, down, left, right. Equal-length paths are tie-broken by this order.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Outcome of a search: the cells from start to end inclusive, or empty if the end is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Coord>,
}

impl Solution {
    pub fn path(&self) -> &[Coord] {
        &self.path
    }
    pub fn into_path(self) -> Vec<Coord> {
        self.path
    }
    /// Number of cells on the path, both endpoints included. Zero when there is no path.
    pub fn moves(&self) -> usize {
        self.path.len()
    }
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Check whether the path is a walk from `grid`'s start to its end over open cells,
    /// one orthogonal unit step at a time. An empty solution is trivially consistent.
    pub fn verify(&self, grid: &Grid) -> bool {
        let (first, last) = match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return true,
        };
        if first != grid.start() || last != grid.end() {
            return false;
        }

        if !self.path.iter().all(|&coord| grid.is_open(coord)) {
            return false;
        }

        self.path.windows(2).all(|step| {
            step[0].0.abs_diff(step[1].0) + step[0].1.abs_diff(step[1].1) == 1
        })
    }
}

/// Parses and validates a maze description, returning a Grid on success.
///
/// The first line is the name, the next two are `<label>:<row>-<col>` for the start and end,
/// and every remaining line is a comma-separated row of `P` (path) and `W` (wall).
/// Checks run in that order and the first failure is returned.
pub fn parse(raw: &str) -> Result<Grid, MazeError> {
    let mut lines = raw.lines();

    let name = lines.next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(MazeError::MissingName)?;

    let start = parse_point(lines.next(), Endpoint::Start)?;
    let end = parse_point(lines.next(), Endpoint::End)?;

    let mut rows: Vec<&str> = lines.collect();
    while rows.last().map_or(false, |line| line.trim().is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(MazeError::EmptyGrid);
    }

    let cols = rows[0].split(',').count();
    let mut cells = Vec::with_capacity(rows.len() * cols);

    for (i, line) in rows.iter().enumerate() {
        // header takes the first three lines
        let line_no = i + 4;

        let found = line.split(',').count();
        if found != cols {
            return Err(MazeError::NonRectangularGrid { line: line_no, expected: cols, found });
        }

        for (x, token) in line.split(',').enumerate() {
            let cell = Cell::from_symbol(token.trim()).ok_or_else(|| MazeError::InvalidCellSymbol {
                line: line_no,
                column: x + 1,
                symbol: token.trim().to_string(),
            })?;
            cells.push(cell);
        }
    }

    let rows = rows.len();
    debug!("parsed maze {:?}: {}x{}, start {:?}, end {:?}", name, rows, cols, start, end);

    let start = locate(start, rows, cols).ok_or(MazeError::StartOutOfBounds {
        row: start.0, col: start.1, rows, cols,
    })?;
    let end = locate(end, rows, cols).ok_or(MazeError::EndOutOfBounds {
        row: end.0, col: end.1, rows, cols,
    })?;

    if cells[start.0 * cols + start.1] != Cell::Path {
        return Err(MazeError::StartNotOnPath { row: start.0, col: start.1 });
    }
    if cells[end.0 * cols + end.1] != Cell::Path {
        return Err(MazeError::EndNotOnPath { row: end.0, col: end.1 });
    }

    Ok(Grid::new(name.to_string(), cells, cols, start, end))
}

fn parse_point(line: Option<&str>, endpoint: Endpoint) -> Result<(i64, i64), MazeError> {
    let malformed = |line: &str| match endpoint {
        Endpoint::Start => MazeError::MalformedStart { line: line.to_string() },
        Endpoint::End => MazeError::MalformedEnd { line: line.to_string() },
    };

    let line = line.ok_or_else(|| malformed(""))?;

    let (_label, coords) = line.split_once(':')
        .filter(|(_, coords)| !coords.contains(':'))
        .ok_or_else(|| malformed(line))?;
    let (row, col) = coords.trim().split_once('-')
        .filter(|(_, col)| !col.contains('-'))
        .ok_or_else(|| malformed(line))?;

    let integer = |value: &str| value.trim().parse::<i64>().map_err(|_| MazeError::NonIntegerCoordinate {
        endpoint,
        value: value.trim().to_string(),
    });

    Ok((integer(row)?, integer(col)?))
}

fn locate((row, col): (i64, i64), rows: usize, cols: usize) -> Option<Coord> {
    let row = usize::try_from(row).ok().filter(|&row| row < rows)?;
    let col = usize::try_from(col).ok().filter(|&col| col < cols)?;
    Some((row, col))
}

/// Breadth-first search from the grid's start to its end.
///
/// Returns the shortest path, or an empty solution if the end is unreachable.
/// Among equally short paths, the one discovered first by expanding up, down, left, right wins.
pub fn solve(grid: &Grid) -> Solution {
    let (start, end) = (grid.start(), grid.end());

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut prev = vec![(usize::MAX, usize::MAX); grid.rows() * grid.cols()];

    let mut queue = VecDeque::new();
    queue.push_back(start);
    visited[grid.index(start)] = true;

    let mut found = false;
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == end {
            found = true;
            break;
        }
        expanded += 1;

        for (dr, dc) in DIRECTIONS {
            let next = match (current.0.checked_add_signed(dr), current.1.checked_add_signed(dc)) {
                (Some(row), Some(col)) => (row, col),
                _ => continue,
            };

            // is_open rejects anything past the bottom/right edges
            if grid.is_open(next) && !visited[grid.index(next)] {
                visited[grid.index(next)] = true;
                prev[grid.index(next)] = current;
                queue.push_back(next);
            }
        }
    }
    trace!("search expanded {} cells", expanded);

    if !found {
        debug!("maze {:?}: no path from {:?} to {:?}", grid.name(), start, end);
        return Solution::default();
    }

    let mut path = Vec::new();
    let mut at = end;
    while at != start {
        path.push(at);
        at = prev[grid.index(at)];
    }
    path.push(start);
    path.reverse();

    debug!("maze {:?}: found path of {} moves", grid.name(), path.len());
    Solution { path }
}

/// Render the path summary for `grid`, failing if no solution has been computed.
///
/// A solution with no path renders as zero moves; only a missing solution is an error.
pub fn render(grid: &Grid, solution: Option<&Solution>) -> Result<String, MazeError> {
    let solution = solution.ok_or(MazeError::NotSolved)?;
    Ok(grid.render_path_summary(solution))
}

/// Holds at most one loaded maze and the result of its latest search.
///
/// `solution` is `None` until [`Solver::solve`] runs, which keeps "never solved" apart from
/// "solved, no path".
#[derive(Debug, Clone, Default)]
pub struct Solver {
    grid: Option<Grid>,
    solution: Option<Solution>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` and make it the current maze, discarding any previous solution.
    ///
    /// On error the previously loaded maze and its solution are left untouched.
    pub fn load(&mut self, raw: &str) -> Result<&Grid, MazeError> {
        let grid = parse(raw)?;
        self.solution = None;
        Ok(self.grid.insert(grid))
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Search the loaded maze, replacing any earlier solution.
    pub fn solve(&mut self) -> Result<&Solution, MazeError> {
        let grid = self.grid.as_ref().ok_or(MazeError::NoGrid)?;
        Ok(self.solution.insert(solve(grid)))
    }

    pub fn render(&self) -> Result<String, MazeError> {
        let grid = self.grid.as_ref().ok_or(MazeError::NoGrid)?;
        render(grid, self.solution.as_ref())
    }
}
