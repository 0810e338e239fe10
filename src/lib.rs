//! Parse comma-separated grid mazes, find the shortest path with breadth-first search,
//! and render the result as text.
//!
//! ```
//! let grid = maze_solver::parse("A\nS:0-0\nE:0-2\nP,P,P\n").unwrap();
//! let solution = maze_solver::solve(&grid);
//! assert_eq!(grid.render_path_summary(&solution), "A\nMoves: 3\nStart\n0-0\n0-1\n0-2\nEnd\n");
//! ```

#![no_std]

extern crate alloc;

mod error;
mod grid;
mod solver;

pub use error::{Endpoint, MazeError};
pub use grid::{Cell, Coord, Grid};
pub use solver::{parse, render, solve, Solution, Solver};
