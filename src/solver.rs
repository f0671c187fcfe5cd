//! This module contains the logic for solving Futoshiki-augmented Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation.

use crate::{Futoshiki, SudokuGrid};

/// The outcome of a solve attempt. There is exactly one modeled failure
/// kind: the search exhausted all branches without reaching a fully filled,
/// constraint-satisfying grid. This is an ordinary result to be checked by
/// the caller, not an exceptional condition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the puzzle is not solveable at all.
    Impossible,

    /// Indicates that the solver found a solution, which is wrapped in this
    /// instance. The puzzle may have further solutions; this is the first
    /// one reached by the solver's traversal order.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Futoshiki-augmented
/// Sudoku puzzles. Implementers decide how the search is organized, but the
/// result must be reproducible: solving the same puzzle twice must yield the
/// same [Solution](enum.Solution.html).
pub trait Solver {

    /// Solves, or attempts to solve, the provided puzzle. If no assignment
    /// of the empty cells satisfies the puzzle's constraint, implementers
    /// shall return `Solution::Impossible`.
    fn solve(&self, futoshiki: &Futoshiki) -> Solution;
}

/// A [Solver](trait.Solver.html) which solves puzzles by recursively testing
/// all valid numbers for each empty cell, in a fixed order: empty cells are
/// filled in row-major order (see `SudokuGrid::find_next_empty`) and
/// candidate numbers are tried in ascending order. Placements that violate
/// the constraint are pruned immediately; a placement from which the
/// remainder of the grid cannot be completed is undone (backtracking) and
/// the next candidate is tried.
///
/// Both orders are deterministic, so the first solution found - and thereby
/// the output - is the same on every run. The worst-case runtime is
/// exponential, i.e. it may be very slow if the puzzle has many missing
/// numbers and few constraints that prune the search.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(futoshiki: &mut Futoshiki) -> bool {
        let (column, row) = match futoshiki.grid().find_next_empty() {
            Some(coordinates) => coordinates,
            None => return true
        };

        for number in 1..=SudokuGrid::SIZE {
            if futoshiki.is_valid_number(column, row, number).unwrap() {
                futoshiki.grid_mut().set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_rec(futoshiki) {
                    return true;
                }

                futoshiki.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, futoshiki: &Futoshiki) -> Solution {
        let mut clone = futoshiki.clone();

        if BacktrackingSolver::solve_rec(&mut clone) {
            Solution::Solved(clone.grid().clone())
        }
        else {
            Solution::Impossible
        }
    }
}
