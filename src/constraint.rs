//! This module defines the rules of a Futoshiki-augmented Sudoku puzzle.
//!
//! The rules are represented by the
//! [FutoshikiConstraint](struct.FutoshikiConstraint.html), which combines the
//! classic Sudoku requirements (no duplicates in any row, column, or 3x3
//! block) with inequality relations anchored at the thin boundaries between
//! adjacent cells. A horizontal relation compares a cell with its right
//! neighbor, a vertical relation compares a cell with the cell below it.
//!
//! # Boundary indexing
//!
//! Not every gap between adjacent cells can carry a relation: the two gaps
//! per row (and column) that coincide with a 3x3 block edge never do. The
//! remaining six thin boundaries are indexed 0 to 5 and identified by the
//! column of their left cell (respectively the row of their upper cell),
//! which is one of {0, 1, 3, 4, 6, 7}:
//!
//! ```text
//!   column:    0   1   2   3   4   5   6   7   8
//!            ║ · | · | · ║ · | · | · ║ · | · | · ║
//!   boundary:    0   1       2   3       4   5
//! ```
//!
//! This skip pattern is a fixed convention of the puzzle format and is
//! applied by [boundary_index](fn.boundary_index.html).
//!
//! # Relation layouts
//!
//! Puzzle definitions commonly arrive as text in which lines holding `<` and
//! `>` symbols alternate with lines holding `^` and `v` symbols. Such
//! layouts can be read with
//! [FutoshikiConstraint::parse](struct.FutoshikiConstraint.html#method.parse):
//!
//! ```
//! use futoshiki::constraint::{
//!     FutoshikiConstraint,
//!     HorizontalRelation,
//!     VerticalRelation
//! };
//!
//! let constraint = FutoshikiConstraint::parse(
//!     " > <   < <   > <\n\
//!      v ^ v v ^ v ^ ^ v").unwrap();
//!
//! assert_eq!(Some(HorizontalRelation::GreaterThan),
//!     constraint.horizontal(0, 0).unwrap());
//! assert_eq!(Some(VerticalRelation::DecreasingDownward),
//!     constraint.vertical(0, 0).unwrap());
//! ```

use crate::SudokuGrid;
use crate::error::{
    FutoshikiError,
    FutoshikiParseError,
    FutoshikiParseResult,
    FutoshikiResult
};

use serde::{Deserialize, Serialize};

/// The columns (respectively rows) of the left (respectively upper) cell of
/// each thin boundary, indexed by boundary. The gaps after columns 2 and 5
/// are missing as they fall on 3x3 block edges and never carry a relation.
pub const BOUNDARY_POSITIONS: [usize; 6] = [0, 1, 3, 4, 6, 7];

/// Gets the boundary index of the thin boundary whose left (for rows) or
/// upper (for columns) cell is at the given position, or `None` if that gap
/// coincides with a 3x3 block edge or the position is the last cell of its
/// line.
pub fn boundary_index(position: usize) -> Option<usize> {
    BOUNDARY_POSITIONS.iter().position(|&p| p == position)
}

/// An inequality relation between a cell and its right neighbor. The
/// relation is strict, so equal numbers always violate it. (Equal numbers in
/// adjacent cells of the same row are already excluded by the row
/// uniqueness rule, but the relation does not rely on that.)
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum HorizontalRelation {

    /// The left cell must hold a strictly smaller number than the right
    /// cell. Written `<` in layouts.
    LessThan,

    /// The left cell must hold a strictly greater number than the right
    /// cell. Written `>` in layouts.
    GreaterThan
}

impl HorizontalRelation {

    /// The symbol representing this relation in a layout, read left to
    /// right.
    pub fn symbol(self) -> char {
        match self {
            HorizontalRelation::LessThan => '<',
            HorizontalRelation::GreaterThan => '>'
        }
    }

    fn satisfied(self, left: usize, right: usize) -> bool {
        match self {
            HorizontalRelation::LessThan => left < right,
            HorizontalRelation::GreaterThan => left > right
        }
    }
}

/// An inequality relation between a cell and the cell below it. The relation
/// is strict, so equal numbers always violate it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum VerticalRelation {

    /// The upper cell must hold a strictly smaller number than the lower
    /// cell. Written `^` in layouts.
    IncreasingDownward,

    /// The upper cell must hold a strictly greater number than the lower
    /// cell. Written `v` in layouts.
    DecreasingDownward
}

impl VerticalRelation {

    /// The symbol representing this relation in a layout, read top to
    /// bottom.
    pub fn symbol(self) -> char {
        match self {
            VerticalRelation::IncreasingDownward => '^',
            VerticalRelation::DecreasingDownward => 'v'
        }
    }

    fn satisfied(self, upper: usize, lower: usize) -> bool {
        match self {
            VerticalRelation::IncreasingDownward => upper < lower,
            VerticalRelation::DecreasingDownward => upper > lower
        }
    }
}

fn check_number_row(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_column in 0..SudokuGrid::SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

fn check_number_column(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_row in 0..SudokuGrid::SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

fn check_number_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let block_column = (column / 3) * 3;
    let block_row = (row / 3) * 3;

    for other_row in block_row..(block_row + 3) {
        for other_column in block_column..(block_column + 3) {
            // Cells sharing a row or column with the reference cell were
            // already covered by the row and column checks.
            if other_row != row && other_column != column {
                if grid.has_number(other_column, other_row, number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

/// The complete rule set of a Futoshiki-augmented Sudoku: row, column, and
/// 3x3 block uniqueness plus the inequality relations stored in this
/// constraint's two tables. An instance is immutable for the duration of a
/// solve; the solver only reads it.
///
/// Relations against empty neighbors are never evaluated. They are checked
/// once the neighbor receives a number, since
/// [check_number](#method.check_number) is invoked afresh for every proposed
/// placement and examines both sides of every boundary adjacent to the
/// placed cell.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FutoshikiConstraint {
    horizontal: [[Option<HorizontalRelation>; 6]; 9],
    vertical: [[Option<VerticalRelation>; 9]; 6]
}

impl FutoshikiConstraint {

    /// Creates a constraint without any inequality relations. The classic
    /// Sudoku rules still apply.
    pub fn none() -> FutoshikiConstraint {
        FutoshikiConstraint {
            horizontal: [[None; 6]; 9],
            vertical: [[None; 9]; 6]
        }
    }

    /// Parses a relation layout as found in textual puzzle definitions.
    ///
    /// Every line containing `<` or `>` symbols defines the next row of
    /// horizontal relations, the symbols being assigned to boundaries 0 to 5
    /// in order of appearance. Every line containing `^` or `v` symbols
    /// defines the next row of vertical relations analogously, with
    /// boundaries running top to bottom and the symbols being assigned to
    /// columns 0 to 8. All other characters are ignored, lines without
    /// relation symbols are skipped, and rows missing at the end of the
    /// layout remain unconstrained.
    ///
    /// # Errors
    ///
    /// * `FutoshikiParseError::MixedRelationLine` if a line contains both
    /// horizontal and vertical relation symbols.
    /// * `FutoshikiParseError::TooManyRelations` if a line contains more
    /// symbols than its table row has slots (6 horizontal, 9 vertical).
    /// * `FutoshikiParseError::TooManyRelationLines` if the layout contains
    /// more symbol lines than table rows (9 horizontal, 6 vertical).
    pub fn parse(layout: &str) -> FutoshikiParseResult<FutoshikiConstraint> {
        let mut constraint = FutoshikiConstraint::none();
        let mut next_horizontal_row = 0;
        let mut next_vertical_row = 0;

        for line in layout.lines() {
            let horizontal_symbols =
                line.chars().filter(|&c| c == '<' || c == '>').count();
            let vertical_symbols =
                line.chars().filter(|&c| c == '^' || c == 'v').count();

            if horizontal_symbols > 0 && vertical_symbols > 0 {
                return Err(FutoshikiParseError::MixedRelationLine);
            }

            if horizontal_symbols > 0 {
                if next_horizontal_row >= 9 {
                    return Err(FutoshikiParseError::TooManyRelationLines);
                }

                if horizontal_symbols > 6 {
                    return Err(FutoshikiParseError::TooManyRelations);
                }

                let mut boundary = 0;

                for c in line.chars() {
                    let relation = match c {
                        '<' => HorizontalRelation::LessThan,
                        '>' => HorizontalRelation::GreaterThan,
                        _ => continue
                    };

                    constraint.horizontal[next_horizontal_row][boundary] =
                        Some(relation);
                    boundary += 1;
                }

                next_horizontal_row += 1;
            }
            else if vertical_symbols > 0 {
                if next_vertical_row >= 6 {
                    return Err(FutoshikiParseError::TooManyRelationLines);
                }

                if vertical_symbols > 9 {
                    return Err(FutoshikiParseError::TooManyRelations);
                }

                let mut column = 0;

                for c in line.chars() {
                    let relation = match c {
                        '^' => VerticalRelation::IncreasingDownward,
                        'v' => VerticalRelation::DecreasingDownward,
                        _ => continue
                    };

                    constraint.vertical[next_vertical_row][column] =
                        Some(relation);
                    column += 1;
                }

                next_vertical_row += 1;
            }
        }

        Ok(constraint)
    }

    /// Gets the horizontal relation at the given boundary of the given row,
    /// or `None` if that boundary is unconstrained.
    ///
    /// # Errors
    ///
    /// If `row` is not less than 9 or `boundary` is not less than 6. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn horizontal(&self, row: usize, boundary: usize)
            -> FutoshikiResult<Option<HorizontalRelation>> {
        if row >= 9 || boundary >= 6 {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(self.horizontal[row][boundary])
        }
    }

    /// Sets (or removes, with `None`) the horizontal relation at the given
    /// boundary of the given row.
    ///
    /// # Errors
    ///
    /// If `row` is not less than 9 or `boundary` is not less than 6. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn set_horizontal(&mut self, row: usize, boundary: usize,
            relation: Option<HorizontalRelation>) -> FutoshikiResult<()> {
        if row >= 9 || boundary >= 6 {
            return Err(FutoshikiError::OutOfBounds);
        }

        self.horizontal[row][boundary] = relation;
        Ok(())
    }

    /// Gets the vertical relation at the given boundary of the given column,
    /// or `None` if that boundary is unconstrained.
    ///
    /// # Errors
    ///
    /// If `boundary` is not less than 6 or `column` is not less than 9. In
    /// that case, `FutoshikiError::OutOfBounds` is returned.
    pub fn vertical(&self, boundary: usize, column: usize)
            -> FutoshikiResult<Option<VerticalRelation>> {
        if boundary >= 6 || column >= 9 {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(self.vertical[boundary][column])
        }
    }

    /// Sets (or removes, with `None`) the vertical relation at the given
    /// boundary of the given column.
    ///
    /// # Errors
    ///
    /// If `boundary` is not less than 6 or `column` is not less than 9. In
    /// that case, `FutoshikiError::OutOfBounds` is returned.
    pub fn set_vertical(&mut self, boundary: usize, column: usize,
            relation: Option<VerticalRelation>) -> FutoshikiResult<()> {
        if boundary >= 6 || column >= 9 {
            return Err(FutoshikiError::OutOfBounds);
        }

        self.vertical[boundary][column] = relation;
        Ok(())
    }

    /// Gets the horizontal relation between the cell at the given
    /// coordinates and its right neighbor. `Ok(None)` is returned both if
    /// the boundary is unconstrained and if it falls on a 3x3 block edge.
    ///
    /// # Errors
    ///
    /// If `column` is not less than 8 (the last column has no right
    /// neighbor) or `row` is not less than 9. In that case,
    /// `FutoshikiError::OutOfBounds` is returned.
    pub fn horizontal_between(&self, column: usize, row: usize)
            -> FutoshikiResult<Option<HorizontalRelation>> {
        if column >= 8 || row >= 9 {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(boundary_index(column).and_then(|b| self.horizontal[row][b]))
        }
    }

    /// Gets the vertical relation between the cell at the given coordinates
    /// and the cell below it. `Ok(None)` is returned both if the boundary is
    /// unconstrained and if it falls on a 3x3 block edge.
    ///
    /// # Errors
    ///
    /// If `column` is not less than 9 or `row` is not less than 8 (the last
    /// row has no lower neighbor). In that case,
    /// `FutoshikiError::OutOfBounds` is returned.
    pub fn vertical_between(&self, column: usize, row: usize)
            -> FutoshikiResult<Option<VerticalRelation>> {
        if column >= 9 || row >= 8 {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(boundary_index(row).and_then(|b| self.vertical[b][column]))
        }
    }

    fn check_number_horizontal(&self, grid: &SudokuGrid, column: usize,
            row: usize, number: usize) -> bool {
        // Boundary to the right of the checked cell.
        if let Some(boundary) = boundary_index(column) {
            if let Some(relation) = self.horizontal[row][boundary] {
                if let Some(right) =
                        grid.get_cell(column + 1, row).unwrap() {
                    if !relation.satisfied(number, right) {
                        return false;
                    }
                }
            }
        }

        // Boundary to the left of the checked cell.
        if column > 0 {
            if let Some(boundary) = boundary_index(column - 1) {
                if let Some(relation) = self.horizontal[row][boundary] {
                    if let Some(left) =
                            grid.get_cell(column - 1, row).unwrap() {
                        if !relation.satisfied(left, number) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    fn check_number_vertical(&self, grid: &SudokuGrid, column: usize,
            row: usize, number: usize) -> bool {
        // Boundary below the checked cell.
        if let Some(boundary) = boundary_index(row) {
            if let Some(relation) = self.vertical[boundary][column] {
                if let Some(lower) =
                        grid.get_cell(column, row + 1).unwrap() {
                    if !relation.satisfied(number, lower) {
                        return false;
                    }
                }
            }
        }

        // Boundary above the checked cell.
        if row > 0 {
            if let Some(boundary) = boundary_index(row - 1) {
                if let Some(relation) = self.vertical[boundary][column] {
                    if let Some(upper) =
                            grid.get_cell(column, row - 1).unwrap() {
                        if !relation.satisfied(upper, number) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `grid` without violating this
    /// constraint. The checks are applied in order and short-circuit on the
    /// first violation: row uniqueness, column uniqueness, block uniqueness,
    /// horizontal relations, vertical relations. Relations whose other cell
    /// is still empty are not evaluated.
    ///
    /// This function does *not* check whether `number` is actually a valid
    /// cell content (i.e. in the interval [1, 9]). If you require this
    /// guarantee, use `Futoshiki::is_valid_number` instead.
    pub fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        check_number_row(grid, column, row, number) &&
            check_number_column(grid, column, row, number) &&
            check_number_block(grid, column, row, number) &&
            self.check_number_horizontal(grid, column, row, number) &&
            self.check_number_vertical(grid, column, row, number)
    }

    /// Checks whether the cell at the given position in the grid fulfills
    /// the constraint. This is the same as calling
    /// [check_number](#method.check_number) with the same coordinates and
    /// the number which is actually filled in that cell. If the cell is
    /// empty, this function always returns `true`.
    pub fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        if let Some(number) = grid.get_cell(column, row).unwrap() {
            self.check_number(grid, column, row, number)
        }
        else {
            true
        }
    }

    /// Checks whether the given grid matches this constraint, that is, every
    /// cell matches this constraint.
    pub fn check(&self, grid: &SudokuGrid) -> bool {
        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if !self.check_cell(grid, column, row) {
                    return false;
                }
            }
        }

        true
    }
}
