// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a solver for Futoshiki-augmented Sudoku: a 9x9 grid
//! that must satisfy the standard Sudoku rules (no duplicates in any row,
//! column, or 3x3 block) and additionally a set of inequality relations
//! between horizontally and vertically adjacent cells. It supports the
//! following key features:
//!
//! * Parsing and printing grids and relation layouts
//! * Checking validity of partial grids, single cells, and proposed numbers
//! * Solving puzzles with a deterministic backtracking search
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code and
//! [FutoshikiConstraint::parse](constraint::FutoshikiConstraint::parse) for
//! the relation layout format.
//!
//! ```
//! use futoshiki::SudokuGrid;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 2).unwrap();
//! grid.set_cell(4, 0, 7).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A [Futoshiki] combines the numbers (stored in a [SudokuGrid]) with a
//! [FutoshikiConstraint](constraint::FutoshikiConstraint) holding the
//! inequality relations. It is possible to check the entire grid, individual
//! cells, or potential changes to individual cells that do not require
//! changing the puzzle's state.
//!
//! ```
//! use futoshiki::Futoshiki;
//! use futoshiki::constraint::{FutoshikiConstraint, HorizontalRelation};
//!
//! let mut constraint = FutoshikiConstraint::none();
//! constraint.set_horizontal(0, 0, Some(HorizontalRelation::GreaterThan))
//!     .unwrap();
//! let mut futoshiki = Futoshiki::new_empty(constraint);
//!
//! // A 3 left of a 5 violates the "greater than" relation between them.
//! futoshiki.grid_mut().set_cell(0, 0, 3).unwrap();
//! futoshiki.grid_mut().set_cell(1, 0, 5).unwrap();
//! assert!(!futoshiki.is_valid_cell(0, 0).unwrap());
//! ```
//!
//! # Solving puzzles
//!
//! The [Solver](solver::Solver) trait describes structs that attempt to
//! solve a puzzle. The provided implementation is the
//! [BacktrackingSolver](solver::BacktrackingSolver), an exhaustive
//! depth-first search that reports the first solution it finds, or
//! [Solution::Impossible](solver::Solution) if there is none. Its traversal
//! order is deterministic, so the same puzzle always yields the same
//! solution grid.
//!
//! ```
//! use futoshiki::Futoshiki;
//! use futoshiki::constraint::{FutoshikiConstraint, HorizontalRelation};
//! use futoshiki::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let mut constraint = FutoshikiConstraint::none();
//! constraint.set_horizontal(0, 0, Some(HorizontalRelation::LessThan))
//!     .unwrap();
//! let futoshiki = Futoshiki::new_empty(constraint);
//!
//! match BacktrackingSolver.solve(&futoshiki) {
//!     Solution::Solved(grid) => {
//!         assert!(futoshiki.is_valid_solution(&grid));
//!         assert!(grid.get_cell(0, 0).unwrap()
//!             < grid.get_cell(1, 0).unwrap());
//!     },
//!     Solution::Impossible => panic!("solveable puzzle marked impossible")
//! }
//! ```
//!
//! # Note regarding performance
//!
//! The backtracking search has exponential worst-case runtime. It is
//! strongly recommended to use at least `opt-level = 2`, even in tests that
//! solve puzzles.

pub mod constraint;
pub mod error;
pub mod solver;

use constraint::FutoshikiConstraint;
use error::{
    FutoshikiError,
    FutoshikiParseError,
    FutoshikiParseResult,
    FutoshikiResult
};

use std::fmt::{self, Display, Formatter};

fn index(column: usize, row: usize) -> usize {
    row * SudokuGrid::SIZE + column
}

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a number from
/// 1 to 9. The grid itself performs no rule checking, see
/// [FutoshikiConstraint](constraint::FutoshikiConstraint) and [Futoshiki]
/// for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<usize>; 81]
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: impl Fn(usize) -> char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let mut result = String::new();

    for x in 0..SudokuGrid::SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % 3 == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep(x));
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', |_| '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(segment: impl Fn(usize) -> char) -> String {
    line('╟', '╫', |_| '┼', segment, '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', |_| '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', |_| '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize,
        thin_sep: impl Fn(usize) -> char) -> String {
    line('║', '║', thin_sep, |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

fn fmt_rows(f: &mut Formatter<'_>, content: impl Fn(usize) -> String,
        thin_separator: impl Fn(usize) -> String) -> fmt::Result {
    for y in 0..SudokuGrid::SIZE {
        if y == 0 {
            f.write_str(top_row().as_str())?;
        }
        else if y % 3 == 0 {
            f.write_str(thick_separator_line().as_str())?;
        }
        else {
            f.write_str(thin_separator(y).as_str())?;
        }

        f.write_str(content(y).as_str())?;
    }

    f.write_str(bottom_row().as_str())
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_rows(f,
            |y| content_row(self, y, |_| '│'),
            |_| thin_separator_line(|_| '─'))
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// The number of rows and columns of the grid.
    pub const SIZE: usize = 9;

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; 81]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a number from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// * `FutoshikiParseError::WrongNumberOfCells` if the number of entries
    /// is not 81.
    /// * `FutoshikiParseError::NumberFormatError` if a non-empty entry
    /// cannot be parsed as a number.
    /// * `FutoshikiParseError::InvalidNumber` if an entry is 0 or greater
    /// than 9.
    pub fn parse(code: &str) -> FutoshikiParseResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();
        let numbers: Vec<&str> = code.split(',').collect();

        if numbers.len() != 81 {
            return Err(FutoshikiParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > SudokuGrid::SIZE {
                return Err(FutoshikiParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change.
    ///
    /// ```
    /// use futoshiki::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FutoshikiError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> FutoshikiResult<Option<usize>> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `FutoshikiError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten. No rule checking is performed here; that is the
    /// responsibility of the caller (see `Futoshiki::is_valid_number`).
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `FutoshikiError::OutOfBounds` if either `column` or `row` are not
    /// in the specified range.
    /// * `FutoshikiError::InvalidNumber` if `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(FutoshikiError::OutOfBounds);
        }

        if number == 0 || number > SudokuGrid::SIZE {
            return Err(FutoshikiError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way. This is the backtracking primitive
    /// of the solver.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `FutoshikiError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> FutoshikiResult<()> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            return Err(FutoshikiError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Finds the first empty cell in row-major order, that is, row 0 is
    /// scanned left to right, then row 1, and so on. Returns its
    /// `(column, row)` coordinates, or `None` if the grid is full.
    ///
    /// The scan order determines the traversal order of the backtracking
    /// solver and must not be changed, otherwise solving the same puzzle
    /// twice could yield different solutions.
    pub fn find_next_empty(&self) -> Option<(usize, usize)> {
        for row in 0..SudokuGrid::SIZE {
            for column in 0..SudokuGrid::SIZE {
                if self.cells[index(column, row)].is_none() {
                    return Some((column, row));
                }
            }
        }

        None
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(_) => self_cell == other_cell,
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

/// A Futoshiki-augmented Sudoku puzzle: a [SudokuGrid] of numbers together
/// with the [FutoshikiConstraint](constraint::FutoshikiConstraint) the
/// numbers have to fulfill. The numbers may or may not fulfill the
/// constraint, but there is a method to check it.
///
/// There is no guarantee that the puzzle is solveable, however the
/// [solver] module offers a way to check that.
#[derive(Clone)]
pub struct Futoshiki {
    grid: SudokuGrid,
    constraint: FutoshikiConstraint
}

impl Futoshiki {

    /// Creates a new puzzle with the provided constraint and an empty grid.
    pub fn new_empty(constraint: FutoshikiConstraint) -> Futoshiki {
        Futoshiki {
            grid: SudokuGrid::new(),
            constraint
        }
    }

    /// Creates a new puzzle with the provided constraint and a given grid,
    /// which may already contain some numbers ("givens"). Note that it is
    /// *not* checked whether the given grid fulfills the constraint - it is
    /// perfectly legal to create an invalid puzzle here.
    pub fn new_with_grid(grid: SudokuGrid, constraint: FutoshikiConstraint)
            -> Futoshiki {
        Futoshiki {
            grid,
            constraint
        }
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a puzzle with the given constraint. Note that it
    /// is not required that the code matches the constraint. It is perfectly
    /// legal to parse an invalid puzzle.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further
    /// information.
    pub fn parse(code: &str, constraint: FutoshikiConstraint)
            -> FutoshikiParseResult<Futoshiki> {
        Ok(Futoshiki::new_with_grid(SudokuGrid::parse(code)?, constraint))
    }

    /// Gets a reference to the [SudokuGrid] of this puzzle.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [SudokuGrid] of this puzzle.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the
    /// [FutoshikiConstraint](constraint::FutoshikiConstraint) of this
    /// puzzle.
    pub fn constraint(&self) -> &FutoshikiConstraint {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the
    /// constraint. That is, if the specified cell violates the constraint,
    /// `false` is returned, and `true` otherwise. Empty cells are always
    /// valid.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not less than 9. In that case,
    /// `FutoshikiError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> FutoshikiResult<bool> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(FutoshikiError::OutOfBounds)
        }
        else {
            Ok(self.constraint.check_cell(&self.grid, column, row))
        }
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location. That is, if the number violated the constraint,
    /// `false` is returned, and `true` otherwise. The grid is not modified.
    ///
    /// # Errors
    ///
    /// * `FutoshikiError::OutOfBounds` if either `column` or `row` are not
    /// less than 9.
    /// * `FutoshikiError::InvalidNumber` if `number` is 0 or greater than 9.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> FutoshikiResult<bool> {
        if column >= SudokuGrid::SIZE || row >= SudokuGrid::SIZE {
            Err(FutoshikiError::OutOfBounds)
        }
        else if number == 0 || number > SudokuGrid::SIZE {
            Err(FutoshikiError::InvalidNumber)
        }
        else {
            Ok(self.constraint.check_number(&self.grid, column, row, number))
        }
    }

    /// Indicates whether the given [SudokuGrid] is a valid solution to this
    /// puzzle. That is the case if all numbers from this puzzle's grid can
    /// be found in the `solution`, it matches the constraint of this puzzle,
    /// and it is full.
    pub fn is_valid_solution(&self, solution: &SudokuGrid) -> bool {
        self.grid.is_subset(solution) &&
            self.constraint.check(solution) &&
            solution.is_full()
    }
}

impl Display for Futoshiki {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let constraint = &self.constraint;
        let horizontal_sep = |y: usize| move |x: usize| {
            match constraint.horizontal_between(x - 1, y).unwrap() {
                Some(relation) => relation.symbol(),
                None => '│'
            }
        };
        let vertical_seg = |y: usize| move |x: usize| {
            match constraint.vertical_between(x, y - 1).unwrap() {
                Some(relation) => relation.symbol(),
                None => '─'
            }
        };

        fmt_rows(f,
            |y| content_row(&self.grid, y, horizontal_sep(y)),
            |y| thin_separator_line(vertical_seg(y)))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::{HorizontalRelation, VerticalRelation};

    fn empty_code() -> String {
        ",".repeat(80)
    }

    #[test]
    fn parse_ok() {
        let code = format!("1,,3,{}", &",".repeat(77));

        let grid = SudokuGrid::parse(&code).unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(2, 0).unwrap());
        assert_eq!(None, grid.get_cell(3, 0).unwrap());
        assert_eq!(78, grid.cells().iter().filter(|c| c.is_none()).count());
    }

    #[test]
    fn parse_ignores_whitespace() {
        let code = format!("1, 2 ,3,{}", &",".repeat(77));
        let grid = SudokuGrid::parse(&code).unwrap();

        assert_eq!(Some(2), grid.get_cell(1, 0).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(FutoshikiParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(79)));
        assert_eq!(Err(FutoshikiParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(81)));
    }

    #[test]
    fn parse_number_format_error() {
        let code = format!("1,#,{}", &",".repeat(78));
        assert_eq!(Err(FutoshikiParseError::NumberFormatError),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn parse_invalid_number() {
        let code = format!("0,{}", &",".repeat(79));
        assert_eq!(Err(FutoshikiParseError::InvalidNumber),
            SudokuGrid::parse(&code));

        let code = format!("10,{}", &",".repeat(79));
        assert_eq!(Err(FutoshikiParseError::InvalidNumber),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();

        assert_eq!(empty_code(), grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(8, 8, 9).unwrap();
        grid.set_cell(4, 2, 5).unwrap();

        let parsed =
            SudokuGrid::parse(grid.to_parseable_string().as_str()).unwrap();
        assert_eq!(grid, parsed);
    }

    #[test]
    fn cell_accessors() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Ok(None), grid.get_cell(3, 4));
        grid.set_cell(3, 4, 6).unwrap();
        assert_eq!(Ok(Some(6)), grid.get_cell(3, 4));
        assert_eq!(Ok(true), grid.has_number(3, 4, 6));
        assert_eq!(Ok(false), grid.has_number(3, 4, 5));
        assert_eq!(Ok(false), grid.has_number(4, 3, 6));

        grid.clear_cell(3, 4).unwrap();
        assert_eq!(Ok(None), grid.get_cell(3, 4));

        // Clearing an empty cell leaves it empty.
        grid.clear_cell(3, 4).unwrap();
        assert_eq!(Ok(None), grid.get_cell(3, 4));
    }

    #[test]
    fn cell_accessors_out_of_bounds() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(FutoshikiError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(FutoshikiError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(FutoshikiError::OutOfBounds), grid.set_cell(9, 0, 1));
        assert_eq!(Err(FutoshikiError::OutOfBounds), grid.clear_cell(0, 9));
        assert_eq!(Err(FutoshikiError::OutOfBounds),
            grid.has_number(9, 9, 1));
    }

    #[test]
    fn set_cell_invalid_number() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(FutoshikiError::InvalidNumber),
            grid.set_cell(0, 0, 0));
        assert_eq!(Err(FutoshikiError::InvalidNumber),
            grid.set_cell(0, 0, 10));
    }

    #[test]
    fn find_next_empty_row_major() {
        let mut grid = SudokuGrid::new();
        assert_eq!(Some((0, 0)), grid.find_next_empty());

        grid.set_cell(0, 0, 1).unwrap();
        assert_eq!(Some((1, 0)), grid.find_next_empty());

        // An empty cell in a later row does not win against one further
        // right in an earlier row.
        for column in 1..SudokuGrid::SIZE {
            grid.set_cell(column, 0, ((column + 1) % 9) + 1).unwrap();
        }

        assert_eq!(Some((0, 1)), grid.find_next_empty());
    }

    #[test]
    fn find_next_empty_full_grid() {
        let grid = SudokuGrid::parse(&"1,".repeat(81)[..161]).unwrap();
        assert_eq!(None, grid.find_next_empty());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let mut grid = SudokuGrid::new();

        assert_eq!(0, grid.count_clues());
        assert!(grid.is_empty());
        assert!(!grid.is_full());

        grid.set_cell(2, 7, 4).unwrap();
        grid.set_cell(6, 1, 8).unwrap();

        assert_eq!(2, grid.count_clues());
        assert!(!grid.is_empty());
        assert!(!grid.is_full());
    }

    #[test]
    fn subset_relations() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        let mut larger = partial.clone();
        larger.set_cell(1, 0, 2).unwrap();
        let mut unrelated = SudokuGrid::new();
        unrelated.set_cell(0, 0, 2).unwrap();

        assert!(empty.is_subset(&partial));
        assert!(partial.is_subset(&larger));
        assert!(larger.is_superset(&partial));
        assert!(!larger.is_subset(&partial));
        assert!(!partial.is_subset(&unrelated));
        assert!(!unrelated.is_subset(&partial));
        assert!(partial.is_subset(&partial));
    }

    #[test]
    fn futoshiki_validity_checks() {
        let mut constraint = FutoshikiConstraint::none();
        constraint.set_vertical(0, 0,
            Some(VerticalRelation::IncreasingDownward)).unwrap();
        let mut futoshiki = Futoshiki::new_empty(constraint);

        assert!(futoshiki.is_valid());
        assert!(futoshiki.is_valid_number(0, 0, 5).unwrap());

        futoshiki.grid_mut().set_cell(0, 0, 5).unwrap();

        // (0, 0) < (0, 1) is required, so a 3 below the 5 is invalid.
        assert!(!futoshiki.is_valid_number(0, 1, 3).unwrap());
        assert!(futoshiki.is_valid_number(0, 1, 6).unwrap());

        futoshiki.grid_mut().set_cell(0, 1, 3).unwrap();

        assert!(!futoshiki.is_valid());
        assert!(!futoshiki.is_valid_cell(0, 1).unwrap());
        assert!(futoshiki.is_valid_cell(5, 5).unwrap());
    }

    #[test]
    fn futoshiki_validity_errors() {
        let futoshiki = Futoshiki::new_empty(FutoshikiConstraint::none());

        assert_eq!(Err(FutoshikiError::OutOfBounds),
            futoshiki.is_valid_cell(9, 0));
        assert_eq!(Err(FutoshikiError::OutOfBounds),
            futoshiki.is_valid_number(0, 9, 1));
        assert_eq!(Err(FutoshikiError::InvalidNumber),
            futoshiki.is_valid_number(0, 0, 0));
        assert_eq!(Err(FutoshikiError::InvalidNumber),
            futoshiki.is_valid_number(0, 0, 10));
    }

    #[test]
    fn grid_display_contains_numbers() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 4).unwrap();

        let displayed = format!("{}", grid);

        assert!(displayed.contains("║ 4 │"));
        assert!(displayed.starts_with('╔'));
        assert!(displayed.ends_with('╝'));
    }

    #[test]
    fn futoshiki_display_contains_relations() {
        let mut constraint = FutoshikiConstraint::none();
        constraint.set_horizontal(0, 0, Some(HorizontalRelation::LessThan))
            .unwrap();
        constraint.set_vertical(0, 0,
            Some(VerticalRelation::DecreasingDownward)).unwrap();
        let mut futoshiki = Futoshiki::new_empty(constraint);
        futoshiki.grid_mut().set_cell(0, 0, 1).unwrap();
        futoshiki.grid_mut().set_cell(1, 0, 2).unwrap();

        let displayed = format!("{}", futoshiki);

        assert!(displayed.contains("║ 1 < 2 │"));
        assert!(displayed.contains("╟─v─┼"));
    }
}
