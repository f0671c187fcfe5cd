//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids or constraints, see
/// [FutoshikiParseError](enum.FutoshikiParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum FutoshikiError {

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row, or boundary
    /// index) lie outside the grid or constraint table in question.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, FutoshikiError>`.
pub type FutoshikiResult<V> = Result<V, FutoshikiError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](../struct.SudokuGrid.html) code or a
/// [FutoshikiConstraint](../constraint/struct.FutoshikiConstraint.html)
/// layout.
#[derive(Debug, Eq, PartialEq)]
pub enum FutoshikiParseError {

    /// Indicates that the number of cells (which are separated by commas) in
    /// a grid code is not 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries of a grid code could not be
    /// parsed as a number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber,

    /// Indicates that a line of a constraint layout contains both horizontal
    /// (`<`, `>`) and vertical (`^`, `v`) relation symbols.
    MixedRelationLine,

    /// Indicates that a line of a constraint layout contains more relation
    /// symbols than there are boundaries in the corresponding table row (6
    /// horizontal, 9 vertical).
    TooManyRelations,

    /// Indicates that a constraint layout contains more lines with relation
    /// symbols than there are table rows (9 horizontal, 6 vertical).
    TooManyRelationLines
}

impl From<ParseIntError> for FutoshikiParseError {
    fn from(_: ParseIntError) -> Self {
        FutoshikiParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, FutoshikiParseError>`.
pub type FutoshikiParseResult<V> = Result<V, FutoshikiParseError>;
