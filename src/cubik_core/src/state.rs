//! The facelet array and its solver-facing encoding.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::Face;

/// Nine stickers per face, six faces.
pub const FACELET_COUNT: usize = 54;

/// Why a cube coloring was rejected. The engine only ever returns these;
/// presenting them is the caller's job.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a cube is encoded as exactly 54 facelets, got {0}")]
    WrongLength(usize),
    #[error("unrecognized facelet symbol `{0}`")]
    UnknownColor(char),
    #[error("color {color} appears {count} times, expected 9")]
    WrongColorCount { color: Face, count: usize },
}

/// The full sticker coloring of a cube.
///
/// Stored flat: six blocks of nine in [`Face::ORDER`], each block row-major
/// with row 0 nearest the face's own "up" neighbor. A `CubeState` always has
/// valid shape; whether the coloring is *balanced* (nine stickers of each
/// color) is a separate question answered by [`CubeState::validate`], since
/// sticker-by-sticker editing passes through unbalanced colorings on the way
/// to a complete one.
#[derive(Clone, PartialEq, Eq)]
pub struct CubeState(pub(crate) [Face; FACELET_COUNT]);

impl CubeState {
    /// The solved reference state: every sticker on a face bears that
    /// face's own color.
    #[must_use]
    pub fn solved() -> CubeState {
        let mut facelets = [Face::U; FACELET_COUNT];
        for (i, facelet) in facelets.iter_mut().enumerate() {
            *facelet = Face::ORDER[i / 9];
        }
        CubeState(facelets)
    }

    /// Index of a sticker in the flat facelet array.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[must_use]
    pub fn facelet_index(face: Face, row: usize, col: usize) -> usize {
        assert!(
            row < 3 && col < 3,
            "facelet coordinates out of range: ({row}, {col})"
        );
        face.index() * 9 + row * 3 + col
    }

    /// The color at one sticker position.
    #[must_use]
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Face {
        self.0[Self::facelet_index(face, row, col)]
    }

    /// A copy of the state with one sticker recolored. The receiver is
    /// untouched.
    #[must_use]
    pub fn with_facelet(&self, face: Face, row: usize, col: usize, color: Face) -> CubeState {
        let mut facelets = self.0;
        facelets[Self::facelet_index(face, row, col)] = color;
        CubeState(facelets)
    }

    /// Check that each of the six colors appears exactly nine times.
    ///
    /// Colors are checked in face order and the first shortfall or excess is
    /// reported. Balance does not imply the coloring is reachable from the
    /// solved cube by legal turns; that judgment belongs to the solver.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let counts = self.0.iter().copied().counts();
        for color in Face::ORDER {
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != 9 {
                return Err(ValidationError::WrongColorCount { color, count });
            }
        }
        Ok(())
    }

    /// Decode a solver-facing encoding and fully validate it.
    ///
    /// Violations are reported in a fixed priority: wrong length first, then
    /// the first unrecognized symbol scanning from index 0, then the first
    /// unbalanced color in face order.
    pub fn from_validated_str(s: &str) -> Result<CubeState, ValidationError> {
        let state = s.parse::<CubeState>()?;
        state.validate()?;
        Ok(state)
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

/// The 54-character wire encoding: one character per facelet in canonical
/// order, each the letter of its color's face.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for facelet in self.0 {
            write!(f, "{}", facelet.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CubeState").field(&self.to_string()).finish()
    }
}

impl FromStr for CubeState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != FACELET_COUNT {
            return Err(ValidationError::WrongLength(s.chars().count()));
        }

        let mut facelets = [Face::U; FACELET_COUNT];
        for (slot, c) in facelets.iter_mut().zip(s.chars()) {
            *slot = Face::from_char(c).ok_or(ValidationError::UnknownColor(c))?;
        }

        Ok(CubeState(facelets))
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeState, ValidationError};
    use crate::Face;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solved_encoding() {
        assert_eq!(CubeState::solved().to_string(), SOLVED);
        assert_eq!(SOLVED.parse::<CubeState>().unwrap(), CubeState::solved());
    }

    #[test]
    fn solved_validates() {
        assert_eq!(CubeState::solved().validate(), Ok(()));
    }

    #[test]
    fn set_then_get() {
        let edited = CubeState::solved().with_facelet(Face::F, 1, 1, Face::U);
        assert_eq!(edited.facelet(Face::F, 1, 1), Face::U);

        // Every other sticker is untouched.
        let solved = CubeState::solved();
        let changed = CubeState::facelet_index(Face::F, 1, 1);
        for i in 0..super::FACELET_COUNT {
            if i != changed {
                assert_eq!(edited.0[i], solved.0[i]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "facelet coordinates out of range")]
    fn index_rejects_bad_row() {
        CubeState::facelet_index(Face::U, 3, 0);
    }

    #[test]
    fn wrong_length_reported_first() {
        assert_eq!(
            CubeState::from_validated_str("UUU"),
            Err(ValidationError::WrongLength(3))
        );
    }

    #[test]
    fn unknown_symbol_beats_count() {
        // 53 Us and an X: the length is fine and the counts are hopeless,
        // but the symbol scan reports first.
        let s = format!("{}X", "U".repeat(53));
        assert_eq!(
            CubeState::from_validated_str(&s),
            Err(ValidationError::UnknownColor('X'))
        );
    }

    #[test]
    fn unbalanced_counts_rejected() {
        let s = "U".repeat(54);
        assert_eq!(
            CubeState::from_validated_str(&s),
            Err(ValidationError::WrongColorCount {
                color: Face::U,
                count: 54
            })
        );
    }

    #[test]
    fn count_reported_in_face_order() {
        // Swap one U sticker for an R: U is short before R is over.
        let s = format!("{}R{}", "U".repeat(8), &SOLVED[9..]);
        assert_eq!(
            CubeState::from_validated_str(&s),
            Err(ValidationError::WrongColorCount {
                color: Face::U,
                count: 8
            })
        );
    }
}
