//! Facelet-level model of a 3×3×3 twisting puzzle.
//!
//! A cube is a flat array of 54 stickers; a move is a hand-written
//! permutation of that array. The crate knows nothing about solving.
//! It produces and validates the 54-character encoding an external
//! solver consumes, and applies the move sequences the solver returns.

use std::{fmt, str::FromStr};

pub mod moves;
pub mod state;

pub use moves::{Move, MoveParseError, Turn, parse_sequence};
pub use state::{CubeState, FACELET_COUNT, ValidationError};

/// One of the six faces of the cube, named by the color its solved
/// stickers bear. The same six symbols therefore serve as both face
/// identifiers and facelet colors.
///
/// The declaration order is the canonical face order of the facelet
/// encoding; every index computation in this crate depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// The canonical face order of the facelet encoding.
    pub const ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face's block in the facelet array.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube. A turn of one face never
    /// touches any sticker of its opposite.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::B => Face::F,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "R" => Ok(Face::R),
            "F" => Ok(Face::F),
            "D" => Ok(Face::D),
            "L" => Ok(Face::L),
            "B" => Ok(Face::B),
            _ => Err(()),
        }
    }
}
