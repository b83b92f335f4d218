//! Face turns as hand-written permutations of the facelet array.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    Face,
    state::{CubeState, FACELET_COUNT},
};

/// How far a face is twisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    Counterclockwise,
    Half,
}

/// A single twist of one face. Moves carry no state; applying one is a pure
/// transformation of a [`CubeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

/// Why a move-sequence string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("malformed move token `{0}`")]
    MalformedMove(String),
}

/// Solver notation: a face letter, a `'` suffix for counterclockwise, a `2`
/// suffix for a half turn.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match self.turn {
            Turn::Clockwise => Ok(()),
            Turn::Counterclockwise => write!(f, "'"),
            Turn::Half => write!(f, "2"),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, turn) = if let Some(rest) = s.strip_suffix('\'') {
            (rest, Turn::Counterclockwise)
        } else if let Some(rest) = s.strip_suffix('2') {
            (rest, Turn::Half)
        } else {
            (s, Turn::Clockwise)
        };

        let face = face
            .parse::<Face>()
            .map_err(|()| MoveParseError::MalformedMove(s.to_owned()))?;

        Ok(Move { face, turn })
    }
}

/// Parse a whitespace-separated move sequence such as `"R U2 F'"`.
///
/// The first malformed token aborts the parse, so a partial sequence is
/// never produced from a corrupt solver response.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, MoveParseError> {
    text.split_whitespace().map(str::parse).collect()
}

// Row-major positions of a face's own stickers after a clockwise quarter
// turn:
//
// 0 1 2      6 3 0
// 3 4 5  ->  7 4 1
// 6 7 8      8 5 2
//
// Counterclockwise and half turns are composed from this one permutation.
const CLOCKWISE_FACE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// The four neighbor strips carried around by each face turn, in clockwise
/// flow order: strip `i` takes its values from strip `i - 1` for a clockwise
/// turn and from strip `i + 1` for a counterclockwise one. Each index triple
/// runs in the orientation that keeps the three-sticker transfer aligned;
/// neighbors mirrored across the shared edge are listed back to front.
const RINGS: [[(Face, [usize; 3]); 4]; 6] = [
    // U: top rows of F, R, B, L
    [
        (Face::F, [0, 1, 2]),
        (Face::R, [0, 1, 2]),
        (Face::B, [0, 1, 2]),
        (Face::L, [0, 1, 2]),
    ],
    // R: right columns of F, D, U and the left column of B, reversed
    [
        (Face::F, [2, 5, 8]),
        (Face::D, [2, 5, 8]),
        (Face::B, [6, 3, 0]),
        (Face::U, [2, 5, 8]),
    ],
    // F: bottom row of U, left column of R, top row of D reversed,
    // right column of L reversed
    [
        (Face::U, [6, 7, 8]),
        (Face::R, [0, 3, 6]),
        (Face::D, [2, 1, 0]),
        (Face::L, [8, 5, 2]),
    ],
    // D: bottom rows of F, L, B, R
    [
        (Face::F, [6, 7, 8]),
        (Face::L, [6, 7, 8]),
        (Face::B, [6, 7, 8]),
        (Face::R, [6, 7, 8]),
    ],
    // L: left columns of F, U, D and the right column of B, reversed
    [
        (Face::F, [0, 3, 6]),
        (Face::U, [0, 3, 6]),
        (Face::B, [8, 5, 2]),
        (Face::D, [0, 3, 6]),
    ],
    // B: top row of U, left column of L, bottom row of D reversed,
    // right column of R
    [
        (Face::U, [0, 1, 2]),
        (Face::L, [0, 3, 6]),
        (Face::D, [8, 7, 6]),
        (Face::R, [2, 5, 8]),
    ],
];

fn rotate_face_clockwise(facelets: &mut [Face; FACELET_COUNT], face: Face) {
    let start = face.index() * 9;
    let mut old = [Face::U; 9];
    old.copy_from_slice(&facelets[start..start + 9]);

    for (offset, &source) in CLOCKWISE_FACE.iter().enumerate() {
        facelets[start + offset] = old[source];
    }
}

fn cycle_ring(facelets: &mut [Face; FACELET_COUNT], face: Face, clockwise: bool) {
    let ring = &RINGS[face.index()];

    // Capture every source strip before writing any of them, so a strip
    // updated earlier in the pass is never read as a source.
    let mut sources = [[Face::U; 3]; 4];
    for (strip, (neighbor, indices)) in sources.iter_mut().zip(ring) {
        for (slot, &i) in strip.iter_mut().zip(indices) {
            *slot = facelets[neighbor.index() * 9 + i];
        }
    }

    for (i, (neighbor, indices)) in ring.iter().enumerate() {
        let source = if clockwise { (i + 3) % 4 } else { (i + 1) % 4 };
        for (&offset, &color) in indices.iter().zip(&sources[source]) {
            facelets[neighbor.index() * 9 + offset] = color;
        }
    }
}

impl CubeState {
    /// Apply one move, yielding the turned cube. The receiver is untouched.
    #[must_use]
    pub fn apply(&self, mv: Move) -> CubeState {
        let mut facelets = self.0;
        match mv.turn {
            Turn::Clockwise => {
                rotate_face_clockwise(&mut facelets, mv.face);
                cycle_ring(&mut facelets, mv.face, true);
            }
            Turn::Counterclockwise => {
                // Three clockwise self-rotations compose the inverse
                // permutation; the ring pass flows the other way.
                for _ in 0..3 {
                    rotate_face_clockwise(&mut facelets, mv.face);
                }
                cycle_ring(&mut facelets, mv.face, false);
            }
            Turn::Half => {
                for _ in 0..2 {
                    rotate_face_clockwise(&mut facelets, mv.face);
                }
                for _ in 0..2 {
                    cycle_ring(&mut facelets, mv.face, true);
                }
            }
        }
        CubeState(facelets)
    }

    /// Left fold of [`CubeState::apply`] over a whole sequence.
    #[must_use]
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        moves.iter().fold(self.clone(), |state, &mv| state.apply(mv))
    }
}
