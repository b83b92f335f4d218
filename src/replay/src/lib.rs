//! Scrubbing through a move sequence.
//!
//! A cursor position `k` names "the state after the first `k + 1` moves",
//! with `-1` meaning the untouched initial state. Every position is
//! recomputed by replaying from the start: a full replay is at most a few
//! thousand array reads, and recomputing means there is no inverse-move
//! bookkeeping to drift out of sync with forward application.

use cubik_core::{CubeState, Move};

/// The state after applying `moves[0..=cursor]` to `initial`.
///
/// # Panics
///
/// Panics if `cursor` is outside `[-1, moves.len() - 1]`.
#[must_use]
pub fn state_at(initial: &CubeState, moves: &[Move], cursor: isize) -> CubeState {
    assert!(
        (-1..moves.len() as isize).contains(&cursor),
        "cursor {cursor} out of range for {} moves",
        moves.len()
    );
    initial.apply_all(&moves[..(cursor + 1) as usize])
}

/// A cursor over a fixed initial state and move sequence.
///
/// The only state carried between steps is the cursor integer itself;
/// [`ReplayCursor::state`] recomputes from the start on every call.
pub struct ReplayCursor {
    initial: CubeState,
    moves: Vec<Move>,
    cursor: isize,
}

impl ReplayCursor {
    /// Start before the first move, showing the initial state.
    #[must_use]
    pub fn new(initial: CubeState, moves: Vec<Move>) -> ReplayCursor {
        ReplayCursor {
            initial,
            moves,
            cursor: -1,
        }
    }

    /// The cube at the current cursor position.
    #[must_use]
    pub fn state(&self) -> CubeState {
        state_at(&self.initial, &self.moves, self.cursor)
    }

    #[must_use]
    pub fn position(&self) -> isize {
        self.cursor
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn initial(&self) -> &CubeState {
        &self.initial
    }

    /// The move the cursor currently sits on, `None` at the start.
    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        usize::try_from(self.cursor).ok().map(|i| self.moves[i])
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.cursor == -1
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor == self.moves.len() as isize - 1
    }

    /// Advance one move. Past the last move this is a no-op and returns
    /// `false`.
    pub fn step_forward(&mut self) -> bool {
        if self.at_end() {
            false
        } else {
            self.cursor += 1;
            true
        }
    }

    /// Back up one move. Before the first move this is a no-op and returns
    /// `false`.
    pub fn step_back(&mut self) -> bool {
        if self.at_start() {
            false
        } else {
            self.cursor -= 1;
            true
        }
    }

    /// Jump to an arbitrary position, clamped to `[-1, len - 1]`.
    pub fn jump_to(&mut self, cursor: isize) {
        self.cursor = cursor.clamp(-1, self.moves.len() as isize - 1);
    }

    /// Back to the initial state.
    pub fn rewind(&mut self) {
        self.cursor = -1;
    }
}

#[cfg(test)]
mod tests {
    use cubik_core::{CubeState, parse_sequence};

    use super::{ReplayCursor, state_at};

    #[test]
    fn start_is_initial_state() {
        let initial = CubeState::solved();
        let moves = parse_sequence("R U R'").unwrap();
        assert_eq!(state_at(&initial, &moves, -1), initial);
        assert_eq!(state_at(&initial, &[], -1), initial);
    }

    #[test]
    fn end_matches_full_application() {
        let initial = CubeState::solved();
        let moves = parse_sequence("R U2 F' D L2").unwrap();
        assert_eq!(
            state_at(&initial, &moves, moves.len() as isize - 1),
            initial.apply_all(&moves)
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cursor_past_end_panics() {
        let moves = parse_sequence("R U").unwrap();
        state_at(&CubeState::solved(), &moves, 2);
    }

    #[test]
    fn stepping_walks_every_position() {
        let initial = CubeState::solved();
        let moves = parse_sequence("R U R' U R U2 R'").unwrap();
        let mut cursor = ReplayCursor::new(initial.clone(), moves.clone());

        assert!(cursor.at_start());
        assert_eq!(cursor.current_move(), None);

        let mut expected = initial;
        for (i, &mv) in moves.iter().enumerate() {
            assert!(cursor.step_forward());
            expected = expected.apply(mv);
            assert_eq!(cursor.position(), i as isize);
            assert_eq!(cursor.current_move(), Some(mv));
            assert_eq!(cursor.state(), expected);
        }

        assert!(cursor.at_end());
        assert!(!cursor.step_forward(), "stepping past the end must no-op");
        assert_eq!(cursor.position(), moves.len() as isize - 1);
    }

    #[test]
    fn stepping_back_reaches_initial() {
        let initial = CubeState::solved();
        let moves = parse_sequence("F2 B D'").unwrap();
        let mut cursor = ReplayCursor::new(initial.clone(), moves);

        cursor.jump_to(isize::MAX);
        assert!(cursor.at_end());

        while cursor.step_back() {}
        assert!(cursor.at_start());
        assert_eq!(cursor.state(), initial);
        assert!(!cursor.step_back(), "stepping before the start must no-op");
    }

    #[test]
    fn jump_clamps_both_ends() {
        let moves = parse_sequence("R U").unwrap();
        let mut cursor = ReplayCursor::new(CubeState::solved(), moves);

        cursor.jump_to(-5);
        assert_eq!(cursor.position(), -1);
        cursor.jump_to(17);
        assert_eq!(cursor.position(), 1);
        cursor.jump_to(0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn rewind_resets_an_empty_sequence_too() {
        let mut cursor = ReplayCursor::new(CubeState::solved(), vec![]);
        assert!(cursor.at_start() && cursor.at_end());
        assert!(!cursor.step_forward());
        cursor.rewind();
        assert_eq!(cursor.state(), CubeState::solved());
    }
}
