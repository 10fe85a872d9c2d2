//! Sticker-to-slot assignment.
//!
//! Tracks which piece sits in which slot, and the inverse. The assignment
//! only changes when a turn commits, and always stays a bijection.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::moves::Direction;
use crate::pieces::{Piece, Slot, SLOT_COUNT};

/// Slots shown per line by the `Display` impl.
const SLOTS_PER_LINE: usize = 6;

/// Bijective assignment of pieces to slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    /// Piece currently at each slot.
    occupant: [Piece; SLOT_COUNT],
    /// Slot currently holding each piece.
    location: [Slot; SLOT_COUNT],
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Permutation {
    /// Returns the solved assignment, where every piece sits in its home slot.
    pub fn identity() -> Self {
        let mut occupant = [Piece(0); SLOT_COUNT];
        let mut location = [Slot(0); SLOT_COUNT];
        for i in 0..SLOT_COUNT {
            occupant[i] = Piece(i as u8);
            location[i] = Slot(i as u8);
        }
        Self { occupant, location }
    }

    /// Restores the solved assignment.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Returns the piece currently in `slot`.
    #[inline]
    pub fn occupant(&self, slot: Slot) -> Piece {
        self.occupant[slot.index()]
    }

    /// Returns the slot currently holding `piece`.
    #[inline]
    pub fn location(&self, piece: Piece) -> Slot {
        self.location[piece.index()]
    }

    /// Returns whether every piece is in its home slot.
    pub fn is_identity(&self) -> bool {
        Slot::iter().all(|slot| self.occupant(slot).home() == slot)
    }

    /// Applies one completed turn to the assignment.
    ///
    /// Every cycle is rotated forward once, or `len - 1` times for a reverse
    /// turn. Panics if the result is not a bijection.
    pub fn commit<'a>(
        &mut self,
        cycles: impl IntoIterator<Item = &'a [Slot]>,
        direction: Direction,
    ) {
        for cycle in cycles {
            for _ in 0..repetitions(cycle.len(), direction) {
                self.rotate_forward(cycle);
            }
        }
        assert!(
            self.is_bijection(),
            "commit broke the slot assignment: {self:?}"
        );
    }

    /// Moves the occupant of `cycle[i - 1]` into `cycle[i]`, and the occupant
    /// of the last slot into the first.
    fn rotate_forward(&mut self, cycle: &[Slot]) {
        let Some(&last) = cycle.last() else {
            return;
        };
        let mut carried = self.occupant(last);
        for &slot in cycle {
            let displaced = self.occupant[slot.index()];
            self.occupant[slot.index()] = carried;
            self.location[carried.index()] = slot;
            carried = displaced;
        }
    }

    /// Returns whether `occupant` and `location` form a consistent bijection.
    pub fn is_bijection(&self) -> bool {
        let distinct: FxHashSet<Piece> = self.occupant.iter().copied().collect();
        distinct.len() == SLOT_COUNT
            && Slot::iter().all(|slot| {
                let piece = self.occupant(slot);
                piece.index() < SLOT_COUNT && self.location(piece) == slot
            })
    }
}

/// Number of forward rotations that realize one turn of an `n`-cycle in
/// `direction`.
///
/// Reversing an `n`-cycle is the same as rotating it forward `n - 1` times.
pub fn repetitions(cycle_len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => 1,
        Direction::Reverse => cycle_len.saturating_sub(1),
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in Slot::iter().enumerate() {
            if i % SLOTS_PER_LINE != 0 {
                write!(f, "   ")?;
            }
            write!(f, "{:>2} <- {:>2}", slot, self.occupant(slot))?;
            if i % SLOTS_PER_LINE == SLOTS_PER_LINE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
