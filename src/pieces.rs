//! Piece and slot identities.
//!
//! A *piece* is one physical sticker group of the octahedron. A *slot* is a
//! fixed geometric position that a piece can occupy. Both are indices in
//! `0..SLOT_COUNT`, but they are kept as distinct types so that a
//! slot-indexed table can never be read with a piece index by mistake.

use std::fmt;

/// Number of slots (and pieces) on the puzzle.
pub const SLOT_COUNT: usize = 42;

/// A geometric position on the puzzle with fixed render geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub u8);

/// A physical sticker group, identified by the slot it occupies when solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece(pub u8);

impl Slot {
    /// Returns the slot as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over every slot in index order.
    pub fn iter() -> impl Iterator<Item = Slot> + Clone {
        (0..SLOT_COUNT as u8).map(Slot)
    }
}

impl Piece {
    /// Returns the piece as an array index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the slot this piece occupies on a solved puzzle.
    ///
    /// The renderer draws a piece using the geometry of its home slot.
    #[inline]
    pub const fn home(self) -> Slot {
        Slot(self.0)
    }

    /// Iterates over every piece in index order.
    pub fn iter() -> impl Iterator<Item = Piece> + Clone {
        (0..SLOT_COUNT as u8).map(Piece)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
