//! Octahedron Puzzle Engine
//!
//! State engine for an octahedral twisty puzzle: a static move table, the
//! sticker-to-slot assignment, per-piece orientation transforms, and a queue
//! that animates one turn at a time as the caller ticks it.

pub mod engine;
pub mod geometry;
pub mod moves;
pub mod notation;
pub mod orientation;
pub mod permutation;
pub mod pieces;

use cgmath::Matrix4;

use pieces::{Piece, Slot};

/// Read-only surface polled by a renderer once per frame.
///
/// To draw the puzzle, a renderer takes each slot's occupant, looks up the
/// geometry of the occupant's home slot, and draws it with the slot's
/// current transform.
pub trait PuzzleView {
    /// Returns the piece currently in `slot`.
    fn occupant(&self, slot: Slot) -> Piece;

    /// Returns the transform to draw the occupant of `slot` with.
    fn current_transform(&self, slot: Slot) -> Matrix4<f32>;
}
