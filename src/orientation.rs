//! Per-piece orientation accumulator.
//!
//! Each piece carries the rotation that takes its home geometry to where it
//! currently appears. Animation steps compose small rotations onto these
//! transforms; the discrete assignment is only updated when a turn commits.

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

use crate::pieces::{Piece, SLOT_COUNT};

/// Accumulated rotation of every piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Orientations {
    transforms: [Matrix4<f32>; SLOT_COUNT],
}

impl Default for Orientations {
    fn default() -> Self {
        Self::identity()
    }
}

impl Orientations {
    /// Returns identity transforms for every piece.
    pub fn identity() -> Self {
        Self {
            transforms: [Matrix4::identity(); SLOT_COUNT],
        }
    }

    /// Resets every piece to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Returns the accumulated transform of `piece`.
    #[inline]
    pub fn get(&self, piece: Piece) -> Matrix4<f32> {
        self.transforms[piece.index()]
    }

    /// Left-multiplies the transform of every listed piece by a rotation of
    /// `angle` around `axis`.
    ///
    /// `axis` must be a unit vector.
    pub fn accumulate(
        &mut self,
        pieces: impl IntoIterator<Item = Piece>,
        axis: Vector3<f32>,
        angle: Rad<f32>,
    ) {
        let rotation = Matrix4::from_axis_angle(axis, angle);
        for piece in pieces {
            let transform = &mut self.transforms[piece.index()];
            *transform = rotation * *transform;
        }
    }

    /// Rounds every entry of the rotation part of each listed piece's
    /// transform to the nearest integer.
    ///
    /// Call only once a turn has finished: a full turn maps each coordinate
    /// axis onto a signed coordinate axis, so the exact result has entries
    /// in `{-1, 0, 1}`.
    pub fn snap(&mut self, pieces: impl IntoIterator<Item = Piece>) {
        for piece in pieces {
            let transform = &mut self.transforms[piece.index()];
            for column in 0..3 {
                for row in 0..3 {
                    transform[column][row] = transform[column][row].round();
                }
            }
        }
    }
}
