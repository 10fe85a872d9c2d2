//! Static render geometry for every slot.
//!
//! Each slot owns a contiguous range of triangle vertices, laid out for the
//! solved puzzle. The octahedron has its six tips on the coordinate axes at
//! distance 3; all vertices lie on the integer lattice.
//!
//! This table belongs to the renderer. The engine never reads it; it only
//! hands out transforms that the renderer applies to these vertices.

use cgmath::Point3;

use crate::pieces::{Slot, SLOT_COUNT};
use StickerColor::*;

/// Total number of vertices across all slots.
pub const VERTEX_COUNT: usize = 216;

/// Total number of triangles across all slots.
pub const TRIANGLE_COUNT: usize = VERTEX_COUNT / 3;

/// Sticker colors used on the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StickerColor {
    Gray,
    Red,
    Green,
    Blue,
    Magenta,
    Cyan,
    White,
    Yellow,
}

impl StickerColor {
    /// Returns the display color as linear RGB components.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            StickerColor::Gray => [0.25, 0.25, 0.25],
            StickerColor::Red => [0.9, 0.0, 0.0],
            StickerColor::Green => [0.0, 0.9, 0.0],
            StickerColor::Blue => [0.0, 0.0, 0.9],
            StickerColor::Magenta => [0.9, 0.0, 0.9],
            StickerColor::Cyan => [0.0, 0.9, 0.9],
            StickerColor::White => [0.9, 0.9, 0.9],
            StickerColor::Yellow => [0.9, 0.9, 0.0],
        }
    }
}

/// One triangle of a slot's geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
    pub color: StickerColor,
}

/// Returns the `(first vertex, vertex count)` range drawn for a slot.
#[inline]
pub fn vertex_range(slot: Slot) -> (usize, usize) {
    SLOT_RANGES[slot.index()]
}

/// Returns the solved-state vertices of a slot.
pub fn slot_vertices(slot: Slot) -> impl Iterator<Item = Point3<f32>> {
    let (start, count) = vertex_range(slot);
    VERTICES[start..start + count]
        .iter()
        .map(|&[x, y, z]| Point3::new(x, y, z))
}

/// Returns the triangles of a slot, with their sticker colors.
pub fn triangles(slot: Slot) -> impl Iterator<Item = Triangle> {
    let (start, count) = vertex_range(slot);
    (start / 3..(start + count) / 3).map(|triangle_index| {
        let corner = |i: usize| {
            let [x, y, z] = VERTICES[triangle_index * 3 + i];
            Point3::new(x, y, z)
        };
        Triangle {
            vertices: [corner(0), corner(1), corner(2)],
            color: triangle_color(triangle_index),
        }
    })
}

/// Returns the sticker color of a triangle by its global index.
#[inline]
pub fn triangle_color(triangle_index: usize) -> StickerColor {
    TRIANGLE_COLORS[triangle_index]
}

#[rustfmt::skip]
pub static VERTICES: [[f32; 3]; VERTEX_COUNT] = [
    // slot 0
    [0.0, 0.0, 3.0], [0.0, 1.0, 2.0], [1.0, 0.0, 2.0],
    [0.0, 0.0, 3.0], [1.0, 0.0, 2.0], [0.0, -1.0, 2.0],
    [0.0, 0.0, 3.0], [0.0, -1.0, 2.0], [-1.0, 0.0, 2.0],
    [0.0, 0.0, 3.0], [-1.0, 0.0, 2.0], [0.0, 1.0, 2.0],
    // slot 1
    [0.0, 1.0, 2.0], [1.0, 1.0, 1.0], [1.0, 0.0, 2.0],
    // slot 2
    [0.0, -1.0, 2.0], [1.0, -1.0, 1.0], [1.0, 0.0, 2.0],
    // slot 3
    [0.0, -1.0, 2.0], [-1.0, -1.0, 1.0], [-1.0, 0.0, 2.0],
    // slot 4
    [0.0, 1.0, 2.0], [-1.0, 1.0, 1.0], [-1.0, 0.0, 2.0],
    // slot 5
    [0.0, 1.0, 2.0], [-1.0, 1.0, 1.0], [0.0, 2.0, 1.0],
    [0.0, 1.0, 2.0], [0.0, 2.0, 1.0], [1.0, 1.0, 1.0],
    // slot 6
    [1.0, 0.0, 2.0], [1.0, 1.0, 1.0], [2.0, 0.0, 1.0],
    [1.0, 0.0, 2.0], [2.0, 0.0, 1.0], [1.0, -1.0, 1.0],
    // slot 7
    [0.0, -1.0, 2.0], [1.0, -1.0, 1.0], [0.0, -2.0, 1.0],
    [0.0, -1.0, 2.0], [0.0, -2.0, 1.0], [-1.0, -1.0, 1.0],
    // slot 8
    [-1.0, 0.0, 2.0], [-1.0, -1.0, 1.0], [-2.0, 0.0, 1.0],
    [-1.0, 0.0, 2.0], [-2.0, 0.0, 1.0], [-1.0, 1.0, 1.0],
    // slot 9
    [0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [1.0, 2.0, 0.0],
    // slot 10
    [1.0, 1.0, 1.0], [2.0, 0.0, 1.0], [2.0, 1.0, 0.0],
    // slot 11
    [1.0, -1.0, 1.0], [2.0, 0.0, 1.0], [2.0, -1.0, 0.0],
    // slot 12
    [0.0, -2.0, 1.0], [1.0, -1.0, 1.0], [1.0, -2.0, 0.0],
    // slot 13
    [0.0, -2.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -2.0, 0.0],
    // slot 14
    [-1.0, -1.0, 1.0], [-2.0, 0.0, 1.0], [-2.0, -1.0, 0.0],
    // slot 15
    [-1.0, 1.0, 1.0], [-2.0, 0.0, 1.0], [-2.0, 1.0, 0.0],
    // slot 16
    [0.0, 2.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 2.0, 0.0],
    // slot 17
    [0.0, 3.0, 0.0], [0.0, 2.0, 1.0], [1.0, 2.0, 0.0],
    [0.0, 3.0, 0.0], [1.0, 2.0, 0.0], [0.0, 2.0, -1.0],
    [0.0, 3.0, 0.0], [0.0, 2.0, -1.0], [-1.0, 2.0, 0.0],
    [0.0, 3.0, 0.0], [-1.0, 2.0, 0.0], [0.0, 2.0, 1.0],
    // slot 18
    [1.0, 1.0, 1.0], [1.0, 2.0, 0.0], [2.0, 1.0, 0.0],
    [2.0, 1.0, 0.0], [1.0, 2.0, 0.0], [1.0, 1.0, -1.0],
    // slot 19
    [3.0, 0.0, 0.0], [2.0, 0.0, 1.0], [2.0, 1.0, 0.0],
    [3.0, 0.0, 0.0], [2.0, 1.0, 0.0], [2.0, 0.0, -1.0],
    [3.0, 0.0, 0.0], [2.0, 0.0, -1.0], [2.0, -1.0, 0.0],
    [3.0, 0.0, 0.0], [2.0, -1.0, 0.0], [2.0, 0.0, 1.0],
    // slot 20
    [1.0, -1.0, 1.0], [1.0, -2.0, 0.0], [2.0, -1.0, 0.0],
    [2.0, -1.0, 0.0], [1.0, -2.0, 0.0], [1.0, -1.0, -1.0],
    // slot 21
    [0.0, -3.0, 0.0], [0.0, -2.0, -1.0], [-1.0, -2.0, 0.0],
    [0.0, -3.0, 0.0], [-1.0, -2.0, 0.0], [0.0, -2.0, 1.0],
    [0.0, -3.0, 0.0], [0.0, -2.0, 1.0], [1.0, -2.0, 0.0],
    [0.0, -3.0, 0.0], [1.0, -2.0, 0.0], [0.0, -2.0, -1.0],
    // slot 22
    [-1.0, -1.0, -1.0], [-1.0, -2.0, 0.0], [-2.0, -1.0, 0.0],
    [-2.0, -1.0, 0.0], [-1.0, -2.0, 0.0], [-1.0, -1.0, 1.0],
    // slot 23
    [-3.0, 0.0, 0.0], [-2.0, 0.0, -1.0], [-2.0, -1.0, 0.0],
    [-3.0, 0.0, 0.0], [-2.0, -1.0, 0.0], [-2.0, 0.0, 1.0],
    [-3.0, 0.0, 0.0], [-2.0, 0.0, 1.0], [-2.0, 1.0, 0.0],
    [-3.0, 0.0, 0.0], [-2.0, 1.0, 0.0], [-2.0, 0.0, -1.0],
    // slot 24
    [-1.0, 1.0, -1.0], [-1.0, 2.0, 0.0], [-2.0, 1.0, 0.0],
    [-2.0, 1.0, 0.0], [-1.0, 2.0, 0.0], [-1.0, 1.0, 1.0],
    // slot 25
    [0.0, 2.0, -1.0], [1.0, 1.0, -1.0], [1.0, 2.0, 0.0],
    // slot 26
    [1.0, 1.0, -1.0], [2.0, 0.0, -1.0], [2.0, 1.0, 0.0],
    // slot 27
    [1.0, -1.0, -1.0], [2.0, 0.0, -1.0], [2.0, -1.0, 0.0],
    // slot 28
    [0.0, -2.0, -1.0], [1.0, -1.0, -1.0], [1.0, -2.0, 0.0],
    // slot 29
    [0.0, -2.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -2.0, 0.0],
    // slot 30
    [-1.0, -1.0, -1.0], [-2.0, 0.0, -1.0], [-2.0, -1.0, 0.0],
    // slot 31
    [-1.0, 1.0, -1.0], [-2.0, 0.0, -1.0], [-2.0, 1.0, 0.0],
    // slot 32
    [0.0, 2.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 2.0, 0.0],
    // slot 33
    [0.0, 1.0, -2.0], [-1.0, 1.0, -1.0], [0.0, 2.0, -1.0],
    [0.0, 1.0, -2.0], [0.0, 2.0, -1.0], [1.0, 1.0, -1.0],
    // slot 34
    [1.0, 0.0, -2.0], [1.0, 1.0, -1.0], [2.0, 0.0, -1.0],
    [1.0, 0.0, -2.0], [2.0, 0.0, -1.0], [1.0, -1.0, -1.0],
    // slot 35
    [0.0, -1.0, -2.0], [1.0, -1.0, -1.0], [0.0, -2.0, -1.0],
    [0.0, -1.0, -2.0], [0.0, -2.0, -1.0], [-1.0, -1.0, -1.0],
    // slot 36
    [-1.0, 0.0, -2.0], [-1.0, -1.0, -1.0], [-2.0, 0.0, -1.0],
    [-1.0, 0.0, -2.0], [-2.0, 0.0, -1.0], [-1.0, 1.0, -1.0],
    // slot 37
    [0.0, 1.0, -2.0], [1.0, 1.0, -1.0], [1.0, 0.0, -2.0],
    // slot 38
    [0.0, -1.0, -2.0], [1.0, -1.0, -1.0], [1.0, 0.0, -2.0],
    // slot 39
    [0.0, -1.0, -2.0], [-1.0, -1.0, -1.0], [-1.0, 0.0, -2.0],
    // slot 40
    [0.0, 1.0, -2.0], [-1.0, 1.0, -1.0], [-1.0, 0.0, -2.0],
    // slot 41
    [0.0, 0.0, -3.0], [0.0, -1.0, -2.0], [-1.0, 0.0, -2.0],
    [0.0, 0.0, -3.0], [-1.0, 0.0, -2.0], [0.0, 1.0, -2.0],
    [0.0, 0.0, -3.0], [0.0, 1.0, -2.0], [1.0, 0.0, -2.0],
    [0.0, 0.0, -3.0], [1.0, 0.0, -2.0], [0.0, -1.0, -2.0],
];

#[rustfmt::skip]
pub static SLOT_RANGES: [(usize, usize); SLOT_COUNT] = [
    (0, 12), (12, 3), (15, 3), (18, 3), (21, 3), (24, 6), (30, 6),
    (36, 6), (42, 6), (48, 3), (51, 3), (54, 3), (57, 3), (60, 3),
    (63, 3), (66, 3), (69, 3), (72, 12), (84, 6), (90, 12), (102, 6),
    (108, 12), (120, 6), (126, 12), (138, 6), (144, 3), (147, 3), (150, 3),
    (153, 3), (156, 3), (159, 3), (162, 3), (165, 3), (168, 6), (174, 6),
    (180, 6), (186, 6), (192, 3), (195, 3), (198, 3), (201, 3), (204, 12),
];

static TRIANGLE_COLORS: [StickerColor; TRIANGLE_COUNT] = [
    Gray, Red, Green, Blue, // slot 0
    Gray, // slot 1
    Red, // slot 2
    Green, // slot 3
    Blue, // slot 4
    Blue, Gray, // slot 5
    Gray, Red, // slot 6
    Red, Green, // slot 7
    Green, Blue, // slot 8
    Gray, // slot 9
    Gray, // slot 10
    Red, // slot 11
    Red, // slot 12
    Green, // slot 13
    Green, // slot 14
    Blue, // slot 15
    Blue, // slot 16
    Gray, Magenta, Cyan, Blue, // slot 17
    Gray, Magenta, // slot 18
    Gray, Magenta, White, Red, // slot 19
    Red, White, // slot 20
    Yellow, Green, Red, White, // slot 21
    Yellow, Green, // slot 22
    Yellow, Green, Blue, Cyan, // slot 23
    Cyan, Blue, // slot 24
    Magenta, // slot 25
    Magenta, // slot 26
    White, // slot 27
    White, // slot 28
    Yellow, // slot 29
    Yellow, // slot 30
    Cyan, // slot 31
    Cyan, // slot 32
    Cyan, Magenta, // slot 33
    Magenta, White, // slot 34
    White, Yellow, // slot 35
    Yellow, Cyan, // slot 36
    Magenta, // slot 37
    White, // slot 38
    Yellow, // slot 39
    Cyan, // slot 40
    Yellow, Cyan, Magenta, White, // slot 41
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ranges_are_contiguous() {
        let mut next = 0;
        for slot in Slot::iter() {
            let (start, count) = vertex_range(slot);
            assert_eq!(start, next, "slot {slot} does not start where the previous ended");
            assert!(count > 0 && count % 3 == 0, "slot {slot} has {count} vertices");
            next = start + count;
        }
        assert_eq!(next, VERTEX_COUNT);
    }

    #[test]
    fn test_vertices_lie_on_the_octahedron() {
        for &[x, y, z] in &VERTICES {
            assert_eq!(x.abs() + y.abs() + z.abs(), 3.0, "({x}, {y}, {z}) is off the surface");
        }
    }

    #[test]
    fn test_tip_slots_have_four_stickers() {
        for tip in [0, 17, 19, 21, 23, 41] {
            assert_eq!(triangles(Slot(tip)).count(), 4, "tip slot {tip}");
        }
    }

    #[test]
    fn test_triangle_iteration_matches_ranges() {
        let total: usize = Slot::iter().map(|slot| triangles(slot).count()).sum();
        assert_eq!(total, TRIANGLE_COUNT);
        assert_eq!(SLOT_COUNT, SLOT_RANGES.len());
    }
}
