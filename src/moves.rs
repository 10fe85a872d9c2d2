//! Static move table.
//!
//! Move codes `1..=8` turn one face of the octahedron by 120 degrees. Codes
//! `9..=20` turn around one of the six tips by 90 degrees: odd codes spin
//! only the tip piece in place, even codes turn the whole layer beneath the
//! tip. Codes `2k - 1` and `2k` share an axis.
//!
//! Every cycle lists its slots in the order a piece travels through them
//! during a forward turn, so a forward commit moves the occupant of element
//! `i - 1` into element `i`.

use std::f32::consts::PI;
use std::fmt;

use cgmath::{InnerSpace, Rad, Vector3};
use thiserror::Error;

use crate::pieces::Slot;

/// Number of animation steps every turn is split into.
pub const STEPS_PER_MOVE: u8 = 4;

/// Number of ordinary move codes.
pub const MOVE_COUNT: usize = 20;

/// Error raised when a move request cannot be queued.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("unknown move code {0} (expected 1..=20)")]
    UnknownMoveCode(u8),
    #[error("invalid direction {0} (expected 1 or -1)")]
    InvalidDirection(i32),
}

/// A validated move code in `1..=20`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveCode(u8);

impl MoveCode {
    /// Validates a raw move code.
    pub const fn new(code: u8) -> Result<Self, MoveError> {
        if code >= 1 && code as usize <= MOVE_COUNT {
            Ok(Self(code))
        } else {
            Err(MoveError::UnknownMoveCode(code))
        }
    }

    /// Returns the raw move code.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the table entry for this move.
    #[inline]
    pub fn def(self) -> &'static MoveDef {
        &MOVES[self.0 as usize - 1]
    }

    /// Iterates over every move code in order.
    pub fn iter() -> impl Iterator<Item = MoveCode> {
        (1..=MOVE_COUNT as u8).map(MoveCode)
    }
}

impl TryFrom<u8> for MoveCode {
    type Error = MoveError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl fmt::Display for MoveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turn direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Returns `1.0` or `-1.0`.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MoveError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Reverse),
            other => Err(MoveError::InvalidDirection(other)),
        }
    }
}

/// Family a move belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// 120 degree turn of one face: five 3-cycles.
    Face,
    /// 90 degree spin of a single tip piece; permutes nothing.
    Tip,
    /// 90 degree turn of the layer under a tip: two 4-cycles plus the tip.
    Layer,
}

impl MoveKind {
    /// Total rotation of one full turn.
    pub fn sweep(self) -> Rad<f32> {
        match self {
            MoveKind::Face => Rad(2.0 * PI / 3.0),
            MoveKind::Tip | MoveKind::Layer => Rad(PI / 2.0),
        }
    }

    /// Rotation applied on each animation step.
    pub fn step_angle(self) -> Rad<f32> {
        self.sweep() / STEPS_PER_MOVE as f32
    }
}

/// Table entry for one move code.
#[derive(Debug)]
pub struct MoveDef {
    pub kind: MoveKind,
    /// Rotation axis (not necessarily unit length).
    pub axis: [f32; 3],
    /// Disjoint slot cycles. Singleton cycles only spin in place.
    pub cycles: &'static [&'static [Slot]],
}

impl MoveDef {
    /// Returns the unit rotation axis.
    pub fn unit_axis(&self) -> Vector3<f32> {
        Vector3::from(self.axis).normalize()
    }

    /// Returns every slot swept by this move, including tip singletons.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.cycles.iter().flat_map(|cycle| cycle.iter().copied())
    }

    /// Returns the cycles that actually permute pieces on commit.
    pub fn permuted_cycles(&self) -> impl Iterator<Item = &'static [Slot]> + '_ {
        self.cycles.iter().copied().filter(|cycle| cycle.len() > 1)
    }
}

macro_rules! cycle {
    ($($slot:literal),+ $(,)?) => {
        &[$(Slot($slot)),+]
    };
}

const fn face(axis: [f32; 3], cycles: &'static [&'static [Slot]]) -> MoveDef {
    MoveDef {
        kind: MoveKind::Face,
        axis,
        cycles,
    }
}

const fn tip(axis: [f32; 3], cycles: &'static [&'static [Slot]]) -> MoveDef {
    MoveDef {
        kind: MoveKind::Tip,
        axis,
        cycles,
    }
}

const fn layer(axis: [f32; 3], cycles: &'static [&'static [Slot]]) -> MoveDef {
    MoveDef {
        kind: MoveKind::Layer,
        axis,
        cycles,
    }
}

/// All moves, indexed by `code - 1`.
#[rustfmt::skip]
pub static MOVES: [MoveDef; MOVE_COUNT] = [
    // faces around the +z tip
    face(
        [1.0, 1.0, 1.0],
        &[cycle![0, 19, 17], cycle![1, 10, 9], cycle![5, 6, 18], cycle![4, 11, 25], cycle![16, 2, 26]],
    ),
    face(
        [1.0, -1.0, 1.0],
        &[cycle![0, 21, 19], cycle![2, 12, 11], cycle![6, 7, 20], cycle![1, 13, 27], cycle![10, 3, 28]],
    ),
    face(
        [-1.0, -1.0, 1.0],
        &[cycle![0, 23, 21], cycle![3, 14, 13], cycle![7, 8, 22], cycle![2, 15, 29], cycle![12, 4, 30]],
    ),
    face(
        [-1.0, 1.0, 1.0],
        &[cycle![0, 17, 23], cycle![4, 16, 15], cycle![8, 5, 24], cycle![3, 9, 31], cycle![14, 1, 32]],
    ),
    // faces around the -z tip
    face(
        [1.0, 1.0, -1.0],
        &[cycle![41, 17, 19], cycle![37, 25, 26], cycle![34, 33, 18], cycle![38, 32, 10], cycle![27, 40, 9]],
    ),
    face(
        [1.0, -1.0, -1.0],
        &[cycle![41, 19, 21], cycle![38, 27, 28], cycle![35, 34, 20], cycle![39, 26, 12], cycle![29, 37, 11]],
    ),
    face(
        [-1.0, -1.0, -1.0],
        &[cycle![41, 21, 23], cycle![39, 29, 30], cycle![36, 35, 22], cycle![40, 28, 14], cycle![31, 38, 13]],
    ),
    face(
        [-1.0, 1.0, -1.0],
        &[cycle![41, 23, 17], cycle![40, 31, 32], cycle![33, 36, 24], cycle![37, 30, 16], cycle![25, 39, 15]],
    ),
    // +z
    tip([0.0, 0.0, 1.0], &[cycle![0]]),
    layer(
        [0.0, 0.0, 1.0],
        &[cycle![1, 4, 3, 2], cycle![5, 8, 7, 6], cycle![0]],
    ),
    // +y
    tip([0.0, 1.0, 0.0], &[cycle![17]]),
    layer(
        [0.0, 1.0, 0.0],
        &[cycle![9, 25, 32, 16], cycle![18, 33, 24, 5], cycle![17]],
    ),
    // +x
    tip([1.0, 0.0, 0.0], &[cycle![19]]),
    layer(
        [1.0, 0.0, 0.0],
        &[cycle![11, 27, 26, 10], cycle![6, 20, 34, 18], cycle![19]],
    ),
    // -y
    tip([0.0, -1.0, 0.0], &[cycle![21]]),
    layer(
        [0.0, -1.0, 0.0],
        &[cycle![13, 29, 28, 12], cycle![22, 35, 20, 7], cycle![21]],
    ),
    // -x
    tip([-1.0, 0.0, 0.0], &[cycle![23]]),
    layer(
        [-1.0, 0.0, 0.0],
        &[cycle![15, 31, 30, 14], cycle![8, 24, 36, 22], cycle![23]],
    ),
    // -z
    tip([0.0, 0.0, -1.0], &[cycle![41]]),
    layer(
        [0.0, 0.0, -1.0],
        &[cycle![40, 37, 38, 39], cycle![36, 33, 34, 35], cycle![41]],
    ),
];

/// Formats the move table, one move per line.
pub fn format_table() -> String {
    let mut output = String::new();
    for code in MoveCode::iter() {
        let def = code.def();
        let [x, y, z] = def.axis;
        output.push_str(&format!(
            "{:>2}  {:<5}  axis ({:>2}, {:>2}, {:>2})  ",
            code.get(),
            format!("{:?}", def.kind).to_lowercase(),
            x,
            y,
            z
        ));
        let cycles: Vec<String> = def
            .cycles
            .iter()
            .map(|cycle| {
                let slots: Vec<String> = cycle.iter().map(|slot| slot.to_string()).collect();
                format!("({})", slots.join(" "))
            })
            .collect();
        output.push_str(&cycles.join(" "));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::SLOT_COUNT;

    #[test]
    fn test_move_code_validation() {
        assert_eq!(MoveCode::new(0), Err(MoveError::UnknownMoveCode(0)));
        assert_eq!(MoveCode::new(21), Err(MoveError::UnknownMoveCode(21)));
        assert_eq!(MoveCode::new(1).map(MoveCode::get), Ok(1));
        assert_eq!(MoveCode::try_from(20u8).map(MoveCode::get), Ok(20));
        assert_eq!(MoveCode::iter().count(), MOVE_COUNT);
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::try_from(1), Ok(Direction::Forward));
        assert_eq!(Direction::try_from(-1), Ok(Direction::Reverse));
        assert_eq!(Direction::try_from(0), Err(MoveError::InvalidDirection(0)));
    }

    #[test]
    fn test_move_kinds_follow_code_layout() {
        for code in MoveCode::iter() {
            let expected = match code.get() {
                1..=8 => MoveKind::Face,
                c if c % 2 == 1 => MoveKind::Tip,
                _ => MoveKind::Layer,
            };
            assert_eq!(code.def().kind, expected, "move {code}");
        }
    }

    #[test]
    fn test_cycle_shapes() {
        for code in MoveCode::iter() {
            let def = code.def();
            let lengths: Vec<usize> = def.cycles.iter().map(|cycle| cycle.len()).collect();
            match def.kind {
                MoveKind::Face => assert_eq!(lengths, [3, 3, 3, 3, 3], "move {code}"),
                MoveKind::Tip => assert_eq!(lengths, [1], "move {code}"),
                MoveKind::Layer => assert_eq!(lengths, [4, 4, 1], "move {code}"),
            }
        }
    }

    #[test]
    fn test_cycles_are_disjoint_and_in_range() {
        for code in MoveCode::iter() {
            let mut seen = [false; SLOT_COUNT];
            for slot in code.def().slots() {
                assert!(slot.index() < SLOT_COUNT, "move {code} names slot {slot}");
                assert!(!seen[slot.index()], "move {code} names slot {slot} twice");
                seen[slot.index()] = true;
            }
        }
    }

    #[test]
    fn test_paired_vertex_moves_share_tip_and_axis() {
        for k in 0..6u8 {
            let tip = MoveCode::new(9 + 2 * k).unwrap().def();
            let layer = MoveCode::new(10 + 2 * k).unwrap().def();
            assert_eq!(tip.axis, layer.axis);
            assert_eq!(tip.cycles[0], layer.cycles[2]);
        }
    }

    #[test]
    fn test_permuted_cycles_skip_singletons() {
        let counts: Vec<usize> = MoveCode::iter()
            .map(|code| code.def().permuted_cycles().count())
            .collect();
        assert_eq!(
            counts,
            [5, 5, 5, 5, 5, 5, 5, 5, 0, 2, 0, 2, 0, 2, 0, 2, 0, 2, 0, 2]
        );
    }

    #[test]
    fn test_step_angles() {
        let face = MoveKind::Face.step_angle().0;
        let vertex = MoveKind::Layer.step_angle().0;
        assert!((face - PI / 6.0).abs() < 1e-6);
        assert!((vertex - PI / 8.0).abs() < 1e-6);
    }
}
