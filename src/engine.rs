//! Move queue and animation scheduler.
//!
//! The engine owns the slot assignment, the per-piece orientations, and a FIFO
//! of pending tasks. The caller drives it with [`Engine::tick`] once per
//! frame. Each turn is animated over [`STEPS_PER_MOVE`] ticks; the
//! assignment changes only on the last of them.

use std::collections::VecDeque;

use cgmath::Matrix4;
use log::{debug, trace};

use crate::moves::{Direction, MoveCode, MoveError, STEPS_PER_MOVE};
use crate::orientation::Orientations;
use crate::permutation::Permutation;
use crate::pieces::{Piece, Slot};
use crate::PuzzleView;

/// A request accepted by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Task {
    /// Return to the solved state immediately, abandoning pending turns.
    Reset,
    /// Animate and then commit one turn.
    Turn(MoveCode, Direction),
}

/// Element of the pending queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pending {
    Reset,
    Turn {
        code: MoveCode,
        direction: Direction,
        /// Animation steps already applied, in `0..STEPS_PER_MOVE`.
        step: u8,
    },
}

/// What a single tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was queued.
    Idle,
    /// The puzzle was reset to the solved state.
    Reset,
    /// One animation step of a turn was applied; `step` steps are now done.
    Animated { code: MoveCode, step: u8 },
    /// The final animation step was applied and the turn was committed.
    Committed { code: MoveCode },
}

/// Octahedron puzzle state with its animation queue.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    permutation: Permutation,
    orientations: Orientations,
    queue: VecDeque<Pending>,
}

impl Engine {
    /// Constructs a solved puzzle with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a turn given a raw move code and a direction of `1` (forward)
    /// or `-1` (reverse).
    ///
    /// Invalid codes and directions are rejected here and never reach the
    /// queue.
    pub fn enqueue(&mut self, code: u8, direction: i32) -> Result<MoveCode, MoveError> {
        let code = MoveCode::new(code)?;
        let direction = Direction::try_from(direction)?;
        self.push(Task::Turn(code, direction));
        Ok(code)
    }

    /// Queues a reset. Every turn still pending is abandoned.
    pub fn enqueue_reset(&mut self) {
        self.push(Task::Reset);
    }

    /// Adds a task to the back of the queue.
    pub fn push(&mut self, task: Task) {
        match task {
            Task::Reset => {
                if !self.queue.is_empty() {
                    debug!("reset abandons {} pending task(s)", self.queue.len());
                }
                self.queue.clear();
                self.queue.push_back(Pending::Reset);
            }
            Task::Turn(code, direction) => {
                debug!("queued move {code} {direction:?}");
                self.queue.push_back(Pending::Turn {
                    code,
                    direction,
                    step: 0,
                });
            }
        }
    }

    /// Advances the task at the head of the queue by one step.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(head) = self.queue.front_mut() else {
            return TickOutcome::Idle;
        };

        match head {
            Pending::Reset => {
                self.queue.pop_front();
                self.permutation.reset();
                self.orientations.reset();
                debug!("puzzle reset");
                TickOutcome::Reset
            }
            Pending::Turn {
                code,
                direction,
                step,
            } => {
                let (code, direction) = (*code, *direction);
                *step += 1;
                let step = *step;

                let def = code.def();
                let permutation = &self.permutation;
                self.orientations.accumulate(
                    def.slots().map(|slot| permutation.occupant(slot)),
                    def.unit_axis(),
                    def.kind.step_angle() * direction.sign(),
                );
                trace!("move {code} step {step}/{STEPS_PER_MOVE}");

                if step < STEPS_PER_MOVE {
                    return TickOutcome::Animated { code, step };
                }

                self.queue.pop_front();
                self.orientations
                    .snap(def.slots().map(|slot| permutation.occupant(slot)));
                self.permutation.commit(def.permuted_cycles(), direction);
                debug!("committed move {code} {direction:?}");
                TickOutcome::Committed { code }
            }
        }
    }

    /// Ticks until the queue is empty, returning the number of ticks taken.
    pub fn run_to_completion(&mut self) -> usize {
        let mut ticks = 0;
        while self.tick() != TickOutcome::Idle {
            ticks += 1;
        }
        ticks
    }

    /// Returns whether there is nothing left to animate.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued tasks, including the one in progress.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns the committed slot assignment.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the slot currently holding `piece`.
    pub fn location(&self, piece: Piece) -> Slot {
        self.permutation.location(piece)
    }

    /// Returns the accumulated transform of `piece`.
    pub fn piece_transform(&self, piece: Piece) -> Matrix4<f32> {
        self.orientations.get(piece)
    }
}

impl PuzzleView for Engine {
    fn occupant(&self, slot: Slot) -> Piece {
        self.permutation.occupant(slot)
    }

    fn current_transform(&self, slot: Slot) -> Matrix4<f32> {
        self.orientations.get(self.permutation.occupant(slot))
    }
}
