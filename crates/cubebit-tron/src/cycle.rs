use cubebit_display::{Rgba, VoxelDisplay};
use cubebit_geom::{Direction, Voxel};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Trail;

/// Per-cycle behaviour knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleTuning {
    /// Chance of trying to keep going straight before looking for a turn.
    pub straight_bias: f32,
    /// Subtracted from every tail channel per cell, newest to oldest.
    pub fade_step: u8,
}

impl Default for CycleTuning {
    fn default() -> Self {
        Self {
            straight_bias: 0.6,
            fade_step: 20,
        }
    }
}

/// Outcome of one [`LightCycle::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved one cell along the current heading.
    Straight,
    /// Moved one cell after changing heading.
    Turned(Direction),
    /// Every reachable cell was blocked; the head did not move.
    Stalled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleStatus {
    Active,
    Stalled,
}

/// Head and trail colors of the `i`th cycle (1-based).
///
/// Bits 0, 1 and 2 of `i` light red, green and blue in both; the head keeps the other
/// channels at half so it stays brighter than its trail.
pub fn palette(i: usize) -> (Rgba, Rgba) {
    let mut head = Rgba::opaque(127, 127, 127);
    let mut tail = Rgba::BLACK;
    if i & 0x01 != 0 {
        head.r = 255;
        tail.r = 255;
    }
    if i & 0x02 != 0 {
        head.g = 255;
        tail.g = 255;
    }
    if i & 0x04 != 0 {
        head.b = 255;
        tail.b = 255;
    }
    (head, tail)
}

#[derive(Clone, Debug)]
pub struct LightCycle {
    direction: Direction,
    head: Voxel,
    trail: Trail,
    head_color: Rgba,
    tail_color: Rgba,
    tuning: CycleTuning,
    evicted: Vec<Voxel>,
    status: CycleStatus,
}

impl LightCycle {
    /// A cycle at `head` facing north with an empty trail of at most `tail_len` cells.
    pub fn new(head: Voxel, tail_len: usize, head_color: Rgba, tail_color: Rgba) -> Self {
        Self {
            direction: Direction::North,
            head,
            trail: Trail::new(tail_len),
            head_color,
            tail_color,
            tuning: CycleTuning::default(),
            evicted: Vec::new(),
            status: CycleStatus::Active,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_tuning(mut self, tuning: CycleTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn head(&self) -> Voxel {
        self.head
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn head_color(&self) -> Rgba {
        self.head_color
    }

    #[inline]
    pub fn tail_color(&self) -> Rgba {
        self.tail_color
    }

    #[inline]
    pub fn status(&self) -> CycleStatus {
        self.status
    }

    /// Cells dropped off the end of the trail and not yet cleared by [`render`](Self::render).
    #[inline]
    pub fn pending_clear(&self) -> &[Voxel] {
        &self.evicted
    }

    /// Take one step: keep going straight with probability `straight_bias`, otherwise (or
    /// when straight is blocked) take the first free heading from a shuffled set of turns.
    pub fn advance<R, F>(&mut self, rng: &mut R, is_free: F) -> Step
    where
        R: Rng + ?Sized,
        F: Fn(Voxel) -> bool,
    {
        let roll: f32 = rng.random();
        let mut turns = self.direction.turns();
        turns.shuffle(rng);
        self.advance_with(roll, &turns, is_free)
    }

    /// [`advance`](Self::advance) with the random draw and the turn order supplied.
    ///
    /// Candidates equal to the reverse of the current heading are skipped.
    pub fn advance_with<F>(&mut self, roll: f32, candidates: &[Direction], is_free: F) -> Step
    where
        F: Fn(Voxel) -> bool,
    {
        if let Some(old) = self.trail.push_front(self.head) {
            self.evicted.push(old);
        }

        if roll < self.tuning.straight_bias {
            let next = self.head.step(self.direction);
            if is_free(next) {
                self.head = next;
                self.status = CycleStatus::Active;
                return Step::Straight;
            }
        }

        let reverse = self.direction.opposite();
        for &dir in candidates {
            if dir == reverse {
                continue;
            }
            let next = self.head.step(dir);
            if is_free(next) {
                let turned = dir != self.direction;
                self.direction = dir;
                self.head = next;
                self.status = CycleStatus::Active;
                return if turned { Step::Turned(dir) } else { Step::Straight };
            }
        }

        self.status = CycleStatus::Stalled;
        Step::Stalled
    }

    /// Paint the trail (fading toward black), then the head, then clear evicted cells.
    ///
    /// The clear comes last and is unconditional: an evicted cell that the head or a
    /// newer trail entry also covers ends the frame as background, and so reads free.
    pub fn render<D: VoxelDisplay>(&mut self, display: &mut D) {
        let mut color = self.tail_color;
        for v in self.trail.iter() {
            display.set(v, color);
            color = color.fade(self.tuning.fade_step);
        }
        display.set(self.head, self.head_color);

        for v in self.evicted.drain(..) {
            display.set(v, Rgba::BLACK);
        }
    }
}
