use std::collections::VecDeque;

use cubebit_geom::Voxel;

/// Bounded history of the cells a cycle has left, newest first.
#[derive(Clone, Debug)]
pub struct Trail {
    cells: VecDeque<Voxel>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record `v` as the newest cell. Returns the oldest cell if that pushed it out.
    pub fn push_front(&mut self, v: Voxel) -> Option<Voxel> {
        self.cells.push_front(v);
        if self.cells.len() > self.capacity {
            self.cells.pop_back()
        } else {
            None
        }
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Voxel> + '_ {
        self.cells.iter().copied()
    }

    #[inline]
    pub fn newest(&self) -> Option<Voxel> {
        self.cells.front().copied()
    }

    #[inline]
    pub fn oldest(&self) -> Option<Voxel> {
        self.cells.back().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
