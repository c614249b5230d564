//! Serpentine wiring of the cube.
//!
//! The strip runs back and forth along x within each row, and every odd layer is
//! laid with its in-plane axes swapped and mirrored, so the strip snakes from one
//! layer into the next without a long return wire.

use cubebit_geom::{Dims, Voxel};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("cube dimensions must be non-zero (got {sx}x{sy}x{sz})")]
    Empty { sx: usize, sy: usize, sz: usize },
    /// Odd layers swap x and y, which only tiles a square layer.
    #[error("serpentine layout needs square layers when stacked (got {sx}x{sy})")]
    NonSquareLayer { sx: usize, sy: usize },
}

/// Maps logical voxels to physical LED indices for a given cube size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerpentineMapper {
    dims: Dims,
}

impl SerpentineMapper {
    pub fn new(dims: Dims) -> Result<Self, LayoutError> {
        let Dims { sx, sy, sz } = dims;
        if sx == 0 || sy == 0 || sz == 0 {
            return Err(LayoutError::Empty { sx, sy, sz });
        }
        if sz > 1 && sx != sy {
            return Err(LayoutError::NonSquareLayer { sx, sy });
        }
        Ok(Self { dims })
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dims.volume()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strip index of an in-bounds voxel, `None` outside the cube.
    pub fn address(&self, v: Voxel) -> Option<usize> {
        if !self.dims.contains(v) {
            return None;
        }
        let (sx, sy) = (self.dims.sx, self.dims.sy);
        let (mut x, mut y, z) = (v.x as usize, v.y as usize, v.z as usize);
        if z % 2 == 1 {
            (x, y) = (sx - y - 1, sy - x - 1);
        }
        if y % 2 == 1 {
            x = sx - x - 1;
        }
        Some(x + sx * (sy * z + y))
    }

    /// The voxel wired to strip index `index`, `None` past the end of the strip.
    pub fn inverse(&self, index: usize) -> Option<Voxel> {
        if index >= self.len() {
            return None;
        }
        let (sx, sy) = (self.dims.sx, self.dims.sy);
        let z = index / (sx * sy);
        let row = index % (sx * sy);
        let y = row / sx;
        let mut x = row % sx;
        if y % 2 == 1 {
            x = sx - x - 1;
        }
        let (x, y) = if z % 2 == 1 {
            (sy - y - 1, sx - x - 1)
        } else {
            (x, y)
        };
        Some(Voxel::new(x as i32, y as i32, z as i32))
    }
}
