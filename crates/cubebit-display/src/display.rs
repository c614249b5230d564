use cubebit_geom::{Dims, Voxel};

use crate::Rgba;

/// A buffered voxel canvas. Writes land in a back buffer and reach the LEDs on [`render`].
///
/// [`render`]: VoxelDisplay::render
pub trait VoxelDisplay {
    type Error;

    /// Buffer `color` for `v`. Writes outside [`bounds`](VoxelDisplay::bounds) are dropped.
    fn set(&mut self, v: Voxel, color: Rgba);

    /// The most recently buffered color of `v`, whether or not it has been rendered yet.
    fn at(&self, v: Voxel) -> Rgba;

    fn bounds(&self) -> Dims;

    /// Flush the buffered frame to the output.
    fn render(&mut self) -> Result<(), Self::Error>;

    /// In bounds and currently showing background.
    fn is_free(&self, v: Voxel) -> bool {
        self.bounds().contains(v) && self.at(v).is_background()
    }
}
