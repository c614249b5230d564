//! Voxel display plumbing: colors, serpentine addressing, gamma, and the LED-strip backed cube.
//!
//! Layers:
//! - `address` - logical voxel to physical strip index (and back)
//! - `gamma` - perceptual correction applied right before a color is stored
//! - `display` - the [`VoxelDisplay`] trait everything else draws through
//! - `cube` - [`LedCube`], a [`VoxelDisplay`] over any `smart_leds` strip writer
//! - `strip` - in-memory strip writer for tests and headless runs
#![forbid(unsafe_code)]

pub mod address;
pub mod color;
pub mod cube;
pub mod display;
pub mod gamma;
pub mod strip;

pub use address::{LayoutError, SerpentineMapper};
pub use color::Rgba;
pub use cube::LedCube;
pub use display::VoxelDisplay;
pub use strip::MemoryStrip;

pub use cubebit_geom::{Dims, Voxel};
pub use smart_leds::RGB8;
