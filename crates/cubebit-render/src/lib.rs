//! Volumetric objects and the compositor that rasterizes them into the cube.
#![forbid(unsafe_code)]

mod compositor;
mod motion;
mod object;

pub use compositor::{Compositor, mix};
pub use motion::orbit;
pub use object::{Sphere, VolumetricObject};
