use cubebit_display::{Rgba, VoxelDisplay};
use cubebit_geom::Dims;
use rayon::prelude::*;

use crate::VolumetricObject;

/// Averages every registered object into each voxel of a display.
///
/// Generic over the object type so a driver can keep concrete objects (and move them
/// between frames) or mix shapes behind `Box<dyn VolumetricObject>`.
pub struct Compositor<O = Box<dyn VolumetricObject>> {
    objects: Vec<O>,
}

impl<O> Default for Compositor<O> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<O: VolumetricObject> Compositor<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: O) {
        self.objects.push(object);
    }

    #[inline]
    pub fn objects(&self) -> &[O] {
        &self.objects
    }

    #[inline]
    pub fn objects_mut(&mut self) -> &mut [O] {
        &mut self.objects
    }

    pub fn replace_objects(&mut self, objects: Vec<O>) {
        self.objects = objects;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Color of every voxel in `dims`, in [`Dims::voxels`] order.
    ///
    /// Sampling runs in parallel; the output order is fixed.
    pub fn shade(&self, dims: Dims) -> Vec<Rgba> {
        (0..dims.volume())
            .into_par_iter()
            .map(|i| {
                let p = dims.normalize(dims.voxel_at(i));
                mix(self.objects.iter().map(|o| o.color_at(p)))
            })
            .collect()
    }

    /// Write the composited frame into `display` without flushing it.
    pub fn paint<D: VoxelDisplay>(&self, display: &mut D) {
        let dims = display.bounds();
        log::trace!(
            target: "cubebit::render",
            "compositing {} object(s) over {}x{}x{}",
            self.objects.len(),
            dims.sx,
            dims.sy,
            dims.sz
        );
        for (v, color) in dims.voxels().zip(self.shade(dims)) {
            display.set(v, color);
        }
    }

    /// Paint, then flush the display once.
    pub fn render<D: VoxelDisplay>(&self, display: &mut D) -> Result<(), D::Error> {
        self.paint(display);
        display.render()
    }
}

/// Plain average of the color channels of `samples`, opaque.
///
/// Alpha plays no part in the weighting: a transparent sample still counts and drags
/// the average toward black. No samples at all gives background.
pub fn mix(samples: impl IntoIterator<Item = Rgba>) -> Rgba {
    let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
    for c in samples {
        r += u32::from(c.r);
        g += u32::from(c.g);
        b += u32::from(c.b);
        n += 1;
    }
    if n == 0 {
        return Rgba::BLACK;
    }
    Rgba::opaque((r / n) as u8, (g / n) as u8, (b / n) as u8)
}
