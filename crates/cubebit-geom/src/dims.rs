use crate::{Vec3, Voxel};

/// Extents of the voxel grid along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
}

impl Dims {
    /// The 5x5x5 Cube:Bit.
    pub const CUBE5: Dims = Dims::new(5, 5, 5);

    #[inline]
    pub const fn new(sx: usize, sy: usize, sz: usize) -> Self {
        Self { sx, sy, sz }
    }

    #[inline]
    pub const fn volume(&self) -> usize {
        self.sx * self.sy * self.sz
    }

    #[inline]
    pub fn contains(&self, v: Voxel) -> bool {
        v.x >= 0
            && v.y >= 0
            && v.z >= 0
            && (v.x as usize) < self.sx
            && (v.y as usize) < self.sy
            && (v.z as usize) < self.sz
    }

    /// Voxel at position `i` of the canonical x-fastest, then y, then z ordering.
    #[inline]
    pub fn voxel_at(&self, i: usize) -> Voxel {
        let x = i % self.sx;
        let y = (i / self.sx) % self.sy;
        let z = i / (self.sx * self.sy);
        Voxel::new(x as i32, y as i32, z as i32)
    }

    /// Every voxel, z outermost and x innermost.
    pub fn voxels(&self) -> impl Iterator<Item = Voxel> + use<> {
        let dims = *self;
        (0..dims.volume()).map(move |i| dims.voxel_at(i))
    }

    /// Map a voxel into `[0, 1]^3`. An axis of extent 1 collapses to 0.
    #[inline]
    pub fn normalize(&self, v: Voxel) -> Vec3 {
        Vec3::new(
            norm_axis(v.x, self.sx),
            norm_axis(v.y, self.sy),
            norm_axis(v.z, self.sz),
        )
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self::CUBE5
    }
}

impl From<[usize; 3]> for Dims {
    fn from(v: [usize; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[inline]
fn norm_axis(c: i32, extent: usize) -> f32 {
    if extent <= 1 {
        0.0
    } else {
        c as f32 / (extent - 1) as f32
    }
}
