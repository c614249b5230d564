use cubebit_display::Rgba;
use cubebit_geom::Vec3;

/// Something with a color at every point of normalized cube space.
pub trait VolumetricObject: Send + Sync {
    /// Color at `p`, each coordinate in `[0, 1]`. Alpha 0 means the point is outside the object.
    fn color_at(&self, p: Vec3) -> Rgba;
}

impl<T: VolumetricObject + ?Sized> VolumetricObject for Box<T> {
    #[inline]
    fn color_at(&self, p: Vec3) -> Rgba {
        (**self).color_at(p)
    }
}

/// A solid sphere shaded from `center_color` at its middle to `edge_color` outwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub center_color: Rgba,
    pub edge_color: Rgba,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, center_color: Rgba, edge_color: Rgba) -> Self {
        Self {
            center,
            radius,
            center_color,
            edge_color,
        }
    }

    /// Weight of the center color at distance `d`.
    ///
    /// Not clamped: it exceeds 1 close to the middle of a small sphere and goes negative
    /// towards the rim of a large one, which overshoots the blend.
    #[inline]
    pub fn weight(&self, d: f32) -> f32 {
        1.0 - (d * d) / self.radius
    }
}

impl VolumetricObject for Sphere {
    fn color_at(&self, p: Vec3) -> Rgba {
        let d = self.center.distance(p);
        if self.radius.is_nan() || self.radius <= 0.0 || d > self.radius {
            return Rgba::TRANSPARENT;
        }
        let w = self.weight(d);
        Rgba::new(
            blend(self.center_color.r, self.edge_color.r, w),
            blend(self.center_color.g, self.edge_color.g, w),
            blend(self.center_color.b, self.edge_color.b, w),
            255,
        )
    }
}

#[inline]
fn blend(center: u8, edge: u8, w: f32) -> u8 {
    let v = f32::from(center) * w + f32::from(edge) * (1.0 - w);
    v.round().clamp(0.0, 255.0) as u8
}
