use cubebit_display::Rgba;
use cubebit_geom::{Dims, Vec3};
use cubebit_render::{Compositor, Sphere, VolumetricObject};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn point() -> impl Strategy<Value = Vec3> {
    (unit(), unit(), unit()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn color() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgba::opaque(r, g, b))
}

proptest! {
    // Inside the radius a sample is opaque, outside it is fully transparent black
    #[test]
    fn alpha_marks_membership(c in point(), p in point(), radius in 0.01f32..2.0, cc in color(), ec in color()) {
        let s = Sphere::new(c, radius, cc, ec);
        let out = s.color_at(p);
        if c.distance(p) > radius {
            prop_assert_eq!(out, Rgba::TRANSPARENT);
        } else {
            prop_assert_eq!(out.a, 255);
        }
    }

    // With a positive weight the blend stays between the two colors
    #[test]
    fn blend_stays_between_endpoints_for_small_offsets(c in point(), radius in 0.5f32..2.0, cc in color(), ec in color()) {
        let s = Sphere::new(c, radius, cc, ec);
        let p = c + Vec3::new(0.1, 0.0, 0.0);
        let out = s.color_at(p);
        for (o, a, b) in [(out.r, cc.r, ec.r), (out.g, cc.g, ec.g), (out.b, cc.b, ec.b)] {
            prop_assert!(o >= a.min(b) && o <= a.max(b));
        }
    }

    // A sphere sampled at its own center returns its center color unchanged
    #[test]
    fn center_sample_is_exact(c in point(), radius in 0.01f32..2.0, cc in color(), ec in color()) {
        prop_assert_eq!(Sphere::new(c, radius, cc, ec).color_at(c), cc);
    }

    // One output color per voxel whatever the object count
    #[test]
    fn shade_covers_the_grid(n in 0usize..4, s in 1usize..=6) {
        let dims = Dims::new(s, s, s);
        let mut compositor = Compositor::new();
        for i in 0..n {
            compositor.add(Sphere::new(Vec3::CENTER, 0.3 * (i + 1) as f32, Rgba::WHITE, Rgba::BLACK));
        }
        let frame = compositor.shade(dims);
        prop_assert_eq!(frame.len(), dims.volume());
        prop_assert!(frame.iter().all(|c| c.a == 255));
    }
}
