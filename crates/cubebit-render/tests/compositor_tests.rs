use core::convert::Infallible;

use cubebit_display::{LedCube, MemoryStrip, Rgba, VoxelDisplay};
use cubebit_geom::{Dims, Vec3, Voxel};
use cubebit_render::{Compositor, Sphere, VolumetricObject, mix};

/// Display double that keeps raw colors, without gamma, and counts flushes.
struct RawDisplay {
    dims: Dims,
    cells: Vec<Rgba>,
    renders: usize,
    writes: usize,
}

impl RawDisplay {
    fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![Rgba::TRANSPARENT; dims.volume()],
            renders: 0,
            writes: 0,
        }
    }

    fn idx(&self, v: Voxel) -> usize {
        v.x as usize + self.dims.sx * (v.y as usize + self.dims.sy * v.z as usize)
    }
}

impl VoxelDisplay for RawDisplay {
    type Error = Infallible;

    fn set(&mut self, v: Voxel, color: Rgba) {
        let i = self.idx(v);
        self.cells[i] = color;
        self.writes += 1;
    }

    fn at(&self, v: Voxel) -> Rgba {
        self.cells[self.idx(v)]
    }

    fn bounds(&self) -> Dims {
        self.dims
    }

    fn render(&mut self) -> Result<(), Infallible> {
        self.renders += 1;
        Ok(())
    }
}

fn covering(center_color: Rgba) -> Sphere {
    Sphere::new(Vec3::CENTER, 2.0, center_color, Rgba::BLACK)
}

#[test]
fn no_objects_renders_background_everywhere() {
    let mut display = RawDisplay::new(Dims::CUBE5);
    let compositor: Compositor = Compositor::new();
    compositor.render(&mut display).unwrap();
    assert!(display.cells.iter().all(|c| *c == Rgba::BLACK));
    assert_eq!(display.writes, 125);
    assert_eq!(display.renders, 1);
}

#[test]
fn covering_sphere_shows_center_color_at_its_center() {
    let mut display = RawDisplay::new(Dims::CUBE5);
    let mut compositor = Compositor::new();
    compositor.add(covering(Rgba::opaque(10, 200, 30)));
    compositor.render(&mut display).unwrap();
    assert_eq!(display.at(Voxel::new(2, 2, 2)), Rgba::opaque(10, 200, 30));
}

#[test]
fn objects_are_averaged_per_channel() {
    let mut display = RawDisplay::new(Dims::CUBE5);
    let mut compositor: Compositor = Compositor::new();
    compositor.add(Box::new(covering(Rgba::opaque(255, 0, 0))));
    compositor.add(Box::new(covering(Rgba::opaque(0, 255, 0))));
    compositor.render(&mut display).unwrap();
    assert_eq!(display.at(Voxel::new(2, 2, 2)), Rgba::opaque(127, 127, 0));
}

#[test]
fn misses_still_count_toward_the_average() {
    let mut compositor = Compositor::new();
    compositor.add(covering(Rgba::opaque(200, 100, 50)));
    // tiny sphere in a corner, transparent at the center voxel
    compositor.add(Sphere::new(Vec3::ZERO, 0.05, Rgba::WHITE, Rgba::WHITE));
    let frame = compositor.shade(Dims::CUBE5);
    let center = frame[Dims::CUBE5.volume() / 2];
    assert_eq!(center, Rgba::opaque(100, 50, 25));
}

#[test]
fn output_is_always_opaque() {
    let mut compositor = Compositor::new();
    compositor.add(Sphere::new(Vec3::ZERO, 0.01, Rgba::WHITE, Rgba::WHITE));
    assert!(compositor.shade(Dims::CUBE5).iter().all(|c| c.a == 255));
}

#[test]
fn single_voxel_axis_samples_the_origin_plane() {
    let dims = Dims::new(3, 3, 1);
    let mut display = RawDisplay::new(dims);
    let mut compositor = Compositor::new();
    compositor.add(Sphere::new(Vec3::new(0.5, 0.5, 0.0), 0.1, Rgba::WHITE, Rgba::WHITE));
    compositor.render(&mut display).unwrap();
    assert_eq!(display.at(Voxel::new(1, 1, 0)), Rgba::WHITE);
    assert_eq!(display.at(Voxel::new(0, 0, 0)), Rgba::BLACK);
}

#[test]
fn paint_leaves_flushing_to_the_caller() {
    let mut display = RawDisplay::new(Dims::CUBE5);
    let mut compositor = Compositor::new();
    compositor.add(covering(Rgba::WHITE));
    compositor.paint(&mut display);
    assert_eq!(display.renders, 0);
    assert_eq!(display.writes, 125);
}

#[test]
fn moved_objects_show_up_next_frame() {
    let mut compositor = Compositor::new();
    compositor.add(Sphere::new(Vec3::ZERO, 0.1, Rgba::WHITE, Rgba::WHITE));
    let dims = Dims::CUBE5;
    assert_eq!(compositor.shade(dims)[0], Rgba::WHITE);
    compositor.objects_mut()[0].center = Vec3::new(1.0, 1.0, 1.0);
    let frame = compositor.shade(dims);
    assert_eq!(frame[0], Rgba::BLACK);
    assert_eq!(frame[dims.volume() - 1], Rgba::WHITE);
}

#[test]
fn renders_through_an_led_cube() {
    let mut cube = LedCube::new(Dims::CUBE5, MemoryStrip::new()).unwrap();
    let mut compositor = Compositor::new();
    compositor.add(covering(Rgba::WHITE));
    compositor.render(&mut cube).unwrap();
    assert_eq!(cube.strip().writes(), 1);
    assert_eq!(cube.at(Voxel::new(2, 2, 2)), Rgba::WHITE);
}

#[test]
fn mix_truncates_like_integer_division() {
    let c = mix([Rgba::opaque(1, 2, 3), Rgba::opaque(2, 2, 2)]);
    assert_eq!(c, Rgba::opaque(1, 2, 2));
    assert_eq!(mix(std::iter::empty()), Rgba::BLACK);
}

struct Checker;

impl VolumetricObject for Checker {
    fn color_at(&self, p: Vec3) -> Rgba {
        if (p.x + p.y + p.z) < 1.5 {
            Rgba::WHITE
        } else {
            Rgba::TRANSPARENT
        }
    }
}

#[test]
fn new_object_kinds_plug_in_without_changes() {
    let mut compositor: Compositor = Compositor::new();
    compositor.add(Box::new(Checker));
    let frame = compositor.shade(Dims::CUBE5);
    assert_eq!(frame[0], Rgba::WHITE);
    assert_eq!(frame[124], Rgba::BLACK);
}
