use std::time::Duration;

use cubebit_display::{Rgba, VoxelDisplay};
use cubebit_geom::{Dims, Vec3};
use cubebit_render::{Compositor, Sphere, orbit};
use cubebit_tron::{TronError, TronGame};

use crate::cli::SceneCommand;
use crate::config::CubebitConfig;

/// Anything the frame loop can draw. Each call paints one frame without flushing.
pub enum Scene {
    Tron(TronGame),
    Spheres(SphereOrbit),
    Pulse,
    Waves,
}

impl Scene {
    pub fn build(cmd: &SceneCommand, cfg: &CubebitConfig) -> Result<Self, TronError> {
        Ok(match cmd {
            SceneCommand::Tron(_) => Scene::Tron(TronGame::new(&cfg.tron_config(), cfg.dims())?),
            SceneCommand::Spheres => Scene::Spheres(SphereOrbit::new(cfg.spheres())),
            SceneCommand::Pulse => Scene::Pulse,
            SceneCommand::Waves => Scene::Waves,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Tron(_) => "tron",
            Scene::Spheres(_) => "spheres",
            Scene::Pulse => "pulse",
            Scene::Waves => "waves",
        }
    }

    pub fn default_frame_delay(&self) -> Duration {
        Duration::from_millis(match self {
            Scene::Tron(_) => 50,
            Scene::Spheres(_) => 10,
            Scene::Pulse | Scene::Waves => 20,
        })
    }

    pub fn draw<D: VoxelDisplay>(&mut self, frame: u64, display: &mut D) {
        match self {
            Scene::Tron(game) => {
                game.advance(display);
            }
            Scene::Spheres(s) => s.draw(frame, display),
            Scene::Pulse => pulse(frame, display),
            Scene::Waves => waves(frame, display),
        }
    }
}

/// Spheres swinging around their configured centers on [`orbit`] paths.
pub struct SphereOrbit {
    homes: Vec<Vec3>,
    compositor: Compositor<Sphere>,
}

impl SphereOrbit {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        let mut s = Self {
            homes: Vec::new(),
            compositor: Compositor::new(),
        };
        s.replace(spheres);
        s
    }

    /// Swap in a new sphere list, e.g. after a config reload.
    pub fn replace(&mut self, spheres: Vec<Sphere>) {
        self.homes = spheres.iter().map(|s| s.center).collect();
        self.compositor.replace_objects(spheres);
    }

    pub fn spheres(&self) -> &[Sphere] {
        self.compositor.objects()
    }

    pub fn draw<D: VoxelDisplay>(&mut self, frame: u64, display: &mut D) {
        let t = (frame + 1) as f32 * 0.1;
        for (i, (sphere, home)) in self
            .compositor
            .objects_mut()
            .iter_mut()
            .zip(&self.homes)
            .enumerate()
        {
            sphere.center = *home + (orbit(t, i) - Vec3::CENTER);
        }
        self.compositor.paint(display);
    }
}

#[inline]
fn wave(phase: f32) -> u8 {
    (127.0 + 127.0 * phase.sin()) as u8
}

/// Whole cube in one slowly pulsing red.
pub fn pulse<D: VoxelDisplay>(frame: u64, display: &mut D) {
    let color = Rgba::opaque(wave(frame as f32 / 100.0), 0, 0);
    for v in display.bounds().voxels() {
        display.set(v, color);
    }
}

/// Three overlapping waves running through the cube at different speeds.
pub fn waves<D: VoxelDisplay>(frame: u64, display: &mut D) {
    let dims: Dims = display.bounds();
    let i = frame as f32;
    for (n, v) in dims.voxels().enumerate() {
        let n = n as f32;
        let color = Rgba::opaque(
            wave((2.0 * i + n) / 5.0),
            wave((i + n) / 10.0),
            wave((3.0 * i + n) / 15.0),
        );
        display.set(v, color);
    }
}
