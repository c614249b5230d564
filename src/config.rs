use std::path::{Path, PathBuf};
use std::time::Duration;

use cubebit_display::Rgba;
use cubebit_geom::{Dims, Vec3};
use cubebit_render::Sphere;
use cubebit_tron::{CycleTuning, OccupancyMode, TronConfig};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PATH: &str = "cubebit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubebitConfig {
    pub cube: CubeSection,
    pub tron: TronSection,
    pub spheres: Vec<SphereSpec>,
}

impl Default for CubebitConfig {
    fn default() -> Self {
        Self {
            cube: CubeSection::default(),
            tron: TronSection::default(),
            spheres: vec![
                SphereSpec::default(),
                SphereSpec {
                    center_color: [0, 255, 0, 255],
                    ..SphereSpec::default()
                },
            ],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubeSection {
    pub size: [usize; 3],
    /// Overrides the per-scene default frame delay.
    pub frame_delay_ms: Option<u64>,
}

impl Default for CubeSection {
    fn default() -> Self {
        Self {
            size: [5, 5, 5],
            frame_delay_ms: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    #[default]
    Rendered,
    Tracked,
}

impl From<Occupancy> for OccupancyMode {
    fn from(o: Occupancy) -> Self {
        match o {
            Occupancy::Rendered => OccupancyMode::Rendered,
            Occupancy::Tracked => OccupancyMode::Tracked,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TronSection {
    pub cycles: usize,
    pub tail_len: usize,
    pub straight_bias: f32,
    pub fade_step: u8,
    pub occupancy: Occupancy,
    pub seed: Option<u64>,
}

impl Default for TronSection {
    fn default() -> Self {
        let tron = TronConfig::default();
        Self {
            cycles: tron.cycles,
            tail_len: tron.tail_len,
            straight_bias: tron.tuning.straight_bias,
            fade_step: tron.tuning.fade_step,
            occupancy: Occupancy::Rendered,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphereSpec {
    pub center: [f32; 3],
    pub radius: f32,
    pub center_color: [u8; 4],
    pub edge_color: [u8; 4],
}

impl Default for SphereSpec {
    fn default() -> Self {
        Self {
            center: [0.5, 0.5, 0.5],
            radius: 0.9,
            center_color: [255, 0, 0, 255],
            edge_color: [0, 0, 0, 255],
        }
    }
}

impl SphereSpec {
    pub fn to_sphere(&self) -> Sphere {
        Sphere::new(
            Vec3::from(self.center),
            self.radius,
            Rgba::from(self.center_color),
            Rgba::from(self.edge_color),
        )
    }
}

impl CubebitConfig {
    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::from(self.cube.size)
    }

    pub fn tron_config(&self) -> TronConfig {
        TronConfig {
            cycles: self.tron.cycles,
            tail_len: self.tron.tail_len,
            tuning: CycleTuning {
                straight_bias: self.tron.straight_bias,
                fade_step: self.tron.fade_step,
            },
            occupancy: self.tron.occupancy.into(),
            seed: self.tron.seed,
        }
    }

    pub fn spheres(&self) -> Vec<Sphere> {
        self.spheres.iter().map(SphereSpec::to_sphere).collect()
    }

    /// The configured delay, or `fallback` when the file leaves it to the scene.
    pub fn frame_delay(&self, fallback: Duration) -> Duration {
        self.cube
            .frame_delay_ms
            .map_or(fallback, Duration::from_millis)
    }
}

pub fn load_from_path(path: &Path) -> Result<CubebitConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `explicit` if given (it must exist), else [`DEFAULT_PATH`] if present, else defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<(CubebitConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        let cfg = load_from_path(path)?;
        log::info!("loaded config from {}", path.display());
        return Ok((cfg, Some(path.to_path_buf())));
    }
    let path = Path::new(DEFAULT_PATH);
    if path.exists() {
        let cfg = load_from_path(path)?;
        log::info!("loaded config from {}", path.display());
        Ok((cfg, Some(path.to_path_buf())))
    } else {
        log::info!("no {} found, using defaults", DEFAULT_PATH);
        Ok((CubebitConfig::default(), None))
    }
}
