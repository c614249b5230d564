use cubebit_display::{LayoutError, SerpentineMapper, VoxelDisplay};
use cubebit_geom::{Dims, Voxel};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::{CycleTuning, LightCycle, OccupancyGrid, OccupancyMode, Step, palette};

#[derive(Clone, Debug, PartialEq)]
pub struct TronConfig {
    pub cycles: usize,
    pub tail_len: usize,
    pub tuning: CycleTuning,
    pub occupancy: OccupancyMode,
    /// Fixed seed for reproducible runs; random when `None`.
    pub seed: Option<u64>,
}

impl Default for TronConfig {
    fn default() -> Self {
        Self {
            cycles: 2,
            tail_len: 20,
            tuning: CycleTuning::default(),
            occupancy: OccupancyMode::Rendered,
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TronError {
    #[error("invalid light-cycle config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// What happened to each cycle during one tick, in cycle order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub steps: Vec<Step>,
}

impl TickReport {
    /// Indices of the cycles that could not move.
    pub fn stalled(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Step::Stalled)
            .map(|(i, _)| i)
    }
}

/// A set of light-cycles sharing one cube, advanced in a fixed order every tick.
pub struct TronGame {
    dims: Dims,
    cycles: Vec<LightCycle>,
    rng: ChaCha8Rng,
    seed: u64,
    grid: Option<OccupancyGrid>,
    ticks: u64,
}

impl TronGame {
    /// Spawn `config.cycles` cycles at random cells of `dims`.
    pub fn new(config: &TronConfig, dims: Dims) -> Result<Self, TronError> {
        if config.cycles == 0 {
            return Err(TronError::InvalidConfig("at least one cycle is required"));
        }
        if config.tail_len == 0 {
            return Err(TronError::InvalidConfig("tail length must be positive"));
        }
        // empty extents would make the spawn ranges empty
        SerpentineMapper::new(dims)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cycles = (1..=config.cycles)
            .map(|i| {
                let head = Voxel::new(
                    rng.random_range(0..dims.sx as i32),
                    rng.random_range(0..dims.sy as i32),
                    rng.random_range(0..dims.sz as i32),
                );
                let (head_color, tail_color) = palette(i);
                LightCycle::new(head, config.tail_len, head_color, tail_color)
                    .with_tuning(config.tuning)
            })
            .collect();
        Self::assemble(dims, cycles, config.occupancy, seed, rng)
    }

    /// Run pre-built cycles, e.g. with chosen starting cells.
    pub fn from_cycles(
        dims: Dims,
        cycles: Vec<LightCycle>,
        occupancy: OccupancyMode,
        seed: u64,
    ) -> Result<Self, TronError> {
        if cycles.is_empty() {
            return Err(TronError::InvalidConfig("at least one cycle is required"));
        }
        Self::assemble(dims, cycles, occupancy, seed, ChaCha8Rng::seed_from_u64(seed))
    }

    fn assemble(
        dims: Dims,
        cycles: Vec<LightCycle>,
        occupancy: OccupancyMode,
        seed: u64,
        rng: ChaCha8Rng,
    ) -> Result<Self, TronError> {
        let mapper = SerpentineMapper::new(dims)?;
        let grid = match occupancy {
            OccupancyMode::Rendered => None,
            OccupancyMode::Tracked => {
                let mut grid = OccupancyGrid::new(mapper);
                for c in &cycles {
                    grid.occupy(c.head());
                }
                Some(grid)
            }
        };
        log::info!(
            target: "cubebit::tron",
            "{} cycle(s) on {}x{}x{}, occupancy={:?}, seed={}",
            cycles.len(),
            dims.sx,
            dims.sy,
            dims.sz,
            occupancy,
            seed
        );
        Ok(Self {
            dims,
            cycles,
            rng,
            seed,
            grid,
            ticks: 0,
        })
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn cycles(&self) -> &[LightCycle] {
        &self.cycles
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn occupancy(&self) -> OccupancyMode {
        if self.grid.is_some() {
            OccupancyMode::Tracked
        } else {
            OccupancyMode::Rendered
        }
    }

    /// Move and paint every cycle in order, without flushing the display.
    pub fn advance<D: VoxelDisplay>(&mut self, display: &mut D) -> TickReport {
        self.ticks += 1;
        let mut steps = Vec::with_capacity(self.cycles.len());
        for (i, cycle) in self.cycles.iter_mut().enumerate() {
            let step = match self.grid.as_ref() {
                Some(grid) => cycle.advance(&mut self.rng, |v| grid.is_free(v)),
                None => cycle.advance(&mut self.rng, |v| display.is_free(v)),
            };
            if let Some(grid) = self.grid.as_mut() {
                grid.occupy(cycle.head());
                for &v in cycle.pending_clear() {
                    grid.release(v);
                }
            }
            match step {
                Step::Stalled => log::debug!(
                    target: "cubebit::tron",
                    "[tick {}] cycle {} stalled at {:?}",
                    self.ticks,
                    i,
                    cycle.head()
                ),
                _ => log::trace!(
                    target: "cubebit::tron",
                    "[tick {}] cycle {} {:?} -> {:?} heading {}",
                    self.ticks,
                    i,
                    step,
                    cycle.head(),
                    cycle.direction().name()
                ),
            }
            cycle.render(display);
            steps.push(step);
        }
        TickReport {
            tick: self.ticks,
            steps,
        }
    }

    /// [`advance`](Self::advance), then flush the display once.
    pub fn tick<D: VoxelDisplay>(&mut self, display: &mut D) -> Result<TickReport, D::Error> {
        let report = self.advance(display);
        display.render()?;
        Ok(report)
    }
}
