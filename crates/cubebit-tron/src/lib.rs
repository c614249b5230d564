//! Light-cycles: agents that wander the cube leaving fading trails.
#![forbid(unsafe_code)]

mod cycle;
mod game;
mod occupancy;
mod trail;

pub use cycle::{CycleStatus, CycleTuning, LightCycle, Step, palette};
pub use game::{TickReport, TronConfig, TronError, TronGame};
pub use occupancy::{OccupancyGrid, OccupancyMode};
pub use trail::Trail;
