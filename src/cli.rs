use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{CubebitConfig, Occupancy};

#[derive(Parser, Debug)]
#[command(name = "cubebit", version, about = "Animations for a volumetric LED cube")]
pub struct Cli {
    /// Config file (defaults to ./cubebit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Stop after this many frames; runs until interrupted otherwise
    #[arg(long, global = true)]
    pub frames: Option<u64>,
    /// Delay between frames, overriding the config and the scene default
    #[arg(long, global = true)]
    pub frame_delay_ms: Option<u64>,
    /// Seed for reproducible light-cycle runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Output::Terminal, global = true)]
    pub output: Output,
    /// Reload spheres from the config file when it changes
    #[arg(long, global = true)]
    pub watch: bool,
    #[command(subcommand)]
    pub scene: SceneCommand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Draw each frame in the terminal with truecolor escapes
    Terminal,
    /// Keep frames in memory only
    Null,
}

#[derive(Subcommand, Debug)]
pub enum SceneCommand {
    /// Light-cycles racing around the cube
    Tron(TronArgs),
    /// Two shaded spheres orbiting through the cube
    Spheres,
    /// The whole cube pulsing red
    Pulse,
    /// Rolling color waves
    Waves,
}

#[derive(Args, Debug, Default)]
pub struct TronArgs {
    #[arg(long)]
    pub cycles: Option<usize>,
    #[arg(long)]
    pub tail_len: Option<usize>,
    #[arg(long, value_enum)]
    pub occupancy: Option<Occupancy>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, cfg: &mut CubebitConfig) {
        if let Some(ms) = self.frame_delay_ms {
            cfg.cube.frame_delay_ms = Some(ms);
        }
        if let Some(seed) = self.seed {
            cfg.tron.seed = Some(seed);
        }
        if let SceneCommand::Tron(args) = &self.scene {
            if let Some(n) = args.cycles {
                cfg.tron.cycles = n;
            }
            if let Some(n) = args.tail_len {
                cfg.tron.tail_len = n;
            }
            if let Some(o) = args.occupancy {
                cfg.tron.occupancy = o;
            }
        }
    }
}
