use std::convert::Infallible;
use std::io;
use std::thread;
use std::time::Duration;

use cubebit_display::{LayoutError, LedCube, MemoryStrip, RGB8, SerpentineMapper, VoxelDisplay};
use cubebit_tron::TronError;
use smart_leds::SmartLedsWrite;
use thiserror::Error;

use crate::cli::{Cli, Output};
use crate::config::{self, ConfigError};
use crate::scenes::Scene;
use crate::terminal::TerminalStrip;
use crate::watch::ConfigWatcher;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("bad cube layout: {0}")]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Tron(#[from] TronError),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
    #[error("cannot watch config: {0}")]
    Watch(#[from] notify::Error),
}

impl From<Infallible> for AppError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let (mut cfg, path) = config::resolve(cli.config.as_deref())?;
    cli.apply(&mut cfg);
    let dims = cfg.dims();
    let mut scene = Scene::build(&cli.scene, &cfg)?;
    let delay = cfg.frame_delay(scene.default_frame_delay());

    let watcher = match (cli.watch, path.as_deref()) {
        (true, Some(p)) => Some(ConfigWatcher::new(p)?),
        (true, None) => {
            log::warn!("--watch needs a config file, not watching");
            None
        }
        (false, _) => None,
    };
    if watcher.is_some() && !matches!(scene, Scene::Spheres(_)) {
        log::info!("only the spheres scene reloads on config changes");
    }

    log::info!(
        "scene {} on {}x{}x{}, {:?} per frame",
        scene.name(),
        dims.sx,
        dims.sy,
        dims.sz,
        delay
    );
    let frames = match cli.output {
        Output::Terminal => {
            let strip = TerminalStrip::new(io::stdout().lock(), SerpentineMapper::new(dims)?);
            let mut cube = LedCube::new(dims, strip)?;
            drive(&mut scene, &mut cube, cli.frames, delay, watcher.as_ref())?
        }
        Output::Null => {
            let mut cube = LedCube::new(dims, MemoryStrip::new())?;
            drive(&mut scene, &mut cube, cli.frames, delay, watcher.as_ref())?
        }
    };
    log::info!("rendered {} frame(s)", frames);
    Ok(())
}

/// Draw and flush frames until `frames` is reached (forever when `None`).
pub fn drive<W>(
    scene: &mut Scene,
    cube: &mut LedCube<W>,
    frames: Option<u64>,
    delay: Duration,
    watcher: Option<&ConfigWatcher>,
) -> Result<u64, AppError>
where
    W: SmartLedsWrite<Color = RGB8>,
    AppError: From<W::Error>,
{
    let mut frame = 0u64;
    while frames.is_none_or(|n| frame < n) {
        if let (Some(w), Scene::Spheres(orbit)) = (watcher, &mut *scene) {
            if let Some(cfg) = w.poll() {
                orbit.replace(cfg.spheres());
            }
        }
        scene.draw(frame, cube);
        cube.render()?;
        frame += 1;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(frame)
}
