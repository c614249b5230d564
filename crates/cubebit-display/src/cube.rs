//! LED cube display over a `smart_leds` strip writer.

use cubebit_geom::{Dims, Voxel};
use smart_leds::{RGB8, SmartLedsWrite};

use crate::address::{LayoutError, SerpentineMapper};
use crate::display::VoxelDisplay;
use crate::{Rgba, gamma};

/// A cube of LEDs wired as one serpentine strip.
///
/// The frame is kept in strip order and already gamma corrected, so [`at`] reports
/// what the LED will actually show. A dim color can therefore read back as black.
///
/// [`at`]: VoxelDisplay::at
pub struct LedCube<W> {
    mapper: SerpentineMapper,
    frame: Vec<RGB8>,
    strip: W,
    frames_rendered: u64,
}

impl<W> LedCube<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(dims: Dims, strip: W) -> Result<Self, LayoutError> {
        let mapper = SerpentineMapper::new(dims)?;
        Ok(Self {
            mapper,
            frame: vec![RGB8::default(); mapper.len()],
            strip,
            frames_rendered: 0,
        })
    }

    #[inline]
    pub fn mapper(&self) -> &SerpentineMapper {
        &self.mapper
    }

    /// The buffered frame in physical strip order.
    #[inline]
    pub fn frame(&self) -> &[RGB8] {
        &self.frame
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    #[inline]
    pub fn strip(&self) -> &W {
        &self.strip
    }

    pub fn into_strip(self) -> W {
        self.strip
    }

    /// Blank the buffered frame. Takes effect on the next render.
    pub fn clear(&mut self) {
        self.frame.fill(RGB8::default());
    }
}

impl<W> VoxelDisplay for LedCube<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn set(&mut self, v: Voxel, color: Rgba) {
        match self.mapper.address(v) {
            Some(i) => self.frame[i] = gamma::correct(color),
            None => log::trace!(target: "cubebit::display", "dropped write outside cube at {:?}", v),
        }
    }

    fn at(&self, v: Voxel) -> Rgba {
        match self.mapper.address(v) {
            Some(i) => Rgba::from(self.frame[i]),
            None => Rgba::TRANSPARENT,
        }
    }

    fn bounds(&self) -> Dims {
        self.mapper.dims()
    }

    fn render(&mut self) -> Result<(), Self::Error> {
        self.strip.write(self.frame.iter().copied())?;
        self.frames_rendered += 1;
        log::trace!(target: "cubebit::display", "frame {} flushed", self.frames_rendered);
        Ok(())
    }
}
