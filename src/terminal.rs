//! A strip writer that previews the cube in a truecolor terminal.
//!
//! Layers are drawn side by side, bottom layer on the left, with +Y pointing up.

use std::io::{self, Write};

use cubebit_display::{RGB8, SerpentineMapper};
use smart_leds::SmartLedsWrite;

pub const CELL: &str = "\u{25cf}";

pub struct TerminalStrip<Wr: Write> {
    out: Wr,
    mapper: SerpentineMapper,
    frames: u64,
}

impl<Wr: Write> TerminalStrip<Wr> {
    pub fn new(out: Wr, mapper: SerpentineMapper) -> Self {
        Self {
            out,
            mapper,
            frames: 0,
        }
    }

    pub fn into_inner(self) -> Wr {
        self.out
    }
}

impl<Wr: Write> SmartLedsWrite for TerminalStrip<Wr> {
    type Error = io::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let dims = self.mapper.dims();
        let mut grid = vec![RGB8::default(); dims.volume()];
        for (i, c) in iterator.into_iter().enumerate() {
            if let Some(v) = self.mapper.inverse(i) {
                grid[v.x as usize + dims.sx * (v.y as usize + dims.sy * v.z as usize)] = c.into();
            }
        }

        // redraw in place after the first frame
        if self.frames > 0 {
            write!(self.out, "\x1b[{}A", dims.sy)?;
        }
        for y in (0..dims.sy).rev() {
            for z in 0..dims.sz {
                if z > 0 {
                    self.out.write_all(b"  ")?;
                }
                for x in 0..dims.sx {
                    let c = grid[x + dims.sx * (y + dims.sy * z)];
                    write!(self.out, "\x1b[38;2;{};{};{}m{}", c.r, c.g, c.b, CELL)?;
                }
            }
            self.out.write_all(b"\x1b[0m\n")?;
        }
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
