use core::convert::Infallible;

use smart_leds::{RGB8, SmartLedsWrite};

/// Strip writer that keeps the last frame in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStrip {
    last: Vec<RGB8>,
    writes: usize,
}

impl MemoryStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written frame, in strip order.
    pub fn last_frame(&self) -> &[RGB8] {
        &self.last
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SmartLedsWrite for MemoryStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.last.clear();
        self.last.extend(iterator.into_iter().map(Into::into));
        self.writes += 1;
        Ok(())
    }
}
