use cubebit_display::SerpentineMapper;
use cubebit_geom::Voxel;

/// Where cycles look to decide whether a cell is blocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OccupancyMode {
    /// A cell is free when the display shows it as background. Trail cells that have
    /// faded below the LED's visible threshold are free again, as is anything another
    /// layer blanked earlier in the tick.
    #[default]
    Rendered,
    /// A cell is free when no cycle's head or trail currently holds it, regardless of color.
    Tracked,
}

/// Explicit per-cell occupancy, indexed by strip address.
///
/// Counts rather than flags: a stalled cycle records its head cell twice.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    mapper: SerpentineMapper,
    cells: Vec<u16>,
}

impl OccupancyGrid {
    pub fn new(mapper: SerpentineMapper) -> Self {
        Self {
            mapper,
            cells: vec![0; mapper.len()],
        }
    }

    pub fn occupy(&mut self, v: Voxel) {
        if let Some(i) = self.mapper.address(v) {
            self.cells[i] = self.cells[i].saturating_add(1);
        }
    }

    pub fn release(&mut self, v: Voxel) {
        if let Some(i) = self.mapper.address(v) {
            self.cells[i] = self.cells[i].saturating_sub(1);
        }
    }

    /// In bounds and held by nobody.
    pub fn is_free(&self, v: Voxel) -> bool {
        self.mapper.address(v).is_some_and(|i| self.cells[i] == 0)
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c > 0).count()
    }
}
