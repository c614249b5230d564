/// One of the six axis-aligned headings a light-cycle can travel in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    /// +Y
    North,
    /// +X
    East,
    /// +Z
    Up,
    /// -Z
    Down,
    /// -X
    West,
    /// -Y
    South,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::Up,
        Direction::Down,
        Direction::West,
        Direction::South,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 1, 0),
            Direction::South => (0, -1, 0),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 0, 1),
            Direction::Down => (0, 0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Every heading reachable in one step from `self`: all six minus the reverse.
    pub fn turns(self) -> [Direction; 5] {
        let reverse = self.opposite();
        let mut out = [self; 5];
        let mut n = 0;
        for d in Direction::ALL {
            if d != reverse {
                out[n] = d;
                n += 1;
            }
        }
        out
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::West => "west",
            Direction::South => "south",
        }
    }
}
