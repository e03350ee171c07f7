/// Side length of the square board.
pub const GRID_SIZE: u16 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const BOARD: Size = Size {
        width: GRID_SIZE,
        height: GRID_SIZE,
    };

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell of the board, `y` outer and `x` inner.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos { x, y }))
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::BOARD
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }

    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        let new_x = (self.x as i32 + delta.x).rem_euclid(size.width as i32) as u16;
        let new_y = (self.y as i32 + delta.y).rem_euclid(size.height as i32) as u16;
        Pos { x: new_x, y: new_y }
    }
}

impl From<(u16, u16)> for Pos {
    fn from((x, y): (u16, u16)) -> Self {
        Pos { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl PosDelta {
    /// Shortest step from `from` to `to` on the torus, so two segments on
    /// opposite edges still read as neighbours.
    pub fn toroidal_between(from: Pos, to: Pos, size: Size) -> PosDelta {
        PosDelta {
            x: shortest_wrapped(to.x as i32 - from.x as i32, size.width as i32),
            y: shortest_wrapped(to.y as i32 - from.y as i32, size.height as i32),
        }
    }

    pub fn negated(self) -> PosDelta {
        PosDelta {
            x: -self.x,
            y: -self.y,
        }
    }
}

fn shortest_wrapped(diff: i32, extent: i32) -> i32 {
    let diff = diff.rem_euclid(extent);
    if diff * 2 > extent {
        diff - extent
    } else {
        diff
    }
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}
