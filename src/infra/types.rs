use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by taking one step in `direction`.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.vector();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// A movement action. `Stop` keeps the agent in place and is a legal
/// action like the four compass moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// Unit step for this direction; north is +y.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}

/// An entity coordinate with half-cell resolution.
///
/// Ghosts can sit between cells while moving, so their coordinates are
/// whole or half units. Half units are exactly representable in an `f64`,
/// which keeps equality comparisons exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostPos {
    pub x: f64,
    pub y: f64,
}

impl GhostPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn at_cell(cell: Position) -> Self {
        Self::new(cell.x as f64, cell.y as f64)
    }

    /// Whether the coordinate sits exactly on `cell`, with no half offset.
    pub fn is_at_cell(&self, cell: Position) -> bool {
        self.x == cell.x as f64 && self.y == cell.y as f64
    }

    /// The grid cell this coordinate rounds to.
    pub fn nearest_cell(&self) -> Position {
        Position::new((self.x + 0.5) as i32, (self.y + 0.5) as i32)
    }
}

impl Hash for GhostPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
