use crate::defaults::GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Maps a pointer position in pixels, relative to the board origin, to the
    /// cell under it. Returns `None` when the position is off the board.
    pub fn from_pixels(x: f32, y: f32, cell_size: f32, field_size: &FieldSize) -> Option<Point> {
        if cell_size <= 0.0 || x < 0.0 || y < 0.0 {
            return None;
        }
        let cell = Point::new((x / cell_size).floor() as usize, (y / cell_size).floor() as usize);
        field_size.contains(&cell).then_some(cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which candidate moves are tried; earlier entries win ties.
    pub const EVALUATION_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// The neighbour of `from` in `direction`, or `None` if it is past a wall.
    pub fn step(&self, from: Point, direction: Direction) -> Option<Point> {
        match direction {
            Direction::Up if from.y > 0 => Some(Point::new(from.x, from.y - 1)),
            Direction::Down if from.y + 1 < self.height => Some(Point::new(from.x, from.y + 1)),
            Direction::Left if from.x > 0 => Some(Point::new(from.x - 1, from.y)),
            Direction::Right if from.x + 1 < self.width => Some(Point::new(from.x + 1, from.y)),
            _ => None,
        }
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}
