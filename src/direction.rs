use glam::Vec2;
use strum::{EnumIter, IntoEnumIterator};

/// The four directions the player can move in.
///
/// Counter-clockwise from the x-axis. The discriminant indexes the held keys of [`Movement`].
#[derive(Copy, Clone, Debug, EnumIter, Eq, PartialEq)]
pub enum Direction {
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Direction {
    /// Unit vector in screen coordinates (y grows downwards).
    pub fn to_vec2(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0., -1.),
            Direction::Down => Vec2::new(0., 1.),
            Direction::Left => Vec2::new(-1., 0.),
            Direction::Right => Vec2::new(1., 0.),
        }
    }
}

/// The set of movement keys held down during a frame.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Movement {
    held: [bool; 4],
}

impl Movement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `direction` as held (or released).
    pub fn set(&mut self, direction: Direction, held: bool) {
        self.held[direction as usize] = held;
    }

    /// Builder variant of [`Movement::set`].
    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held[direction as usize]
    }

    /// The displacement after moving `dt` seconds at `speed`. Opposite keys cancel out. Each axis
    /// moves at full speed, so diagonal movement is faster than straight movement.
    pub fn displacement(&self, speed: f32, dt: f32) -> Vec2 {
        Direction::iter()
            .filter(|&direction| self.is_held(direction))
            .map(|direction| direction.to_vec2() * speed * dt)
            .sum()
    }
}
