use std::fmt;

use super::snake_game::SnakeError;

/// Command given to the snake each tick.
///
/// [`Direction::Undefined`] means "keep going the way you were going".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
    Undefined,
}

/// Each heading paired with the heading that would reverse it.
const OPPOSITES: [(Direction, Direction); 4] = [
    (Direction::Left, Direction::Right),
    (Direction::Right, Direction::Left),
    (Direction::Up, Direction::Down),
    (Direction::Down, Direction::Up),
];

impl Direction {
    pub const VARIANTS: &'static [Direction] =
        &[Self::Left, Self::Up, Self::Right, Self::Down, Self::Undefined];

    /// The heading that would make the snake turn back on itself, if any.
    #[must_use]
    pub fn opposite(self) -> Option<Direction> {
        OPPOSITES
            .iter()
            .find(|(direction, _)| *direction == self)
            .map(|(_, opposite)| *opposite)
    }

    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == Some(other)
    }

    /// Offset of one step along this heading. `Up` grows `y`.
    #[must_use]
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::Left => Some((-1, 0)),
            Direction::Up => Some((0, 1)),
            Direction::Right => Some((1, 0)),
            Direction::Down => Some((0, -1)),
            Direction::Undefined => None,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = SnakeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            4 => Ok(Direction::Undefined),
            _ => Err(SnakeError::UnreadableCommand),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "Left",
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Undefined => "Undefined",
        };
        write!(f, "{name}")
    }
}
