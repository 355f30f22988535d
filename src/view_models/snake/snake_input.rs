//! Turns raw keyboard and touch input into snake commands.
use iced::{
    keyboard::{key::Named, Key},
    Point,
};

use crate::models::snake::direction::Direction;

/// Arrow keys and WASD. Anything else is not a command.
#[must_use]
pub fn direction_from_key(key: &Key) -> Option<Direction> {
    match key {
        Key::Named(code) => match code {
            Named::ArrowUp => Some(Direction::Up),
            Named::ArrowDown => Some(Direction::Down),
            Named::ArrowLeft => Some(Direction::Left),
            Named::ArrowRight => Some(Direction::Right),
            _ => None,
        },
        Key::Character(c) => match c.as_str() {
            "w" | "W" => Some(Direction::Up),
            "s" | "S" => Some(Direction::Down),
            "a" | "A" => Some(Direction::Left),
            "d" | "D" => Some(Direction::Right),
            _ => None,
        },
        Key::Unidentified => None,
    }
}

/// Direction of a swipe in board coordinates, where `y` grows upwards.
///
/// The axis with the larger displacement wins, ties go to the horizontal axis.
#[must_use]
pub fn direction_from_swipe(start: (i32, i32), end: (i32, i32)) -> Direction {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    if dy.abs() > dx.abs() {
        if dy > 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if dx > 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Direction of a swipe between two screen points. Screen `y` grows downwards.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn direction_from_screen_swipe(start: Point, end: Point) -> Direction {
    // whole pixels are enough to tell a swipe apart
    let to_board = |point: Point| (point.x as i32, -(point.y as i32));
    direction_from_swipe(to_board(start), to_board(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(direction_from_key(&Key::Named(Named::ArrowUp)), Some(Direction::Up));
        assert_eq!(direction_from_key(&Key::Named(Named::ArrowDown)), Some(Direction::Down));
        assert_eq!(direction_from_key(&Key::Named(Named::ArrowLeft)), Some(Direction::Left));
        assert_eq!(direction_from_key(&Key::Named(Named::ArrowRight)), Some(Direction::Right));
        assert_eq!(direction_from_key(&Key::Character("w".into())), Some(Direction::Up));
        assert_eq!(direction_from_key(&Key::Character("S".into())), Some(Direction::Down));
        assert_eq!(direction_from_key(&Key::Character("a".into())), Some(Direction::Left));
        assert_eq!(direction_from_key(&Key::Character("D".into())), Some(Direction::Right));
        assert_eq!(direction_from_key(&Key::Character("q".into())), None);
        assert_eq!(direction_from_key(&Key::Named(Named::Space)), None);
        assert_eq!(direction_from_key(&Key::Unidentified), None);
    }

    #[test]
    fn test_swipes() {
        assert_eq!(direction_from_swipe((0, 0), (3, 10)), Direction::Up);
        assert_eq!(direction_from_swipe((0, 0), (-3, -10)), Direction::Down);
        assert_eq!(direction_from_swipe((5, 5), (20, 1)), Direction::Right);
        assert_eq!(direction_from_swipe((5, 5), (-20, 1)), Direction::Left);
        // ties are horizontal
        assert_eq!(direction_from_swipe((0, 0), (4, 4)), Direction::Right);
        assert_eq!(direction_from_swipe((0, 0), (0, 0)), Direction::Left);
    }

    #[test]
    fn test_screen_swipes_flip_y() {
        let start = Point::new(100.0, 100.0);
        assert_eq!(direction_from_screen_swipe(start, Point::new(102.0, 40.0)), Direction::Up);
        assert_eq!(direction_from_screen_swipe(start, Point::new(98.0, 160.0)), Direction::Down);
        assert_eq!(direction_from_screen_swipe(start, Point::new(180.0, 90.0)), Direction::Right);
    }
}
