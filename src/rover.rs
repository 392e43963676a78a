//! Rover state and the operations that change it.

use crate::direction::Direction;
use crate::error::{NavigationError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a rover stands and which way it faces.
///
/// Rendered as `"x y D"`, the same shape as a position line in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PositionFields", from = "PositionFields")]
pub struct Position {
    /// Grid cell, `(0, 0)` being the south-west corner of the plateau.
    pub coords: IVec2,

    /// Current heading.
    pub heading: Direction,
}

impl Position {
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            coords: IVec2::new(x, y),
            heading,
        }
    }

    pub fn x(&self) -> i32 {
        self.coords.x
    }

    pub fn y(&self) -> i32 {
        self.coords.y
    }

    /// Parses a position line: exactly three whitespace-separated tokens `x y D`.
    ///
    /// # Errors
    ///
    /// [`NavigationError::Format`] for a wrong token count or non-integer coordinates,
    /// [`NavigationError::InvalidDirection`] for an unknown heading code.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [x, y, heading] = tokens.as_slice() else {
            return Err(NavigationError::Format(format!(
                "position '{line}' must have exactly 3 fields (x y direction), found {}",
                tokens.len()
            )));
        };

        let coord = |token: &str, axis: &str| {
            token.parse::<i32>().map_err(|_| {
                NavigationError::Format(format!(
                    "position '{line}': {axis} coordinate '{token}' is not an integer"
                ))
            })
        };

        Ok(Self::new(coord(x, "x")?, coord(y, "y")?, heading.parse()?))
    }

    /// Returns the position after performing `op`.
    ///
    /// Rotations never change the cell. A move wraps on integer overflow so that a
    /// step past the numeric range lands far outside any plateau instead of panicking.
    pub fn apply(self, op: RoverOp) -> Self {
        match op {
            RoverOp::TurnLeft => Self {
                heading: self.heading.turn_left(),
                ..self
            },
            RoverOp::TurnRight => Self {
                heading: self.heading.turn_right(),
                ..self
            },
            RoverOp::Move => Self {
                coords: self.coords.wrapping_add(self.heading.displacement()),
                ..self
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.coords.x, self.coords.y, self.heading)
    }
}

/// Operations a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoverOp {
    /// Rotate 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
    /// Advance one cell along the current heading (`M`).
    Move,
}

// Flat `{ "x", "y", "heading" }` shape used on the wire.
#[derive(Serialize, Deserialize)]
struct PositionFields {
    x: i32,
    y: i32,
    heading: Direction,
}

impl From<Position> for PositionFields {
    fn from(pos: Position) -> Self {
        Self {
            x: pos.coords.x,
            y: pos.coords.y,
            heading: pos.heading,
        }
    }
}

impl From<PositionFields> for Position {
    fn from(fields: PositionFields) -> Self {
        Position::new(fields.x, fields.y, fields.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_position_line() {
        let pos = Position::parse("1 2 N").unwrap();
        assert_eq!(pos, Position::new(1, 2, Direction::North));
    }

    #[test]
    fn tolerates_extra_whitespace_between_fields() {
        let pos = Position::parse("  3\t3   E ").unwrap();
        assert_eq!(pos, Position::new(3, 3, Direction::East));
    }

    #[test]
    fn wrong_field_count_is_a_format_error() {
        for bad in ["", "1 2", "1 2 N X"] {
            assert!(
                matches!(Position::parse(bad), Err(NavigationError::Format(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_integer_coordinate_is_a_format_error() {
        assert!(matches!(
            Position::parse("one 2 N"),
            Err(NavigationError::Format(_))
        ));
        assert!(matches!(
            Position::parse("1 2.5 N"),
            Err(NavigationError::Format(_))
        ));
    }

    #[test]
    fn bad_heading_is_an_invalid_direction() {
        assert!(matches!(
            Position::parse("1 1 Z"),
            Err(NavigationError::InvalidDirection(code)) if code == "Z"
        ));
    }

    #[test]
    fn move_changes_exactly_one_coordinate() {
        let start = Position::new(2, 2, Direction::North);
        for heading in Direction::ALL {
            let from = Position { heading, ..start };
            let to = from.apply(RoverOp::Move);
            assert_eq!(to.heading, heading);
            assert_eq!((to.coords - from.coords).abs().element_sum(), 1);
            assert_eq!(to.coords - from.coords, heading.displacement());
        }
    }

    #[test]
    fn rotations_keep_the_cell() {
        let start = Position::new(4, 1, Direction::South);
        assert_eq!(
            start.apply(RoverOp::TurnLeft),
            Position::new(4, 1, Direction::East)
        );
        assert_eq!(
            start.apply(RoverOp::TurnRight),
            Position::new(4, 1, Direction::West)
        );
    }

    #[test]
    fn move_past_numeric_range_does_not_panic() {
        let edge = Position::new(i32::MAX, 0, Direction::East);
        assert_eq!(edge.apply(RoverOp::Move).x(), i32::MIN);
    }

    #[test]
    fn displays_as_position_line() {
        assert_eq!(Position::new(5, 1, Direction::East).to_string(), "5 1 E");
        assert_eq!(Position::new(0, 0, Direction::North).to_string(), "0 0 N");
    }

    #[test]
    fn serializes_as_flat_object() {
        let json = serde_json::to_value(Position::new(1, 3, Direction::North)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1, "y": 3, "heading": "N" }));
    }
}
