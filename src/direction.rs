//! Cardinal headings and their rotation cycle.

use crate::error::NavigationError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal headings a rover can face.
///
/// Serialized as its single-letter code so JSON output matches the text format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All headings in clockwise order. Turning right is `+1`, turning left is `-1`.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Heading after a 90-degree counter-clockwise turn.
    pub fn turn_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Heading after a 90-degree clockwise turn.
    pub fn turn_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// One-cell step taken when moving forward with this heading.
    pub fn displacement(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    /// Single-letter code used in the text format.
    pub fn code(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for Direction {
    type Error = NavigationError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(NavigationError::InvalidDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Direction::try_from(code),
            _ => Err(NavigationError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_turns_cycle_counter_clockwise() {
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::West.turn_left(), Direction::South);
        assert_eq!(Direction::South.turn_left(), Direction::East);
        assert_eq!(Direction::East.turn_left(), Direction::North);
    }

    #[test]
    fn right_turns_cycle_clockwise() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.turn_right(), Direction::South);
        assert_eq!(Direction::South.turn_right(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn four_turns_return_to_start() {
        for dir in Direction::ALL {
            let left = (0..4).fold(dir, |d, _| d.turn_left());
            let right = (0..4).fold(dir, |d, _| d.turn_right());
            assert_eq!(left, dir);
            assert_eq!(right, dir);
        }
    }

    #[test]
    fn left_undoes_right() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_right().turn_left(), dir);
        }
    }

    #[test]
    fn displacement_is_a_unit_step() {
        assert_eq!(Direction::North.displacement(), IVec2::new(0, 1));
        assert_eq!(Direction::East.displacement(), IVec2::new(1, 0));
        assert_eq!(Direction::South.displacement(), IVec2::new(0, -1));
        assert_eq!(Direction::West.displacement(), IVec2::new(-1, 0));
    }

    #[test]
    fn codes_parse_back() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for bad in ["Z", "n", "", "NE", "North"] {
            let err = bad.parse::<Direction>().unwrap_err();
            assert!(
                matches!(err, NavigationError::InvalidDirection(ref code) if code == bad),
                "unexpected error for {bad:?}: {err}"
            );
        }
    }

    #[test]
    fn serializes_as_letter_code() {
        assert_eq!(serde_json::to_string(&Direction::West).unwrap(), "\"W\"");
        let parsed: Direction = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, Direction::South);
    }
}
