//! Turns mission text into plateau bounds plus an ordered list of rover records.
//!
//! Format:
//!
//! ```text
//! 5 5          <- upper-right corner of the plateau
//! 1 2 N        <- rover 0 start position
//! LMLMLMLMM    <- rover 0 commands
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Blank lines are ignored anywhere in the input and the remaining lines are paired
//! positionally. A final position line with no command line after it is a rover
//! with no commands.

use crate::error::{NavigationError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace};

/// One rover's raw input: its start position line and its command string.
///
/// The position line is left unparsed; the interpreter validates it against the plateau.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverRecord {
    pub position: String,
    pub commands: String,
}

impl RoverRecord {
    pub fn new(position: impl Into<String>, commands: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            commands: commands.into(),
        }
    }
}

/// A parsed mission: unvalidated plateau bounds and rover records in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Upper-right corner as written; validated by the interpreter.
    pub bounds: IVec2,
    pub rovers: Vec<RoverRecord>,
}

impl Mission {
    /// Builds a mission from individual input lines.
    ///
    /// # Errors
    ///
    /// [`NavigationError::Format`] if there is no bounds line or it is not exactly two
    /// integers.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut lines = lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(number, line)| {
                if line.is_empty() {
                    trace!(line = number, "skipping blank line");
                }
                !line.is_empty()
            });

        let Some((number, header)) = lines.next() else {
            return Err(NavigationError::Format(
                "input is empty; expected plateau bounds on the first line".to_string(),
            ));
        };
        let bounds = parse_bounds(number, header)?;

        let mut rovers = Vec::new();
        while let Some((number, position)) = lines.next() {
            let commands = match lines.next() {
                Some((_, commands)) => commands,
                None => {
                    debug!(
                        line = number,
                        "last position line has no command line; rover stays put"
                    );
                    ""
                }
            };
            rovers.push(RoverRecord::new(position, commands));
        }

        debug!(
            max_x = bounds.x,
            max_y = bounds.y,
            rovers = rovers.len(),
            "parsed mission"
        );
        Ok(Self { bounds, rovers })
    }

    /// Reads and parses a mission file.
    ///
    /// # Errors
    ///
    /// [`NavigationError::Io`] if the file cannot be read, otherwise as
    /// [`Mission::from_lines`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading mission");
        std::fs::read_to_string(path)?.parse()
    }
}

impl FromStr for Mission {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_lines(s.lines())
    }
}

fn parse_bounds(number: usize, line: &str) -> Result<IVec2> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(NavigationError::Format(format!(
            "line {number}: plateau bounds '{line}' must have exactly 2 fields, found {}",
            tokens.len()
        )));
    };
    let bound = |token: &str| {
        token.parse::<i32>().map_err(|_| {
            NavigationError::Format(format!(
                "line {number}: plateau bound '{token}' is not an integer"
            ))
        })
    };
    Ok(IVec2::new(bound(x)?, bound(y)?))
}
