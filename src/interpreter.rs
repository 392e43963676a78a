//! Interpreter that drives rovers across a [`Plateau`] from their command strings.
//!
//! The entry point is [`RoverInterpreter`]. Build one with [`RoverInterpreter::default`]
//! for the standard `L`/`R`/`M` alphabet, or start from [`RoverInterpreter::new`] and
//! register command characters via [`RoverInterpreter::set_op`]. Then call
//! [`RoverInterpreter::execute`] with the plateau bounds and the rover records.

use crate::error::{NavigationError, Result};
use crate::mission::{Mission, RoverRecord};
use crate::plateau::Plateau;
use crate::rover::{Position, RoverOp};
use glam::IVec2;
use std::collections::HashMap;

/// Maps command characters to [`RoverOp`]s and runs rovers one after another.
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    op_map: HashMap<char, RoverOp>,
}

impl Default for RoverInterpreter {
    fn default() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_commands();
        interpreter
    }
}

impl RoverInterpreter {
    /// Creates an interpreter that knows no commands at all.
    pub fn new() -> Self {
        Self {
            op_map: HashMap::new(),
        }
    }

    /// Replaces the entire command map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RoverOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a [`RoverOp`] to a command character, replacing any previous mapping.
    pub fn set_op(&mut self, command: char, op: RoverOp) {
        self.op_map.insert(command, op);
    }

    /// Registers `L` (turn left), `R` (turn right) and `M` (move forward).
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RoverOp::TurnLeft),
            ('R', RoverOp::TurnRight),
            ('M', RoverOp::Move),
        ];

        for (command, op) in mappings {
            self.set_op(command, op);
        }
    }

    /// Drives a single rover and returns where it ends up.
    ///
    /// `rover` is the zero-based index of the record in its batch, used only in errors.
    ///
    /// The start position must lie on the plateau, and every move is checked against the
    /// bounds as soon as it happens: the first step off the edge fails the rover.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::Format`] / [`NavigationError::InvalidDirection`] for a bad
    ///   position line.
    /// - [`NavigationError::OutOfBounds`] for an off-plateau start or move.
    /// - [`NavigationError::InvalidCommand`] for an unmapped command character.
    pub fn navigate(
        &self,
        plateau: &Plateau,
        rover: usize,
        record: &RoverRecord,
    ) -> Result<Position> {
        let mut position = Position::parse(&record.position)?;
        check_bounds(plateau, rover, position)?;

        for command in record.commands.chars() {
            let op = *self
                .op_map
                .get(&command)
                .ok_or(NavigationError::InvalidCommand { rover, command })?;

            position = position.apply(op);
            if op == RoverOp::Move {
                check_bounds(plateau, rover, position)?;
            }
        }

        Ok(position)
    }

    /// Validates `bounds` and drives every rover in order, returning final positions.
    ///
    /// Rovers do not interact; each one starts from its own record. The first failure
    /// aborts the whole batch.
    ///
    /// # Errors
    ///
    /// [`NavigationError::InvalidPlateau`] for non-positive bounds, otherwise the first
    /// error returned by [`navigate`](Self::navigate).
    pub fn execute_positions(
        &self,
        bounds: IVec2,
        records: &[RoverRecord],
    ) -> Result<Vec<Position>> {
        let plateau = Plateau::from_corner(bounds)?;
        records
            .iter()
            .enumerate()
            .map(|(rover, record)| self.navigate(&plateau, rover, record))
            .collect()
    }

    /// Like [`execute_positions`](Self::execute_positions), rendering each final position
    /// as `"x y D"`.
    ///
    /// # Errors
    ///
    /// See [`execute_positions`](Self::execute_positions).
    pub fn execute(&self, bounds: IVec2, records: &[RoverRecord]) -> Result<Vec<String>> {
        Ok(self
            .execute_positions(bounds, records)?
            .iter()
            .map(Position::to_string)
            .collect())
    }

    /// Runs a parsed [`Mission`].
    ///
    /// # Errors
    ///
    /// See [`execute_positions`](Self::execute_positions).
    pub fn run(&self, mission: &Mission) -> Result<Vec<Position>> {
        self.execute_positions(mission.bounds, &mission.rovers)
    }
}

fn check_bounds(plateau: &Plateau, rover: usize, position: Position) -> Result<()> {
    if plateau.contains(position.coords) {
        Ok(())
    } else {
        Err(NavigationError::OutOfBounds {
            rover,
            x: position.x(),
            y: position.y(),
            max_x: plateau.max_x(),
            max_y: plateau.max_y(),
        })
    }
}
