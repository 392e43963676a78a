//! The bounded grid rovers drive on.

use crate::error::{NavigationError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An inclusive rectangle `[0, max_x] x [0, max_y]`.
///
/// Both bounds are strictly positive; a degenerate `0x0` plateau is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    max: IVec2,
}

impl Plateau {
    /// Validates the bounds and builds the plateau.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidPlateau`] if either bound is zero or negative.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x <= 0 || max_y <= 0 {
            return Err(NavigationError::InvalidPlateau { max_x, max_y });
        }
        Ok(Self {
            max: IVec2::new(max_x, max_y),
        })
    }

    /// Same as [`Plateau::new`], taking the upper-right corner as a vector.
    pub fn from_corner(corner: IVec2) -> Result<Self> {
        Self::new(corner.x, corner.y)
    }

    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    /// Whether `cell` lies on the plateau, edges included.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(self.max).all()
    }
}
