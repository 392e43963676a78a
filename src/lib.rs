//! # rover-nav
//!
//! Simulates rovers driving on a bounded rectangular plateau.
//!
//! Each rover starts from a position line (`x y D`) and follows a command string of
//! `L` (turn left), `R` (turn right) and `M` (move one cell forward). Rovers are run
//! one at a time and independently; a rover that starts or moves off the plateau, or
//! meets an unknown command, fails the whole batch.
//!
//! ```
//! use rover_nav::{Mission, RoverInterpreter};
//!
//! let mission: Mission = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM".parse().unwrap();
//! let results = RoverInterpreter::default()
//!     .execute(mission.bounds, &mission.rovers)
//!     .unwrap();
//! assert_eq!(results, ["1 3 N", "5 1 E"]);
//! ```

pub mod direction;
pub mod error;
pub mod interpreter;
pub mod mission;
pub mod plateau;
pub mod rover;

pub use direction::*;
pub use error::NavigationError;
pub use interpreter::*;
pub use mission::*;
pub use plateau::*;
pub use rover::*;
