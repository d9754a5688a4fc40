#![warn(missing_docs)]
#![doc = "Shortest-path search on a fixed 10x10 city grid."]
#![doc = ""]
#![doc = "This crate provides the grid model, an A* search with 4-directional unit moves,"]
#![doc = "and a session controller that maps city labels onto the grid and runs the search."]

/// A* search over the grid.
pub mod astar;
pub mod error;
pub mod labels;
pub mod map;
pub mod session;

pub use astar::{SearchOutcome, SearchResult, astar_search, astar_search_and_mark};
pub use error::{ConfigError, LabelRole, NavigationError};
pub use labels::{CITY_LABELS, LabelSet};
pub use map::{COLS, CellState, Grid, GridPoint, ROWS};
pub use session::{Configured, PathResult, Session};
