//! Session controller: turns label-based requests into a staged grid and runs
//! the search over it.

#![warn(missing_docs)]

use tracing::{debug, info, warn};

use crate::astar::{SearchOutcome, SearchResult, astar_search_and_mark};
use crate::error::{ConfigError, LabelRole, NavigationError};
use crate::labels::LabelSet;
use crate::map::{CellState, Cells, Grid, GridPoint};

/// A validated request, expressed in grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configured {
    /// Cell of the start label.
    pub start: GridPoint,
    /// Cell of the end label.
    pub goal: GridPoint,
    /// Cells of the recognized wall labels, in the order given.
    pub walls: Vec<GridPoint>,
    /// Wall labels that were not recognized and therefore ignored.
    pub skipped_walls: Vec<String>,
}

/// Outcome of [`Session::run`], ready for rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// True if a path from start to goal was found.
    pub found: bool,
    /// Every cell state after the run, indexed `[row][col]`.
    pub grid: Cells,
    /// Search metadata.
    pub search: SearchResult,
}

impl PathResult {
    /// Found or not found.
    pub fn outcome(&self) -> SearchOutcome {
        self.search.outcome()
    }

    /// State of a single cell in the result grid.
    pub fn cell_state_at(&self, row: usize, col: usize) -> Result<CellState, NavigationError> {
        self.grid
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .ok_or(NavigationError::OutOfBounds("Grid point outside the 10x10 grid"))
    }
}

/// Owns the grid a presentation layer draws from and the request staged on it.
///
/// All mutation goes through `&mut self`, so one session serves one request at
/// a time. Use separate sessions for concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Session {
    labels: LabelSet,
    grid: Grid,
    configured: Option<Configured>,
}

impl Session {
    /// Creates a session over the default city labels with an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a request and stages it on the grid.
    ///
    /// The start and end labels must be recognized; otherwise the call fails
    /// and neither the grid nor the previously staged request change. Wall
    /// labels that are not recognized are skipped.
    ///
    /// Staging resets the grid, then places walls, then start, then goal, so
    /// start and goal win over a wall on the same cell.
    ///
    /// # Arguments
    /// * `start_label` - Label of the start location
    /// * `end_label` - Label of the goal location
    /// * `wall_labels` - Labels of blocked locations
    ///
    /// # Returns
    /// * `Result<Configured, ConfigError>` - The staged request or the rejected label
    pub fn configure<I, S>(
        &mut self,
        start_label: &str,
        end_label: &str,
        wall_labels: I,
    ) -> Result<Configured, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.labels.point_of(start_label).ok_or_else(|| ConfigError::UnknownLabel {
            role: LabelRole::Start,
            label: start_label.to_string(),
        })?;
        let goal = self.labels.point_of(end_label).ok_or_else(|| ConfigError::UnknownLabel {
            role: LabelRole::End,
            label: end_label.to_string(),
        })?;

        let mut walls = Vec::new();
        let mut skipped_walls = Vec::new();
        for label in wall_labels {
            let label = label.as_ref();
            match self.labels.point_of(label) {
                Some(p) => walls.push(p),
                None => {
                    warn!(label, "Skipping unknown wall label");
                    skipped_walls.push(label.to_string());
                }
            }
        }

        let configured = Configured {
            start,
            goal,
            walls,
            skipped_walls,
        };
        self.stage(&configured);
        info!(
            %start,
            %goal,
            walls = configured.walls.len(),
            skipped = configured.skipped_walls.len(),
            "Request staged"
        );
        self.configured = Some(configured.clone());
        Ok(configured)
    }

    /// Rebuilds the grid from a request: walls first, then start, then goal.
    fn stage(&mut self, request: &Configured) {
        self.grid.reset();
        let placements = request
            .walls
            .iter()
            .map(|&wall| (wall, CellState::Wall))
            .chain([(request.start, CellState::Start), (request.goal, CellState::Goal)]);
        for (p, state) in placements {
            if let Err(e) = self.grid.place(p, state) {
                warn!(%p, %state, "Could not stage cell: {}", e);
            }
        }
    }

    /// Runs the search for the staged request and marks the path on the grid.
    ///
    /// The grid is re-staged first, so running twice gives the same result.
    /// Without a staged request nothing is searched and `found` is false.
    pub fn run(&mut self) -> PathResult {
        let Some(request) = self.configured.clone() else {
            warn!("Run requested before a request was configured");
            return PathResult {
                found: false,
                grid: self.grid.cells(),
                search: SearchResult::failure(0),
            };
        };

        self.stage(&request);
        let search = astar_search_and_mark(&mut self.grid, request.start, request.goal);
        match search.outcome() {
            SearchOutcome::Found => info!(
                total_cost = search.total_cost.unwrap_or(0),
                nodes_explored = search.nodes_explored,
                "Path found."
            ),
            SearchOutcome::NotFound => {
                info!(nodes_explored = search.nodes_explored, "No path found.")
            }
        }
        debug!("Grid after search:\n{}", self.grid);

        PathResult {
            found: search.is_success(),
            grid: self.grid.cells(),
            search,
        }
    }

    /// Point query for renderers drawing one cell at a time.
    pub fn cell_state_at(&self, row: usize, col: usize) -> Result<CellState, NavigationError> {
        self.grid.cell_state_at(row, col)
    }

    /// The grid as last staged or searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The currently staged request, if any.
    pub fn configured(&self) -> Option<&Configured> {
        self.configured.as_ref()
    }

    /// The labels this session recognizes.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }
}
