/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the grid
    g(n) = best known number of moves from start to n
    h(n) = Manhattan distance from n to the goal
    f(n) = estimated length of the cheapest path through n

Every move is one step up, down, left or right and costs 1, so the Manhattan
distance never overestimates and the first time the goal is popped its g is
optimal.

*/

use crate::map::{COLS, CellState, Grid, GridPoint, ROWS};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a search reached its goal. "No path" is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchOutcome {
    /// A path from start to goal exists.
    Found,
    /// The frontier was exhausted without reaching the goal.
    NotFound,
}

/// Represents the result of an A* search with metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// The computed path from start to goal (both inclusive), if one was found.
    pub path: Option<Vec<GridPoint>>,
    /// The number of moves along the path.
    pub total_cost: Option<usize>,
    /// The number of nodes expanded during the search.
    pub nodes_explored: usize,
    /// The length of the path (number of waypoints).
    pub path_length: usize,
}

impl SearchResult {
    /// Creates a new SearchResult for a successful search.
    pub fn success(path: Vec<GridPoint>, total_cost: usize, nodes_explored: usize) -> Self {
        let path_length = path.len();
        Self {
            path: Some(path),
            total_cost: Some(total_cost),
            nodes_explored,
            path_length,
        }
    }

    /// Creates a new SearchResult for a failed search.
    pub fn failure(nodes_explored: usize) -> Self {
        Self {
            path: None,
            total_cost: None,
            nodes_explored,
            path_length: 0,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    /// Found or not found.
    pub fn outcome(&self) -> SearchOutcome {
        if self.is_success() {
            SearchOutcome::Found
        } else {
            SearchOutcome::NotFound
        }
    }

    /// Path cells strictly between start and goal. Empty when no path was
    /// found or when start and goal coincide.
    pub fn intermediate_cells(&self) -> &[GridPoint] {
        match &self.path {
            Some(path) if path.len() > 2 => &path[1..path.len() - 1],
            _ => &[],
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(_) => write!(
                f,
                "SearchResult {{ success: true, path_length: {}, total_cost: {}, nodes_explored: {} }}",
                self.path_length,
                self.total_cost.unwrap_or(0),
                self.nodes_explored
            ),
            None => write!(
                f,
                "SearchResult {{ success: false, nodes_explored: {} }}",
                self.nodes_explored
            ),
        }
    }
}

/// Calculates the Manhattan distance between two grid points.
pub fn manhattan_distance(a: GridPoint, b: GridPoint) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Per-cell bookkeeping for one search run.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    g: f64,
    h: f64,
    f: f64,
    /// Arena index of the predecessor on the best known path.
    parent: Option<usize>,
}

impl Default for SearchNode {
    fn default() -> Self {
        SearchNode {
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            parent: None,
        }
    }
}

/// Frontier entry. The priority key `(f, seq)` is fixed at push time; `g`
/// records the node's cost at that moment so stale duplicates can be told apart.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    g: f64,
    index: usize,
}

// The priority queue depends on `Ord`. Both keys are flipped so the
// max-heap pops the lowest `f` first and, among equal `f`, the earliest push.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority frontier with insertion-order tie-breaking.
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, index: usize, node: &SearchNode) {
        debug_assert_eq!(node.f, node.g + node.h);
        self.heap.push(FrontierEntry {
            f: node.f,
            seq: self.next_seq,
            g: node.g,
            index,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Checks that a search endpoint is inside the grid and not a wall.
fn is_valid_endpoint(p: GridPoint, grid: &Grid) -> bool {
    matches!(grid.state(p), Ok(state) if state.is_traversable())
}

/// Reconstructs the path by following parent indices back from `goal`.
fn reconstruct_path(nodes: &[SearchNode], goal: usize) -> Vec<GridPoint> {
    let mut path = vec![GridPoint::from_index(goal)];
    let mut current = goal;
    while let Some(previous) = nodes[current].parent {
        path.push(GridPoint::from_index(previous));
        current = previous;
    }
    path.reverse();
    path
}

/// Finds a shortest path from `start` to `goal` using the A* algorithm.
/// The grid is only read; see [`astar_search_and_mark`] to record the path.
///
/// # Arguments
/// * `grid` - The grid to plan in. `Wall` cells are impassable.
/// * `start` - Starting cell.
/// * `goal` - Goal cell.
///
/// # Returns
/// * `SearchResult` - The path with metadata, or a failure if the goal is unreachable.
pub fn astar_search(grid: &Grid, start: GridPoint, goal: GridPoint) -> SearchResult {
    if !is_valid_endpoint(start, grid) || !is_valid_endpoint(goal, grid) {
        debug!(%start, %goal, "Start or goal is outside the grid or blocked");
        return SearchResult::failure(0);
    }

    let mut nodes = vec![SearchNode::default(); ROWS * COLS];
    let mut frontier = Frontier::new();
    let mut nodes_explored = 0;

    let start_index = start.index();
    let goal_index = goal.index();
    let start_h = manhattan_distance(start, goal) as f64;
    nodes[start_index] = SearchNode {
        g: 0.0,
        h: start_h,
        f: start_h,
        parent: None,
    };
    frontier.push(start_index, &nodes[start_index]);

    while let Some(entry) = frontier.pop() {
        let current = entry.index;
        if entry.g > nodes[current].g {
            // A cheaper route to this node was pushed after this entry.
            continue;
        }
        nodes_explored += 1;

        if current == goal_index {
            let path = reconstruct_path(&nodes, current);
            let total_cost = nodes[current].g as usize;
            debug!(total_cost, nodes_explored, "Goal reached");
            return SearchResult::success(path, total_cost, nodes_explored);
        }

        let current_point = GridPoint::from_index(current);
        for neighbor in grid.neighbors(current_point) {
            let tentative_g = nodes[current].g + 1.0; // Cost between adjacent cells is 1
            let index = neighbor.index();

            // Strictly less: the first route found at a given cost is kept.
            if tentative_g < nodes[index].g {
                let h = manhattan_distance(neighbor, goal) as f64;
                nodes[index] = SearchNode {
                    g: tentative_g,
                    h,
                    f: tentative_g + h,
                    parent: Some(current),
                };
                frontier.push(index, &nodes[index]);
            }
        }
    }

    debug!(nodes_explored, "Frontier exhausted without reaching the goal");
    SearchResult::failure(nodes_explored)
}

/// Runs [`astar_search`] and, on success, marks every intermediate path cell
/// as `Path` in the grid. Start and goal cells keep their own state.
pub fn astar_search_and_mark(grid: &mut Grid, start: GridPoint, goal: GridPoint) -> SearchResult {
    let result = astar_search(grid, start, goal);
    for &p in result.intermediate_cells() {
        if matches!(grid.state(p), Ok(CellState::Start | CellState::Goal)) {
            continue;
        }
        if let Err(e) = grid.place(p, CellState::Path) {
            warn!(%p, "Could not mark path cell: {}", e);
        }
    }
    result
}
