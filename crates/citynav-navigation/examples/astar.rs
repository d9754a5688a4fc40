use citynav_navigation::astar::astar_search_and_mark;
use citynav_navigation::labels::split_labels;
use citynav_navigation::{CellState, Grid, GridPoint, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("Label-driven session");
    println!("====================");

    let mut session = Session::new();
    let configured = session.configure("mumbai", "lucknow", split_labels("delhi pune gotham"))?;
    println!("Start: {}  Goal: {}", configured.start, configured.goal);
    println!("Skipped wall labels: {:?}", configured.skipped_walls);
    println!("\nStaged grid:\n{}", session.grid());

    let result = session.run();
    println!("{}", result.search);
    println!("\nGrid with path:\n{}", session.grid());

    // The same engine on a hand-built grid with obstacles off the diagonal
    println!("Hand-built grid");
    println!("===============");

    let obstacles = [
        (1, 1), (1, 2), (1, 7), (1, 8), (2, 4), (3, 2), (3, 3), (3, 4), (3, 5), (3, 7), (4, 5),
        (4, 7), (5, 1), (5, 2), (5, 3), (5, 5), (5, 7), (5, 8), (6, 3), (7, 1), (7, 3), (7, 5),
        (7, 6), (7, 7), (8, 1), (8, 8), (9, 3), (9, 4), (9, 5),
    ];

    let mut grid = Grid::new();
    for (row, col) in obstacles {
        grid.place(GridPoint::new(row, col), CellState::Wall)?;
    }
    let start = GridPoint::new(0, 0);
    let goal = GridPoint::new(9, 9);
    grid.place(start, CellState::Start)?;
    grid.place(goal, CellState::Goal)?;

    let result = astar_search_and_mark(&mut grid, start, goal);
    match &result.path {
        Some(path) => println!("Path found with {} waypoints!", path.len()),
        None => println!("No path found."),
    }
    println!("{}", grid);

    Ok(())
}
