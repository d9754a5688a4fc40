use citynav_navigation::labels::split_labels;
use citynav_navigation::{COLS, CellState, Configured, PathResult, ROWS, Session};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use tracing::{info, warn};

use crate::settings::RequestSettings;

const CELL_SIZE: f32 = 60.0; // Fits 10x10 in 600px
const GRID_SIZE: f32 = CELL_SIZE * COLS as f32;
const STATUS_HEIGHT: f32 = 60.0;
const PANEL_WIDTH: f32 = 260.0;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "City Navigator".to_string(),
        window_width: (GRID_SIZE + PANEL_WIDTH) as i32,
        window_height: (CELL_SIZE * ROWS as f32 + STATUS_HEIGHT) as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Text typed into the request panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub start: String,
    pub end: String,
    /// Whitespace-separated wall cities.
    pub walls: String,
}

impl From<RequestSettings> for RequestForm {
    fn from(request: RequestSettings) -> Self {
        RequestForm {
            start: request.start,
            end: request.end,
            walls: request.walls,
        }
    }
}

/// Front-end state: the session being drawn, the request panel and the
/// status line under the grid.
pub struct Viewer {
    session: Session,
    form: RequestForm,
    status: String,
}

impl Viewer {
    pub fn new(form: RequestForm) -> Self {
        Viewer {
            session: Session::new(),
            form,
            status: "Enter a request and click Navigate".to_string(),
        }
    }

    /// Stages the request currently in the form. A rejected request leaves the
    /// grid and the previously staged request untouched.
    pub fn submit(&mut self) {
        let walls = split_labels(&self.form.walls);
        match self.session.configure(&self.form.start, &self.form.end, walls) {
            Ok(configured) => {
                info!("Staged grid:\n{}", self.session.grid());
                self.status = staged_status(&configured);
            }
            Err(e) => {
                warn!("Invalid city name for start or end: {}", e);
                self.status = format!("Invalid city name for start or end. {}", e);
            }
        }
    }

    /// Runs the search for the staged request.
    pub fn run(&mut self) {
        if self.session.configured().is_none() {
            self.status = "Stage a valid request before running A*".to_string();
            return;
        }
        let result = self.session.run();
        info!("Grid after search:\n{}", self.session.grid());
        self.status = status_line(&result);
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Empty => WHITE,
        CellState::Wall => BLACK,
        CellState::Start => GREEN,
        CellState::Goal => RED,
        CellState::Path => BLUE,
    }
}

fn label_color(state: CellState) -> Color {
    match state {
        CellState::Empty | CellState::Start => DARKGRAY,
        CellState::Wall | CellState::Goal | CellState::Path => WHITE,
    }
}

fn staged_status(configured: &Configured) -> String {
    if configured.skipped_walls.is_empty() {
        "Request staged. Click Run A* to search".to_string()
    } else {
        format!(
            "Request staged, ignored walls: {}",
            configured.skipped_walls.join(" ")
        )
    }
}

fn status_line(result: &PathResult) -> String {
    if result.found {
        format!(
            "Path found: {} moves, {} nodes explored",
            result.search.total_cost.unwrap_or(0),
            result.search.nodes_explored
        )
    } else {
        format!(
            "No path found ({} nodes explored)",
            result.search.nodes_explored
        )
    }
}

fn draw_grid(session: &Session) {
    for row in 0..ROWS {
        for col in 0..COLS {
            let state = match session.cell_state_at(row, col) {
                Ok(state) => state,
                Err(e) => {
                    warn!(row, col, "Skipping cell: {}", e);
                    continue;
                }
            };
            let x = col as f32 * CELL_SIZE;
            let y = row as f32 * CELL_SIZE;
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, cell_color(state));
            draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, GRAY);
        }
    }

    // Every label sits on the diagonal cell of its index
    for (i, label) in session.labels().iter().enumerate() {
        let state = session.cell_state_at(i, i).unwrap_or_default();
        let origin = i as f32 * CELL_SIZE;
        draw_text(label, origin + 3.0, origin + CELL_SIZE - 6.0, 13.0, label_color(state));
    }
}

/// Draws the grid and the request panel each frame.
/// Returns when the window is asked to close with Escape.
pub async fn run_visualization_loop(mut viewer: Viewer) {
    info!("Visualization loop starting inside graphics module...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing the window.");
            break;
        }

        clear_background(LIGHTGRAY);
        draw_grid(&viewer.session);
        draw_text(viewer.status(), 10.0, GRID_SIZE + 36.0, 18.0, BLACK);

        let mut submit = false;
        let mut run = false;
        let form = &mut viewer.form;
        widgets::Window::new(
            hash!(),
            vec2(GRID_SIZE + 10.0, 10.0),
            vec2(PANEL_WIDTH - 20.0, 200.0),
        )
        .label("Request")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.input_text(hash!(), "Start", &mut form.start);
            ui.input_text(hash!(), "End", &mut form.end);
            ui.input_text(hash!(), "Walls", &mut form.walls);
            ui.separator();
            submit = ui.button(None, "Navigate");
            run = ui.button(None, "Run A*");
        });

        if submit {
            viewer.submit();
        }
        if run {
            viewer.run();
        }

        next_frame().await
    }
}
