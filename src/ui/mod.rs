//! UI module for rendering the TUI

pub mod components;
mod forms;
mod jobs;
mod layout;

pub use layout::SIDEBAR_WIDTH;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Jobs => jobs::draw_list(frame, main_area, app),
        View::JobDetail => jobs::draw_detail(frame, main_area, app),
        View::JobCreate => forms::draw_create(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
