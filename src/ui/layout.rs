//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{NoticeKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT), // Jobs
            Constraint::Length(BUTTON_HEIGHT), // New Job
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    render_sidebar_button(
        frame,
        chunks[1],
        "J",
        "Jobs",
        matches!(app.state.current_view, View::Jobs | View::JobDetail),
    );
    render_sidebar_button(
        frame,
        chunks[2],
        "n",
        "New Job",
        matches!(app.state.current_view, View::JobCreate),
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.api_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Transient notice
    if let Some(notice) = &app.state.notice {
        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&notice.message, Style::default().fg(color)));
    }

    // Active filters
    if let Some(location) = &app.state.filters.location {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("loc:{location}"),
            Style::default().fg(Color::Blue),
        ));
    }
    if let Some(job_type) = &app.state.filters.job_type {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("type:{job_type}"),
            Style::default().fg(Color::Blue),
        ));
    }
    if let Some((min, max)) = app.state.filters.salary {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("sal:{}-{}LPA", min / 100_000, max / 100_000),
            Style::default().fg(Color::Blue),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Jobs => {
            "h/j/k/l:nav  Enter:view  /:search  f:loc  t:type  s:salary  r:refresh  n:new"
                .to_string()
        }
        View::JobDetail => "j/k:scroll  Esc:back".to_string(),
        View::JobCreate => format!(
            "Tab:next  {}:publish  {}:draft  Esc:cancel",
            crate::platform::PUBLISH_SHORTCUT,
            crate::platform::DRAFT_SHORTCUT
        ),
    }
}
