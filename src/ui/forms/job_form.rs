//! Job posting form rendering

use super::field_renderer::{draw_dropdown, draw_field};
use crate::app::App;
use crate::state::{
    JobPostingForm, BUTTON_CANCEL, BUTTON_PUBLISH, BUTTON_SAVE_DRAFT, FIELD_COMPANY_NAME,
    FIELD_DEADLINE, FIELD_DESCRIPTION, FIELD_JOB_TYPE, FIELD_LOCATION, FIELD_MAX_SALARY,
    FIELD_MIN_SALARY, FIELD_TITLE,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a field row: bordered box plus its message line
const FIELD_ROW_HEIGHT: u16 = 4;

/// Draw the job posting create form
pub fn draw_create(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Create Job Opening ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROW_HEIGHT), // title | company
            Constraint::Length(FIELD_ROW_HEIGHT), // location | job type
            Constraint::Length(FIELD_ROW_HEIGHT), // min | max salary
            Constraint::Length(FIELD_ROW_HEIGHT), // deadline
            Constraint::Min(5),                   // description
            Constraint::Length(3),                // buttons
            Constraint::Length(1),                // help
        ])
        .split(inner);

    let top = split_pair(rows[0]);
    let middle = split_pair(rows[1]);
    let salaries = split_pair(rows[2]);
    let deadline_area = split_pair(rows[3])[0];

    draw_indexed_field(frame, top[0], form, FIELD_TITLE);
    draw_indexed_field(frame, top[1], form, FIELD_COMPANY_NAME);
    draw_indexed_field(frame, middle[0], form, FIELD_LOCATION);
    draw_indexed_field(frame, middle[1], form, FIELD_JOB_TYPE);
    draw_indexed_field(frame, salaries[0], form, FIELD_MIN_SALARY);
    draw_indexed_field(frame, salaries[1], form, FIELD_MAX_SALARY);
    draw_indexed_field(frame, deadline_area, form, FIELD_DEADLINE);
    draw_indexed_field(frame, rows[4], form, FIELD_DESCRIPTION);

    draw_buttons(frame, rows[5], app, form);
    draw_help(frame, rows[6]);

    // Dropdown popups last so they overlay the rows below them; both can
    // be open at once
    if form.location.is_open() {
        draw_dropdown(frame, middle[0], &form.location);
    }
    if form.job_type.is_open() {
        draw_dropdown(frame, middle[1], &form.job_type);
    }
}

fn split_pair(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_indexed_field(frame: &mut Frame, area: Rect, form: &JobPostingForm, index: usize) {
    if let Some(field) = form.get_field(index) {
        draw_field(
            frame,
            area,
            field,
            form.active_field_index == index,
            form.error(index),
        );
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App, form: &JobPostingForm) {
    use crate::ui::components::render_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let on_buttons = form.is_buttons_row_active();

    let draft_label = if app.state.draft_just_saved() {
        "Draft Saved"
    } else {
        "Save Draft"
    };
    render_button(
        frame,
        chunks[0],
        draft_label,
        on_buttons && form.selected_button == BUTTON_SAVE_DRAFT,
        Some(Color::Yellow),
    );

    let publish_label = if app.state.submit_in_flight {
        "Publishing..."
    } else {
        "Publish"
    };
    render_button(
        frame,
        chunks[1],
        publish_label,
        on_buttons && form.selected_button == BUTTON_PUBLISH,
        Some(Color::Green),
    );

    render_button(
        frame,
        chunks[2],
        "Cancel",
        on_buttons && form.selected_button == BUTTON_CANCEL,
        Some(Color::Gray),
    );
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::PUBLISH_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": publish  "),
        Span::styled(
            crate::platform::DRAFT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": save draft  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
