//! Job listing and detail rendering

use crate::app::App;
use crate::state::Job;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Card height in rows (borders + four content lines)
const CARD_HEIGHT: u16 = 6;

/// Draw the jobs listing view (filter bar + card grid)
pub fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Card grid
        ])
        .split(area);

    draw_filter_bar(frame, chunks[0], app);

    if app.state.jobs.is_empty() {
        draw_empty_state(frame, chunks[1]);
    } else {
        draw_card_grid(frame, chunks[1], app);
    }
}

fn draw_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.search_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let cursor = if app.state.search_focused { "▌" } else { "" };
    let query = &app.state.filters.search_query;
    let content = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(query.as_str()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]);

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No jobs found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Try adjusting your filters or check back later.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_card_grid(frame: &mut Frame, area: Rect, app: &App) {
    let columns = app.calculate_grid_columns();
    let now = app.clock.now();

    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = app.state.selected_index / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let card_width = area.width / columns as u16;

    for (index, job) in app.state.jobs.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = index % columns;

        let card_area = Rect {
            x: area.x + col as u16 * card_width,
            y: area.y + ((row - first_row) as u16) * CARD_HEIGHT,
            width: card_width.min(area.width.saturating_sub(col as u16 * card_width)),
            height: CARD_HEIGHT,
        }
        .intersection(area);
        if card_area.width == 0 || card_area.height == 0 {
            continue;
        }

        draw_card(frame, card_area, job, now, index == app.state.selected_index);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, job: &Job, now: DateTime<Utc>, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(job.company_name.clone()),
        Line::from(vec![
            Span::raw(location_mode(&job.location)),
            Span::raw(" · "),
            Span::raw(format_salary(&job.salary_range)),
        ]),
        Line::from(Span::styled(
            posted_time(job.created_at, now),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the job detail view
pub fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(job) = app.state.detail_job() else {
        draw_empty_state(frame, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            job.company_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(job.location.clone()),
            Span::raw(" · "),
            Span::raw(job.job_type.clone()),
            Span::raw(" · "),
            Span::raw(format_salary(&job.salary_range)),
        ]),
    ];

    if let Some(deadline) = job.application_deadline {
        lines.push(Line::from(Span::styled(
            format!("Apply by {deadline}"),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    for text in job.description.lines().filter(|l| !l.trim().is_empty()) {
        lines.push(Line::from(text.to_string()));
    }

    let block = Block::default()
        .title(format!(" {} ", job.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll_offset as u16, 0))
            .block(block),
        area,
    );
}

/// Relative posted time: "Recently" under an hour, then hours, then days
pub fn posted_time(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created) = created_at else {
        return "Recently".to_string();
    };

    let hours = now.signed_duration_since(created).num_hours();
    if hours < 1 {
        "Recently".to_string()
    } else if hours < 24 {
        format!("{hours}h Ago")
    } else {
        format!("{}d Ago", hours / 24)
    }
}

/// Salary in lakhs per annum, e.g. "1200000" -> "12LPA"
pub fn format_salary(salary_range: &str) -> String {
    match salary_range.parse::<u64>() {
        Ok(amount) => format!("{}LPA", amount / 100_000),
        Err(_) => "—".to_string(),
    }
}

/// Remote postings show as Remote, everything else is Onsite
pub fn location_mode(location: &str) -> &'static str {
    if location.eq_ignore_ascii_case("remote") {
        "Remote"
    } else {
        "Onsite"
    }
}
