//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw a form field with its inline validation message.
///
/// The last row of `area` is reserved for the message; the rest holds
/// the bordered field box.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let (field_area, error_area) = if area.height > 3 {
        (
            Rect {
                height: area.height - 1,
                ..area
            },
            Some(Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            }),
        )
    } else {
        (area, None)
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() {
        placeholder(field, is_active)
    } else {
        display_value
    };
    let placeholder_shown = field.as_text().is_empty() && !display_str.is_empty();

    let value_style = if placeholder_shown {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    // Select fields take values from a dropdown, so no text cursor
    let cursor = if is_active && !field.is_select() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let mut spans = vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ];
        if field.is_select() {
            spans.push(Span::styled(" ▾", Style::default().fg(Color::DarkGray)));
        }
        Paragraph::new(Line::from(spans))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), field_area);

    if let (Some(message), Some(error_area)) = (error, error_area) {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
            error_area,
        );
    }
}

fn placeholder(field: &FormField, is_active: bool) -> String {
    match &field.value {
        FieldValue::Select { .. } => format!("Select {}", field.label.to_lowercase()),
        FieldValue::Date(_) => "YYYY-MM-DD".to_string(),
        FieldValue::Text(_) => {
            if is_active {
                String::new()
            } else {
                "(empty)".to_string()
            }
        }
    }
}

/// Draw an open dropdown list right below its field box.
///
/// Rendered after all fields so the popup sits on top of whatever is
/// underneath.
pub fn draw_dropdown(frame: &mut Frame, field_area: Rect, field: &FormField) {
    let options = field.options();
    if options.is_empty() {
        return;
    }

    let popup_area = Rect {
        x: field_area.x,
        y: field_area.y + 3,
        width: field_area.width,
        height: (options.len() as u16 + 2).min(frame.area().height.saturating_sub(field_area.y + 3)),
    };

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let style = if index == field.highlight() {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(format!(" {option} "), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(list, popup_area);
}
