//! Navigation bar.
//!
//! Renders the view tabs on the left and the session actions on the right.
//! Which actions appear is gated by the session state: login/register while
//! anonymous, the username plus compose/logout once authenticated.

use byline_core::session::Session;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::View;

pub fn render_navbar(frame: &mut Frame, area: Rect, view: &View, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(50)])
        .split(area);

    frame.render_widget(
        Paragraph::new(left_line(view)).alignment(Alignment::Left),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(right_line(session)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn left_line(view: &View) -> Line<'static> {
    let tab = |label: &str, key: &str, active: bool| {
        let style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![
            Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{label}  "), style),
        ]
    };

    let mut spans = vec![Span::styled(
        "byline  ",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )];
    spans.extend(tab("Home", "h", matches!(view, View::Home)));
    spans.extend(tab("Articles", "a", matches!(view, View::Articles)));
    if let View::Reader { .. } = view {
        spans.push(Span::styled(
            "Reading",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn right_line(session: &Session) -> Line<'static> {
    let key_style = Style::default().fg(Color::DarkGray);
    let label_style = Style::default().fg(Color::Gray);

    match session.username() {
        Some(username) => Line::from(vec![
            Span::styled(
                format!("{username}  "),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("[n] ", key_style),
            Span::styled("new article  ", label_style),
            Span::styled("[x] ", key_style),
            Span::styled("logout", label_style),
        ]),
        None => Line::from(vec![
            Span::styled("[l] ", key_style),
            Span::styled("login  ", label_style),
            Span::styled("[r] ", key_style),
            Span::styled("register", label_style),
        ]),
    }
}
