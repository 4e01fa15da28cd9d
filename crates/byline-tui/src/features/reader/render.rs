//! Rendering for the article reader view.

use byline_core::api::Comment;
use byline_core::session::Session;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::ReaderState;
use crate::common::text::preview_line;

/// Renders the reader: article body on top, comments below, optional inline
/// comment input at the bottom.
pub fn render_reader(
    frame: &mut Frame,
    area: Rect,
    state: &ReaderState,
    session: &Session,
    loading: bool,
) {
    let input_height = if state.commenting { 3 } else { 0 };
    let comments_height = (area.height / 3).max(6).saturating_sub(input_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(comments_height),
            Constraint::Length(input_height),
        ])
        .split(area);

    render_article(frame, chunks[0], state, loading);
    render_comments(frame, chunks[1], state, session);
    if state.commenting {
        render_comment_input(frame, chunks[2], state);
    }
}

fn render_article(frame: &mut Frame, area: Rect, state: &ReaderState, loading: bool) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    match &state.article {
        Some(article) => {
            let author = article.author_username().unwrap_or("Unknown").to_string();
            let date = article.created_at.format("%Y-%m-%d").to_string();

            lines.push(Line::from(Span::styled(
                article.title.clone(),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(Span::styled(
                format!("by {author} • {date}"),
                Style::default().fg(Color::DarkGray),
            )));
            if !article.tags.is_empty() {
                let tags: Vec<&str> = article.tags.iter().map(|t| t.name.as_str()).collect();
                lines.push(Line::from(Span::styled(
                    format!("[{}]", tags.join(", ")),
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines.push(Line::from(""));
            for text_line in article.text.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }
        None => {
            let text = if loading { "Loading..." } else { "Article not found" };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Article "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(para, area);
}

fn render_comments(frame: &mut Frame, area: Rect, state: &ReaderState, session: &Session) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if state.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet. Be the first to share your thoughts!",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (idx, comment) in state.comments.iter().enumerate() {
            lines.push(comment_row(
                comment,
                idx == state.selected_comment,
                session,
                width,
            ));
        }
    }

    let title = format!(" Comments ({}) ", state.comments.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn comment_row(
    comment: &Comment,
    selected: bool,
    session: &Session,
    width: usize,
) -> Line<'static> {
    let pointer = if selected { "> " } else { "  " };
    let author = comment.author_username().unwrap_or("Unknown").to_string();
    let date = comment.created_at.format("%Y-%m-%d").to_string();

    let own = comment
        .author_username()
        .is_some_and(|name| session.is_user(name));
    let suffix = if own { "  (d deletes)" } else { "" };

    let text_style = if selected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let meta = format!("{author} • {date}: ");
    let budget = width.saturating_sub(meta.len() + pointer.len() + suffix.len());
    Line::from(vec![
        Span::styled(
            pointer.to_string(),
            Style::default().fg(if selected { Color::Cyan } else { Color::Reset }),
        ),
        Span::styled(meta, Style::default().fg(Color::DarkGray)),
        Span::styled(preview_line(&comment.text, budget), text_style),
        Span::styled(suffix.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

fn render_comment_input(frame: &mut Frame, area: Rect, state: &ReaderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Add a comment (Enter sends, Esc cancels) ");
    let para = Paragraph::new(Line::from(format!("{}▏", state.comment_input.value()))).block(block);
    frame.render_widget(para, area);
}
