//! Rendering for the article list views.

use byline_core::api::Article;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{ArticleListState, HOME_PREVIEW};
use crate::common::text::truncate_with_ellipsis;

/// Renders a list view: search bar on top, article rows below.
pub fn render_articles(
    frame: &mut Frame,
    area: Rect,
    state: &ArticleListState,
    home: bool,
    loading: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_search_bar(frame, chunks[0], state);
    render_rows(frame, chunks[1], state, home, loading);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &ArticleListState) {
    let (content, style) = if state.searching {
        (
            format!("{}▏", state.search.value()),
            Style::default().fg(Color::White),
        )
    } else if let Some(query) = &state.query {
        (
            format!("{query}  (press / then Esc to clear)"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (
            "press / to search".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let border_style = if state.searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");
    let para = Paragraph::new(Line::from(Span::styled(content, style))).block(block);
    frame.render_widget(para, area);
}

fn render_rows(frame: &mut Frame, area: Rect, state: &ArticleListState, home: bool, loading: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if !state.loaded {
        let text = if loading { "Loading..." } else { "" };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )));
    } else if state.articles.is_empty() {
        let text = match &state.query {
            Some(query) => format!("No articles matching \"{query}\"."),
            None => "No articles yet.".to_string(),
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let visible = state.visible_len(home);
        for (idx, article) in state.articles.iter().take(visible).enumerate() {
            lines.extend(article_row(article, idx == state.selected, width));
        }

        if home && state.articles.len() > HOME_PREVIEW {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "Showing the {HOME_PREVIEW} latest of {} articles. Press a for all.",
                    state.articles.len()
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let title = if home { " Latest Articles " } else { " All Articles " };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two lines per article: title row and a dimmed meta row.
fn article_row(article: &Article, selected: bool, width: usize) -> Vec<Line<'static>> {
    let pointer = if selected { "> " } else { "  " };
    let title_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let title = truncate_with_ellipsis(&article.title, width.saturating_sub(2));
    let author = article.author_username().unwrap_or("Unknown").to_string();
    let date = article.created_at.format("%Y-%m-%d").to_string();

    let mut meta = format!("  by {author} • {date}");
    if !article.tags.is_empty() {
        let tags: Vec<&str> = article.tags.iter().map(|t| t.name.as_str()).collect();
        meta.push_str(&format!(" • [{}]", tags.join(", ")));
    }

    vec![
        Line::from(vec![
            Span::styled(pointer.to_string(), title_style),
            Span::styled(title, title_style),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(&meta, width),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
