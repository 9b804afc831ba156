use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::basket::SearchTab;

/// Renders the search form: lookup-type tabs and the query input.
pub fn render_search_section(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Search;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(border_style)
        .title(" Basket Lookup ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(tab_line(app.selected_tab), chunks[0]);

    let cursor = if focused { "_" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("Query: ", Style::default().fg(Color::Gray)),
        Span::raw(app.query.as_str()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(input, chunks[2]);
}

fn tab_line(selected: SearchTab) -> Paragraph<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for tab in SearchTab::ALL {
        let style = if tab == selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if tab == selected { "▸ " } else { "  " };
        spans.push(Span::styled(format!("{}{}", marker, tab.label()), style));
        spans.push(Span::raw("   "));
    }
    Paragraph::new(Line::from(spans))
}
