use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::basket::{BasketSummary, Severity};
use crate::constants::CARD_HEIGHT;

/// One labeled value in the summary grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub label: &'static str,
    pub value: String,
    pub severity: Severity,
}

impl StatusCard {
    fn new(label: &'static str, value: impl Into<String>, severity: Severity) -> Self {
        Self {
            label,
            value: value.into(),
            severity,
        }
    }
}

/// The fixed, ordered card set for a basket summary. Every card is a
/// straight pass-through except the last: the source screen hard-codes
/// that card's text to "Warning" and never reads
/// `tickets_not_delivered`, and we render what it rendered.
pub fn summary_cards(data: &BasketSummary) -> Vec<StatusCard> {
    vec![
        StatusCard::new("Status", &data.status, Severity::Warning),
        StatusCard::new("Channel", &data.channel, Severity::Neutral),
        StatusCard::new("Items", data.items.to_string(), Severity::Neutral),
        StatusCard::new("Value", &data.value, Severity::Neutral),
        StatusCard::new("User", &data.user, Severity::Neutral),
        StatusCard::new("Current Balance", &data.current_balance, Severity::Neutral),
        StatusCard::new("Remote Status", &data.remote_status, Severity::Success),
        StatusCard::new(
            "Remote Payment Status",
            &data.remote_payment_status,
            Severity::Error,
        ),
        StatusCard::new("Tickets Not Delivered", "Warning", Severity::Warning),
    ]
}

/// Renders the basket summary header and the 3x3 card grid.
pub fn render_summary_section(app: &App, frame: &mut Frame, area: Rect) {
    let Some(data) = &app.summary else {
        return;
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Basket Summary ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(CARD_HEIGHT * 3),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(format!("Ref: {}", data.reference)),
        Line::styled(
            format!("Created: {}", data.created),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(header, chunks[0]);

    render_card_grid(&summary_cards(data), frame, chunks[1]);
}

fn render_card_grid(cards: &[StatusCard], frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
        ])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

        for (col_index, col_area) in cols.iter().enumerate() {
            if let Some(card) = cards.get(row_index * 3 + col_index) {
                render_card(card, frame, *col_area);
            }
        }
    }
}

fn render_card(card: &StatusCard, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(card.label)
        .title_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = Paragraph::new(card.value.as_str())
        .style(Style::default().fg(card.severity.color()));
    frame.render_widget(value, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock_basket_summary;

    #[test]
    fn exactly_nine_cards_in_fixed_order() {
        let cards = summary_cards(&mock_basket_summary());
        let labels: Vec<&str> = cards.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            [
                "Status",
                "Channel",
                "Items",
                "Value",
                "User",
                "Current Balance",
                "Remote Status",
                "Remote Payment Status",
                "Tickets Not Delivered",
            ]
        );
    }

    #[test]
    fn card_values_pass_through_unchanged() {
        let data = mock_basket_summary();
        let cards = summary_cards(&data);
        assert_eq!(cards[0].value, "Completed - Refunded");
        assert_eq!(cards[1].value, "WEB");
        assert_eq!(cards[2].value, "1");
        assert_eq!(cards[7].value, "Payment Not Found");
        assert_eq!(cards[7].severity, Severity::Error);
    }

    #[test]
    fn delivery_card_ignores_the_record_field() {
        let mut data = mock_basket_summary();
        data.tickets_not_delivered = "All Delivered".to_string();
        let cards = summary_cards(&data);
        assert_eq!(cards[8].value, "Warning");
        assert_eq!(cards[8].severity, Severity::Warning);
    }
}
