use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, TicketDetailState};
use crate::basket::{Severity, TicketData};
use crate::constants::{MASKED_PLACEHOLDER, NO_TICKET_MESSAGE};

/// A labeled field in the ticket-detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBlock<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub severity: Severity,
    pub masked: bool,
}

impl<'a> InfoBlock<'a> {
    fn new(label: &'static str, value: &'a str) -> Self {
        Self {
            label,
            value,
            severity: Severity::Neutral,
            masked: false,
        }
    }

    fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// The text actually shown: the fixed-length placeholder while a
    /// masked field is hidden, the literal value otherwise.
    pub fn display_value(&self, revealed: bool) -> &str {
        if self.masked && !revealed {
            MASKED_PLACEHOLDER
        } else {
            self.value
        }
    }
}

/// Main info fields, in the order the detail grid shows them.
pub fn main_info_blocks(data: &TicketData) -> Vec<InfoBlock<'_>> {
    vec![
        InfoBlock::new("Event", &data.event),
        InfoBlock::new("Venue", &data.venue),
        InfoBlock::new("Date", &data.date),
        InfoBlock::new("Seats", &data.seats),
        InfoBlock::new("Value", &data.value),
        InfoBlock::new("Status", &data.status),
        InfoBlock::new("Event Type", &data.event_type),
        InfoBlock::new("Line Ref", &data.line_ref),
    ]
}

/// Per-ticket fields, in the order the "Tickets" panel shows them. The
/// barcode always starts masked.
pub fn ticket_info_blocks(data: &TicketData) -> Vec<InfoBlock<'_>> {
    vec![
        InfoBlock::new("Ticket Ref", &data.ticket_ref),
        InfoBlock::new("Seat", &data.seats),
        InfoBlock::new("Price", &data.value),
        InfoBlock::new("Barcode", &data.barcode).masked(),
        InfoBlock::new("Remote Ref", &data.remote_ref),
        InfoBlock::new("Access Control Status", &data.access_control_status)
            .severity(Severity::Success),
        InfoBlock::new("Refund Amount", &data.refund_amount).severity(Severity::Error),
        InfoBlock::new("Refund Date", &data.refund_date),
        InfoBlock::new("Refund Channel", &data.refund_channel),
    ]
}

/// Renders the ticket-detail section body for the current detail state.
pub fn render_ticket_details(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ticket_state {
        TicketDetailState::Idle => render_notice(frame, area, NO_TICKET_MESSAGE, Color::Gray),
        TicketDetailState::Loading => {
            render_notice(frame, area, "Loading ticket details...", Color::Gray)
        }
        TicketDetailState::Error(message) => render_notice(frame, area, message, Color::Red),
        TicketDetailState::Ready(data) => render_ready(app, data, frame, area),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let notice = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}

fn render_ready(app: &App, data: &TicketData, frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(format!("Event - {}", data.event))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let heading_area = Rect { height: 1, ..area };
    frame.render_widget(heading, heading_area);

    let main_blocks = main_info_blocks(data);
    let main_area = Rect {
        y: area.y + 2,
        height: (main_blocks.len() as u16).min(area.height.saturating_sub(2)),
        ..area
    };
    render_info_table(&main_blocks, app.barcode_revealed, frame, main_area);

    let tickets_y = main_area.y + main_area.height + 1;
    if tickets_y >= area.y + area.height {
        return;
    }
    let tickets_heading = Paragraph::new("Tickets")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(
        tickets_heading,
        Rect {
            y: tickets_y,
            height: 1,
            ..area
        },
    );

    let ticket_blocks = ticket_info_blocks(data);
    let remaining = (area.y + area.height).saturating_sub(tickets_y + 1);
    let ticket_area = Rect {
        y: tickets_y + 1,
        height: (ticket_blocks.len() as u16).min(remaining),
        ..area
    };
    render_info_table(&ticket_blocks, app.barcode_revealed, frame, ticket_area);
}

fn render_info_table(blocks: &[InfoBlock<'_>], revealed: bool, frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = blocks
        .iter()
        .map(|block| {
            Row::new(vec![
                Cell::from(block.label).style(Style::default().fg(Color::Gray)),
                Cell::from(block.display_value(revealed).to_string())
                    .style(Style::default().fg(block.severity.color())),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(22), Constraint::Min(20)])
        .column_spacing(1);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_block_shows_placeholder_until_revealed() {
        let data = TicketData::demo();
        let blocks = ticket_info_blocks(&data);
        let barcode = blocks
            .iter()
            .find(|b| b.label == "Barcode")
            .expect("barcode block");

        assert!(barcode.masked);
        assert_eq!(barcode.display_value(false), MASKED_PLACEHOLDER);
        assert_eq!(barcode.display_value(true), "BARCODE123456");
        // Re-masking restores the placeholder.
        assert_eq!(barcode.display_value(false), MASKED_PLACEHOLDER);
    }

    #[test]
    fn placeholder_length_is_fixed_regardless_of_value() {
        let mut data = TicketData::demo();
        data.barcode = "X".to_string();
        let blocks = ticket_info_blocks(&data);
        let barcode = blocks.iter().find(|b| b.label == "Barcode").unwrap();
        assert_eq!(barcode.display_value(false).len(), 32);
    }

    #[test]
    fn unmasked_blocks_ignore_the_reveal_flag() {
        let data = TicketData::demo();
        let blocks = main_info_blocks(&data);
        for block in &blocks {
            assert_eq!(block.display_value(false), block.display_value(true));
        }
    }

    #[test]
    fn field_order_matches_the_screen() {
        let data = TicketData::demo();
        let main: Vec<&str> = main_info_blocks(&data).iter().map(|b| b.label).collect();
        assert_eq!(
            main,
            [
                "Event",
                "Venue",
                "Date",
                "Seats",
                "Value",
                "Status",
                "Event Type",
                "Line Ref",
            ]
        );

        let tickets: Vec<&str> = ticket_info_blocks(&data).iter().map(|b| b.label).collect();
        assert_eq!(
            tickets,
            [
                "Ticket Ref",
                "Seat",
                "Price",
                "Barcode",
                "Remote Ref",
                "Access Control Status",
                "Refund Amount",
                "Refund Date",
                "Refund Channel",
            ]
        );
    }

    #[test]
    fn severity_tints_follow_the_screen() {
        let data = TicketData::demo();
        let blocks = ticket_info_blocks(&data);
        let find = |label: &str| blocks.iter().find(|b| b.label == label).unwrap();
        assert_eq!(find("Access Control Status").severity, Severity::Success);
        assert_eq!(find("Refund Amount").severity, Severity::Error);
        assert_eq!(find("Ticket Ref").severity, Severity::Neutral);
    }
}
