use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus, PopupState};
use crate::basket::Section;
use crate::components::{details, popups, search, summary};
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, INTRO_HEIGHT, SEARCH_HEIGHT};

const SUMMARY_HEIGHT: u16 = 13;
const DETAILS_HEIGHT: u16 = 23;
const PAYMENT_OPEN_HEIGHT: u16 = 2;

/// Render the entire application UI
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INTRO_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    render_header(app, frame, chunks[0]);
    render_intro(frame, chunks[1]);
    search::render_search_section(app, frame, chunks[2]);
    render_main(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);

    if let PopupState::Message(message) = &app.popup_state {
        popups::render_message_popup(frame, size, message);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let breadcrumb = Line::from(vec![
        Span::styled("Customer Service", Style::default().fg(Color::Gray)),
        " > ".into(),
        "Basket Lookup".bold(),
    ]);
    frame.render_widget(Paragraph::new(breadcrumb), inner);

    if let Some(last_lookup) = &app.last_lookup {
        let text = format!("Last lookup: {}", last_lookup);
        let width = (text.len() as u16).min(inner.width / 2);
        let stamp_area = Rect::new(inner.right().saturating_sub(width), inner.y, width, 1);
        let stamp = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        frame.render_widget(stamp, stamp_area);
    }
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let intro = Paragraph::new(
        "Look up basket details using the basket reference, mobile number, or email.",
    )
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(intro, area);
}

fn render_main(app: &App, frame: &mut Frame, area: Rect) {
    if app.summary.is_none() {
        let hint = Paragraph::new("No basket loaded. Enter a query above and press Enter.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let details_height = if app.transaction_section_open {
        DETAILS_HEIGHT
    } else {
        1
    };
    let payment_height = if app.payment_section_open {
        PAYMENT_OPEN_HEIGHT
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(details_height),
            Constraint::Length(payment_height),
            Constraint::Min(0),
        ])
        .split(area);

    summary::render_summary_section(app, frame, chunks[0]);
    render_transaction_section(app, frame, chunks[1]);
    render_payment_section(app, frame, chunks[2]);
}

fn render_transaction_section(app: &App, frame: &mut Frame, area: Rect) {
    render_section_header(
        frame,
        area,
        Section::TransactionCompletion,
        app.transaction_section_open,
        't',
    );

    if app.transaction_section_open && area.height > 1 {
        let content = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        details::render_ticket_details(app, frame, content);
    }
}

fn render_payment_section(app: &App, frame: &mut Frame, area: Rect) {
    render_section_header(frame, area, Section::Payment, app.payment_section_open, 'p');

    if app.payment_section_open && area.height > 1 {
        let content = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        let placeholder = Paragraph::new("Payment details go here.")
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(placeholder, content);
    }
}

fn render_section_header(frame: &mut Frame, area: Rect, section: Section, open: bool, key: char) {
    if area.height == 0 {
        return;
    }
    let marker = if open { "▾" } else { "▸" };
    let header = Line::from(vec![
        Span::styled(
            format!("{} {}", marker, section.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", key), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(header),
        Rect { height: 1, ..area },
    );
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let footer_text = match app.focus {
        Focus::Search => "Enter:Search  Tab:Lookup Type  Ctrl+U:Clear  Esc:Sections",
        Focus::Sections => {
            "q:Quit  /:Search  t:Transaction  p:Payment  b:Barcode  r:Refund  a:Refund All  c:Copy Ref"
        }
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
