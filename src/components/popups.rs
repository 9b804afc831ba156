use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::components::helpers::centered_fixed_popup_area;

/// Render a message popup.
pub fn render_message_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_fixed_popup_area(area, 46, 6);

    let popup_block = Block::default()
        .title(" Message ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner_area);

    let help_text = "Press Esc to continue";
    let text_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height.saturating_sub(2),
        popup_area.width,
        1,
    );
    let help_msg = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(help_msg, text_area);
}
