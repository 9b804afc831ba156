use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Creates a centered fixed-size popup area within the given area
pub fn centered_fixed_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical_layout[1]);

    horizontal_layout[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_area_is_centered_and_sized() {
        let parent = Rect::new(0, 0, 100, 40);
        let popup = centered_fixed_popup_area(parent, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn popup_never_exceeds_a_small_parent() {
        let parent = Rect::new(0, 0, 20, 6);
        let popup = centered_fixed_popup_area(parent, 40, 10);
        assert!(popup.width <= parent.width);
        assert!(popup.height <= parent.height);
    }
}
