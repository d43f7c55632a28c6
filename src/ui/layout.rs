use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct StudyLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    StudyLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_study_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        // Margin 1 leaves 98 rows; the card panel takes the rest.
        assert_eq!(layout.card_area.height, 92);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);

        assert!(popup.x > 0);
        assert!(popup.y > 0);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
    }
}
