use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

pub fn draw_splash(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Percentage(40),
        ])
        .split(f.area());

    let content = vec![
        Line::from("Flashcard Study").style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("Press any key to continue").style(Style::default().fg(Color::DarkGray)),
    ];

    let splash = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(splash, chunks[1]);
}
