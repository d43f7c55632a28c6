use crate::models::ClearTarget;
use crate::ui::layout::centered_rect;
use crate::utils::{category_label, truncate_string};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn draw_clear_confirmation(f: &mut Frame, target: &ClearTarget) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let prompt = match target {
        ClearTarget::All => "Delete ALL flashcards?".to_string(),
        ClearTarget::Category(category) => {
            format!(
                "Delete every card in '{}'?",
                truncate_string(category_label(category), 30)
            )
        }
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("This cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key_style),
            Span::from(" Delete  "),
            Span::styled("n", key_style),
            Span::from(" Cancel"),
        ]),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Confirm "),
        );
    f.render_widget(popup, area);
}
