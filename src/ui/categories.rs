use crate::ui::layout::centered_rect;
use crate::utils::category_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn draw_categories(f: &mut Frame, choices: &[String], selected_index: usize) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            // The show-all entry is never empty; only real categories
            // need the placeholder label.
            ListItem::new(category_label(choice)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Categories "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, chunks[0]);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled("↑/↓", key_style),
        Span::from(" Navigate  "),
        Span::styled("Enter", key_style),
        Span::from(" Filter  "),
        Span::styled("d", key_style),
        Span::from(" Delete  "),
        Span::styled("Esc", key_style),
        Span::from(" Back"),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
