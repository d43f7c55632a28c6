use crate::models::{AddCardField, AddCardForm};
use crate::ui::layout::centered_rect;
use crate::utils::cursor_column;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn draw_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(field, area);
}

pub fn draw_add_card(f: &mut Frame, form: &AddCardForm) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Add Flashcard ");
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let focused = form.focused;
    draw_field(
        f,
        chunks[0],
        "Question",
        &form.question,
        focused == AddCardField::Question,
    );
    draw_field(
        f,
        chunks[1],
        "Answer",
        &form.answer,
        focused == AddCardField::Answer,
    );
    draw_field(
        f,
        chunks[2],
        "Category (optional)",
        &form.category,
        focused == AddCardField::Category,
    );

    if let Some(hint) = &form.hint {
        let warning = Paragraph::new(Span::styled(
            hint.as_str(),
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center);
        f.render_widget(warning, chunks[3]);
    }

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled("Tab", key_style),
        Span::from(" Next Field  "),
        Span::styled("Enter", key_style),
        Span::from(" Save  "),
        Span::styled("Esc", key_style),
        Span::from(" Cancel"),
    ])])
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);

    // Put the terminal cursor inside the focused field's border.
    let field_area = match focused {
        AddCardField::Question => chunks[0],
        AddCardField::Answer => chunks[1],
        AddCardField::Category => chunks[2],
    };
    let column = cursor_column(form.focused_text(), form.cursor_position) as u16;
    f.set_cursor_position(Position::new(
        field_area.x + 1 + column.min(field_area.width.saturating_sub(2)),
        field_area.y + 1,
    ));
}
