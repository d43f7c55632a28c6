use crate::prefs::Storage;
use crate::session::App;
use crate::ui::layout::calculate_study_chunks;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_study<S: Storage>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_study_chunks(f.area());

    let view_len = app.store.view().len();
    let header_text = if view_len == 0 {
        format!("No cards - {}", app.store.filter().label())
    } else {
        format!(
            "Card {} / {} - {}",
            app.store.cursor() + 1,
            view_len,
            app.store.filter().label()
        )
    };

    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let (title, content) = match app.store.current() {
        Some(card) if app.flipped => (
            "Answer",
            Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.answer.as_str(),
                    Style::default().fg(Color::Green),
                )),
            ]),
        ),
        Some(card) => (
            "Question",
            Text::from(vec![Line::from(""), Line::from(card.question.as_str())]),
        ),
        None => (
            "",
            Text::from(Line::from(Span::styled(
                "No flashcards here yet. Press 'a' to add one.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))),
        ),
    };

    let mut card_text = content;
    if let Some(notice) = &app.notice {
        card_text.push_line(Line::from(""));
        card_text.push_line(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let card_panel = Paragraph::new(card_text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card_panel, layout.card_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("f", key_style),
        Span::from(" Flip  "),
        Span::styled("n", key_style),
        Span::from(" Next  "),
        Span::styled("a", key_style),
        Span::from(" Add  "),
        Span::styled("c", key_style),
        Span::from(" Categories  "),
        Span::styled("x", key_style),
        Span::from(" Clear All  "),
        Span::styled("q", key_style),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
