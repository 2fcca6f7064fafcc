use crate::app::App;
use crate::ui::key_hint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_languages(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!(
        "Indic Flashcards v{} - Welcome, {}",
        env!("CARGO_PKG_VERSION"),
        app.learner.display_name()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let items: Vec<ListItem> = app
        .catalog
        .languages()
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let style = if i == app.selected_language {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "{} ({}) - {} words",
                language.name,
                language.native,
                language.words.len()
            ))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Languages")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, body[0]);

    let mut details = Vec::new();
    if let Some(language) = app.selected_language() {
        details.push(Line::from(Span::styled(
            format!("{} - {}", language.name, language.native),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        details.push(Line::from(format!("Script: {}", language.script)));
        details.push(Line::from(format!(
            "Learn {} with {} essential words and phrases",
            language.name,
            language.words.len()
        )));
        details.push(Line::from(format!(
            "Categories: {}",
            language.categories().join(", ")
        )));
        details.push(Line::from(""));
        details.push(Line::from("Sample words:"));
        for word in language.words.iter().take(3) {
            details.push(Line::from(format!(
                "  {}  {}  - {}",
                word.native, word.pronunciation, word.meaning
            )));
        }
    }
    let preview = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Preview"));
    f.render_widget(preview, body[1]);

    let help = Paragraph::new(Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Navigate  "),
        key_hint("Enter"),
        Span::from(" Start Learning  "),
        key_hint("q/Esc"),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
