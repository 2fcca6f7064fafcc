use crate::flashcard::FlashcardSession;
use crate::models::Language;
use crate::ui::layout::calculate_card_chunks;
use crate::ui::{difficulty_color, key_hint};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn draw_flashcard(
    f: &mut Frame,
    cards: &FlashcardSession,
    language: &Language,
    audio_available: bool,
) {
    let layout = calculate_card_chunks(f.area());
    let word = cards.current_word();

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Card {} / {} - {} Flashcards",
            cards.current_index() + 1,
            cards.card_count(),
            language.name
        )))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(cards.progress_percent());
    f.render_widget(progress, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(vec![
        Span::styled(
            word.difficulty.to_string(),
            Style::default().fg(difficulty_color(word.difficulty)),
        ),
        Span::from("  "),
        Span::styled(
            word.category.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    text.push_line(Line::from(""));

    if cards.is_flipped() {
        text.push_line(Line::from(Span::styled(
            word.meaning.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(format!("{}  ({})", word.native, word.pronunciation)));
    } else {
        text.push_line(Line::from(Span::styled(
            word.native.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(word.pronunciation.clone()));
        if cards.is_showing_meaning() {
            text.push_line(Line::from(""));
            text.push_line(Line::from(Span::styled(
                format!("Meaning: {}", word.meaning),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let side = if cards.is_flipped() { "Back" } else { "Front" };
    let card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(side));
    f.render_widget(card, layout.card_area);

    let stats = Paragraph::new(format!(
        "Studied: {}/{}    Known: {}",
        cards.studied_count(),
        cards.card_count(),
        cards.known_count()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(stats, layout.stats_area);

    let mut help = vec![
        key_hint("Space"),
        Span::from(" Flip  "),
        key_hint("m"),
        Span::from(" Meaning  "),
    ];
    if audio_available {
        help.extend([key_hint("p"), Span::from(" Listen  ")]);
    }
    help.extend([
        key_hint("k"),
        Span::from(" Know It  "),
        key_hint("n"),
        Span::from(" Need Practice  "),
        key_hint("←/→"),
        Span::from(if cards.is_last() {
            " Prev/Complete  "
        } else {
            " Prev/Next  "
        }),
        key_hint("Esc"),
        Span::from(" Menu"),
    ]);
    let help = Paragraph::new(Line::from(help))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
