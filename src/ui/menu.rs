use crate::models::{Difficulty, Learner};
use crate::orchestrator::{LearningSession, WordFilter};
use crate::ui::{difficulty_color, key_hint};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn tab<'a>(key: &'a str, label: &'a str, active: bool) -> Vec<Span<'a>> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };
    vec![key_hint(key), Span::styled(format!(" {} ", label), style), Span::from("  ")]
}

pub fn draw_menu<R: Rng>(
    f: &mut Frame,
    session: &LearningSession<'_, R>,
    learner: &Learner,
    notice: Option<&str>,
) {
    let language = session.language();
    let filter = session.filter();
    let pool = session.filtered_words();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(if notice.is_some() { 4 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!(
        "{} ({}) - {} script",
        language.name, language.native, language.script
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut tabs = Vec::new();
    tabs.extend(tab("a", "All Words", matches!(filter, WordFilter::All)));
    tabs.extend(tab("c", "By Category", matches!(filter, WordFilter::Category(_))));
    tabs.extend(tab(
        "d",
        "By Difficulty",
        matches!(filter, WordFilter::Difficulty(_)),
    ));
    let tabs = Paragraph::new(Line::from(tabs))
        .block(Block::default().borders(Borders::ALL).title("Study Mode"));
    f.render_widget(tabs, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let options: Vec<ListItem> = match filter {
        WordFilter::All => vec![ListItem::new(format!(
            "Every word in {} ({})",
            language.name,
            language.words.len()
        ))],
        WordFilter::Category(selected) => language
            .categories()
            .into_iter()
            .map(|category| {
                let count = language.words_by_category(category).len();
                let style = if category == selected.as_str() {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{} ({})", category, count)).style(style)
            })
            .collect(),
        WordFilter::Difficulty(selected) => Difficulty::ALL
            .iter()
            .map(|difficulty| {
                let count = language.words_by_difficulty(*difficulty).len();
                let mut style = Style::default().fg(difficulty_color(*difficulty));
                if difficulty == selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                ListItem::new(format!("{} ({})", difficulty, count)).style(style)
            })
            .collect(),
    };
    let options = List::new(options).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Word Set  ←/→ change"),
    );
    f.render_widget(options, body[0]);

    let mut info = vec![
        Line::from(format!("Learning as {}", learner.display_name())),
        Line::from(format!("Studying {} words ({})", pool.len(), filter)),
        Line::from(""),
        Line::from(vec![
            key_hint("f"),
            Span::from(format!(" Start Studying ({} words)", pool.len())),
        ]),
        Line::from(vec![
            key_hint("q"),
            Span::from(format!(" Start Quiz ({} questions)", pool.len())),
        ]),
    ];
    if let Some(blocker) = session.quiz_blocker() {
        info.push(Line::from(Span::styled(
            format!("Quiz unavailable: {}", blocker),
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(outcome) = session.last_flashcards() {
        info.push(Line::from(""));
        info.push(Line::from(format!(
            "Last flashcards: {}/{} known ({}%)",
            outcome.known, outcome.total, outcome.score_percent
        )));
    }

    info.push(Line::from(""));
    info.push(Line::from(Span::styled(
        "Progress by category",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for category in language.categories().into_iter().take(3) {
        let count = language.words_by_category(category).len();
        let percent = count * 100 / language.words.len();
        info.push(Line::from(format!("  {:<10} {:>3}%", category, percent)));
    }

    let info = Paragraph::new(info)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Session"));
    f.render_widget(info, body[1]);

    if let Some(notice) = notice {
        let notice = Paragraph::new(notice)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Notice"));
        f.render_widget(notice, chunks[3]);
    }

    let help = Paragraph::new(Line::from(vec![
        key_hint("a/c/d"),
        Span::from(" Filter  "),
        key_hint("←/→"),
        Span::from(" Change Set  "),
        key_hint("f"),
        Span::from(" Flashcards  "),
        key_hint("q"),
        Span::from(" Quiz  "),
        key_hint("Esc"),
        Span::from(" Languages  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}
