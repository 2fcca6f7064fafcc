use crate::models::Language;
use crate::quiz::QuizEngine;
use crate::ui::layout::{calculate_quiz_chunks, centered_rect};
use crate::ui::{difficulty_color, key_hint};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(
    f: &mut Frame,
    engine: &QuizEngine,
    language: &Language,
    highlighted: usize,
    notice: Option<&str>,
) {
    let layout = calculate_quiz_chunks(f.area());
    let question = engine.current_question();
    let answer = engine.current_result();

    let header = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Question {} of {} - {} Quiz - {}s",
            engine.current_index() + 1,
            engine.question_count(),
            language.name,
            engine.elapsed().as_secs()
        )))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(engine.progress_percent());
    f.render_widget(header, layout.header_area);

    let mut prompt = Text::default();
    prompt.push_line(Line::from("What does this mean?"));
    prompt.push_line(Line::from(Span::styled(
        question.word.native.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    prompt.push_line(Line::from(vec![
        Span::from(question.word.pronunciation.clone()),
        Span::from("  "),
        Span::styled(
            question.word.difficulty.to_string(),
            Style::default().fg(difficulty_color(question.word.difficulty)),
        ),
        Span::from("  "),
        Span::styled(
            question.word.category.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    let prompt = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, layout.prompt_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let label = format!("{}. {}", i + 1, option);
            let style = match answer {
                Some(_) if *option == question.correct_answer => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(result) if *option == result.selected_answer => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if i == highlighted => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                None => Style::default(),
            };
            ListItem::new(label).style(style)
        })
        .collect();
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let feedback = match (answer, notice) {
        (Some(result), _) if result.is_correct => Line::from(Span::styled(
            "Correct! Well done!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        (Some(result), _) => Line::from(Span::styled(
            format!("Incorrect. The correct answer is: {}", result.correct_answer),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        (None, Some(notice)) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        (None, None) => Line::from(format!(
            "Score so far: {}/{}",
            engine.correct_count(),
            engine.results().len()
        )),
    };
    let feedback = Paragraph::new(feedback)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let mut help = Vec::new();
    if answer.is_some() {
        help.extend([
            key_hint("Enter"),
            Span::from(if engine.is_last_question() {
                " Complete Quiz  "
            } else {
                " Next Question  "
            }),
        ]);
    } else {
        help.extend([
            key_hint("↑/↓"),
            Span::from(" Choose  "),
            key_hint("1-4"),
            Span::from(" Answer  "),
            key_hint("Enter"),
            Span::from(" Check Answer  "),
        ]);
    }
    help.extend([
        key_hint("p"),
        Span::from(" Listen  "),
        key_hint("r"),
        Span::from(" Restart  "),
        key_hint("Esc"),
        Span::from(" Quit Quiz"),
    ]);
    let help = Paragraph::new(Line::from(help))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Return to the menu? Your answers so far will be discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
