use crate::models::Language;
use crate::results::QuizReport;
use crate::ui::key_hint;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{calculate_max_scroll, format_seconds, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn score_color(score: u8) -> Color {
    match score {
        80..=100 => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Draws the results screen and returns the scroll offset after clamping it
/// to the review content.
pub fn draw_summary(f: &mut Frame, report: &QuizReport, language: &Language, scroll: u16) -> u16 {
    let layout = calculate_summary_chunks(f.area());
    let summary = &report.summary;

    let title = Paragraph::new(format!("Quiz Results - {}", language.name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let color = score_color(summary.score_percent);
    let mut score_text = Text::default();
    score_text.push_line(Line::from(Span::styled(
        format!("{}%", summary.score_percent),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    score_text.push_line(Line::from(format!(
        "Grade: {}  {}",
        summary.grade, summary.badge
    )));
    score_text.push_line(Line::from(format!(
        "Correct: {}/{}  Incorrect: {}",
        summary.correct_count, summary.total_count, summary.incorrect_count
    )));
    score_text.push_line(Line::from(format!(
        "Avg time: {}",
        format_seconds(summary.average_time_secs)
    )));
    let score = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, layout.score_area);

    let breakdown: Vec<Line> = summary
        .category_breakdown
        .iter()
        .map(|(category, stats)| {
            Line::from(vec![
                Span::from(format!("{:<10} ", truncate_string(category, 10))),
                Span::styled(
                    format!("{}/{} ({}%)", stats.correct, stats.total, stats.percent()),
                    Style::default().fg(score_color(stats.percent())),
                ),
            ])
        })
        .collect();
    let breakdown = Paragraph::new(breakdown)
        .block(Block::default().borders(Borders::ALL).title("By Category"));
    f.render_widget(breakdown, layout.breakdown_area);

    let review_width = layout.review_area.width.saturating_sub(4) as usize;
    let mut review = Vec::new();
    for (i, result) in report.results.iter().enumerate() {
        let (mark, mark_color) = if result.is_correct {
            ("[✓]", Color::Green)
        } else {
            ("[✗]", Color::Red)
        };
        review.push(Line::from(vec![
            Span::styled(mark, Style::default().fg(mark_color)),
            Span::from(truncate_string(
                &format!(
                    " {}. {} ({})",
                    i + 1,
                    result.word.native,
                    result.word.pronunciation
                ),
                review_width,
            )),
        ]));
        let detail = if result.is_correct {
            format!("   {}", result.correct_answer)
        } else {
            format!(
                "   You: {}  Answer: {}",
                result.selected_answer, result.correct_answer
            )
        };
        review.push(Line::from(truncate_string(&detail, review_width)));
        review.push(Line::from(""));
    }

    let visible = layout.review_area.height.saturating_sub(2) as usize;
    let scroll = scroll.min(calculate_max_scroll(review.len(), visible));
    let review = Paragraph::new(review)
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);

    let footer = Paragraph::new(Line::from(vec![
        key_hint("r"),
        Span::from(" Retake Quiz  "),
        key_hint("f"),
        Span::from(" Study Flashcards  "),
        key_hint("m"),
        Span::from(" Menu  "),
        key_hint("↑/↓"),
        Span::from(" Scroll"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, layout.footer_area);

    scroll
}
