use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub prompt_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub breakdown_area: Rect,
    pub review_area: Rect,
    pub footer_area: Rect,
}

pub struct CardLayout {
    pub header_area: Rect,
    pub card_area: Rect,
    pub stats_area: Rect,
    pub help_area: Rect,
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        prompt_area: chunks[1],
        options_area: chunks[2],
        feedback_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(3)])
        .split(columns[0]);

    SummaryLayout {
        header_area: chunks[0],
        score_area: left[0],
        breakdown_area: left[1],
        review_area: columns[1],
        footer_area: chunks[2],
    }
}

pub fn calculate_card_chunks(area: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    CardLayout {
        header_area: chunks[0],
        card_area: chunks[1],
        stats_area: chunks[2],
        help_area: chunks[3],
    }
}
