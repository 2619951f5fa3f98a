use super::Frame;
use crate::fixtures::{ARTICLES, ARTICLE_READ_TIME, FEATURED_ARTICLE};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the featured article and the article list.
///
pub fn articles(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut constraints = vec![Constraint::Length(4)];
    constraints.extend(ARTICLES.iter().map(|_| Constraint::Length(4)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let featured = Paragraph::new(vec![
        Line::from(Span::styled(
            FEATURED_ARTICLE.title,
            styling::heading_style(theme),
        )),
        Line::from(Span::styled(
            FEATURED_ARTICLE.summary,
            styling::normal_text_style(theme),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(styling::card(theme).border_style(styling::active_block_border_style(theme)));
    frame.render_widget(featured, rows[0]);

    for (i, title) in ARTICLES.iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(*title, styling::normal_text_style(theme))),
            Line::from(Span::styled(
                ARTICLE_READ_TIME,
                styling::muted_text_style(theme),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(styling::card(theme)),
            rows[i + 1],
        );
    }
}
