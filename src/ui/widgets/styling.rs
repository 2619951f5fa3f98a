use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the current tab.
///
pub fn active_tab_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for headings inside cards.
///
pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_secondary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for secondary, low-emphasis text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return a rounded, bordered block with the normal border color.
///
pub fn card<'a>(theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(normal_block_border_style(theme))
}

/// Return a card with a bold title.
///
pub fn titled_card<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    card(theme).title(ratatui::text::Span::styled(title, heading_style(theme)))
}
