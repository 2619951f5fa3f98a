use super::Frame;
use crate::fixtures::{Tile, HOME_TILES, TILE_COLUMNS};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the greeting and the grid of resource tiles.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);

    greeting(frame, rows[0], state);
    tiles(frame, rows[1], state);
}

fn greeting(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let lines = vec![
        Line::from(Span::styled(
            format!("Hi, {}!", state.get_user_name()),
            styling::heading_style(theme),
        )),
        Line::from(Span::styled(
            "How are you feeling today?",
            styling::muted_text_style(theme),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), size);
}

fn tiles(frame: &mut Frame, size: Rect, state: &State) {
    let row_count = (HOME_TILES.len() + TILE_COLUMNS - 1) / TILE_COLUMNS;
    let row_constraints = vec![Constraint::Ratio(1, row_count as u32); row_count];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(size);

    for (row_index, row) in HOME_TILES.chunks(TILE_COLUMNS).enumerate() {
        let column_constraints = vec![Constraint::Ratio(1, TILE_COLUMNS as u32); TILE_COLUMNS];
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints)
            .split(rows[row_index]);

        for (column_index, tile) in row.iter().enumerate() {
            let index = row_index * TILE_COLUMNS + column_index;
            let selected = index == state.current_tile_index();
            tile_card(frame, columns[column_index], state, tile, selected);
        }
    }
}

fn tile_card(frame: &mut Frame, size: Rect, state: &State, tile: &Tile, selected: bool) {
    let theme = state.get_theme();
    let tint = theme.tile(tile.accent);

    let mut block = styling::card(theme).border_style(Style::default().fg(tint));
    if selected {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(" ▸ ", styling::active_block_title_style()));
    }

    let label_style = if selected {
        Style::default().fg(tint).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(tint)
    };
    let lines = vec![
        Line::from(Span::styled(tile.glyph, label_style)),
        Line::from(Span::styled(tile.label, label_style)),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, size);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use std::time::Instant;

    #[test]
    fn test_home_shows_every_tile() {
        let state = still_state();
        let screen = draw(&state, Instant::now());
        for label in ["Videos", "Articles", "Myths", "Chat"] {
            assert!(screen.contains(label), "missing tile {}", label);
        }
        assert!(screen.contains("How are you feeling today?"));
    }

    #[test]
    fn test_selected_tile_is_marked() {
        let state = still_state();
        let screen = draw(&state, Instant::now());
        assert!(screen.contains("▸"));
    }
}
