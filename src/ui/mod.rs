// ui/mod.rs

//! ratatui user interface

use log::*;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod help;
mod logs;
mod preview;
mod title;

use crate::app::AppState;
use help::{draw_help, HELP_WIDTH};
use logs::{draw_logs, LOG_BLOCK_HEIGHT};
use preview::{draw_preview, PREVIEW_MIN_HEIGHT, PREVIEW_MIN_WIDTH};
use title::{draw_title, TITLE_BLOCK_HEIGHT};

/// Render all blocks.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();
    check_size(&size, state);
    let theme = state.theme();

    let mut app_constraints = vec![
        Constraint::Length(TITLE_BLOCK_HEIGHT),
        Constraint::Min(PREVIEW_MIN_HEIGHT),
    ];
    if state.show_logs {
        app_constraints.push(Constraint::Length(LOG_BLOCK_HEIGHT));
    }

    // Vertical layout
    let app_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(app_constraints)
        .split(size);

    frame.render_widget(draw_title(&theme, state.changes()), app_rows[0]);

    // Body: preview, help
    let mut body_constraints = vec![Constraint::Min(PREVIEW_MIN_WIDTH)];
    if state.show_help {
        body_constraints.push(Constraint::Length(HELP_WIDTH));
    }
    let body_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(body_constraints)
        .split(app_rows[1]);

    frame.render_widget(draw_preview(&theme), body_columns[0]);

    if state.show_help {
        frame.render_widget(draw_help(&state.actions), body_columns[1]);
    }

    if state.show_logs {
        frame.render_widget(draw_logs(), app_rows[2]);
    }
}

/// Logs warnings when terminal size constraints are not respected.
fn check_size(rect: &Rect, state: &AppState) {
    let mut min_width = PREVIEW_MIN_WIDTH;
    if state.show_help {
        min_width += HELP_WIDTH
    };
    if rect.width < min_width {
        trace!("Require width >= {}, (got {})", min_width, rect.width);
    }

    let mut min_height = TITLE_BLOCK_HEIGHT + PREVIEW_MIN_HEIGHT;
    if state.show_logs {
        min_height += LOG_BLOCK_HEIGHT
    };
    if rect.height < min_height {
        trace!("Require height >= {}, (got {})", min_height, rect.height);
    }
}
