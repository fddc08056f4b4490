use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph};

use crate::theme::parser::accent_to_color;
use crate::theme::ThemeState;

pub const TITLE_BLOCK_HEIGHT: u16 = 3;

pub fn draw_title<'a>(theme: &ThemeState, changes: u32) -> Paragraph<'a> {
    let title = match changes {
        0 => "theme-store".to_string(),
        n => format!("theme-store ({n} change(s))"),
    };
    Paragraph::new(title)
        .style(Style::default().fg(accent_to_color(&theme.accent_color)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White))
                .border_type(BorderType::Plain),
        )
}
