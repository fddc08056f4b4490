// ui/preview.rs

//! Panel rendering a sample surface with the current theme

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::{Borders, Paragraph, Wrap};

use crate::document::RootElement;
use crate::theme::parser::accent_to_color;
use crate::theme::{apply_state, AccentPreset, ThemeState};

pub const PREVIEW_MIN_WIDTH: u16 = 40;
pub const PREVIEW_MIN_HEIGHT: u16 = 10;

/// Foreground and background of the surface for a mode
fn surface(theme: &ThemeState) -> (Color, Color) {
    match theme.theme.is_dark() {
        true => (Color::White, Color::Black),
        false => (Color::Black, Color::White),
    }
}

pub fn draw_preview<'a>(theme: &ThemeState) -> Paragraph<'a> {
    let accent = accent_to_color(&theme.accent_color);
    let (fg, bg) = surface(theme);
    let muted = Style::default().fg(Color::Gray);

    let accent_name = match AccentPreset::from_hsl(&theme.accent_color) {
        Some(preset) => preset.to_string(),
        None => "Custom".to_string(),
    };

    // The markup a browser would end up with for this state.
    let mut root = RootElement::new();
    apply_state(&mut root, theme);

    let lines = vec![
        Line::from(vec![
            Span::styled("Mode    ", muted),
            Span::styled(theme.theme.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Accent  ", muted),
            Span::styled(accent_name, Style::default().fg(accent)),
            Span::styled(format!(" ({})", theme.accent_color), muted),
        ]),
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "  Primary button  ",
                Style::default()
                    .fg(bg)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("link text", Style::default().fg(accent).add_modifier(Modifier::UNDERLINED)),
        ]),
        Line::default(),
        Line::from(Span::styled(root.to_html_tag(), muted)),
    ];

    Paragraph::new(lines)
        .style(Style::default().fg(fg).bg(bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title("Preview"),
        )
}
