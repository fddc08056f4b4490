//! Panel showing log messages

use ratatui::style::{Color, Style};
use ratatui::widgets::block::{Block, BorderType};
use ratatui::widgets::Borders;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub(crate) const LOG_BLOCK_HEIGHT: u16 = 10;

// Draw the logs panel
pub(crate) fn draw_logs<'a>() -> TuiLoggerWidget<'a> {
    TuiLoggerWidget::default()
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Blue))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Gray))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(true)
        .output_file(false)
        .output_line(false)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Logs"),
        )
}
