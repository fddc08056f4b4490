//! Light/dark theme and accent color store.
//!
//! [`theme::ThemeStore`] owns the two values, persists them through a
//! [`storage::Storage`] and applies them to a [`document::DocumentStyler`].
//! The remaining modules host the store in a terminal preview.

use color_eyre::eyre::Result;
use log::*;

use app::{App, AppReturn};
use inputs::handler::Event;
use inputs::key::Key;
use tui::Tui;

pub mod app;
pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod document;
pub mod inputs;
pub mod logger;
pub mod storage;
pub mod theme;
mod tui;
mod ui;

/// Run the interactive preview until the user quits.
pub async fn start_ui(mut app: App) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.init()?;

    loop {
        tui.draw(&app.state)?;

        let result = match tui.events.next().await {
            Event::Input(key_event) => app.do_action(Key::from(key_event)),
            Event::Tick => AppReturn::Continue,
        };
        if result == AppReturn::Exit {
            break;
        }
    }

    tui.exit()?;
    info!("Preview closed");
    Ok(())
}
