// commands.rs

//! One-shot commands run from the command line.

use color_eyre::eyre::Result;
use log::*;
use std::io::Write;

use crate::bootstrap::apply_persisted;
use crate::config::AppConfig;
use crate::document::{DocumentStyler, RootElement, StylesheetFile};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::theme::ThemeStore;

/// A command that does its work and exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneShot {
    /// Print the theme and accent color
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the accent color
    Accent(String),
    /// Print the CSS the persisted theme produces
    Css,
}

/// Storage selected by the config, or an in-memory one when `ephemeral`.
pub fn open_storage(config: &AppConfig, ephemeral: bool) -> Result<Box<dyn Storage>> {
    if ephemeral {
        debug!("Using in-memory storage");
        return Ok(Box::new(MemoryStorage::new()));
    }
    let storage = FileStorage::new(config.storage_path()?);
    debug!("Using storage file {}", storage.path().display());
    Ok(Box::new(storage))
}

/// Stylesheet file selected by the config, or a detached root element.
pub fn open_document(config: &AppConfig) -> Box<dyn DocumentStyler> {
    match &config.stylesheet {
        Some(path) => {
            let sheet = StylesheetFile::new(path);
            debug!("Writing styles to {}", sheet.path().display());
            Box::new(sheet)
        }
        None => Box::new(RootElement::new()),
    }
}

/// Run `command`, printing its result to `out`.
pub fn run(
    command: &OneShot,
    storage: Box<dyn Storage>,
    document: Box<dyn DocumentStyler>,
    out: &mut impl Write,
) -> Result<()> {
    let mut store = match command {
        // read only, the document is left alone
        OneShot::Css => {
            let mut root = RootElement::new();
            apply_persisted(storage.as_ref(), &mut root);
            write!(out, "{}", root.to_css())?;
            return Ok(());
        }
        _ => ThemeStore::with_capabilities(storage, document),
    };
    let state = store.initialize();

    match command {
        OneShot::Show => {
            writeln!(out, "theme: {}", state.theme)?;
            writeln!(out, "accent: {}", state.accent_color)?;
        }
        OneShot::Toggle => {
            let theme = store.toggle_theme()?;
            writeln!(out, "theme: {}", theme)?;
        }
        OneShot::Accent(color) => {
            store.set_accent_color(color)?;
            writeln!(out, "accent: {}", color)?;
        }
        OneShot::Css => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NoopDocument;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn run_to_string(command: OneShot, storage: Box<dyn Storage>) -> String {
        let mut out = Vec::new();
        run(&command, storage, Box::new(NoopDocument), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn file_config(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            storage_file: Some(dir.join("storage.json")),
            stylesheet: Some(dir.join("theme.css")),
            ..Default::default()
        }
    }

    #[test]
    fn show_prints_defaults() {
        let output = run_to_string(OneShot::Show, Box::new(MemoryStorage::new()));
        assert_eq!(output, "theme: light\naccent: 346.8 77.2% 49.8%\n");
    }

    #[test]
    fn toggle_and_accent_persist_through_file_storage() {
        let dir = tempdir().unwrap();
        let config = file_config(dir.path());

        let output = run_to_string(OneShot::Toggle, open_storage(&config, false).unwrap());
        assert_eq!(output, "theme: dark\n");
        run_to_string(
            OneShot::Accent("0 0% 0%".to_string()),
            open_storage(&config, false).unwrap(),
        );

        let output = run_to_string(OneShot::Show, open_storage(&config, false).unwrap());
        assert_eq!(output, "theme: dark\naccent: 0 0% 0%\n");
    }

    #[test]
    fn ephemeral_storage_is_not_persisted() {
        let dir = tempdir().unwrap();
        let config = file_config(dir.path());

        run_to_string(OneShot::Toggle, open_storage(&config, true).unwrap());

        assert!(!config.storage_path().unwrap().exists());
        let output = run_to_string(OneShot::Show, open_storage(&config, false).unwrap());
        assert_eq!(output, "theme: light\naccent: 346.8 77.2% 49.8%\n");
    }

    #[test]
    fn css_renders_persisted_state_without_writing() {
        let mut storage = MemoryStorage::new();
        storage.set_item("theme", "dark").unwrap();
        storage.set_item("primary-color", "0 0% 0%").unwrap();

        let output = run_to_string(OneShot::Css, Box::new(storage.clone()));
        assert!(output.starts_with(":root {\n  --primary: 0 0% 0%;\n  --ring: 0 0% 0%;\n}\n"));
        assert!(output.contains(":root.dark"));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn configured_stylesheet_follows_the_store() {
        let dir = tempdir().unwrap();
        let config = file_config(dir.path());

        let mut out = Vec::new();
        run(
            &OneShot::Accent("10 20% 30%".to_string()),
            open_storage(&config, false).unwrap(),
            open_document(&config),
            &mut out,
        )
        .unwrap();

        let css = fs::read_to_string(PathBuf::from(dir.path()).join("theme.css")).unwrap();
        assert!(css.contains("--primary: 10 20% 30%;"));
    }

    #[test]
    fn document_without_stylesheet_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            storage_file: Some(dir.path().join("storage.json")),
            ..Default::default()
        };

        let mut out = Vec::new();
        run(
            &OneShot::Toggle,
            open_storage(&config, false).unwrap(),
            open_document(&config),
            &mut out,
        )
        .unwrap();

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
