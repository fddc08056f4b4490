//! Root element mirrored to a CSS file

use super::{DocumentError, DocumentStyler, RootElement};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A [`RootElement`] whose rendered CSS is rewritten to `path` after every
/// mutation. Lets a page (or any CSS consumer) follow the theme.
#[derive(Debug, Clone)]
pub struct StylesheetFile {
    path: PathBuf,
    root: RootElement,
}

impl StylesheetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: RootElement::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &RootElement {
        &self.root
    }

    fn flush(&self) -> Result<(), DocumentError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.root.to_css())?;
        debug!("Wrote stylesheet {}", self.path.display());
        Ok(())
    }
}

impl DocumentStyler for StylesheetFile {
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), DocumentError> {
        self.root.set_style_property(name, value)?;
        self.flush()
    }

    fn toggle_class(&mut self, class: &str, force: bool) -> Result<(), DocumentError> {
        self.root.toggle_class(class, force)?;
        self.flush()
    }
}
