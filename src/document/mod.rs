//! Document styling hooks.
//!
//! The theme is rendered by toggling a class on the document root element
//! and by writing CSS custom properties into its inline style.

mod stylesheet;

pub use stylesheet::StylesheetFile;

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

/// Error type for document backends
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not write document styles: {0}")]
    Io(#[from] std::io::Error),
}

/// Mutations the theme store performs on the document root element.
pub trait DocumentStyler {
    /// Sets an inline style property, e.g. `--primary`.
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), DocumentError>;

    /// Adds `class` when `force` is true, removes it otherwise.
    fn toggle_class(&mut self, class: &str, force: bool) -> Result<(), DocumentError>;
}

/// Document for environments without one (e.g. before rendering).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDocument;

impl DocumentStyler for NoopDocument {
    fn set_style_property(&mut self, _name: &str, _value: &str) -> Result<(), DocumentError> {
        Ok(())
    }

    fn toggle_class(&mut self, _class: &str, _force: bool) -> Result<(), DocumentError> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Element {
    classes: Vec<String>,
    // insertion ordered, like a CSSStyleDeclaration
    style: Vec<(String, String)>,
}

/// In-memory root element.
///
/// Clones share the same element so the caller can inspect what the store
/// applied.
#[derive(Debug, Clone, Default)]
pub struct RootElement {
    inner: Rc<RefCell<Element>>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Render the element as a `:root` CSS rule, followed by a rule scoped
    /// to its classes when it has any.
    pub fn to_css(&self) -> String {
        let element = self.inner.borrow();
        let mut declarations = String::new();
        for (name, value) in element.style.iter() {
            let _ = writeln!(declarations, "  {name}: {value};");
        }
        let mut css = format!(":root {{\n{declarations}}}\n");
        if !element.classes.is_empty() {
            let selector: String = element.classes.iter().map(|c| format!(".{c}")).collect();
            let scheme = match element.classes.iter().any(|c| c == "dark") {
                true => "dark",
                false => "light",
            };
            let _ = write!(css, "\n:root{selector} {{\n  color-scheme: {scheme};\n}}\n");
        }
        css
    }

    /// Render the opening `<html>` tag carrying the class and inline style
    /// attributes.
    pub fn to_html_tag(&self) -> String {
        let element = self.inner.borrow();
        let mut tag = String::from("<html");
        if !element.classes.is_empty() {
            let _ = write!(tag, " class=\"{}\"", element.classes.join(" "));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(n, v)| format!("{n}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(tag, " style=\"{style}\"");
        }
        tag.push('>');
        tag
    }
}

impl DocumentStyler for RootElement {
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<(), DocumentError> {
        let mut element = self.inner.borrow_mut();
        match element.style.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element.style.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn toggle_class(&mut self, class: &str, force: bool) -> Result<(), DocumentError> {
        let mut element = self.inner.borrow_mut();
        let present = element.classes.iter().any(|c| c == class);
        if force && !present {
            element.classes.push(class.to_string());
        } else if !force && present {
            element.classes.retain(|c| c != class);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_is_forced() {
        let mut root = RootElement::new();
        root.toggle_class("dark", true).unwrap();
        root.toggle_class("dark", true).unwrap();
        assert_eq!(root.to_html_tag(), "<html class=\"dark\">");

        root.toggle_class("dark", false).unwrap();
        root.toggle_class("dark", false).unwrap();
        assert!(!root.has_class("dark"));
    }

    #[test]
    fn style_property_replaces_in_place() {
        let mut root = RootElement::new();
        root.set_style_property("--primary", "1 1% 1%").unwrap();
        root.set_style_property("--ring", "1 1% 1%").unwrap();
        root.set_style_property("--primary", "2 2% 2%").unwrap();

        assert_eq!(root.style_property("--primary"), Some("2 2% 2%".into()));
        assert_eq!(
            root.to_html_tag(),
            "<html style=\"--primary: 2 2% 2%; --ring: 1 1% 1%\">"
        );
    }

    #[test]
    fn renders_css_with_dark_class() {
        let mut root = RootElement::new();
        root.set_style_property("--primary", "0 0% 0%").unwrap();
        root.toggle_class("dark", true).unwrap();

        let css = root.to_css();
        assert!(css.starts_with(":root {\n  --primary: 0 0% 0%;\n}\n"));
        assert!(css.contains(":root.dark {\n  color-scheme: dark;\n}"));
        assert_eq!(
            root.to_html_tag(),
            "<html class=\"dark\" style=\"--primary: 0 0% 0%\">"
        );
    }

    #[test]
    fn noop_document_accepts_everything() {
        let mut document = NoopDocument;
        assert!(document.set_style_property("--ring", "x").is_ok());
        assert!(document.toggle_class("dark", true).is_ok());
    }
}
