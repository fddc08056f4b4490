// inputs/mod.rs

//! Terminal input: key mapping and the event handler feeding the preview.

pub mod handler;
pub mod key;
