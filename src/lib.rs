//! wren - A small modal terminal text editor with soft wrapping

pub mod buffer;
pub mod constants;
pub mod document;
pub mod editor;
pub mod error;
pub mod key;
pub mod mode;
pub mod search;
pub mod session;
pub mod settings;
pub mod term;
pub mod view;

#[cfg(test)]
pub mod test_utils;
