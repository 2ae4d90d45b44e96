//! Search-as-you-type suggestions for an episode catalogue
//!
//! The engine in [`suggest`] is host-agnostic; [`app`] wires it to a
//! terminal UI.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
