//! `ratatui-uikit-core` provides the primitives shared by the `ratatui-uikit` widgets.
//!
//! This crate is deliberately small: a flat style palette, a backend-agnostic input
//! event vocabulary, key matching for rebindable actions, clipped single-line text
//! rendering, and a vertical viewport. Widgets live in the `ratatui-uikit` crate.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: the host drives input and rendering.
//! - No async runtime: everything runs synchronously on the render thread.
//! - Host-owned data: widgets receive records and values by reference and keep
//!   only ephemeral visual state.
//!
//! Enable the `crossterm` feature for [`crossterm_input`], a thin conversion from
//! crossterm events into this crate's [`input::InputEvent`].
pub mod theme;

pub mod input;
pub mod keymap;

pub mod render;
pub mod viewport;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
