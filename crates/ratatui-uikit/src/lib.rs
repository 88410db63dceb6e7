//! `ratatui-uikit` provides two presentational widgets for terminal front-ends:
//!
//! - [`datatable::DataTable`]: records as header + body rows, with column-driven
//!   sorting and id-keyed row selection.
//! - [`textfield::TextField`]: a labeled single-line input with visual variants,
//!   helper/error captions, a clear action, and a password-visibility toggle,
//!   operating as a controlled view over a host-owned string.
//!
//! Both widgets are event-loop agnostic: the host feeds them
//! [`input::InputEvent`]s and calls `render` with a `Buffer` each frame. Records
//! and the input value stay host-owned; the widgets keep only ephemeral visual
//! state (sort key, selection ids, caret, scroll, visibility flag). Change
//! notifications come back as action enums (`DataTableAction`,
//! `TextFieldAction`) rather than stored callbacks.
//!
//! Primitives (theme palette, input events, clipped rendering, viewport state)
//! are re-exported from `ratatui-uikit-core`. Enable the `crossterm` feature for
//! ready-made event conversion; see the runnable demos under `examples/`.
pub mod datatable;
pub mod textfield;

pub use ratatui_uikit_core::input;
pub use ratatui_uikit_core::keymap;
pub use ratatui_uikit_core::render;
pub use ratatui_uikit_core::theme;
pub use ratatui_uikit_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_uikit_core::crossterm_input;
