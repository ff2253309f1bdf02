//! Screen-Space Menu Widgets
//!
//! Every widget here follows the same pattern: a plain input struct with
//! optional fields, a validating `new`, clamped cursor movement, a pure
//! layout method used by tests, and a `draw` that only issues SDL2 calls.
//!
//! # Available Components
//!
//! - [`ListMenu`] - column of buttons with per-item colour overrides
//! - [`CharMenu`] - grid of single-character boxes (alphabet picker)
//! - [`ImageMenu`] - image carousel with left/right arrows
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{ListMenu, ListMenuInput, MenuItem};
//!
//! let mut main_menu = ListMenu::new(ListMenuInput {
//!     width: 140,
//!     height: 36,
//!     items: vec![MenuItem::new("playButton", "PLAY")],
//!     ..Default::default()
//! })?;
//!
//! main_menu.increment_selected();
//! main_menu.draw(&mut canvas)?;
//! ```

pub mod char_menu;
pub mod image_menu;
pub mod list_menu;

pub use char_menu::{CharMenu, CharMenuInput};
pub use image_menu::{ImageMenu, ImageMenuInput};
pub use list_menu::{ListMenu, ListMenuInput, MenuItem};
