// Game module - screen flow shared by the menu demos
//
// This module contains:
// - state.rs: GameState enum and its transitions

pub mod state;

pub use state::{next_state, GameState};
