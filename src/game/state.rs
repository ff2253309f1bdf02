// GameState and screen transitions
//
// Every demo with more than one screen runs the same small machine: a title
// screen with a list menu, an options screen, a play screen, and quit.

use crate::input_system::{InputContext, MenuAction};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    TitleScreen,
    Options,
    /// Play screen, or character creation in the rpg demo
    Play,
    Quit,
}

impl GameState {
    /// Screen reached by confirming a title menu item
    ///
    /// Unknown item names lead nowhere.
    pub fn from_title_selection(item_name: &str) -> Option<GameState> {
        match item_name {
            "playButton" => Some(GameState::Play),
            "optionButton" => Some(GameState::Options),
            "quitButton" => Some(GameState::Quit),
            _ => None,
        }
    }

    /// Input context for this screen
    ///
    /// `play_context` lets the rpg demo put its carousels on the play screen.
    pub fn input_context(self, play_context: InputContext) -> InputContext {
        match self {
            GameState::TitleScreen => InputContext::TitleScreen,
            GameState::Options => InputContext::Options,
            GameState::Play => play_context,
            GameState::Quit => InputContext::Passive,
        }
    }
}

/// Applies one action to the current screen
///
/// `selected_title_item` is the name under the title menu cursor; it is only
/// consulted when confirming on the title screen.
pub fn next_state(state: GameState, action: MenuAction, selected_title_item: &str) -> GameState {
    match (state, action) {
        (_, MenuAction::Quit) => GameState::Quit,
        (GameState::TitleScreen, MenuAction::Confirm) => {
            GameState::from_title_selection(selected_title_item).unwrap_or(state)
        }
        (GameState::Options | GameState::Play, MenuAction::Back) => GameState::TitleScreen,
        _ => state,
    }
}
