//! Title / Options / Play screens driven by a list menu
//!
//! The play and options screens are placeholders showing a coloured square;
//! Escape returns to the title screen.

use super::{FrameInput, Flow, Scene};
use crate::colour::{self, Colour};
use crate::game::{next_state, GameState};
use crate::gui::{ListMenu, ListMenuInput, MenuItem};
use crate::input_system::{InputContext, MenuAction};
use crate::text::debug_print;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const PLAY_SQUARE_COLOUR: Colour = Colour::rgb(0x7f, 0xff, 0x00);
const OPTIONS_SQUARE_COLOUR: Colour = Colour::rgb(0x8a, 0x2b, 0xe2);

fn square() -> Rect {
    Rect::new(64, 64, 32, 32)
}

fn title_item(name: &str, text: &str, bg: Colour, sel: Option<Colour>) -> MenuItem {
    MenuItem {
        bg_colour: Some(bg),
        sel_colour: sel,
        ..MenuItem::new(name, text)
    }
}

/// Title menu where every button carries its own colours
pub fn jewel_menu() -> ListMenuInput {
    ListMenuInput {
        width: 128,
        height: 36,
        tx: 128,
        ty: 128,
        default_bg_colour: Some(Colour::rgb(0x00, 0x80, 0x80)),
        default_sel_bg_colour: Some(Colour::rgb(0xff, 0xa5, 0x00)),
        default_txt_colour: Some(colour::WHITE),
        items: vec![
            title_item(
                "playButton",
                "PLAY",
                Colour::rgb(0xd7, 0x0f, 0xff),
                Some(Colour::rgb(0xee, 0x99, 0xff)),
            ),
            title_item(
                "optionButton",
                "OPTIONS",
                Colour::rgb(0xf5, 0x00, 0xb1),
                Some(Colour::rgb(0xff, 0x9e, 0xe4)),
            ),
            title_item(
                "quitButton",
                "QUIT",
                Colour::rgb(0xff, 0x1a, 0x6d),
                Some(Colour::rgb(0xff, 0x94, 0xbb)),
            ),
        ],
        ..Default::default()
    }
}

/// Title menu sharing one selected colour over a green palette
pub fn green_menu() -> ListMenuInput {
    ListMenuInput {
        width: 128,
        height: 36,
        tx: 128,
        ty: 128,
        default_sel_bg_colour: Some(colour::PURPLE3),
        default_txt_colour: Some(colour::WHITE),
        items: vec![
            title_item("playButton", "PLAY", colour::GREEN1, None),
            title_item("optionButton", "OPTIONS", colour::GREEN2, None),
            title_item("quitButton", "QUIT", colour::GREEN3, None),
        ],
        ..Default::default()
    }
}

pub struct StateDemo {
    state: GameState,
    main_menu: ListMenu,
}

impl StateDemo {
    pub fn new(menu_input: ListMenuInput) -> Result<Self, String> {
        let main_menu = ListMenu::new(menu_input)
            .map_err(|e| format!("unable to create menu: {}", e))?;

        Ok(StateDemo {
            state: GameState::TitleScreen,
            main_menu,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn main_menu(&self) -> &ListMenu {
        &self.main_menu
    }

    fn apply(&mut self, action: MenuAction) {
        if self.state == GameState::TitleScreen {
            match action {
                MenuAction::Up => self.main_menu.decrement_selected(),
                MenuAction::Down => self.main_menu.increment_selected(),
                _ => {}
            }
        }

        let next = next_state(self.state, action, self.main_menu.selected_item());
        if next != self.state {
            tracing::info!(from = ?self.state, to = ?next, "screen change");
            self.state = next;
        }
    }
}

impl Scene for StateDemo {
    fn input_context(&self) -> InputContext {
        self.state.input_context(InputContext::Play)
    }

    fn update(&mut self, input: &FrameInput) -> Flow {
        for &action in &input.actions {
            self.apply(action);
            if self.state == GameState::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        match self.state {
            GameState::TitleScreen => {
                debug_print(canvas, "Title screen")?;
                self.main_menu.draw(canvas)?;
            }
            GameState::Play => {
                debug_print(canvas, "Play screen")?;
                canvas.set_draw_color(PLAY_SQUARE_COLOUR);
                canvas.fill_rect(square())?;
            }
            GameState::Options => {
                debug_print(canvas, "Options screen")?;
                canvas.set_draw_color(OPTIONS_SQUARE_COLOUR);
                canvas.fill_rect(square())?;
            }
            GameState::Quit => {}
        }
        Ok(())
    }
}
