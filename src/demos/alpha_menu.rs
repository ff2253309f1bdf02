use super::{FrameInput, Flow, Scene};
use crate::colour::WHITE;
use crate::gui::{CharMenu, CharMenuInput};
use crate::input_system::{InputContext, MenuAction};
use crate::text::debug_print;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Alphabet picker navigated with the arrow keys
pub struct AlphaMenuDemo {
    menu: CharMenu,
}

impl AlphaMenuDemo {
    pub fn new() -> Result<Self, String> {
        let menu = CharMenu::new(CharMenuInput {
            tx: 50,
            ty: 50,
            default_bg_colour: Some(WHITE),
            ..Default::default()
        })?;

        Ok(AlphaMenuDemo { menu })
    }

    #[cfg(test)]
    pub fn menu(&self) -> &CharMenu {
        &self.menu
    }

    fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Up => self.menu.dec_y(),
            MenuAction::Down => self.menu.inc_y(),
            MenuAction::Right => self.menu.inc_x(),
            MenuAction::Left => self.menu.dec_x(),
            _ => return,
        }
        tracing::debug!(
            selected = %self.menu.selected_char(),
            position = ?self.menu.selected_position(),
            "cursor moved"
        );
    }
}

impl Scene for AlphaMenuDemo {
    fn input_context(&self) -> InputContext {
        InputContext::Picker
    }

    fn update(&mut self, input: &FrameInput) -> Flow {
        for &action in &input.actions {
            if action == MenuAction::Quit {
                return Flow::Quit;
            }
            self.apply(action);
        }
        Flow::Continue
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        debug_print(canvas, "Alphabet menu")?;
        self.menu.draw(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(actions: &[MenuAction]) -> FrameInput {
        FrameInput {
            actions: actions.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut demo = AlphaMenuDemo::new().unwrap();
        demo.update(&frame(&[MenuAction::Right, MenuAction::Right, MenuAction::Down]));
        assert_eq!(demo.menu().selected_char(), 'p');

        demo.update(&frame(&[MenuAction::Up, MenuAction::Left]));
        assert_eq!(demo.menu().selected_char(), 'b');
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut demo = AlphaMenuDemo::new().unwrap();
        let flow = demo.update(&frame(&[MenuAction::Quit, MenuAction::Right]));
        assert_eq!(flow, Flow::Quit);
        assert_eq!(demo.menu().selected_char(), 'a');
    }
}
