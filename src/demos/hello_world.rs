use super::{FrameInput, Flow, Scene};
use crate::input_system::InputContext;
use crate::text::debug_print;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A window and one line of debug text
pub struct HelloWorld;

impl Scene for HelloWorld {
    fn input_context(&self) -> InputContext {
        InputContext::Passive
    }

    fn update(&mut self, input: &FrameInput) -> Flow {
        if input.quit_requested() {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        debug_print(canvas, "Hello world, this is SDL2!")
    }
}
