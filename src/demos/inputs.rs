//! Shows the cursor position and which mouse buttons and arrow keys are held.

use super::{FrameInput, Flow, Scene};
use crate::input_system::{HeldInput, InputContext};
use crate::text::debug_print;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct Inputs {
    held: HeldInput,
    window_scale: u32,
}

impl Inputs {
    pub fn new(window_scale: u32) -> Self {
        Inputs {
            held: HeldInput::default(),
            window_scale: window_scale.max(1),
        }
    }

    /// Stores a snapshot, converting the cursor to logical pixels
    pub fn observe(&mut self, held: HeldInput) {
        let scale = self.window_scale as i32;
        self.held = HeldInput {
            cursor: (held.cursor.0 / scale, held.cursor.1 / scale),
            ..held
        };
    }

    #[cfg(test)]
    pub fn held(&self) -> &HeldInput {
        &self.held
    }
}

impl Scene for Inputs {
    fn input_context(&self) -> InputContext {
        InputContext::Passive
    }

    fn update(&mut self, input: &FrameInput) -> Flow {
        if input.quit_requested() {
            return Flow::Quit;
        }
        self.observe(input.held);
        Flow::Continue
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        debug_print(canvas, &self.held.describe())
    }
}
