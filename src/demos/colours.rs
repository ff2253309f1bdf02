//! Colours and Squares
//!
//! Five translucent squares share one position that takes a random step
//! every frame, while their colour cycles red up and green down.

use super::{FrameInput, Flow, Scene};
use crate::colour::Colour;
use crate::input_system::InputContext;
use crate::text::debug_print;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const BACKGROUND: Colour = Colour::rgb(0xff, 0xcc, 0xf9);
const START_COLOUR: Colour = Colour::rgba(0xff, 0xaf, 0xed, 0x55);
const SQUARE_SIZES: [u32; 5] = [32, 64, 128, 256, 512];

/// Random step is drawn from `-JITTER..JITTER`
const JITTER: i32 = 32;

pub struct ColoursAndSquares {
    colour: Colour,
    offset: (i32, i32),
    /// Set once the starting frame has been shown
    started: bool,
}

impl ColoursAndSquares {
    pub fn new() -> Self {
        ColoursAndSquares {
            colour: START_COLOUR,
            offset: (0, 0),
            started: false,
        }
    }

    /// Advances one frame with the given random step
    ///
    /// The same step applies to both axes.
    pub fn step(&mut self, jitter: i32) {
        self.colour.r = self.colour.r.wrapping_add(1);
        self.colour.g = self.colour.g.wrapping_sub(1);
        self.offset.0 += jitter;
        self.offset.1 += jitter;
    }

    #[cfg(test)]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    #[cfg(test)]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }
}

impl Default for ColoursAndSquares {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for ColoursAndSquares {
    fn input_context(&self) -> InputContext {
        InputContext::Passive
    }

    fn update(&mut self, input: &FrameInput) -> Flow {
        if input.quit_requested() {
            return Flow::Quit;
        }
        // The first frame shows the starting colour and position
        if self.started {
            let jitter = rand::thread_rng().gen_range(-JITTER..JITTER);
            self.step(jitter);
        }
        self.started = true;
        Flow::Continue
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND);
        canvas.fill_rect(None)?;
        debug_print(canvas, "Colours and Squares!")?;

        if !self.colour.is_opaque() {
            canvas.set_blend_mode(BlendMode::Blend);
        }
        canvas.set_draw_color(self.colour);
        for size in SQUARE_SIZES {
            canvas.fill_rect(Rect::new(self.offset.0, self.offset.1, size, size))?;
        }
        canvas.set_blend_mode(BlendMode::None);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let scene = ColoursAndSquares::new();
        assert_eq!(scene.colour(), START_COLOUR);
        assert_eq!(scene.offset(), (0, 0));
    }

    #[test]
    fn test_first_frame_shows_start_colour() {
        let mut scene = ColoursAndSquares::new();

        assert_eq!(scene.update(&FrameInput::default()), Flow::Continue);
        assert_eq!(scene.colour(), START_COLOUR);
        assert_eq!(scene.offset(), (0, 0));

        scene.update(&FrameInput::default());
        assert_eq!(scene.colour(), Colour::rgba(0x00, 0xae, 0xed, 0x55));
    }

    #[test]
    fn test_step_cycles_colour() {
        let mut scene = ColoursAndSquares::new();
        scene.step(0);
        assert_eq!(scene.colour(), Colour::rgba(0x00, 0xae, 0xed, 0x55));
        scene.step(0);
        assert_eq!(scene.colour().r, 0x01);
        assert_eq!(scene.colour().g, 0xad);
    }

    #[test]
    fn test_green_wraps_below_zero() {
        let mut scene = ColoursAndSquares::new();
        for _ in 0..0xb0 {
            scene.step(0);
        }
        assert_eq!(scene.colour().g, 0xff);
    }

    #[test]
    fn test_offset_accumulates() {
        let mut scene = ColoursAndSquares::new();
        scene.step(5);
        scene.step(-12);
        assert_eq!(scene.offset(), (-7, -7));
    }
}
