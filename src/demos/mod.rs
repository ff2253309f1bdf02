//! Demo Programs
//!
//! Each demo is a [`Scene`] driven by one shared frame loop:
//! poll input → update → clear → render → present → sleep.
//!
//! # Available Demos
//!
//! - `hello` - window with a line of debug text
//! - `colours` - drifting translucent squares
//! - `inputs` - live mouse and arrow key state
//! - `alphabet` - character picker grid
//! - `state`, `state2` - title/options/play screens with a list menu
//! - `rpg` - title/options/character creation with image carousels

pub mod alpha_menu;
pub mod colours;
pub mod hello_world;
pub mod inputs;
pub mod rpg;
pub mod state;

use crate::colour::BLACK;
use crate::config::AppConfig;
use crate::input_system::{HeldInput, InputContext, InputSystem, MenuAction};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use std::str::FromStr;
use std::time::Duration;

/// The runnable demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    HelloWorld,
    ColoursAndSquares,
    Inputs,
    AlphaMenu,
    State,
    State2,
    Rpg,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::HelloWorld,
        Demo::ColoursAndSquares,
        Demo::Inputs,
        Demo::AlphaMenu,
        Demo::State,
        Demo::State2,
        Demo::Rpg,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Demo::HelloWorld => "hello",
            Demo::ColoursAndSquares => "colours",
            Demo::Inputs => "inputs",
            Demo::AlphaMenu => "alphabet",
            Demo::State => "state",
            Demo::State2 => "state2",
            Demo::Rpg => "rpg",
        }
    }

    /// Window title
    pub fn title(self) -> &'static str {
        match self {
            Demo::HelloWorld => "Hello world!",
            Demo::ColoursAndSquares => "Colours and Squares!",
            Demo::Inputs => "Inputs",
            Demo::AlphaMenu => "Alphabet menu",
            Demo::State | Demo::State2 | Demo::Rpg => "State!",
        }
    }

    /// Logical resolution in pixels; the window is this times the scale
    pub fn logical_size(self) -> (u32, u32) {
        match self {
            Demo::State | Demo::State2 | Demo::Rpg => (400, 300),
            _ => (320, 240),
        }
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Demo::ALL
            .into_iter()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Demo::ALL.iter().map(|d| d.name()).collect();
                format!("unknown demo '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Whether the frame loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Input gathered for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub actions: Vec<MenuAction>,
    pub held: HeldInput,
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.actions.contains(&MenuAction::Quit)
    }
}

/// One demo program
pub trait Scene {
    /// Which keys the scene wants this frame
    fn input_context(&self) -> InputContext;

    fn update(&mut self, input: &FrameInput) -> Flow;

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String>;
}

/// SDL2 handles shared by every demo
pub struct DemoContext<'c> {
    pub canvas: &'c mut Canvas<Window>,
    pub event_pump: &'c mut EventPump,
    pub window_scale: u32,
    pub config: &'c AppConfig,
}

/// Builds the chosen demo and runs it until it quits
pub fn run<'t>(
    demo: Demo,
    ctx: DemoContext<'_>,
    texture_creator: &'t TextureCreator<WindowContext>,
) -> Result<(), String> {
    tracing::info!(demo = demo.name(), "starting demo");

    match demo {
        Demo::HelloWorld => run_scene(ctx, &mut hello_world::HelloWorld),
        Demo::ColoursAndSquares => run_scene(ctx, &mut colours::ColoursAndSquares::new()),
        Demo::Inputs => {
            let mut scene = inputs::Inputs::new(ctx.window_scale);
            run_scene(ctx, &mut scene)
        }
        Demo::AlphaMenu => run_scene(ctx, &mut alpha_menu::AlphaMenuDemo::new()?),
        Demo::State => run_scene(ctx, &mut state::StateDemo::new(state::jewel_menu())?),
        Demo::State2 => run_scene(ctx, &mut state::StateDemo::new(state::green_menu())?),
        Demo::Rpg => {
            let mut scene = rpg::RpgDemo::load(ctx.config, texture_creator)?;
            run_scene(ctx, &mut scene)
        }
    }
}

/// The frame loop
pub fn run_scene<S: Scene>(ctx: DemoContext<'_>, scene: &mut S) -> Result<(), String> {
    let DemoContext {
        canvas,
        event_pump,
        config,
        ..
    } = ctx;

    let frame_time = Duration::from_secs(1) / config.frame_rate.max(1);
    let mut input_system = InputSystem::new(scene.input_context());

    'running: loop {
        input_system.context = scene.input_context();

        let input = FrameInput {
            actions: input_system.poll_events(event_pump),
            held: HeldInput::capture(event_pump),
        };

        if scene.update(&input) == Flow::Quit {
            break 'running;
        }

        canvas.set_draw_color(BLACK);
        canvas.clear();
        scene.render(canvas)?;
        canvas.present();

        std::thread::sleep(frame_time);
    }

    tracing::info!("demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>(), Ok(demo));
        }
    }

    #[test]
    fn test_unknown_demo() {
        let err = "tetris".parse::<Demo>().unwrap_err();
        assert!(err.contains("tetris"));
        assert!(err.contains("alphabet"));
    }

    #[test]
    fn test_logical_sizes() {
        assert_eq!(Demo::HelloWorld.logical_size(), (320, 240));
        assert_eq!(Demo::Rpg.logical_size(), (400, 300));
    }

    #[test]
    fn test_quit_requested() {
        let input = FrameInput {
            actions: vec![MenuAction::Down, MenuAction::Quit],
            ..Default::default()
        };
        assert!(input.quit_requested());
        assert!(!FrameInput::default().quit_requested());
    }
}
