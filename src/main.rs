use lexopt::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod colour;
mod config;
mod demos;
mod error;
mod game;
mod gui;
mod input_system;
mod selection;
mod text;

use config::{fit_window_scale, AppConfig, MIN_AUTO_SCALE};
use demos::{Demo, DemoContext};

const DEFAULT_DEMO: Demo = Demo::Rpg;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
    scale: Option<u32>,
    list: bool,
    help: bool,
    demo: Option<String>,
}

fn parse_args(mut parser: lexopt::Parser) -> Result<Cli, lexopt::Error> {
    let mut cli = Cli::default();

    while let Some(arg) = parser.next()? {
        match arg {
            Long("help") | Short('h') => cli.help = true,
            Long("list") => cli.list = true,
            Long("config") => cli.config = Some(parser.value()?.into()),
            Long("scale") => cli.scale = Some(parser.value()?.parse()?),
            Value(val) if cli.demo.is_none() => cli.demo = Some(val.string()?),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(cli)
}

fn print_help() {
    println!("Usage: menu_demos [OPTIONS] [DEMO]");
    println!();
    println!("Options:");
    println!("  --config PATH   read settings from PATH instead of the user config");
    println!("  --scale N       window pixels per logical pixel");
    println!("  --list          print the demo names and exit");
    println!("  -h, --help      print this help");
    println!();
    println!("DEMO defaults to '{}'.", DEFAULT_DEMO.name());
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), String> {
    init_logging();

    let cli = parse_args(lexopt::Parser::from_env()).map_err(|e| e.to_string())?;
    if cli.help {
        print_help();
        return Ok(());
    }
    if cli.list {
        for demo in Demo::ALL {
            println!("{:<10} {}", demo.name(), demo.title());
        }
        return Ok(());
    }

    let demo = match &cli.demo {
        Some(name) => name.parse::<Demo>()?,
        None => DEFAULT_DEMO,
    };

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.scale.is_some() {
        config.window_scale = cli.scale;
    }
    config.validate()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let (logical_w, logical_h) = demo.logical_size();
    let window_scale = match config.window_scale {
        Some(scale) => scale,
        None => match video_subsystem.desktop_display_mode(0) {
            Ok(mode) => fit_window_scale((mode.w, mode.h), (logical_w, logical_h)),
            Err(e) => {
                tracing::warn!("could not read display mode: {}", e);
                MIN_AUTO_SCALE
            }
        },
    };

    info!(
        demo = demo.name(),
        scale = window_scale,
        width = logical_w * window_scale,
        height = logical_h * window_scale,
        "opening window"
    );

    let window = video_subsystem
        .window(demo.title(), logical_w * window_scale, logical_h * window_scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(logical_w, logical_h)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let ctx = DemoContext {
        canvas: &mut canvas,
        event_pump: &mut event_pump,
        window_scale,
        config: &config,
    };
    demos::run(demo, ctx, &texture_creator)
}
