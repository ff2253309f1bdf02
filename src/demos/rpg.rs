//! RPG front end
//!
//! Title screen, options screen and a character creation screen with three
//! image carousels (character group, human avatars, creature avatars) that
//! step together with Left/Right. Menu layouts come from a JSON file.

use super::{FrameInput, Flow, Scene};
use crate::config::{load_json, AppConfig};
use crate::game::{next_state, GameState};
use crate::gui::{ImageMenu, ImageMenuInput, ListMenu, ListMenuInput};
use crate::input_system::{InputContext, MenuAction};
use crate::text::debug_print;
use serde::{Deserialize, Serialize};
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::PathBuf;

/// Where the title image is drawn
const TITLE_IMAGE_POS: (i32, i32) = (200, 24);

/// Menu definitions for the rpg demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpgMenus {
    pub main_menu: ListMenuInput,
    pub options_menu: ListMenuInput,
    pub char_group: ImageMenuInput,
    pub human: ImageMenuInput,
    pub creature: ImageMenuInput,

    /// Image shown beside the title menu, relative to the asset directory
    #[serde(default)]
    pub title_image: Option<PathBuf>,
}

pub struct RpgDemo<'a> {
    state: GameState,
    main_menu: ListMenu,
    options_menu: ListMenu,
    carousels: [ImageMenu<'a>; 3],
    title_image: Option<Texture<'a>>,
}

impl<'a> RpgDemo<'a> {
    /// Builds every menu without loading any images
    pub fn new(menus: RpgMenus) -> Result<Self, String> {
        Ok(RpgDemo {
            state: GameState::TitleScreen,
            main_menu: ListMenu::new(menus.main_menu)?,
            options_menu: ListMenu::new(menus.options_menu)?,
            carousels: [
                ImageMenu::new(menus.char_group)?,
                ImageMenu::new(menus.human)?,
                ImageMenu::new(menus.creature)?,
            ],
            title_image: None,
        })
    }

    /// Reads the menu file named by the config and loads the images
    pub fn load(
        config: &AppConfig,
        texture_creator: &'a TextureCreator<WindowContext>,
    ) -> Result<Self, String> {
        let menus: RpgMenus = load_json(&config.rpg_menus_path())?;
        let title_image_path = menus.title_image.clone();
        let mut demo = RpgDemo::new(menus)?;

        let mut loaded = 0;
        let mut total = 0;
        for carousel in &mut demo.carousels {
            loaded += carousel.load_textures(texture_creator, &config.asset_dir);
            total += carousel.len();
        }
        if loaded == 0 {
            tracing::info!(
                asset_dir = %config.asset_dir.display(),
                "no avatar images installed, drawing placeholders"
            );
        } else if loaded < total {
            tracing::warn!(
                loaded,
                total,
                asset_dir = %config.asset_dir.display(),
                "some avatar images are missing, drawing placeholders"
            );
        }

        if let Some(path) = title_image_path {
            let path = config.asset_dir.join(path);
            match texture_creator.load_texture(&path) {
                Ok(texture) => demo.title_image = Some(texture),
                Err(e) => tracing::warn!(path = %path.display(), "title image unavailable: {}", e),
            }
        }

        Ok(demo)
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn carousels(&self) -> &[ImageMenu<'a>; 3] {
        &self.carousels
    }

    #[cfg(test)]
    pub fn options_menu(&self) -> &ListMenu {
        &self.options_menu
    }

    fn apply(&mut self, action: MenuAction) {
        match (self.state, action) {
            (GameState::TitleScreen, MenuAction::Up) => self.main_menu.decrement_selected(),
            (GameState::TitleScreen, MenuAction::Down) => self.main_menu.increment_selected(),
            (GameState::Options, MenuAction::Up) => self.options_menu.decrement_selected(),
            (GameState::Options, MenuAction::Down) => self.options_menu.increment_selected(),
            (GameState::Play, MenuAction::Right) => {
                for carousel in &mut self.carousels {
                    carousel.increment_selected();
                }
            }
            (GameState::Play, MenuAction::Left) => {
                for carousel in &mut self.carousels {
                    carousel.decrement_selected();
                }
            }
            _ => {}
        }

        let next = next_state(self.state, action, self.main_menu.selected_item());
        if next != self.state {
            tracing::info!(from = ?self.state, to = ?next, "screen change");
            self.state = next;
        }
    }
}

impl Scene for RpgDemo<'_> {
    fn input_context(&self) -> InputContext {
        self.state.input_context(InputContext::CharCreation)
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

                if let Some(texture) = &self.title_image {
                    let query = texture.query();
                    let dst = Rect::new(
                        TITLE_IMAGE_POS.0,
                        TITLE_IMAGE_POS.1,
                        query.width,
                        query.height,
                    );
                    canvas.copy(texture, None, dst)?;
                }
            }
            GameState::Options => {
                debug_print(canvas, "Options screen")?;
                self.options_menu.draw(canvas)?;
            }
            GameState::Play => {
                debug_print(canvas, "Character Creation")?;
                for carousel in &self.carousels {
                    carousel.draw(canvas)?;
                }
            }
            GameState::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENUS: &str = include_str!("../../assets/config/rpg_menus.json");

    fn demo() -> RpgDemo<'static> {
        let menus: RpgMenus = serde_json::from_str(MENUS).unwrap();
        RpgDemo::new(menus).unwrap()
    }

    fn frame(actions: &[MenuAction]) -> FrameInput {
        FrameInput {
            actions: actions.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_shipped_menus_parse() {
        let demo = demo();
        assert_eq!(demo.carousels()[0].len(), 2);
        assert_eq!(demo.carousels()[1].len(), 20);
        assert_eq!(demo.carousels()[2].len(), 20);
        assert_eq!(demo.options_menu().items().len(), 3);
    }

    #[test]
    fn test_shipped_menus_have_no_title_image() {
        let menus: RpgMenus = serde_json::from_str(MENUS).unwrap();
        assert!(menus.title_image.is_none());
    }

    #[test]
    fn test_title_image_is_optional_field() {
        let mut value: serde_json::Value = serde_json::from_str(MENUS).unwrap();
        value["title_image"] = serde_json::json!("ui/title.png");
        let menus: RpgMenus = serde_json::from_value(value).unwrap();
        assert_eq!(menus.title_image, Some(PathBuf::from("ui/title.png")));
    }

    #[test]
    fn test_character_creation_moves_all_carousels() {
        let mut demo = demo();
        demo.update(&frame(&[MenuAction::Confirm]));
        assert_eq!(demo.state(), GameState::Play);
        assert_eq!(demo.input_context(), InputContext::CharCreation);

        demo.update(&frame(&[MenuAction::Right, MenuAction::Right, MenuAction::Right]));
        // The two-item group carousel stops at its last item
        assert_eq!(demo.carousels()[0].selected_item(), "creature");
        assert_eq!(demo.carousels()[1].selected_item(), "m2");
        assert_eq!(demo.carousels()[2].selected_item(), "c4");

        demo.update(&frame(&[MenuAction::Left]));
        assert_eq!(demo.carousels()[0].selected_item(), "human");
        assert_eq!(demo.carousels()[1].selected_item(), "f2");
    }

    #[test]
    fn test_options_menu_navigation() {
        let mut demo = demo();
        demo.update(&frame(&[MenuAction::Down, MenuAction::Confirm]));
        assert_eq!(demo.state(), GameState::Options);

        demo.update(&frame(&[MenuAction::Down, MenuAction::Down, MenuAction::Down]));
        assert_eq!(demo.options_menu().selected_item(), "language");

        demo.update(&frame(&[MenuAction::Back]));
        assert_eq!(demo.state(), GameState::TitleScreen);
    }

    #[test]
    fn test_escape_leaves_character_creation() {
        let mut demo = demo();
        demo.update(&frame(&[MenuAction::Confirm, MenuAction::Back]));
        assert_eq!(demo.state(), GameState::TitleScreen);
    }

    #[test]
    fn test_quit() {
        let mut demo = demo();
        assert_eq!(
            demo.update(&frame(&[MenuAction::Down, MenuAction::Down, MenuAction::Confirm])),
            Flow::Quit
        );
    }
}
