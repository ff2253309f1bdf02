//! Image Carousel Component
//!
//! Shows one image from a list at a time, with arrows hinting that the
//! player can step left or right. Images are loaded through SDL2_image; an
//! item whose file is missing is drawn as a labelled placeholder instead.

use crate::colour::{Colour, WHITE};
use crate::error::MenuError;
use crate::selection::{select_next, select_prev};
use crate::text::{draw_simple_text, text_height, text_width};
use serde::{Deserialize, Serialize};
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::{Path, PathBuf};

/// Arrow images are square
pub const ARROW_SIZE: u32 = 36;

/// Gap between an arrow and the image
const ARROW_GAP: i32 = 4;

const ARROW_COLOUR: Colour = WHITE;
const PLACEHOLDER_COLOUR: Colour = Colour::rgb(0x40, 0x40, 0x48);

/// A named image in the carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageItem {
    pub name: String,

    /// Image file, relative to the asset directory
    pub path: PathBuf,
}

impl ImageItem {
    #[cfg(test)]
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        ImageItem {
            name: name.to_string(),
            path: path.into(),
        }
    }
}

/// Everything needed to build an [`ImageMenu`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageMenuInput {
    pub tx: i32,
    pub ty: i32,
    pub img_width: u32,
    pub img_height: u32,
    pub items: Vec<ImageItem>,
}

/// Draw plan for the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselLayout {
    pub image: Rect,
    pub left_arrow: Option<Rect>,
    pub right_arrow: Option<Rect>,
}

/// An image carousel menu
///
/// # Example
///
/// ```rust
/// let mut menu = ImageMenu::new(input)?;
/// menu.load_textures(&texture_creator, Path::new("assets"));
///
/// menu.increment_selected();
/// menu.draw(&mut canvas)?;
/// ```
pub struct ImageMenu<'a> {
    tx: i32,
    ty: i32,
    img_width: u32,
    img_height: u32,
    selected_index: usize,
    items: Vec<ImageItem>,
    textures: Vec<Option<Texture<'a>>>,
}

impl<'a> ImageMenu<'a> {
    /// Builds a carousel without textures; every item starts as a placeholder
    pub fn new(input: ImageMenuInput) -> Result<Self, MenuError> {
        if input.img_width == 0 {
            return Err(MenuError::MissingWidth);
        }
        if input.img_height == 0 {
            return Err(MenuError::MissingHeight);
        }
        if input.items.is_empty() {
            return Err(MenuError::MissingItems);
        }

        let textures = input.items.iter().map(|_| None).collect();

        Ok(ImageMenu {
            tx: input.tx,
            ty: input.ty,
            img_width: input.img_width,
            img_height: input.img_height,
            selected_index: 0,
            items: input.items,
            textures,
        })
    }

    /// Loads every item's image, returning how many loaded
    ///
    /// Failures leave the placeholder in place.
    pub fn load_textures(
        &mut self,
        texture_creator: &'a TextureCreator<WindowContext>,
        asset_dir: &Path,
    ) -> usize {
        let mut loaded = 0;

        for (item, slot) in self.items.iter().zip(self.textures.iter_mut()) {
            let path = asset_dir.join(&item.path);
            match texture_creator.load_texture(&path) {
                Ok(texture) => {
                    *slot = Some(texture);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::debug!(
                        item = %item.name,
                        path = %path.display(),
                        "image unavailable, using placeholder: {}",
                        e
                    );
                }
            }
        }

        loaded
    }

    pub fn increment_selected(&mut self) {
        self.selected_index = select_next(self.selected_index, self.items.len());
    }

    pub fn decrement_selected(&mut self) {
        self.selected_index = select_prev(self.selected_index);
    }

    #[cfg(test)]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Name of the selected item
    pub fn selected_item(&self) -> &str {
        &self.items[self.selected_index].name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn layout(&self) -> CarouselLayout {
        let arrow_y = self.ty + (self.img_height as i32 - ARROW_SIZE as i32) / 2;

        let left_arrow = (self.selected_index > 0).then(|| {
            Rect::new(
                self.tx - ARROW_SIZE as i32 - ARROW_GAP,
                arrow_y,
                ARROW_SIZE,
                ARROW_SIZE,
            )
        });
        let right_arrow = (self.selected_index + 1 < self.items.len()).then(|| {
            Rect::new(
                self.tx + self.img_width as i32 + ARROW_GAP,
                arrow_y,
                ARROW_SIZE,
                ARROW_SIZE,
            )
        });

        CarouselLayout {
            image: Rect::new(self.tx, self.ty, self.img_width, self.img_height),
            left_arrow,
            right_arrow,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let layout = self.layout();

        match &self.textures[self.selected_index] {
            Some(texture) => canvas.copy(texture, None, layout.image)?,
            None => self.draw_placeholder(canvas, layout.image)?,
        }

        if let Some(rect) = layout.left_arrow {
            draw_arrow(canvas, rect, false)?;
        }
        if let Some(rect) = layout.right_arrow {
            draw_arrow(canvas, rect, true)?;
        }

        Ok(())
    }

    fn draw_placeholder(&self, canvas: &mut Canvas<Window>, rect: Rect) -> Result<(), String> {
        canvas.set_draw_color(PLACEHOLDER_COLOUR);
        canvas.fill_rect(rect)?;

        let name = self.selected_item();
        let x = rect.x() + (rect.width() as i32 - text_width(name, 1) as i32) / 2;
        let y = rect.y() + (rect.height() as i32 - text_height(1) as i32) / 2;
        draw_simple_text(canvas, name, x, y, WHITE, 1)
    }
}

/// Fills a triangle pointing left or right inside `rect`
fn draw_arrow(canvas: &mut Canvas<Window>, rect: Rect, pointing_right: bool) -> Result<(), String> {
    canvas.set_draw_color(ARROW_COLOUR);

    let half = rect.height() as i32 / 2;
    let columns = (rect.width() as i32).min(half);
    let left = rect.x() + (rect.width() as i32 - columns) / 2;

    for i in 0..columns {
        // Column height shrinks towards the tip
        let reach = if pointing_right { columns - i } else { i + 1 };
        let column_height = (reach * rect.height() as i32 / columns).max(1) as u32;
        let y = rect.y() + (rect.height() as i32 - column_height as i32) / 2;
        canvas.fill_rect(Rect::new(left + i, y, 1, column_height))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(count: usize) -> ImageMenuInput {
        ImageMenuInput {
            tx: 100,
            ty: 100,
            img_width: 100,
            img_height: 100,
            items: (1..=count)
                .map(|i| ImageItem::new(&format!("f{}", i), format!("avatars/f_{:02}.png", i)))
                .collect(),
        }
    }

    #[test]
    fn test_validation() {
        let mut no_width = input(2);
        no_width.img_width = 0;
        assert_eq!(ImageMenu::new(no_width).err(), Some(MenuError::MissingWidth));

        let mut no_height = input(2);
        no_height.img_height = 0;
        assert_eq!(ImageMenu::new(no_height).err(), Some(MenuError::MissingHeight));

        assert_eq!(ImageMenu::new(input(0)).err(), Some(MenuError::MissingItems));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut menu = ImageMenu::new(input(3)).unwrap();
        assert_eq!(menu.selected_item(), "f1");

        menu.decrement_selected();
        assert_eq!(menu.selected_index(), 0);

        for _ in 0..5 {
            menu.increment_selected();
        }
        assert_eq!(menu.selected_item(), "f3");
    }

    #[test]
    fn test_arrows_only_where_movement_is_possible() {
        let mut menu = ImageMenu::new(input(3)).unwrap();

        let layout = menu.layout();
        assert_eq!(layout.image, Rect::new(100, 100, 100, 100));
        assert!(layout.left_arrow.is_none());
        assert_eq!(layout.right_arrow, Some(Rect::new(204, 132, 36, 36)));

        menu.increment_selected();
        let layout = menu.layout();
        assert_eq!(layout.left_arrow, Some(Rect::new(60, 132, 36, 36)));
        assert!(layout.right_arrow.is_some());

        menu.increment_selected();
        assert!(menu.layout().right_arrow.is_none());
    }

    #[test]
    fn test_single_item_has_no_arrows() {
        let menu = ImageMenu::new(input(1)).unwrap();
        let layout = menu.layout();
        assert!(layout.left_arrow.is_none());
        assert!(layout.right_arrow.is_none());
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "tx": 100, "ty": 0, "img_width": 100, "img_height": 100,
            "items": [
                { "name": "human", "path": "ui/human.png" },
                { "name": "creature", "path": "ui/creature.png" }
            ]
        }"#;
        let input: ImageMenuInput = serde_json::from_str(json).unwrap();
        let menu = ImageMenu::new(input).unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.selected_item(), "human");
    }
}
