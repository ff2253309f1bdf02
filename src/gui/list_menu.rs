//! List Menu Component
//!
//! A navigable, selectable column (or row) of fixed-size buttons. Each item
//! may override the menu's default colours; overrides are resolved when the
//! menu is built so drawing never has to look at the defaults again.

use crate::colour::{self, resolve_colour, Colour};
use crate::error::MenuError;
use crate::selection::{select_next, select_prev};
use crate::text::{draw_simple_text, text_height, text_width};
use serde::{Deserialize, Serialize};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Gap between the text and the button edge for left/right alignment
const TEXT_PADDING: i32 = 4;

/// Horizontal text placement used when an item has no explicit `txt_x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Centre,
    Right,
}

/// A menu item as described by the caller
///
/// All colours are optional and fall back to the menu defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Identifies the item when it is selected
    pub name: String,

    /// Label drawn on the button
    pub text: String,

    /// Text x offset inside the button (overrides alignment)
    pub txt_x: Option<i32>,

    /// Text y offset inside the button (overrides vertical centring)
    pub txt_y: Option<i32>,

    pub bg_colour: Option<Colour>,
    pub sel_colour: Option<Colour>,
    pub txt_colour: Option<Colour>,
    pub sel_txt_colour: Option<Colour>,
}

impl MenuItem {
    /// Creates an item with no overrides
    pub fn new(name: &str, text: &str) -> Self {
        MenuItem {
            name: name.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// Everything needed to build a [`ListMenu`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMenuInput {
    /// Menu translation
    pub tx: i32,
    pub ty: i32,

    /// Size of every button, mandatory
    pub width: u32,
    pub height: u32,

    /// Offset between consecutive buttons (`offy` defaults to `height`)
    pub offx: i32,
    pub offy: i32,

    pub default_bg_colour: Option<Colour>,
    pub default_sel_bg_colour: Option<Colour>,
    pub default_txt_colour: Option<Colour>,
    pub default_sel_txt_colour: Option<Colour>,

    pub text_align: TextAlign,

    /// Bitmap font scale
    pub text_scale: u32,

    pub items: Vec<MenuItem>,
}

impl Default for ListMenuInput {
    fn default() -> Self {
        ListMenuInput {
            tx: 0,
            ty: 0,
            width: 0,
            height: 0,
            offx: 0,
            offy: 0,
            default_bg_colour: None,
            default_sel_bg_colour: None,
            default_txt_colour: None,
            default_sel_txt_colour: None,
            text_align: TextAlign::default(),
            text_scale: 2,
            items: Vec::new(),
        }
    }
}

/// An item with every colour resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub name: String,
    pub text: String,
    pub txt_x: Option<i32>,
    pub txt_y: Option<i32>,
    pub bg_colour: Colour,
    pub sel_colour: Colour,
    pub txt_colour: Colour,
    pub sel_txt_colour: Colour,
}

/// Draw plan for one button, independent of the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout<'m> {
    pub rect: Rect,
    pub fill: Colour,
    pub text: &'m str,
    pub text_colour: Colour,
    pub text_pos: (i32, i32),
}

/// A navigable, selectable list menu
///
/// # Example
///
/// ```rust
/// let mut menu = ListMenu::new(ListMenuInput {
///     width: 140,
///     height: 36,
///     items: vec![MenuItem::new("playButton", "PLAY"), MenuItem::new("quitButton", "QUIT")],
///     ..Default::default()
/// })?;
///
/// menu.increment_selected();
/// assert_eq!(menu.selected_item(), "quitButton");
/// menu.draw(&mut canvas)?;
/// ```
#[derive(Debug, Clone)]
pub struct ListMenu {
    tx: i32,
    ty: i32,
    width: u32,
    height: u32,
    offx: i32,
    offy: i32,
    text_align: TextAlign,
    text_scale: u32,
    selected_index: usize,
    items: Vec<ListItem>,
}

impl ListMenu {
    /// Builds a menu, validating the mandatory fields
    pub fn new(input: ListMenuInput) -> Result<Self, MenuError> {
        if input.width == 0 {
            return Err(MenuError::MissingWidth);
        }
        if input.height == 0 {
            return Err(MenuError::MissingHeight);
        }
        if input.items.is_empty() {
            return Err(MenuError::MissingItems);
        }

        let offy = if input.offy == 0 {
            input.height as i32
        } else {
            input.offy
        };

        let default_bg = resolve_colour(input.default_bg_colour, colour::CYAN);
        let default_sel_bg = resolve_colour(input.default_sel_bg_colour, colour::MAGENTA);
        let default_txt = resolve_colour(input.default_txt_colour, colour::BLACK);
        let default_sel_txt = resolve_colour(input.default_sel_txt_colour, colour::WHITE);

        let items = input
            .items
            .into_iter()
            .map(|item| ListItem {
                bg_colour: resolve_colour(item.bg_colour, default_bg),
                sel_colour: resolve_colour(item.sel_colour, default_sel_bg),
                txt_colour: resolve_colour(item.txt_colour, default_txt),
                sel_txt_colour: resolve_colour(item.sel_txt_colour, default_sel_txt),
                name: item.name,
                text: item.text,
                txt_x: item.txt_x,
                txt_y: item.txt_y,
            })
            .collect::<Vec<_>>();

        tracing::debug!(items = items.len(), "built list menu");

        Ok(ListMenu {
            tx: input.tx,
            ty: input.ty,
            width: input.width,
            height: input.height,
            offx: input.offx,
            offy,
            text_align: input.text_align,
            text_scale: input.text_scale.max(1),
            selected_index: 0,
            items,
        })
    }

    /// Moves the cursor down unless already on the last item
    pub fn increment_selected(&mut self) {
        self.selected_index = select_next(self.selected_index, self.items.len());
    }

    /// Moves the cursor up unless already on the first item
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

    #[cfg(test)]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Computes where and how every button is drawn
    pub fn item_layouts(&self) -> Vec<ItemLayout<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let x = self.tx + index as i32 * self.offx;
                let y = self.ty + index as i32 * self.offy;
                let selected = index == self.selected_index;

                let (fill, text_colour) = if selected {
                    (item.sel_colour, item.sel_txt_colour)
                } else {
                    (item.bg_colour, item.txt_colour)
                };

                let (text_dx, text_dy) = self.text_offset(item);

                ItemLayout {
                    rect: Rect::new(x, y, self.width, self.height),
                    fill,
                    text: &item.text,
                    text_colour,
                    text_pos: (x + text_dx, y + text_dy),
                }
            })
            .collect()
    }

    /// Draws every button, highlighting the selected one
    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for layout in self.item_layouts() {
            canvas.set_draw_color(layout.fill);
            canvas.fill_rect(layout.rect)?;

            draw_simple_text(
                canvas,
                layout.text,
                layout.text_pos.0,
                layout.text_pos.1,
                layout.text_colour,
                self.text_scale,
            )?;
        }
        Ok(())
    }

    fn text_offset(&self, item: &ListItem) -> (i32, i32) {
        let free_x = self.width as i32 - text_width(&item.text, self.text_scale) as i32;
        let free_y = self.height as i32 - text_height(self.text_scale) as i32;

        let dx = item.txt_x.unwrap_or(match self.text_align {
            TextAlign::Left => TEXT_PADDING,
            TextAlign::Centre => free_x / 2,
            TextAlign::Right => free_x - TEXT_PADDING,
        });
        let dy = item.txt_y.unwrap_or(free_y / 2);

        (dx, dy)
    }
}
