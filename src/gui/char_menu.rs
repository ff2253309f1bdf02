//! Character Picker Component
//!
//! Lays a flat list of characters out as a grid of small boxes and lets the
//! player move a cursor over it with the arrow keys. Rows are filled left to
//! right; the last row may be shorter than the others.

use crate::colour::{self, resolve_colour, Colour};
use crate::error::MenuError;
use crate::selection::{flat_index, grid_position, select_next, select_prev};
use crate::text::{draw_simple_text, GLYPH_HEIGHT, GLYPH_WIDTH};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const DEFAULT_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const DEFAULT_CHARS_PER_ROW: usize = 13;
const DEFAULT_BOX_SIZE: u32 = 20;
const DEFAULT_OFFSET: i32 = 24;

/// A selectable box holding a single character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharBox {
    /// Describes the box, currently the character itself
    pub name: String,
    pub ch: char,
    pub x_index: usize,
    pub y_index: usize,

    /// Screen location of the box
    pub loc_x: i32,
    pub loc_y: i32,

    /// Text position inside the box
    pub txt_x: i32,
    pub txt_y: i32,
}

/// Splits a character list into lines of at most `line_length` characters
pub fn split_into_lines(chars: &str, line_length: usize) -> Vec<String> {
    let line_length = line_length.max(1);
    let chars: Vec<char> = chars.chars().collect();
    chars
        .chunks(line_length)
        .map(|line| line.iter().collect())
        .collect()
}

/// Arranges a character list into rows of boxes
///
/// Only the character and grid indices are filled in; screen positions are
/// assigned by [`CharMenu::new`].
pub fn char_list_to_char_grid(chars: &str, line_length: usize) -> Vec<Vec<CharBox>> {
    split_into_lines(chars, line_length)
        .iter()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, ch)| CharBox {
                    name: ch.to_string(),
                    ch,
                    x_index: x,
                    y_index: y,
                    ..Default::default()
                })
                .collect()
        })
        .collect()
}

/// Everything needed to build a [`CharMenu`]
#[derive(Debug, Clone)]
pub struct CharMenuInput {
    pub tx: i32,
    pub ty: i32,
    pub chars: String,
    pub chars_per_row: usize,
    pub box_size: u32,
    pub offx: i32,
    pub offy: i32,
    pub default_bg_colour: Option<Colour>,
    pub default_txt_colour: Option<Colour>,
    pub default_sel_bg_colour: Option<Colour>,
    pub default_sel_txt_colour: Option<Colour>,
}

impl Default for CharMenuInput {
    fn default() -> Self {
        CharMenuInput {
            tx: 0,
            ty: 0,
            chars: DEFAULT_CHARS.to_string(),
            chars_per_row: DEFAULT_CHARS_PER_ROW,
            box_size: DEFAULT_BOX_SIZE,
            offx: DEFAULT_OFFSET,
            offy: DEFAULT_OFFSET,
            default_bg_colour: None,
            default_txt_colour: None,
            default_sel_bg_colour: None,
            default_sel_txt_colour: None,
        }
    }
}

/// Draw plan for one character box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout<'m> {
    pub rect: Rect,
    pub fill: Colour,
    pub text: &'m str,
    pub text_colour: Colour,
    pub text_pos: (i32, i32),
}

/// A navigable grid of character boxes
///
/// Boxes are stored row by row in one list; the cursor is a grid position.
pub struct CharMenu {
    box_size: u32,
    bg_colour: Colour,
    txt_colour: Colour,
    sel_bg_colour: Colour,
    sel_txt_colour: Colour,
    selected_x: usize,
    selected_y: usize,
    chars_per_row: usize,
    boxes: Vec<CharBox>,
}

impl CharMenu {
    pub fn new(input: CharMenuInput) -> Result<Self, MenuError> {
        if input.chars.is_empty() {
            return Err(MenuError::MissingChars);
        }
        if input.chars_per_row == 0 {
            return Err(MenuError::MissingCharsPerRow);
        }
        if input.box_size == 0 {
            return Err(MenuError::MissingBoxSize);
        }

        // Glyphs are drawn at scale 1, centred in the box
        let txt_x = (input.box_size as i32 - GLYPH_WIDTH as i32) / 2;
        let txt_y = (input.box_size as i32 - GLYPH_HEIGHT as i32) / 2;

        let boxes: Vec<CharBox> = char_list_to_char_grid(&input.chars, input.chars_per_row)
            .into_iter()
            .flatten()
            .map(|char_box| CharBox {
                loc_x: input.tx + char_box.x_index as i32 * input.offx,
                loc_y: input.ty + char_box.y_index as i32 * input.offy,
                txt_x,
                txt_y,
                ..char_box
            })
            .collect();

        tracing::debug!(
            boxes = boxes.len(),
            per_row = input.chars_per_row,
            "built character menu"
        );

        Ok(CharMenu {
            box_size: input.box_size,
            bg_colour: resolve_colour(input.default_bg_colour, colour::CYAN),
            txt_colour: resolve_colour(input.default_txt_colour, colour::BLACK),
            sel_bg_colour: resolve_colour(input.default_sel_bg_colour, colour::MAGENTA),
            sel_txt_colour: resolve_colour(input.default_sel_txt_colour, colour::WHITE),
            selected_x: 0,
            selected_y: 0,
            chars_per_row: input.chars_per_row,
            boxes,
        })
    }

    pub fn inc_x(&mut self) {
        self.selected_x = select_next(self.selected_x, self.row_len(self.selected_y));
    }

    pub fn dec_x(&mut self) {
        self.selected_x = select_prev(self.selected_x);
    }

    pub fn inc_y(&mut self) {
        self.selected_y = select_next(self.selected_y, self.row_count());
        self.clamp_x();
    }

    pub fn dec_y(&mut self) {
        self.selected_y = select_prev(self.selected_y);
        self.clamp_x();
    }

    /// `(x, y)` grid index of the cursor
    pub fn selected_position(&self) -> (usize, usize) {
        (self.selected_x, self.selected_y)
    }

    pub fn selected_box(&self) -> &CharBox {
        &self.boxes[flat_index(self.selected_x, self.selected_y, self.chars_per_row)]
    }

    pub fn selected_char(&self) -> char {
        self.selected_box().ch
    }

    pub fn box_layouts(&self) -> Vec<BoxLayout<'_>> {
        let selected_index = flat_index(self.selected_x, self.selected_y, self.chars_per_row);

        self.boxes
            .iter()
            .enumerate()
            .map(|(index, char_box)| {
                let selected = index == selected_index;
                let (fill, text_colour) = if selected {
                    (self.sel_bg_colour, self.sel_txt_colour)
                } else {
                    (self.bg_colour, self.txt_colour)
                };

                BoxLayout {
                    rect: Rect::new(char_box.loc_x, char_box.loc_y, self.box_size, self.box_size),
                    fill,
                    text: &char_box.name,
                    text_colour,
                    text_pos: (char_box.loc_x + char_box.txt_x, char_box.loc_y + char_box.txt_y),
                }
            })
            .collect()
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for layout in self.box_layouts() {
            canvas.set_draw_color(layout.fill);
            canvas.fill_rect(layout.rect)?;

            draw_simple_text(
                canvas,
                layout.text,
                layout.text_pos.0,
                layout.text_pos.1,
                layout.text_colour,
                1,
            )?;
        }
        Ok(())
    }

    /// Number of rows; the menu always holds at least one box
    fn row_count(&self) -> usize {
        let (_, last_row) = grid_position(self.boxes.len().saturating_sub(1), self.chars_per_row);
        last_row + 1
    }

    fn row_len(&self, y: usize) -> usize {
        let row_start = flat_index(0, y, self.chars_per_row);
        self.boxes.len().saturating_sub(row_start).min(self.chars_per_row)
    }

    #[cfg(test)]
    fn box_at(&self, x: usize, y: usize) -> &CharBox {
        &self.boxes[flat_index(x, y, self.chars_per_row)]
    }

    fn clamp_x(&mut self) {
        let last = self.row_len(self.selected_y).saturating_sub(1);
        self.selected_x = self.selected_x.min(last);
    }
}
