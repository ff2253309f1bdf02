//! Colours and default/override resolution
//!
//! Menus store colours as non-premultiplied RGBA. Items may override any of
//! the menu-wide defaults; overrides are resolved once when a menu is built.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-premultiplied 32-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b, a: 0xff }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xff
    }
}

impl From<Colour> for sdl2::pixels::Color {
    fn from(colour: Colour) -> Self {
        sdl2::pixels::Color::RGBA(colour.r, colour.g, colour.b, colour.a)
    }
}

/// Returns the item's own colour when set, otherwise the menu default
pub fn resolve_colour(item_override: Option<Colour>, menu_default: Colour) -> Colour {
    item_override.unwrap_or(menu_default)
}

// Widget defaults
pub const CYAN: Colour = Colour::rgb(0x00, 0xff, 0xff);
pub const MAGENTA: Colour = Colour::rgb(0xff, 0x00, 0xff);
pub const BLACK: Colour = Colour::rgb(0x00, 0x00, 0x00);
pub const WHITE: Colour = Colour::rgb(0xff, 0xff, 0xff);

// Green palette with a purple highlight
pub const GREEN1: Colour = Colour::rgb(0x00, 0x38, 0x40);
pub const GREEN2: Colour = Colour::rgb(0x00, 0x5a, 0x5b);
pub const GREEN3: Colour = Colour::rgb(0x00, 0x73, 0x69);
pub const PURPLE3: Colour = Colour::rgb(0x5f, 0x49, 0x73);

// JSON form is `[r, g, b]` or `[r, g, b, a]`
impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.r)?;
        tuple.serialize_element(&self.g)?;
        tuple.serialize_element(&self.b)?;
        tuple.serialize_element(&self.a)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColourVisitor;

        impl<'de> Visitor<'de> for ColourVisitor {
            type Value = Colour;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "an array of 3 or 4 colour components")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Colour, A::Error> {
                let r = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let g = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let b = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let a = seq.next_element()?.unwrap_or(0xff);
                if seq.next_element::<u8>()?.is_some() {
                    return Err(de::Error::invalid_length(5, &self));
                }
                Ok(Colour { r, g, b, a })
            }
        }

        deserializer.deserialize_seq(ColourVisitor)
    }
}
