use std::fmt;

/// Errors raised while building a menu widget
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// Item width was zero
    MissingWidth,

    /// Item height was zero
    MissingHeight,

    /// Menu was given no items
    MissingItems,

    /// Character picker was given no characters
    MissingChars,

    /// Character picker row width was zero
    MissingCharsPerRow,

    /// Character picker box size was zero
    MissingBoxSize,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::MissingWidth => write!(f, "Mandatory input field width is missing"),
            MenuError::MissingHeight => write!(f, "Mandatory input field height is missing"),
            MenuError::MissingItems => write!(f, "Mandatory input field items is missing"),
            MenuError::MissingChars => write!(f, "Mandatory input field chars is missing"),
            MenuError::MissingCharsPerRow => {
                write!(f, "Mandatory input field chars_per_row is missing")
            }
            MenuError::MissingBoxSize => write!(f, "Mandatory input field box_size is missing"),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
