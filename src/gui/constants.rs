//! Layout constants shared by GUI components

pub const ITEM_SPACING: f32 = 8.0;
pub const SECTION_SPACING: f32 = 16.0;

pub const TITLE: &str = "Carousel App";

/// Height left for the slide after header and controls
pub const CHROME_HEIGHT: f32 = 140.0;
pub const SLIDE_ROUNDING: f32 = 8.0;

pub const CONTROL_ICON_SIZE: f32 = 28.0;

/// Two arrow glyphs plus the gap between them
pub const ARROW_ROW_WIDTH: f32 = 2.0 * CONTROL_ICON_SIZE + SECTION_SPACING;
