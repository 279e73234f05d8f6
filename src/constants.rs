//! Application-wide constants

use crate::types::ImageRef;

/// Images shown by the carousel, in display order
pub const GALLERY: [ImageRef; 4] = [
    ImageRef::new("images/dev-table.jpg"),
    ImageRef::new("images/flower-open.jpg"),
    ImageRef::new("images/pink-creamy-bg.jpg"),
    ImageRef::new("images/spotify-dev-bg.jpg"),
];

pub mod timing {
    use std::time::Duration;

    /// Auto-advance period
    pub const ADVANCE_PERIOD: Duration = Duration::from_millis(5000);
}

pub mod config {
    pub const APP_DIR: &str = "carousel";
    pub const FILENAME: &str = "carousel.toml";

    /// Environment variable prefix for overrides
    pub const ENV_PREFIX: &str = "CAROUSEL_";
}

pub mod validation {
    pub const MIN_WINDOW_DIMENSION: u16 = 200;
    pub const MAX_WINDOW_DIMENSION: u16 = 4096;
}
