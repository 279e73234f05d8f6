//! Current slide

use eframe::egui;
use std::path::Path;

use crate::gui::constants::*;
use crate::types::Snapshot;

/// Draws the current image scaled into the space left by the chrome.
/// Missing files show the loader's own error placeholder.
pub fn ui(ui: &mut egui::Ui, snapshot: &Snapshot, asset_root: &Path) {
    let max_width = ui.available_width();
    let max_height = (ui.available_height() - CHROME_HEIGHT).max(CHROME_HEIGHT);

    ui.add(
        egui::Image::new(snapshot.current_image.uri(asset_root))
            .maintain_aspect_ratio(true)
            .max_width(max_width)
            .max_height(max_height)
            .rounding(SLIDE_ROUNDING),
    )
    .on_hover_text(snapshot.current_image.path());
}
