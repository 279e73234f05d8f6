//! Pause/play toggle and previous/next arrows

use eframe::egui;

use crate::gui::constants::*;
use crate::types::CarouselEvent;

const PAUSE_ICON: &str = "⏸";
const RESUME_ICON: &str = "⏵";
const PREVIOUS_ICON: &str = "◀";
const NEXT_ICON: &str = "▶";

/// Keys with a carousel action, checked every frame
pub const BOUND_KEYS: [egui::Key; 3] = [
    egui::Key::Space,
    egui::Key::ArrowRight,
    egui::Key::ArrowLeft,
];

/// Renders the controls and returns the clicked action, if any
pub fn ui(ui: &mut egui::Ui, running: bool) -> Option<CarouselEvent> {
    let mut event = None;

    let (icon, hint) = toggle_label(running);
    if icon_button(ui, icon).on_hover_text(hint).clicked() {
        event = Some(CarouselEvent::ToggleRun);
    }

    ui.add_space(ITEM_SPACING);

    ui.horizontal(|ui| {
        ui.add_space(leading_space(ui.available_width(), ARROW_ROW_WIDTH));
        if icon_button(ui, PREVIOUS_ICON).on_hover_text("Previous").clicked() {
            event = Some(CarouselEvent::Previous);
        }
        ui.add_space(SECTION_SPACING);
        if icon_button(ui, NEXT_ICON).on_hover_text("Next").clicked() {
            event = Some(CarouselEvent::Next);
        }
    });

    event
}

/// Pause while running, play while paused
fn toggle_label(running: bool) -> (&'static str, &'static str) {
    if running {
        (PAUSE_ICON, "Pause")
    } else {
        (RESUME_ICON, "Resume")
    }
}

/// Space before a row of `row_width` so it sits centered in `available`
fn leading_space(available: f32, row_width: f32) -> f32 {
    ((available - row_width) / 2.0).max(0.0)
}

fn icon_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    let label = egui::RichText::new(icon).size(CONTROL_ICON_SIZE);
    ui.add(egui::Button::new(label).frame(false))
}

/// Keyboard equivalents of the buttons
pub fn event_for_key(key: egui::Key) -> Option<CarouselEvent> {
    match key {
        egui::Key::Space => Some(CarouselEvent::ToggleRun),
        egui::Key::ArrowRight => Some(CarouselEvent::Next),
        egui::Key::ArrowLeft => Some(CarouselEvent::Previous),
        _ => None,
    }
}

/// Actions for the bound keys pressed this frame.
///
/// Nothing fires while a widget has keyboard focus: a focused button already
/// turns Space into a click, and acting on both would undo the toggle.
pub fn key_events(
    pressed: impl Fn(egui::Key) -> bool,
    widget_focused: bool,
) -> Vec<CarouselEvent> {
    if widget_focused {
        return Vec::new();
    }
    BOUND_KEYS
        .into_iter()
        .filter(|key| pressed(*key))
        .filter_map(event_for_key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_follows_run_state() {
        assert_eq!(toggle_label(true).1, "Pause");
        assert_eq!(toggle_label(false).1, "Resume");
    }

    #[test]
    fn test_resume_icon_differs_from_arrows() {
        let (resume, _) = toggle_label(false);
        assert_ne!(resume, NEXT_ICON);
        assert_ne!(resume, PREVIOUS_ICON);
        assert_ne!(toggle_label(true).0, resume);
    }

    #[test]
    fn test_arrow_row_centered() {
        assert_eq!(leading_space(400.0, 100.0), 150.0);
        assert_eq!(leading_space(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(event_for_key(egui::Key::Space), Some(CarouselEvent::ToggleRun));
        assert_eq!(event_for_key(egui::Key::ArrowRight), Some(CarouselEvent::Next));
        assert_eq!(event_for_key(egui::Key::ArrowLeft), Some(CarouselEvent::Previous));
        assert_eq!(event_for_key(egui::Key::Enter), None);
    }

    #[test]
    fn test_space_ignored_while_button_focused() {
        let space_only = |key: egui::Key| key == egui::Key::Space;

        assert_eq!(key_events(space_only, false), vec![CarouselEvent::ToggleRun]);
        assert!(key_events(space_only, true).is_empty());
    }

    #[test]
    fn test_key_events_in_binding_order() {
        let all = |_: egui::Key| true;
        assert_eq!(
            key_events(all, false),
            vec![
                CarouselEvent::ToggleRun,
                CarouselEvent::Next,
                CarouselEvent::Previous
            ]
        );
    }
}
