//! Carousel window - renders controller snapshots and forwards interactions

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use crate::config::Settings;
use crate::controller::{CarouselController, SubscriptionId};
use crate::gui::components::{controls, slide};
use crate::gui::constants::*;
use crate::types::{CarouselEvent, Snapshot};

pub struct CarouselApp {
    controller: CarouselController,
    asset_root: PathBuf,
    repaint_subscription: SubscriptionId,
}

impl CarouselApp {
    pub fn new(cc: &eframe::CreationContext<'_>, asset_root: PathBuf) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut controller = CarouselController::new(Instant::now());

        // Redraw whenever the controller changes
        let ctx = cc.egui_ctx.clone();
        let subscription = controller.subscribe(Box::new(move |snapshot: &Snapshot| {
            debug!(
                index = snapshot.index,
                running = snapshot.running,
                "showing '{}'",
                snapshot.current_image
            );
            ctx.request_repaint();
        }));

        Self {
            controller,
            asset_root,
            repaint_subscription: subscription,
        }
    }

    fn dispatch(&mut self, event: CarouselEvent) {
        debug!(?event, "user interaction");
        self.controller.handle(event, Instant::now());
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.pump(now);

        let widget_focused = ctx.memory(|memory| memory.focused().is_some());
        let key_events =
            ctx.input(|input| controls::key_events(|key| input.key_pressed(key), widget_focused));
        for event in key_events {
            self.dispatch(event);
        }

        egui::TopBottomPanel::top("title_area").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ITEM_SPACING);
                ui.heading(TITLE);
                ui.add_space(ITEM_SPACING);
            });
        });

        let snapshot = self.controller.snapshot();
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(SECTION_SPACING);
                    slide::ui(ui, &snapshot, &self.asset_root);
                    ui.add_space(SECTION_SPACING);
                    controls::ui(ui, snapshot.running)
                })
                .inner
            })
            .inner;

        if let Some(event) = clicked {
            self.dispatch(event);
        }

        // Wake up for the next auto-advance even without input
        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // The egui context is gone after exit
        self.controller.unsubscribe(self.repaint_subscription);
    }
}

pub fn run_gui(settings: &Settings) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                f32::from(settings.window_width),
                f32::from(settings.window_height),
            ])
            .with_title(TITLE),
        ..Default::default()
    };

    let asset_root = settings.asset_root.clone();
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(CarouselApp::new(cc, asset_root)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run egui application: {}", e))?;

    Ok(())
}
