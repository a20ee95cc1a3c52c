//! egui renderer for the prediction form.

mod chrome;
mod form;
pub mod style;

use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Smallest window that keeps the form and status bar usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(520.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading settings and the classifier artifact.
    pub fn new() -> Result<Self, String> {
        let controller = EguiController::launch()?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_form(ctx);
    }
}
