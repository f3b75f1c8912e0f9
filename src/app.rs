use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct NmrHelperApp {
    pub state: AppState,
}

impl eframe::App for NmrHelperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: input and results ----
        egui::SidePanel::left("shift_panel")
            .default_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: reference chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::reference_plot(ui, &self.state);
        });
    }
}
