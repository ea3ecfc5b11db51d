use eframe::egui;

use concept_album_explorer::state::AppState;
use crate::ui::{albums, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: credits ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        if self.state.catalog.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::load_failure(ui, &self.state);
            });
            return;
        }

        // ---- Left side panel: facets ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: preview ----
        egui::SidePanel::right("preview_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                albums::preview_panel(ui, &mut self.state);
            });

        // ---- Central panel: album table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::intro(ui);
            albums::album_table(ui, &self.state);
        });
    }
}
