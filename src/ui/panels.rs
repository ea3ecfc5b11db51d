use eframe::egui::{self, Color32, RichText, Ui};

use concept_album_explorer::data::model::Facet;
use concept_album_explorer::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – facet selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    let Some(catalog) = state.catalog.clone() else {
        ui.label("No catalog loaded.");
        return;
    };

    for facet in Facet::ALL {
        let current = state.selection.get(facet).clone();
        let mut picked = current.clone();

        let mut heading = RichText::new(facet.column()).strong();
        if !current.is_all() {
            heading = heading.color(Color32::LIGHT_BLUE);
        }
        ui.label(heading);
        egui::ComboBox::from_id_salt(facet.column())
            .selected_text(current.to_string())
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                for option in catalog.facet_options(facet) {
                    let label = option.to_string();
                    ui.selectable_value(&mut picked, option, label);
                }
            });
        ui.add_space(6.0);

        if picked != current {
            log::debug!("{facet} filter set to {picked}");
            state.set_facet(facet, picked);
        }
    }

    ui.separator();
    let any_active = !state.selection.is_unconstrained();
    if ui
        .add_enabled(any_active, egui::Button::new("Reset filters"))
        .clicked()
    {
        state.reset_filters();
    }

    ui.add_space(8.0);
    ui.label(RichText::new(format!("🎵 {} albums found", state.visible_indices.len())).strong());
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(source) = &state.source {
            ui.label(RichText::new(source.display().to_string()).weak());
        }

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} albums loaded, {} visible",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Page header shown above the album table.
pub fn intro(ui: &mut Ui) {
    ui.heading("🎧 Concept Album Explorer");
    ui.label(
        "Discover 70 years of concept albums that turned music into storytelling. \
         Filter by genre, artist, or era, then pick any title to play it on YouTube Music.",
    );
    ui.separator();
}

/// Footer credits.
pub fn footer(ui: &mut Ui) {
    ui.small(
        "Data compiled January 2026 • Curated from Rolling Stone, Wikipedia & \
         uDiscover Music concept-album lists.",
    );
}

/// Full-panel message when no catalog could be loaded.
pub fn load_failure(ui: &mut Ui, state: &AppState) {
    ui.centered_and_justified(|ui: &mut Ui| {
        let msg = state
            .status_message
            .clone()
            .unwrap_or_else(|| "Open a catalog to browse albums  (File → Open…)".to_string());
        ui.heading(RichText::new(msg).color(Color32::LIGHT_RED));
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open album catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        // Errors are logged and surfaced through `status_message`.
        let _ = state.open(&path);
    }
}
