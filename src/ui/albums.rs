use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use concept_album_explorer::state::AppState;

const ROW_HEIGHT: f32 = 20.0;
const ARTWORK_WIDTH: f32 = 300.0;

// ---------------------------------------------------------------------------
// Album table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered albums as a striped table: Artist, Album, Genre, Era.
pub fn album_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Albums Found");

    if state.visible_indices.is_empty() {
        ui.label("No albums match this filter set.");
        return;
    }

    let rows: Vec<_> = state.visible_records().collect();
    let colors = state.genre_colors.as_ref();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            for title in ["Artist", "Album", "Genre", "Era"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = rows[row.index()];
                row.col(|ui| {
                    ui.label(&rec.artist);
                });
                row.col(|ui| {
                    ui.label(&rec.album);
                });
                row.col(|ui| {
                    let mut genre = RichText::new(&rec.genre);
                    if let Some(cm) = colors {
                        genre = genre.color(cm.color_for(&rec.genre));
                    }
                    ui.label(genre);
                });
                row.col(|ui| {
                    ui.label(&rec.era);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Preview (right panel)
// ---------------------------------------------------------------------------

/// Album picker plus artwork, caption, genre/era and listening link.
pub fn preview_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🎬 Preview and Play");
    ui.separator();

    let Some(current) = state.preview_record().map(|r| r.album.clone()) else {
        ui.label("No albums match this filter set.");
        return;
    };

    let mut picked = current.clone();
    egui::ComboBox::from_label("Choose an album to preview")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for title in state.visible_titles() {
                ui.selectable_value(&mut picked, title.to_string(), title);
            }
        });
    if picked != current {
        state.select_album(&picked);
    }

    let Some(preview) = state.preview() else {
        return;
    };

    ui.add_space(8.0);
    ui.add(
        egui::Image::from_uri(preview.artwork_url.as_str())
            .max_width(ARTWORK_WIDTH)
            .corner_radius(4.0),
    );
    ui.label(RichText::new(&preview.caption).italics());
    ui.add_space(4.0);
    ui.label(format!("Genre: {} | Era: {}", preview.genre, preview.era));
    ui.hyperlink_to("▶ Listen on YouTube Music", &preview.link);
}
