mod app;
mod ui;

use std::path::PathBuf;

use app::ExplorerApp;
use clap::Parser;
use concept_album_explorer::state::AppState;
use eframe::egui;

/// Browse a concept-album catalog by genre, artist and era.
#[derive(Parser, Debug)]
#[command(name = "concept-album-explorer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Catalog CSV with columns Artist, Album, Genre, Era, Link
    #[arg(default_value = "concept_albums.csv")]
    data: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut state = AppState::default();
    if state.open(&cli.data).is_err() {
        log::warn!("Starting without a catalog; use File → Open… to pick one");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "🎧 Concept Album Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and render the artwork.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ExplorerApp::new(state)))
        }),
    )
}
