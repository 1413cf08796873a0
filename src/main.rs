#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use mazo::gui::MazoApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("Mazo", options, Box::new(|cc| Ok(Box::new(MazoApp::new(cc)))))
}
