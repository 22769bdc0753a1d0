// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use log::LevelFilter;
use spec_lookup::{
    config::{ options::LookupOptions, state::AppState },
    gui,
};

fn main() {
    if let Err(e) = spec_lookup::log::init(LevelFilter::Info) {
        eprintln!("Logger unavailable: {e}");
    }

    let mut state = AppState::default();
    state.options.lookup = LookupOptions::from_env();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Phone Spec Lookup")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
