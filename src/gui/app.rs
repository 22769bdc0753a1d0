// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{ self, Receiver, Sender },
};

use eframe::egui;
use log::{ error, info };

use crate::{
    config::{ options::LookupOptions, state::AppState },
    lookup::{ Reply, SpecLookupController },
    render::{ Region, Surface },
};

use super::{ actions, components, progress::GuiProgress };

pub type GuiController = SpecLookupController<Region, GuiProgress>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Phone Spec Lookup",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // None only if even the default endpoint can't be set up
    pub controller: Option<GuiController>,

    // worker threads send replies here; drained every frame
    pub reply_tx: Sender<Reply>,
    pub reply_rx: Receiver<Reply>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let (reply_tx, reply_rx) = mpsc::channel();
        let controller = match build_controller(&state.options.lookup) {
            Some(c) => Some(c),
            None => {
                // Bad override (e.g. SPEC_LOOKUP_ENDPOINT); fall back to the built-in endpoint.
                state.options.lookup = LookupOptions::default();
                build_controller(&state.options.lookup)
            }
        };

        info!("Init: endpoint={}", state.options.lookup.endpoint);

        Self { state, controller, reply_tx, reply_rx }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.controller.as_ref().is_some_and(|c| c.surface().loading.running)
    }

    #[inline]
    pub fn status(&mut self, msg: impl Into<String>) {
        if let Some(c) = self.controller.as_mut() {
            c.surface_mut().loading.set_status(msg);
        }
    }
}

fn build_controller(opts: &LookupOptions) -> Option<GuiController> {
    let surface = Surface::new(Region::default(), Region::default(), GuiProgress::default());
    match SpecLookupController::from_options(opts, surface) {
        Ok(c) => Some(c),
        Err(e) => {
            error!("Init: {}", e);
            None
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_replies(self);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            components::search_bar::draw(ui, self);
        });

        egui::SidePanel::left("device")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                components::device_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::spec_panel::draw(ui, self);
        });
    }
}
