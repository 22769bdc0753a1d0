// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;

mod actions;

pub use app::run;
