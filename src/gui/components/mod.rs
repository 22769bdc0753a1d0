// src/gui/components/mod.rs
pub mod device_panel;
pub mod search_bar;
pub mod spec_panel;
