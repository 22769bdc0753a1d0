// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod gui;
pub mod log;
pub mod lookup;
pub mod progress;
pub mod render;

pub use error::LookupError;
pub use lookup::{ LookupState, SpecLookupController };
