//! egui front end

mod app;
mod components;
pub mod constants;
mod page;

pub use app::run_gui;
