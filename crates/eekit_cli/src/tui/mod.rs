pub mod app;
pub mod input;
pub mod run;
pub mod ui;

pub use run::run_tui;
