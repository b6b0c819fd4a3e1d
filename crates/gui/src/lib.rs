pub mod config;
mod gui;

pub use config::Config;
pub use gui::run;
