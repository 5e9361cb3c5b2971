pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod styles;

pub use app::App;
