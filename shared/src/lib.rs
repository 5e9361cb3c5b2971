//! Core of the wheel of names: palette and label contrast, wedge geometry,
//! the two-pass renderer and the spin state machine. Nothing here depends on
//! a UI toolkit; hosts provide a [`render::Canvas2d`] and a timer.

pub mod colors;
pub mod config;
pub mod contrast;
pub mod error;
pub mod geometry;
pub mod render;
pub mod spin;
pub mod validation;
pub mod wheel;

pub use colors::{palette_color, Rgb, PALETTE};
pub use config::WheelConfig;
pub use contrast::{contrast_color, invert, ContrastRule};
pub use error::{ConfigError, RenderError, SpinError, WheelError};
pub use geometry::{wedge_style, WedgeStyle, WheelGeometry};
pub use render::{render_wheel, Canvas2d};
pub use spin::{IndexSource, Phase, RngSource, SpinPlan, SpinToken};
pub use wheel::Wheel;
