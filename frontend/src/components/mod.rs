pub mod names_editor;
pub mod roulette;
pub mod winner_banner;

pub use names_editor::NamesEditor;
pub use roulette::Roulette;
pub use winner_banner::WinnerBanner;
