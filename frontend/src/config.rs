use shared::WheelConfig;
use web_sys::window;

// Local storage key holding an optional JSON override of the wheel config
pub const WHEEL_CONFIG_KEY: &str = "wheel_config";

pub const LABEL_FONT_URL: &str =
    "url(https://fonts.gstatic.com/s/lobster/v30/neILzCirqoswsqX9zoKmMw.woff2)";

pub fn get_wheel_config() -> WheelConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(WHEEL_CONFIG_KEY).ok().flatten());

    match stored {
        Some(raw) => WheelConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("Ignoring stored wheel config: {}", err);
            WheelConfig::default()
        }),
        None => WheelConfig::default(),
    }
}
