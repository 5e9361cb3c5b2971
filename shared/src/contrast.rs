use serde::{Deserialize, Serialize};

use crate::colors::Rgb;

/// How a wedge label color is derived from the wedge fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastRule {
    /// Invert C, M and Y while keeping the key (black) component.
    #[default]
    Cmyk,
    /// Per-channel complement, `255 - c`.
    Complement,
}

impl ContrastRule {
    pub fn apply(self, color: Rgb) -> Rgb {
        match self {
            ContrastRule::Cmyk => cmyk_inverse(color),
            ContrastRule::Complement => complement(color),
        }
    }
}

/// Inverts a color in CMYK space, keeping K.
///
/// Pure black (K = 1) has no defined C/M/Y, so it maps straight to white.
pub fn cmyk_inverse(color: Rgb) -> Rgb {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Rgb::WHITE;
    }

    let inverted = |channel: f64| {
        let c = (1.0 - channel - k) / (1.0 - k);
        let c_inv = 1.0 - c;
        to_channel(255.0 * (1.0 - c_inv * (1.0 - k) - k))
    };

    Rgb::new(inverted(r), inverted(g), inverted(b))
}

pub fn complement(color: Rgb) -> Rgb {
    Rgb::new(255 - color.r, 255 - color.g, 255 - color.b)
}

// floor() would turn 14.999999 into 14, nudge before truncating
fn to_channel(value: f64) -> u8 {
    (value + 1e-9).floor().clamp(0.0, 255.0) as u8
}

/// Label color for text drawn over `color` (CMYK rule). Malformed input gives black.
pub fn contrast_color(color: &str) -> String {
    match Rgb::parse(color) {
        Some(rgb) => cmyk_inverse(rgb).to_hex(),
        None => Rgb::BLACK.to_hex(),
    }
}

/// Per-channel inverse of a `#RRGGBB` color. Malformed input gives black.
pub fn invert(color: &str) -> String {
    match Rgb::parse(color) {
        Some(rgb) => complement(rgb).to_hex(),
        None => Rgb::BLACK.to_hex(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PALETTE;

    #[test]
    fn test_black_goes_white() {
        assert_eq!(contrast_color("#000000"), "#FFFFFF");
        assert_eq!(invert("#000000"), "#FFFFFF");
    }

    #[test]
    fn test_white_goes_black() {
        assert_eq!(contrast_color("#FFFFFF"), "#000000");
        assert_eq!(invert("#FFFFFF"), "#000000");
    }

    #[test]
    fn test_cmyk_keeps_key() {
        // max channel 0xA0: each output channel is max - channel
        assert_eq!(contrast_color("#5F9EA0"), "#410200");
        assert_eq!(contrast_color("#FF0000"), "#00FFFF");
        assert_eq!(contrast_color("#F0FFFF"), "#0F0000");
    }

    #[test]
    fn test_cmyk_matches_integer_form_on_palette() {
        for color in PALETTE {
            let max = color.r.max(color.g).max(color.b);
            let expected = Rgb::new(max - color.r, max - color.g, max - color.b);
            assert_eq!(cmyk_inverse(color), expected, "palette color {color}");
        }
    }

    #[test]
    fn test_double_inversion() {
        assert_eq!(invert(&invert("#5F9EA0")), "#5F9EA0");
        assert_eq!(invert(&invert("#D2B48C")), "#D2B48C");
    }

    #[test]
    fn test_malformed_is_black() {
        assert_eq!(invert("not-a-color"), "#000000");
        assert_eq!(contrast_color("not-a-color"), "#000000");
        assert_eq!(contrast_color("#12"), "#000000");
        assert_eq!(invert(""), "#000000");
    }

    #[test]
    fn test_rule_dispatch() {
        let cadet = Rgb::new(0x5F, 0x9E, 0xA0);
        assert_eq!(ContrastRule::Cmyk.apply(cadet), Rgb::new(0x41, 0x02, 0x00));
        assert_eq!(ContrastRule::Complement.apply(cadet), Rgb::new(0xA0, 0x61, 0x5F));
    }
}
