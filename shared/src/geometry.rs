//! Wedge layout for a wheel of `count` names.
//!
//! Angles follow canvas conventions: radians, zero at 3 o'clock, growing
//! clockwise. The first wedge is centered on 12 o'clock, which is where the
//! pointer sits.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::colors::{palette_color, Rgb};
use crate::config::WheelConfig;

/// Angular width of one wedge, `None` for an empty wheel.
pub fn wedge_width(count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(TAU / count as f64)
    }
}

/// Angle at which wedge 0 starts.
pub fn start_offset(width: f64) -> f64 {
    -(FRAC_PI_2 + width / 2.0)
}

/// Where a wedge's label is anchored, in the wheel's rotated local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    /// Rotation about the hub (mid-angle of the wedge)
    pub rotation: f64,
    /// Local Y shift that vertically centers the text on the bisector
    pub offset_y: f64,
    /// Local X at which the text starts, measured outward from the hub
    pub origin_x: f64,
    /// Text is squeezed to fit this width so it never crosses the rim
    pub max_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub fill: Rgb,
    pub label: LabelAnchor,
}

impl Wedge {
    pub fn mid_angle(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub count: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    label_margin: f64,
    label_baseline: f64,
}

impl WheelGeometry {
    pub fn new(count: usize, width: f64, height: f64, config: &WheelConfig) -> Self {
        let radius = (width.min(height) / 2.0 - config.stroke_margin).max(0.0);
        Self {
            count,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius,
            label_margin: config.label_margin,
            label_baseline: config.label_baseline,
        }
    }

    /// An empty wheel has no wedges and is drawn as a plain disc.
    pub fn is_degenerate(&self) -> bool {
        self.count == 0
    }

    pub fn wedge(&self, index: usize) -> Option<Wedge> {
        if index >= self.count {
            return None;
        }
        let width = wedge_width(self.count)?;
        let start = start_offset(width) + index as f64 * width;
        let end = start + width;

        Some(Wedge {
            index,
            start,
            end,
            fill: palette_color(index),
            label: LabelAnchor {
                rotation: start + width / 2.0,
                offset_y: self.label_baseline,
                origin_x: self.label_margin,
                max_width: (self.radius - self.label_margin).max(0.0),
            },
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = Wedge> + '_ {
        (0..self.count).filter_map(move |index| self.wedge(index))
    }

    /// Point on the rim at `angle`.
    pub fn rim_point(&self, angle: f64) -> (f64, f64) {
        (
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }
}

/// Presentation of one wedge, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeStyle {
    pub rotation: f64,
    pub translation: (f64, f64),
    pub fill: Rgb,
    pub stroke: Rgb,
    pub text: Rgb,
}

pub fn wedge_style(index: usize, count: usize, config: &WheelConfig) -> Option<WedgeStyle> {
    if index >= count {
        return None;
    }
    let width = wedge_width(count)?;
    let fill = palette_color(index);
    Some(WedgeStyle {
        rotation: start_offset(width) + (index as f64 + 0.5) * width,
        translation: (config.label_margin, config.label_baseline),
        fill,
        stroke: config.stroke_color,
        text: config.contrast.apply(fill),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PALETTE;

    const EPS: f64 = 1e-9;

    fn geometry(count: usize) -> WheelGeometry {
        WheelGeometry::new(count, 500.0, 500.0, &WheelConfig::default())
    }

    #[test]
    fn test_wedges_cover_full_circle() {
        for count in 1..=40 {
            let geom = geometry(count);
            let wedges: Vec<Wedge> = geom.wedges().collect();
            assert_eq!(wedges.len(), count);

            let total: f64 = wedges.iter().map(Wedge::span).sum();
            assert!((total - TAU).abs() < EPS, "count {count}: total {total}");

            for pair in wedges.windows(2) {
                assert!((pair[0].end - pair[1].start).abs() < EPS);
                assert!(pair[0].start < pair[1].start);
            }
            let first = wedges.first().unwrap();
            let last = wedges.last().unwrap();
            assert!((last.end - first.start - TAU).abs() < EPS);
        }
    }

    #[test]
    fn test_first_wedge_centered_on_pointer() {
        for count in [1, 2, 3, 7, 12] {
            let wedge = geometry(count).wedge(0).unwrap();
            assert!((wedge.mid_angle() + FRAC_PI_2).abs() < EPS);
            assert!((wedge.label.rotation - wedge.mid_angle()).abs() < EPS);
        }
    }

    #[test]
    fn test_single_name_spans_everything() {
        let wedge = geometry(1).wedge(0).unwrap();
        assert!((wedge.span() - TAU).abs() < EPS);
        assert!((wedge.start + FRAC_PI_2 + std::f64::consts::PI).abs() < EPS);
    }

    #[test]
    fn test_empty_wheel_is_degenerate() {
        let geom = geometry(0);
        assert!(geom.is_degenerate());
        assert_eq!(geom.wedges().count(), 0);
        assert_eq!(geom.wedge(0), None);
        assert_eq!(wedge_width(0), None);
    }

    #[test]
    fn test_radius_and_label_room() {
        let geom = WheelGeometry::new(3, 400.0, 300.0, &WheelConfig::default());
        assert_eq!(geom.radius, 145.0);
        assert_eq!((geom.center_x, geom.center_y), (200.0, 150.0));
        let label = geom.wedge(1).unwrap().label;
        assert_eq!(label.origin_x, 100.0);
        assert_eq!(label.offset_y, 7.0);
        assert_eq!(label.max_width, 45.0);
    }

    #[test]
    fn test_tiny_raster_never_goes_negative() {
        let geom = WheelGeometry::new(4, 6.0, 6.0, &WheelConfig::default());
        assert_eq!(geom.radius, 0.0);
        assert_eq!(geom.wedge(0).unwrap().label.max_width, 0.0);
    }

    #[test]
    fn test_fill_cycles_palette() {
        let geom = geometry(12);
        assert_eq!(geom.wedge(9).unwrap().fill, PALETTE[0]);
        assert_eq!(geom.wedge(11).unwrap().fill, PALETTE[2]);
    }

    #[test]
    fn test_wedge_style_matches_geometry() {
        let config = WheelConfig::default();
        let geom = geometry(5);
        for wedge in geom.wedges() {
            let style = wedge_style(wedge.index, 5, &config).unwrap();
            assert!((style.rotation - wedge.mid_angle()).abs() < EPS);
            assert_eq!(style.fill, wedge.fill);
            assert_eq!(style.stroke, config.stroke_color);
            assert_eq!(style.text, config.contrast.apply(wedge.fill));
        }
        assert_eq!(wedge_style(5, 5, &config), None);
        assert_eq!(wedge_style(0, 0, &config), None);
    }
}
