//! Paints a wheel onto a 2D surface.
//!
//! Drawing happens in two full passes. All wedge fills go down first, then
//! every border and label. Stroking inside the fill loop would let the next
//! wedge's fill cover half of the previous border and leave a visible seam.

use std::f64::consts::TAU;

use crate::colors::Rgb;
use crate::config::WheelConfig;
use crate::error::RenderError;
use crate::geometry::{Wedge, WheelGeometry};

/// The subset of a canvas 2D context the wheel needs.
pub trait Canvas2d {
    /// Raster size in pixels, `(width, height)`.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self, color: Rgb);
    fn stroke(&mut self, color: Rgb, width: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64, font: &str, color: Rgb);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub wedges: usize,
    pub degenerate: bool,
}

/// Clears the surface and draws `items` as a wheel.
///
/// `font` is the CSS font shorthand used for labels. A missing surface
/// aborts this draw only; the caller decides how loudly to report it.
pub fn render_wheel<C: Canvas2d + ?Sized>(
    surface: Option<&mut C>,
    items: &[String],
    config: &WheelConfig,
    font: &str,
) -> Result<RenderReport, RenderError> {
    let surface = surface.ok_or(RenderError::SurfaceUnavailable)?;
    let (width, height) = surface.size();
    let geometry = WheelGeometry::new(items.len(), width, height, config);

    surface.clear();

    if geometry.is_degenerate() {
        draw_disc(surface, &geometry, config);
        return Ok(RenderReport { wedges: 0, degenerate: true });
    }

    let wedges: Vec<Wedge> = geometry.wedges().collect();

    // Fill pass
    for wedge in &wedges {
        trace_wedge(surface, &geometry, wedge);
        surface.fill(wedge.fill);
    }

    // Border and label pass
    for (wedge, name) in wedges.iter().zip(items) {
        trace_wedge(surface, &geometry, wedge);
        surface.stroke(config.stroke_color, config.stroke_width);
        draw_label(surface, &geometry, wedge, name, font, config);
    }

    Ok(RenderReport { wedges: wedges.len(), degenerate: false })
}

fn trace_wedge<C: Canvas2d + ?Sized>(surface: &mut C, geometry: &WheelGeometry, wedge: &Wedge) {
    let (x, y) = geometry.rim_point(wedge.start);
    surface.begin_path();
    surface.move_to(geometry.center_x, geometry.center_y);
    surface.line_to(x, y);
    surface.arc(geometry.center_x, geometry.center_y, geometry.radius, wedge.start, wedge.end);
}

fn draw_label<C: Canvas2d + ?Sized>(
    surface: &mut C,
    geometry: &WheelGeometry,
    wedge: &Wedge,
    name: &str,
    font: &str,
    config: &WheelConfig,
) {
    let label = &wedge.label;
    surface.save();
    surface.translate(geometry.center_x, geometry.center_y);
    surface.rotate(label.rotation);
    surface.translate(0.0, label.offset_y);
    surface.fill_text(name, label.origin_x, 0.0, label.max_width, font, config.contrast.apply(wedge.fill));
    surface.restore();
}

fn draw_disc<C: Canvas2d + ?Sized>(surface: &mut C, geometry: &WheelGeometry, config: &WheelConfig) {
    surface.begin_path();
    surface.arc(geometry.center_x, geometry.center_y, geometry.radius, 0.0, TAU);
    surface.fill(config.neutral_fill);
    surface.stroke(config.stroke_color, config.stroke_width);
}

/// One call made against a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Fill(Rgb),
    Stroke(Rgb, f64),
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    FillText { text: String, x: f64, y: f64, max_width: f64, font: String, color: Rgb },
}

/// Headless surface that keeps the command stream of the current frame.
///
/// `clear` drops everything recorded so far, the same way clearing a canvas
/// drops its pixels, so two frames compare equal only if they would paint
/// the same picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas2d for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
    }

    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, color: Rgb, width: f64) {
        self.commands.push(DrawCommand::Stroke(color, width));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64, font: &str, color: Rgb) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
            font: font.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PALETTE;

    const FONT: &str = "30px 'Lobster'";

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn render(items: &[String]) -> Recorder {
        let mut canvas = Recorder::new(500.0, 500.0);
        render_wheel(Some(&mut canvas), items, &WheelConfig::default(), FONT).unwrap();
        canvas
    }

    #[test]
    fn test_all_fills_before_any_stroke() {
        let canvas = render(&names(&["A", "B", "C", "D"]));
        let commands = canvas.commands();
        let last_fill = commands.iter().rposition(|c| matches!(c, DrawCommand::Fill(_))).unwrap();
        let first_stroke = commands.iter().position(|c| matches!(c, DrawCommand::Stroke(..))).unwrap();
        assert!(last_fill < first_stroke);

        let fills: Vec<Rgb> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, PALETTE[..4].to_vec());
    }

    #[test]
    fn test_labels_follow_their_border() {
        let config = WheelConfig::default();
        let canvas = render(&names(&["A", "B", "C"]));
        let texts: Vec<(String, Rgb)> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, color, .. } => Some((text.clone(), *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("A".to_string(), config.contrast.apply(PALETTE[0])),
                ("B".to_string(), config.contrast.apply(PALETTE[1])),
                ("C".to_string(), config.contrast.apply(PALETTE[2])),
            ]
        );

        let strokes = canvas.commands().iter().filter(|c| matches!(c, DrawCommand::Stroke(..))).count();
        assert_eq!(strokes, 3);
    }

    #[test]
    fn test_redraw_is_identical() {
        let items = names(&["Joueur 1", "Joueur 2", "Joueur 1"]);
        let mut canvas = Recorder::new(320.0, 240.0);
        let config = WheelConfig::default();
        render_wheel(Some(&mut canvas), &items, &config, FONT).unwrap();
        let first = canvas.clone();
        render_wheel(Some(&mut canvas), &items, &config, FONT).unwrap();
        assert_eq!(first, canvas);
        assert_eq!(canvas.commands()[0], DrawCommand::Clear);
    }

    #[test]
    fn test_single_name_is_full_circle() {
        let canvas = render(&names(&["X"]));
        let arcs: Vec<f64> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { start, end, .. } => Some(end - start),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 2);
        for span in arcs {
            assert!((span - TAU).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_list_draws_disc() {
        let config = WheelConfig::default();
        let mut canvas = Recorder::new(500.0, 500.0);
        let report = render_wheel(Some(&mut canvas), &[], &config, FONT).unwrap();
        assert_eq!(report, RenderReport { wedges: 0, degenerate: true });
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Clear,
                DrawCommand::BeginPath,
                DrawCommand::Arc { x: 250.0, y: 250.0, radius: 245.0, start: 0.0, end: TAU },
                DrawCommand::Fill(config.neutral_fill),
                DrawCommand::Stroke(config.stroke_color, config.stroke_width),
            ]
        );
    }

    #[test]
    fn test_missing_surface_is_reported() {
        let result = render_wheel::<Recorder>(None, &names(&["A"]), &WheelConfig::default(), FONT);
        assert!(matches!(result, Err(RenderError::SurfaceUnavailable)));
    }

    #[test]
    fn test_label_transform() {
        let canvas = render(&names(&["A", "B"]));
        let commands = canvas.commands();
        let save = commands.iter().position(|c| *c == DrawCommand::Save).unwrap();
        assert_eq!(commands[save + 1], DrawCommand::Translate(250.0, 250.0));
        assert_eq!(commands[save + 2], DrawCommand::Rotate(-std::f64::consts::FRAC_PI_2));
        assert_eq!(commands[save + 3], DrawCommand::Translate(0.0, 7.0));
        match &commands[save + 4] {
            DrawCommand::FillText { x, y, max_width, font, .. } => {
                assert_eq!((*x, *y, *max_width), (100.0, 0.0, 145.0));
                assert_eq!(font, FONT);
            }
            other => panic!("expected label, got {other:?}"),
        }
        assert_eq!(commands[save + 5], DrawCommand::Restore);
    }
}
