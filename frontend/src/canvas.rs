use shared::render::Canvas2d;
use shared::Rgb;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Browser canvas seen through the wheel's drawing interface.
pub struct HtmlCanvas {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl HtmlCanvas {
    /// `None` when the element has no 2D context to hand out.
    pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }
}

impl Canvas2d for HtmlCanvas {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        let _ = self.context.arc(x, y, radius, start, end);
    }

    fn fill(&mut self, color: Rgb) {
        self.context.set_fill_style_str(&color.to_hex());
        self.context.fill();
    }

    fn stroke(&mut self, color: Rgb, width: f64) {
        self.context.set_stroke_style_str(&color.to_hex());
        self.context.set_line_width(width);
        self.context.stroke();
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.context.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.context.rotate(angle);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: f64, font: &str, color: Rgb) {
        self.context.set_font(font);
        self.context.set_fill_style_str(&color.to_hex());
        let _ = self.context.fill_text_with_max_width(text, x, y, max_width);
    }
}
