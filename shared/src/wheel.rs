use crate::config::WheelConfig;
use crate::error::{RenderError, SpinError, WheelError};
use crate::render::{render_wheel, Canvas2d, RenderReport};
use crate::spin::{IndexSource, Phase, RngSource, SpinMachine, SpinPlan, SpinToken, WheelState};
use crate::validation::validate_names;

type WinnerListener = Box<dyn FnMut(&str)>;

/// Label font; the display face is only named once it has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFont {
    family: String,
    fallback: String,
    size_px: u32,
    loaded: bool,
}

impl LabelFont {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            family: config.font_family.clone(),
            fallback: config.fallback_font.clone(),
            size_px: config.font_size_px,
            loaded: false,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// CSS font shorthand for the canvas.
    pub fn css(&self) -> String {
        if self.loaded {
            format!("{}px '{}', {}", self.size_px, self.family, self.fallback)
        } else {
            format!("{}px {}", self.size_px, self.fallback)
        }
    }
}

/// A wheel of names: the list, its spins and the winner notification.
///
/// Every repaint goes through [`Wheel::redraw`]; nothing else touches the
/// surface.
pub struct Wheel<S: IndexSource = RngSource> {
    config: WheelConfig,
    machine: SpinMachine<S>,
    font: LabelFont,
    on_winner: Option<WinnerListener>,
}

impl Wheel<RngSource> {
    pub fn new(config: WheelConfig) -> Self {
        Self::with_source(config, RngSource::from_entropy())
    }
}

impl<S: IndexSource> Wheel<S> {
    pub fn with_source(config: WheelConfig, source: S) -> Self {
        Self {
            machine: SpinMachine::new(&config, source),
            font: LabelFont::new(&config),
            config,
            on_winner: None,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &WheelState {
        self.machine.state()
    }

    pub fn items(&self) -> &[String] {
        self.machine.items()
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn is_spinning(&self) -> bool {
        self.machine.phase() == Phase::Spinning
    }

    pub fn rotation(&self) -> f64 {
        self.machine.rotation()
    }

    pub fn font(&self) -> &LabelFont {
        &self.font
    }

    /// Registers the callback fired once per settled spin.
    pub fn on_winner(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_winner = Some(Box::new(listener));
    }

    /// Replaces the name list. The wheel is reset even mid-spin.
    pub fn set_items(&mut self, names: Vec<String>) -> Result<(), WheelError> {
        validate_names(&names)?;
        log::info!("Wheel reset with {} names", names.len());
        self.machine.reset(names);
        Ok(())
    }

    pub fn spin(&mut self, now_ms: f64) -> Result<SpinPlan, SpinError> {
        let plan = self.machine.spin(now_ms)?;
        log::debug!(
            "Spin {:?} picked {} (spin #{}), rotating to {:.3} rad",
            plan.token,
            plan.selected_index,
            self.machine.state().spin_count,
            plan.rotation
        );
        Ok(plan)
    }

    /// Timer entry point. Emits the winner if `token` is still the current spin.
    pub fn settle(&mut self, token: SpinToken) -> Option<usize> {
        let index = self.machine.settle(token)?;
        let name = self.machine.items().get(index)?.clone();
        log::debug!("Spin {:?} settled on '{}'", token, name);
        if let Some(listener) = self.on_winner.as_mut() {
            listener(&name);
        }
        Some(index)
    }

    /// Settles the pending spin once `now_ms` has reached its due time.
    pub fn advance(&mut self, now_ms: f64) -> Option<usize> {
        let token = self.machine.due(now_ms)?;
        self.settle(token)
    }

    pub fn font_loaded(&mut self) {
        self.font.loaded = true;
    }

    /// Paints the current list. A missing surface is logged and returned,
    /// the wheel keeps working and the next redraw may succeed.
    pub fn redraw(&self, surface: Option<&mut dyn Canvas2d>) -> Result<RenderReport, RenderError> {
        let result = render_wheel(surface, self.machine.items(), &self.config, &self.font.css());
        if let Err(err) = &result {
            log::warn!("{}", err);
        }
        result
    }
}
