use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::config::WheelConfig;
use crate::error::SpinError;
use crate::geometry::wedge_width;

/// Source of the winning wedge index.
pub trait IndexSource {
    /// Uniform integer in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` generator.
pub struct RngSource<R: Rng = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Identifies one spin request. Tokens only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpinToken(u64);

/// What the host needs to animate a spin and schedule its completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub token: SpinToken,
    pub selected_index: usize,
    /// Angle the wheel face is rotated to, in radians
    pub rotation: f64,
    /// Delay until the spin settles
    pub settle_after_ms: u32,
    /// Animation length, shorter than `settle_after_ms`
    pub spin_duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Settled { selected_index: Option<usize> },
    Spinning,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelState {
    pub items: Vec<String>,
    pub spin_count: u32,
    pub selected_index: Option<usize>,
    pub is_settled: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingSpin {
    token: SpinToken,
    due_ms: f64,
}

/// Picks winners and keeps track of which completion is still wanted.
///
/// Only the latest spin can settle: a new spin or a reset drops the pending
/// completion, and [`SpinMachine::settle`] ignores any token it no longer
/// holds.
pub struct SpinMachine<S: IndexSource> {
    state: WheelState,
    source: S,
    spin_duration_ms: u32,
    settle_after_ms: u32,
    extra_revolutions: u32,
    rotation: f64,
    next_token: u64,
    pending: Option<PendingSpin>,
}

impl<S: IndexSource> SpinMachine<S> {
    pub fn new(config: &WheelConfig, source: S) -> Self {
        Self {
            state: WheelState { is_settled: true, ..WheelState::default() },
            source,
            spin_duration_ms: config.spin_duration_ms,
            settle_after_ms: config.settle_delay_ms(),
            extra_revolutions: config.extra_revolutions.max(1),
            rotation: 0.0,
            next_token: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn items(&self) -> &[String] {
        &self.state.items
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_settled {
            Phase::Settled { selected_index: self.state.selected_index }
        } else {
            Phase::Spinning
        }
    }

    /// Current rotation target of the wheel face, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Replaces the list and returns to `Settled(none)`, dropping any pending spin.
    pub fn reset(&mut self, items: Vec<String>) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Reset drops pending spin {:?}", pending.token);
        }
        self.state = WheelState {
            items,
            spin_count: 0,
            selected_index: None,
            is_settled: true,
        };
        self.rotation = 0.0;
    }

    pub fn spin(&mut self, now_ms: f64) -> Result<SpinPlan, SpinError> {
        let count = self.state.items.len();
        let width = wedge_width(count).ok_or(SpinError::EmptyWheel)?;

        let selected_index = self.source.pick(count).min(count - 1);
        self.state.spin_count += 1;
        self.state.selected_index = Some(selected_index);
        self.state.is_settled = false;

        // Each spin adds K turns, so the target keeps moving forward
        self.rotation = self.state.spin_count as f64 * self.extra_revolutions as f64 * TAU
            - selected_index as f64 * width;

        self.next_token += 1;
        let token = SpinToken(self.next_token);
        if let Some(previous) = self.pending.replace(PendingSpin {
            token,
            due_ms: now_ms + self.settle_after_ms as f64,
        }) {
            log::debug!("Spin {:?} supersedes {:?}", token, previous.token);
        }

        Ok(SpinPlan {
            token,
            selected_index,
            rotation: self.rotation,
            settle_after_ms: self.settle_after_ms,
            spin_duration_ms: self.spin_duration_ms,
        })
    }

    /// Token of the pending spin if it is due at `now_ms`.
    pub fn due(&self, now_ms: f64) -> Option<SpinToken> {
        self.pending
            .filter(|pending| now_ms >= pending.due_ms)
            .map(|pending| pending.token)
    }

    /// Completes the spin identified by `token`, returning the winning index.
    /// Stale tokens change nothing.
    pub fn settle(&mut self, token: SpinToken) -> Option<usize> {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.state.is_settled = true;
                self.state.selected_index
            }
            _ => {
                log::debug!("Discarding completion of superseded spin {:?}", token);
                None
            }
        }
    }
}
