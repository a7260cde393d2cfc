// Start/stop bookkeeping for the animation loop.
//
// The browser side owns the actual `requestAnimationFrame` handle; this
// module decides when one may be requested and when frames are accepted.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    Start,
    Stop,
    Unchanged,
}

/// Tracks on-screen state and the single pending frame callback.
#[derive(Debug, Default)]
pub struct VisibilityGate {
    running: bool,
    pending: bool,
    clock: FrameClock,
}

impl VisibilityGate {
    pub fn new(target_fps: f32) -> Self {
        Self {
            running: false,
            pending: false,
            clock: FrameClock::new(target_fps),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending
    }

    pub fn on_visibility(&mut self, visible: bool) -> GateTransition {
        match (self.running, visible) {
            (false, true) => {
                self.running = true;
                self.clock.reset();
                GateTransition::Start
            }
            (true, false) => {
                self.running = false;
                self.pending = false;
                GateTransition::Stop
            }
            _ => GateTransition::Unchanged,
        }
    }

    /// Whether the caller may request another frame right now.
    #[inline]
    pub fn wants_frame(&self) -> bool {
        self.running && !self.pending
    }

    pub fn frame_scheduled(&mut self) {
        self.pending = true;
    }

    /// A frame callback fired. Returns the elapsed seconds when the frame
    /// should update and render, `None` when it is throttled or the gate
    /// closed in the meantime.
    pub fn frame_fired(&mut self, now_ms: f64) -> Option<f64> {
        self.pending = false;
        if !self.running {
            return None;
        }
        self.clock.tick(now_ms)
    }
}

/// Throttles a high-rate frame source down to a target rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(target_fps: f32) -> Self {
        let interval_ms = if target_fps.is_finite() && target_fps > 0.0 {
            1000.0 / target_fps as f64
        } else {
            0.0
        };
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Forget the previous timestamp; the next tick is accepted with zero elapsed.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return Some(0.0);
        };
        let elapsed = now_ms - last;
        if elapsed >= 0.0 && elapsed < self.interval_ms {
            return None;
        }
        self.last_ms = Some(now_ms);
        Some(elapsed / 1000.0)
    }
}

/// Lifecycle of the lazily built helix widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetStage {
    #[default]
    Waiting,
    Building,
    Live,
    Failed,
    TornDown,
}

impl WidgetStage {
    /// The container's visibility changed. Returns true when a build should
    /// start; only the first visible report while waiting starts one.
    pub fn request_build(&mut self, visible: bool) -> bool {
        if *self == WidgetStage::Waiting && visible {
            *self = WidgetStage::Building;
            return true;
        }
        false
    }

    /// Whether an in-flight build may still attach to the page.
    #[inline]
    pub fn build_wanted(self) -> bool {
        self == WidgetStage::Building
    }

    /// A build finished. Returns true when its result should be kept; a
    /// widget torn down in the meantime discards it.
    pub fn finish_build(&mut self, ok: bool) -> bool {
        if *self != WidgetStage::Building {
            return false;
        }
        *self = if ok {
            WidgetStage::Live
        } else {
            WidgetStage::Failed
        };
        ok
    }

    pub fn tear_down(&mut self) {
        *self = WidgetStage::TornDown;
    }
}
