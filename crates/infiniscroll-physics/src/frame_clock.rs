use web_time::Instant;

/// Longest frame delta handed out, in seconds. A stalled host (debugger,
/// backgrounded tab) would otherwise fling the list across its whole content
/// in a single step.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 3.0;

/// Measures the time between consecutive host ticks.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call; zero on the first call.
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt.min(MAX_FRAME_DELTA)
    }

    /// Forgets the previous tick so the next delta starts from zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
