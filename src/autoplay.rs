/// Interval timer that requests a forward navigation, paused while hovered.
pub struct Autoplay {
    interval: Option<f32>,
    elapsed: f32,
    paused: bool,
    stopped: bool,
}

impl Autoplay {
    /// An interval of zero or less disables autoplay.
    pub fn new(interval_ms: i64) -> Self {
        let interval = (interval_ms > 0).then(|| interval_ms as f32 / 1000.0);
        Self {
            interval,
            elapsed: 0.0,
            paused: false,
            stopped: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.interval.is_some() && !self.stopped
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.is_enabled() && !self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.elapsed = 0.0;
    }

    /// Restarts a full interval, like re-arming a cleared timer.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.elapsed = 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.elapsed = 0.0;
    }

    /// Advances the timer; true when an interval has elapsed. A stall spanning
    /// several intervals fires once, keeping only the partial interval.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        if self.paused || self.stopped {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed %= interval;
            return true;
        }
        false
    }
}
