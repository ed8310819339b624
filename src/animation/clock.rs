use web_time::Instant;

/// Seconds elapsed since the animation started.
///
/// Works on the web too: `web_time` maps to `performance.now()` there.
#[derive(Copy, Clone, Debug)]
pub struct Clock {
    start: Instant,
    previous: f32,
    delta: f32,
}

impl Clock {
    /// Starts a clock at zero.
    pub fn start() -> Clock {
        Clock {
            start: Instant::now(),
            previous: 0.0,
            delta: 0.0,
        }
    }

    /// Seconds since the clock started. Never decreases between calls.
    pub fn elapsed_time(&mut self) -> f32 {
        let now = self.start.elapsed().as_secs_f32().max(self.previous);
        self.delta = now - self.previous;
        self.previous = now;
        now
    }

    /// Seconds between the last two readings of [`elapsed_time`](Self::elapsed_time).
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_is_monotonic() {
        let mut clock = Clock::start();
        assert_eq!(clock.delta_time(), 0.0);

        let mut last = 0.0;
        for _ in 0..1_000 {
            let t = clock.elapsed_time();
            assert!(t >= last);
            assert!((clock.delta_time() - (t - last)).abs() < 1.0e-6);
            last = t;
        }
    }
}
