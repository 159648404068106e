use std::time::Instant;

/// Elapsed time handed to one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f64,
    /// Frames produced before this one.
    pub frame: u64,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Wall(Instant),
    Fixed { step: f64 },
}

/// Source of absolute elapsed time for the animation loop.
///
/// The desktop driver uses wall-clock time; headless runs use a fixed step
/// so output is reproducible.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    frame: u64,
}

impl FrameClock {
    /// Wall-clock time since now.
    pub fn wall() -> Self {
        Self {
            source: Source::Wall(Instant::now()),
            frame: 0,
        }
    }

    /// Simulated clock advancing `1 / fps` seconds per frame. Rates that are
    /// not positive or whose step is not finite freeze time at zero.
    pub fn fixed(fps: f64) -> Self {
        let step = 1.0 / fps;
        let step = if fps > 0.0 && step.is_finite() { step } else { 0.0 };
        Self {
            source: Source::Fixed { step },
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read the time for the next frame and advance the frame counter.
    pub fn advance(&mut self) -> FrameTime {
        let elapsed = match self.source {
            Source::Wall(start) => start.elapsed().as_secs_f64(),
            Source::Fixed { step } => self.frame as f64 * step,
        };
        let time = FrameTime {
            elapsed,
            frame: self.frame,
        };
        self.frame += 1;
        time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_steps_evenly() {
        let mut clock = FrameClock::fixed(4.0);
        let times: Vec<f64> = (0..3).map(|_| clock.advance().elapsed).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5]);
        assert_eq!(clock.frame(), 3);
    }

    #[test]
    fn fixed_clock_with_zero_rate_stays_at_zero() {
        let mut clock = FrameClock::fixed(0.0);
        clock.advance();
        assert_eq!(clock.advance().elapsed, 0.0);
    }

    #[test]
    fn fixed_clock_never_yields_nan() {
        for fps in [1e-320, f64::MIN_POSITIVE / 4.0, f64::NAN, f64::INFINITY, -30.0] {
            let mut clock = FrameClock::fixed(fps);
            for _ in 0..3 {
                let elapsed = clock.advance().elapsed;
                assert!(elapsed.is_finite(), "fps={fps} elapsed={elapsed}");
            }
        }
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let mut clock = FrameClock::wall();
        let a = clock.advance();
        let b = clock.advance();
        assert!(b.elapsed >= a.elapsed);
        assert_eq!((a.frame, b.frame), (0, 1));
    }
}
