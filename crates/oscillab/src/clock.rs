//! Simulated time source driven by wall-clock frame deltas.

use crate::error::{self, Error};

/// Speed multipliers offered by the reference UI.
///
/// The engine itself accepts any positive finite scalar via
/// [`Clock::set_speed`]; this list exists for hosts that want the stock
/// quarter/half/full presets.
pub const SPEED_PRESETS: [f64; 3] = [0.25, 0.5, 1.0];

/// Advances simulated time from wall-clock deltas, gated by play state.
///
/// One clock exists per simulation session. Each frame the host calls
/// [`advance`](Clock::advance) with the measured real-time delta; the clock
/// scales it by the speed multiplier and accumulates it only while playing.
///
/// # Example
///
/// ```rust
/// use oscillab::Clock;
///
/// let mut clock = Clock::new();
/// assert_eq!(clock.advance(0.016), 0.0); // paused by default
///
/// clock.set_playing(true);
/// let dt = clock.advance(0.016);
/// assert!((dt - 0.016).abs() < 1e-12);
/// assert!((clock.t() - 0.016).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    t: f64,
    playing: bool,
    speed: f64,
}

impl Clock {
    /// Creates a paused clock at `t = 0` with speed `1.0`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            t: 0.0,
            playing: false,
            speed: 1.0,
        }
    }

    /// Advances simulated time by `real_dt * speed` and returns the applied
    /// simulated delta.
    ///
    /// Returns `0.0` without mutating anything while paused. A negative or
    /// non-finite `real_dt` is clamped to zero rather than rewinding time.
    pub fn advance(&mut self, real_dt: f64) -> f64 {
        if !self.playing {
            return 0.0;
        }
        let real_dt = if real_dt.is_finite() && real_dt > 0.0 {
            real_dt
        } else {
            0.0
        };
        let dt = real_dt * self.speed;
        self.t += dt;
        dt
    }

    /// Current simulated time in seconds.
    #[inline]
    pub const fn t(&self) -> f64 {
        self.t
    }

    /// Whether the clock is currently advancing.
    #[inline]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current speed multiplier.
    #[inline]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Starts or pauses the clock. Pausing freezes `t`; no state is lost.
    #[inline]
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Toggles between playing and paused.
    #[inline]
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Sets the speed multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `speed` is non-positive or
    /// non-finite. The previous speed is retained on error.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), Error> {
        self.speed = error::require_positive("speed", speed)?;
        Ok(())
    }

    /// Rewinds simulated time to zero. Play state and speed are untouched;
    /// session-level reset decides those.
    #[inline]
    pub fn reset(&mut self) {
        self.t = 0.0;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
