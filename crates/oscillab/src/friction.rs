//! Symplectic Euler integration of a spring-mass system under Coulomb
//! kinetic friction.
//!
//! This is the one part of the engine with no closed-form solution driving
//! it: the friction force flips sign with velocity, so the motion is
//! integrated numerically at a fixed physics sub-step decoupled from the
//! caller's frame rate. Velocity-sign reversals are the discrete events of
//! interest; they feed the peak and equilibrium logs and gate the stopping
//! test.

use crate::error::{self, Error};
use crate::events::{EquilibriumLog, PeakLog};

/// Fixed physics sub-step in seconds.
///
/// Chosen to keep the explicit integrator stable across the stiffness range
/// in use; frame deltas are split into sub-steps of at most this size, so
/// per-step error is bounded independent of rendering frame-rate variance.
pub const PHYS_DT: f64 = 2e-4;

/// Velocities with magnitude at or below this are treated as rest when
/// computing the friction force, avoiding sign oscillation near zero.
pub const VEL_EPSILON: f64 = 1e-10;

/// Minimum pre-reversal speed for a sign change to count as a reversal,
/// filtering spurious triggers near rest.
pub const REVERSAL_EPSILON: f64 = 1e-8;

/// Static-friction margin added to `μ'` in the stopping test: the mass
/// stops when `|k·x| <= (μ' + STOP_MARGIN)·m·g` at a reversal.
pub const STOP_MARGIN: f64 = 0.05;

/// Defensive upper bound on sub-steps per `step` call (40 s of simulated
/// time at [`PHYS_DT`]); normal frame deltas stay far below this.
pub const MAX_SUBSTEPS: usize = 200_000;

/// Physical parameters of the friction oscillator.
///
/// `gravity` is only a scale for the friction force magnitude `μ'mg`; the
/// model is a 1-D horizontal spring-mass system, not full gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionParams {
    /// Mass `m` in kilograms.
    pub mass: f64,
    /// Spring constant `k` in newtons per meter.
    pub stiffness: f64,
    /// Gravity proxy `g`, scaling the friction force.
    pub gravity: f64,
    /// Kinetic friction coefficient `μ'`. Zero disables friction.
    pub mu: f64,
}

impl Default for FrictionParams {
    /// The reference configuration: `m = 1`, `k = 10`, `g = 4`, `μ' = 0.1`.
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 10.0,
            gravity: 4.0,
            mu: 0.1,
        }
    }
}

impl FrictionParams {
    /// Angular frequency `√(k/m)` of the underlying undamped oscillator.
    #[inline]
    pub fn omega(&self) -> f64 {
        kinema::angular_frequency(self.stiffness, self.mass)
    }

    /// Magnitude of the dynamic equilibrium offset, `μ'mg/k`.
    #[inline]
    pub fn equilibrium_offset(&self) -> f64 {
        self.mu * self.mass * self.gravity / self.stiffness
    }

    fn validate(&self) -> Result<(), Error> {
        error::require_positive("mass", self.mass)?;
        error::require_positive("stiffness", self.stiffness)?;
        error::require_non_negative("gravity", self.gravity)?;
        error::require_non_negative("mu", self.mu)?;
        Ok(())
    }
}

/// Mutable integration state: `{t, x, v, stopped}`.
///
/// Created at simulation start with `x = A0`, `v = 0`. Once `stopped` is set
/// the state is terminal: position and velocity freeze until an external
/// reset recreates the state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionState {
    /// Simulated time in seconds.
    pub t: f64,
    /// Position.
    pub x: f64,
    /// Velocity.
    pub v: f64,
    /// Whether static friction has pinned the mass (terminal).
    pub stopped: bool,
}

/// Stateful friction oscillator: integrator plus its event logs.
///
/// # Example
///
/// ```rust
/// use oscillab::{FrictionParams, FrictionSim};
///
/// let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
/// for _ in 0..600 {
///     sim.step(1.0 / 60.0); // 10 seconds at 60 FPS
/// }
/// // Amplitude has decayed and peaks were logged along the way
/// assert!(sim.state().x.abs() < 1.0);
/// assert!(sim.peaks().len() > 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionSim {
    params: FrictionParams,
    initial_amplitude: f64,
    state: FrictionState,
    peaks: PeakLog,
    equilibria: EquilibriumLog,
}

impl FrictionSim {
    /// Creates a simulation released from rest at `x = initial_amplitude`.
    ///
    /// The peak log is seeded with the release point `{t: 0, y: A0}` so the
    /// envelope starts at the initial amplitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if mass or stiffness is not
    /// strictly positive, if gravity or `μ'` is negative, or if any value
    /// (including `initial_amplitude`) is non-finite.
    pub fn new(params: FrictionParams, initial_amplitude: f64) -> Result<Self, Error> {
        params.validate()?;
        error::require_non_negative("initial_amplitude", initial_amplitude)?;
        Ok(Self::new_unchecked(params, initial_amplitude))
    }

    /// Assembles a simulation from parameters already validated by the
    /// session layer.
    pub(crate) fn new_unchecked(params: FrictionParams, initial_amplitude: f64) -> Self {
        let mut peaks = PeakLog::new();
        peaks.record(0.0, initial_amplitude);

        Self {
            params,
            initial_amplitude,
            state: FrictionState {
                t: 0.0,
                x: initial_amplitude,
                v: 0.0,
                stopped: false,
            },
            peaks,
            equilibria: EquilibriumLog::new(),
        }
    }

    /// Advances the simulation by one frame's worth of simulated time.
    ///
    /// `dt_frame` is split into `n = max(1, floor(dt_frame / PHYS_DT))`
    /// equal sub-steps integrated with semi-implicit (symplectic) Euler:
    /// velocity is updated before position, which keeps long-term energy
    /// behavior bounded where naive explicit Euler blows up.
    ///
    /// A negative or non-finite `dt_frame` is clamped to zero. Once the
    /// state is stopped, only `t` continues to advance.
    pub fn step(&mut self, dt_frame: f64) {
        let dt_frame = if dt_frame.is_finite() && dt_frame > 0.0 {
            dt_frame
        } else {
            return;
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = ((dt_frame / PHYS_DT).floor() as usize).clamp(1, MAX_SUBSTEPS);
        #[allow(clippy::cast_precision_loss)]
        let dt = dt_frame / n as f64;

        let FrictionParams {
            mass: m,
            stiffness: k,
            gravity: g,
            mu,
        } = self.params;

        for _ in 0..n {
            if !self.state.stopped {
                let old_v = self.state.v;

                // Kinetic friction opposes the current velocity; exactly at
                // rest it vanishes instead of flapping sign.
                let friction = if self.state.v.abs() > VEL_EPSILON {
                    -self.state.v.signum() * mu * m * g
                } else {
                    0.0
                };

                let accel = (-k * self.state.x + friction) / m;
                self.state.v += accel * dt;

                if old_v.abs() > REVERSAL_EPSILON && old_v * self.state.v <= 0.0 {
                    self.on_reversal(old_v);
                }

                if !self.state.stopped {
                    self.state.x += self.state.v * dt;
                }
            }
            self.state.t += dt;
        }
    }

    /// Handles a velocity sign reversal: logs the peak, logs the dynamic
    /// equilibrium offset, and runs the stopping test.
    ///
    /// The stopping test runs only here, at reversal instants. If the fixed
    /// epsilon thresholds ever prevent a clean sign reversal from being
    /// detected, the motion runs on until the next detected reversal; this
    /// discretization artifact is inherited from the reference
    /// implementation and kept as documented behavior.
    fn on_reversal(&mut self, old_v: f64) {
        let t = self.state.t;
        self.peaks.record(t, self.state.x);

        let FrictionParams {
            mass: m,
            stiffness: k,
            gravity: g,
            mu,
        } = self.params;

        if mu > 0.0 {
            // Equilibrium offset sign is opposite the pre-reversal velocity
            let offset = if old_v > 0.0 {
                -mu * m * g / k
            } else {
                mu * m * g / k
            };
            self.equilibria.record(t, offset);

            // Static friction beats the spring's pull: pin the mass
            if (k * self.state.x).abs() <= (mu + STOP_MARGIN) * m * g {
                self.state.v = 0.0;
                self.state.stopped = true;
                tracing::debug!(t, x = self.state.x, "friction oscillator stopped");
            }
        }
    }

    /// Current integration state.
    #[inline]
    pub const fn state(&self) -> &FrictionState {
        &self.state
    }

    /// The physical parameters this simulation was created with.
    #[inline]
    pub const fn params(&self) -> &FrictionParams {
        &self.params
    }

    /// The release amplitude `A0`.
    #[inline]
    pub const fn initial_amplitude(&self) -> f64 {
        self.initial_amplitude
    }

    /// Whether static friction has pinned the mass.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        self.state.stopped
    }

    /// Displacement peaks recorded at each velocity reversal.
    #[inline]
    pub const fn peaks(&self) -> &PeakLog {
        &self.peaks
    }

    /// Dynamic equilibrium offsets recorded at each reversal while `μ' > 0`.
    #[inline]
    pub const fn equilibria(&self) -> &EquilibriumLog {
        &self.equilibria
    }

    /// The instantaneous dynamic equilibrium position `∓μ'mg/k`, or `None`
    /// once stopped or when friction is disabled.
    pub fn dynamic_equilibrium(&self) -> Option<f64> {
        if self.state.stopped || self.params.mu <= 0.0 {
            return None;
        }
        let magnitude = self.params.equilibrium_offset();
        Some(if self.state.v >= 0.0 {
            -magnitude
        } else {
            magnitude
        })
    }

    /// Frictionless analytic reference released from the same amplitude:
    /// `y = A0·cos(ωt)` at the current simulated time.
    #[inline]
    pub fn analytic_reference(&self) -> f64 {
        self.initial_amplitude * (self.params.omega() * self.state.t).cos()
    }

    /// Discards all state and restarts from rest at `x = A0`, with both
    /// logs cleared and the peak log reseeded.
    pub fn reset(&mut self) {
        self.state = FrictionState {
            t: 0.0,
            x: self.initial_amplitude,
            v: 0.0,
            stopped: false,
        };
        self.peaks.clear();
        self.peaks.record(0.0, self.initial_amplitude);
        self.equilibria.clear();
        tracing::trace!("friction simulation reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(sim: &mut FrictionSim, seconds: f64) {
        let frame = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < seconds {
            sim.step(frame);
            elapsed += frame;
        }
    }

    #[test]
    fn test_starts_at_rest_at_amplitude() {
        let sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        assert_eq!(sim.state().x, 1.0);
        assert_eq!(sim.state().v, 0.0);
        assert!(!sim.is_stopped());
        // Peak log seeded with the release point
        assert_eq!(sim.peaks().len(), 1);
        assert_eq!(sim.peaks().as_slice()[0].y, 1.0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let bad = FrictionParams {
            mass: 0.0,
            ..FrictionParams::default()
        };
        assert!(FrictionSim::new(bad, 1.0).is_err());

        let bad = FrictionParams {
            mu: -0.1,
            ..FrictionParams::default()
        };
        assert!(FrictionSim::new(bad, 1.0).is_err());

        assert!(FrictionSim::new(FrictionParams::default(), -1.0).is_err());
        assert!(FrictionSim::new(FrictionParams::default(), f64::NAN).is_err());
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        sim.step(-0.1);
        sim.step(f64::NAN);
        sim.step(0.0);
        assert_eq!(sim.state().t, 0.0);
        assert_eq!(sim.state().x, 1.0);
    }

    #[test]
    fn test_peaks_alternate_in_sign() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        run_for(&mut sim, 8.0);

        let peaks = sim.peaks().as_slice();
        assert!(peaks.len() >= 4, "expected several reversals");
        for pair in peaks.windows(2) {
            assert!(
                pair[0].y * pair[1].y < 0.0,
                "peaks should alternate sign: {} then {}",
                pair[0].y,
                pair[1].y
            );
        }
    }

    #[test]
    fn test_peak_times_strictly_increase() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        run_for(&mut sim, 8.0);
        let peaks = sim.peaks().as_slice();
        for pair in peaks.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn test_equilibrium_sign_opposes_previous_velocity() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        run_for(&mut sim, 4.0);

        let offsets = sim.equilibria().as_slice();
        assert!(!offsets.is_empty());
        // Released from +A0, first swing is toward negative x, so the first
        // reversal has pre-reversal v < 0 and offset +μ'mg/k
        let expected = sim.params().equilibrium_offset();
        assert!((offsets[0].offset - expected).abs() < 1e-12);
        // Subsequent offsets alternate
        for pair in offsets.windows(2) {
            assert!(pair[0].offset * pair[1].offset < 0.0);
        }
    }

    #[test]
    fn test_no_equilibrium_events_without_friction() {
        let params = FrictionParams {
            mu: 0.0,
            ..FrictionParams::default()
        };
        let mut sim = FrictionSim::new(params, 1.0).unwrap();
        run_for(&mut sim, 10.0);
        assert!(sim.equilibria().is_empty());
        assert!(sim.peaks().len() > 2, "reversals are still logged");
    }

    #[test]
    fn test_stopped_state_is_terminal() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        run_for(&mut sim, 20.0);
        assert!(sim.is_stopped());

        let frozen = *sim.state();
        sim.step(1.0);
        assert_eq!(sim.state().x, frozen.x);
        assert_eq!(sim.state().v, 0.0);
        // Time still advances while stopped
        assert!(sim.state().t > frozen.t);
    }

    #[test]
    fn test_dynamic_equilibrium_tracks_velocity_sign() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        // At rest (v = 0) the offset reads as the negative branch
        let magnitude = sim.params().equilibrium_offset();
        assert_eq!(sim.dynamic_equilibrium(), Some(-magnitude));

        run_for(&mut sim, 0.5);
        // First swing: v < 0, equilibrium at +μ'mg/k
        assert!(sim.state().v < 0.0);
        assert_eq!(sim.dynamic_equilibrium(), Some(magnitude));

        run_for(&mut sim, 20.0);
        assert!(sim.is_stopped());
        assert_eq!(sim.dynamic_equilibrium(), None);
    }

    #[test]
    fn test_analytic_reference_starts_at_amplitude() {
        let sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        assert!((sim.analytic_reference() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        run_for(&mut sim, 20.0);
        assert!(sim.is_stopped());

        sim.reset();
        assert_eq!(sim.state().t, 0.0);
        assert_eq!(sim.state().x, 1.0);
        assert_eq!(sim.state().v, 0.0);
        assert!(!sim.is_stopped());
        assert_eq!(sim.peaks().len(), 1);
        assert!(sim.equilibria().is_empty());
    }

    #[test]
    fn test_sub_step_count_independent_of_frame_size() {
        // Integrating 2 s in large frames vs small frames should agree
        // closely, since both decompose into ~PHYS_DT sub-steps.
        let mut coarse = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();
        let mut fine = FrictionSim::new(FrictionParams::default(), 1.0).unwrap();

        for _ in 0..20 {
            coarse.step(0.1);
        }
        for _ in 0..2000 {
            fine.step(0.001);
        }

        assert!((coarse.state().t - fine.state().t).abs() < 1e-9);
        assert!(
            (coarse.state().x - fine.state().x).abs() < 1e-3,
            "coarse={} fine={}",
            coarse.state().x,
            fine.state().x
        );
    }
}
