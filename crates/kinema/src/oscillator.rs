//! A spring-mass oscillator value type over the free-function kinematics.
//!
//! [`Oscillator`] bundles the four physical parameters `(m, k, A, φ)` and
//! derives everything else on demand. It is `Copy` and immutable: changing a
//! parameter means constructing a new value, which is exactly the
//! discard-and-recreate semantics the session layer wants.

use crate::shm;

/// Immutable spring-mass oscillator parameters.
///
/// Angular frequency, period, and frequency are derived from mass and
/// stiffness (`ω = √(k/m)`), so energy conservation `KE + PE = ½kA²` holds
/// for every sample.
///
/// # Example
///
/// ```rust
/// use kinema::Oscillator;
///
/// let osc = Oscillator::new(2.0, 4.0, 60.0, 0.0);
/// assert!((osc.omega() - (4.0f64 / 2.0).sqrt()).abs() < 1e-12);
///
/// let s = osc.sample(0.0);
/// assert!(s.y.abs() < 1e-9); // φ = 0 starts at the origin
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oscillator {
    /// Mass `m` in kilograms. Must be positive.
    pub mass: f64,
    /// Spring constant `k` in newtons per meter. Must be positive.
    pub stiffness: f64,
    /// Amplitude `A` in abstract displacement units. Non-negative.
    pub amplitude: f64,
    /// Initial phase `φ` in radians. Any real value.
    pub phase: f64,
}

impl Oscillator {
    /// Creates an oscillator from mass, stiffness, amplitude, and phase.
    ///
    /// Inputs are assumed well-formed (`mass > 0`, `stiffness > 0`,
    /// `amplitude >= 0`, all finite); validation belongs at the session
    /// boundary. Malformed values propagate as NaN per IEEE-754.
    #[inline]
    pub const fn new(mass: f64, stiffness: f64, amplitude: f64, phase: f64) -> Self {
        Self {
            mass,
            stiffness,
            amplitude,
            phase,
        }
    }

    /// Creates an oscillator from a prescribed angular frequency.
    ///
    /// The stiffness is back-derived as `k = m·ω²` so that energy bookkeeping
    /// stays consistent. Useful for pedagogical setups that fix `ω` directly
    /// rather than deriving it from a spring.
    #[inline]
    pub fn with_omega(mass: f64, omega: f64, amplitude: f64, phase: f64) -> Self {
        Self {
            mass,
            stiffness: mass * omega * omega,
            amplitude,
            phase,
        }
    }

    /// Angular frequency `ω = √(k/m)` in radians per second.
    #[inline]
    pub fn omega(&self) -> f64 {
        shm::angular_frequency(self.stiffness, self.mass)
    }

    /// Period `T = 2π/ω` in seconds.
    #[inline]
    pub fn period(&self) -> f64 {
        shm::period(self.omega())
    }

    /// Frequency `f = 1/T` in hertz.
    #[inline]
    pub fn frequency(&self) -> f64 {
        shm::frequency(self.omega())
    }

    /// The initial phase normalized into `[0, 2π)`.
    #[inline]
    pub fn normalized_phase(&self) -> f64 {
        shm::normalize_phase(self.phase)
    }

    /// Kinematic state at time `t`: displacement, velocity, acceleration.
    #[inline]
    pub fn sample(&self, t: f64) -> Sample {
        let omega = self.omega();
        Sample {
            t,
            y: shm::displacement(self.amplitude, omega, t, self.phase),
            v: shm::velocity(self.amplitude, omega, t, self.phase),
            a: shm::acceleration(self.amplitude, omega, t, self.phase),
        }
    }

    /// Position on the reference circle at time `t`.
    #[inline]
    pub fn circular_position(&self, t: f64) -> shm::CircularPoint {
        shm::circular_position(self.amplitude, self.omega(), t, self.phase)
    }

    /// Kinetic, potential, and total energy at time `t`.
    #[inline]
    pub fn energies(&self, t: f64) -> Energies {
        let s = self.sample(t);
        let kinetic = shm::kinetic_energy(self.mass, s.v);
        let potential = shm::potential_energy(self.stiffness, s.y);
        Energies {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }

    /// Total mechanical energy `½kA²`, conserved over the whole motion.
    #[inline]
    pub fn total_energy(&self) -> f64 {
        shm::potential_energy(self.stiffness, self.amplitude)
    }

    /// Restoring force `-k·y` at time `t`.
    #[inline]
    pub fn restoring_force(&self, t: f64) -> f64 {
        shm::restoring_force(self.stiffness, self.sample(t).y)
    }
}

/// One analytic kinematic sample: `{t, y, v, a}`.
///
/// Produced fresh by every [`Oscillator::sample`] call; carries no identity
/// or lifecycle beyond the call that created it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Simulated time in seconds.
    pub t: f64,
    /// Displacement.
    pub y: f64,
    /// Velocity.
    pub v: f64,
    /// Acceleration.
    pub a: f64,
}

/// Kinetic, potential, and total mechanical energy at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Energies {
    /// Kinetic energy `½mv²`.
    pub kinetic: f64,
    /// Elastic potential energy `½ky²`.
    pub potential: f64,
    /// `kinetic + potential`, equal to `½kA²` in the undamped case.
    pub total: f64,
}
