//! Free-function kinematics for simple harmonic motion.
//!
//! These are the closed-form solutions of `m·ẍ = -k·x`, expressed in terms
//! of amplitude `A`, angular frequency `ω`, time `t`, and initial phase `φ`.
//! All functions are pure and safe to call from any context.

use crate::math;
use core::f64::consts::TAU;

/// Returns a time delta for a given number of frames per second.
///
/// This value can be used as the frame delta when driving a simulation
/// session at a fixed rate. Note that rendering hosts usually provide the
/// measured frame delta as well, which you should prefer when available.
///
/// # Example
///
/// ```rust
/// use kinema::fps;
///
/// let dt = fps(60);
/// assert!((dt - 1.0 / 60.0).abs() < 1e-12);
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / n as f64
}

/// Displacement of simple harmonic motion: `y = A·sin(ωt + φ)`.
#[inline]
pub fn displacement(amplitude: f64, omega: f64, t: f64, phi: f64) -> f64 {
    amplitude * math::sin(omega * t + phi)
}

/// Velocity of simple harmonic motion: `v = A·ω·cos(ωt + φ)`.
#[inline]
pub fn velocity(amplitude: f64, omega: f64, t: f64, phi: f64) -> f64 {
    amplitude * omega * math::cos(omega * t + phi)
}

/// Acceleration of simple harmonic motion: `a = -A·ω²·sin(ωt + φ)`.
///
/// Equal to `-ω²` times [`displacement`], which is the defining property of
/// SHM (restoring acceleration proportional to displacement).
#[inline]
pub fn acceleration(amplitude: f64, omega: f64, t: f64, phi: f64) -> f64 {
    -amplitude * omega * omega * math::sin(omega * t + phi)
}

/// A point on the uniform circular motion that projects onto SHM.
///
/// The `y` component equals [`displacement`] at the same instant; watching
/// the circle "from the side" is exactly simple harmonic motion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularPoint {
    /// Horizontal coordinate: `A·cos(ωt + φ)`.
    pub x: f64,
    /// Vertical coordinate: `A·sin(ωt + φ)`.
    pub y: f64,
    /// The rotation angle `ωt + φ`, in radians (not normalized).
    pub angle: f64,
}

/// Position on the reference circle of radius `A` at time `t`.
///
/// # Example
///
/// ```rust
/// use kinema::circular_position;
///
/// let p = circular_position(2.0, 1.0, 0.0, 0.0);
/// assert!((p.x - 2.0).abs() < 1e-12);
/// assert!(p.y.abs() < 1e-12);
/// ```
#[inline]
pub fn circular_position(amplitude: f64, omega: f64, t: f64, phi: f64) -> CircularPoint {
    let angle = omega * t + phi;
    CircularPoint {
        x: amplitude * math::cos(angle),
        y: amplitude * math::sin(angle),
        angle,
    }
}

/// Angular frequency of a spring-mass system: `ω = √(k/m)`.
///
/// The caller must guarantee `mass > 0`; a non-positive mass yields NaN or
/// infinity per IEEE-754, which propagates through subsequent calls.
#[inline]
pub fn angular_frequency(stiffness: f64, mass: f64) -> f64 {
    math::sqrt(stiffness / mass)
}

/// Period of oscillation: `T = 2π/ω`.
#[inline]
pub fn period(omega: f64) -> f64 {
    TAU / omega
}

/// Frequency of oscillation: `f = ω/2π`.
#[inline]
pub fn frequency(omega: f64) -> f64 {
    omega / TAU
}

/// Linear restoring force: `F = -k·x`.
#[inline]
pub fn restoring_force(stiffness: f64, x: f64) -> f64 {
    -stiffness * x
}

/// Kinetic energy: `KE = ½mv²`.
#[inline]
pub fn kinetic_energy(mass: f64, v: f64) -> f64 {
    0.5 * mass * v * v
}

/// Elastic potential energy: `PE = ½kx²`.
///
/// The sum `KE + PE` is invariant over time in the undamped case and equals
/// `½kA²`.
#[inline]
pub fn potential_energy(stiffness: f64, x: f64) -> f64 {
    0.5 * stiffness * x * x
}

/// Normalizes a phase angle into `[0, 2π)`.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::PI;
/// use kinema::normalize_phase;
///
/// assert!((normalize_phase(-PI) - PI).abs() < 1e-12);
/// assert!(normalize_phase(2.0 * PI).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_phase(phi: f64) -> f64 {
    let r = phi % TAU;
    if r < 0.0 { r + TAU } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_fps() {
        assert!(approx_eq(fps(60), 1.0 / 60.0));
        assert!(approx_eq(fps(30), 1.0 / 30.0));
        assert!(approx_eq(fps(120), 1.0 / 120.0));
    }

    #[test]
    fn test_displacement_at_zero() {
        // φ = 0 starts at the origin, φ = π/2 starts at the positive peak
        assert!(approx_eq(displacement(1.0, 2.0, 0.0, 0.0), 0.0));
        assert!(approx_eq(displacement(1.0, 2.0, 0.0, FRAC_PI_2), 1.0));
    }

    #[test]
    fn test_velocity_peaks_at_equilibrium() {
        // At y = 0 (φ = 0, t = 0) speed is maximal: v = Aω
        assert!(approx_eq(velocity(3.0, 2.0, 0.0, 0.0), 6.0));
        // At the peak (φ = π/2, t = 0) velocity is zero
        assert!(approx_eq(velocity(3.0, 2.0, 0.0, FRAC_PI_2), 0.0));
    }

    #[test]
    fn test_acceleration_opposes_displacement() {
        let (a, w, phi) = (2.0, 3.0, 0.7);
        for i in 0..50 {
            let t = i as f64 * 0.13;
            let y = displacement(a, w, t, phi);
            let acc = acceleration(a, w, t, phi);
            assert!(approx_eq(acc, -w * w * y));
        }
    }

    #[test]
    fn test_circular_projection_matches_displacement() {
        let (a, w, phi) = (80.0, 2.0, FRAC_PI_2);
        for i in 0..100 {
            let t = i as f64 * 0.05;
            let p = circular_position(a, w, t, phi);
            assert!(approx_eq(p.y, displacement(a, w, t, phi)));
        }
    }

    #[test]
    fn test_circular_radius_invariant() {
        let p = circular_position(5.0, 1.3, 2.7, 0.4);
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!(approx_eq(r, 5.0));
    }

    #[test]
    fn test_angular_frequency() {
        assert!(approx_eq(angular_frequency(4.0, 1.0), 2.0));
        assert!(approx_eq(angular_frequency(10.0, 1.0), 10.0_f64.sqrt()));
        // Heavier mass, slower oscillation
        assert!(angular_frequency(4.0, 2.0) < angular_frequency(4.0, 1.0));
    }

    #[test]
    fn test_period_frequency_reciprocal() {
        let omega = 3.7;
        assert!(approx_eq(period(omega) * frequency(omega), 1.0));
        assert!(approx_eq(period(2.0), PI));
    }

    #[test]
    fn test_restoring_force_sign() {
        assert!(approx_eq(restoring_force(10.0, 0.5), -5.0));
        assert!(approx_eq(restoring_force(10.0, -0.5), 5.0));
        assert!(approx_eq(restoring_force(10.0, 0.0), 0.0));
    }

    #[test]
    fn test_energy_formulas() {
        assert!(approx_eq(kinetic_energy(2.0, 3.0), 9.0));
        assert!(approx_eq(potential_energy(10.0, 2.0), 20.0));
    }

    #[test]
    fn test_normalize_phase_range() {
        for i in -20..20 {
            let phi = i as f64 * 0.97;
            let n = normalize_phase(phi);
            assert!((0.0..TAU).contains(&n), "normalize_phase({phi}) = {n}");
            // Same angle modulo 2π
            assert!(approx_eq((phi - n).rem_euclid(TAU).min(TAU - (phi - n).rem_euclid(TAU)), 0.0));
        }
    }
}
