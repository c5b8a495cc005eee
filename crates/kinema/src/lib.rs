#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]

//! # Kinema
//!
//! Closed-form kinematics for simple harmonic motion (SHM).
//!
//! Kinema provides:
//! - **Free functions**: displacement, velocity, acceleration, energy, and
//!   the uniform circular motion that projects onto SHM
//! - **Oscillator**: a spring-mass value type bundling `(m, k, A, φ)` with
//!   its derived angular frequency, period, and per-instant samples
//!
//! Everything here is pure and stateless: the same inputs always produce the
//! same outputs, and nothing allocates. Stateful integration (friction,
//! trails, sessions) lives in the `oscillab` crate, which builds on this one.
//!
//! ## Free function example
//!
//! ```rust
//! use kinema::{angular_frequency, displacement, velocity};
//!
//! let omega = angular_frequency(10.0, 1.0); // k = 10 N/m, m = 1 kg
//! let y = displacement(1.0, omega, 0.25, 0.0);
//! let v = velocity(1.0, omega, 0.25, 0.0);
//! assert!(y.is_finite() && v.is_finite());
//! ```
//!
//! ## Oscillator example
//!
//! ```rust
//! use kinema::Oscillator;
//!
//! let osc = Oscillator::new(1.0, 4.0, 60.0, 0.0);
//! let sample = osc.sample(1.5);
//! let energies = osc.energies(1.5);
//!
//! // Total mechanical energy is conserved: KE + PE = ½kA²
//! assert!((energies.total - osc.total_energy()).abs() < 1e-6);
//! let _ = sample.y;
//! ```
//!
//! ## Conventions
//!
//! Displacement follows `y = A·sin(ωt + φ)`, so `φ = π/2` starts at the
//! positive peak (cos-like motion) and `φ = 0` starts at the origin moving
//! upward. Inputs are assumed finite; NaN and infinity propagate per
//! IEEE-754 and are not treated specially.

mod math;
mod oscillator;
mod shm;

pub use oscillator::{Energies, Oscillator, Sample};
pub use shm::{
    CircularPoint, acceleration, angular_frequency, circular_position, displacement, fps,
    frequency, kinetic_energy, normalize_phase, period, potential_energy, restoring_force,
    velocity,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::oscillator::{Energies, Oscillator, Sample};
    pub use crate::shm::{
        CircularPoint, acceleration, angular_frequency, circular_position, displacement, fps,
        frequency, kinetic_energy, normalize_phase, period, potential_energy, restoring_force,
        velocity,
    };
}
