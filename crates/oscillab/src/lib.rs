#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]

//! # Oscillab
//!
//! Frame-driven simulation sessions for teaching simple harmonic motion.
//!
//! Where the [`kinema`] crate answers "where is the oscillator at time t?",
//! oscillab owns everything stateful around that question:
//!
//! - **[`Clock`]**: simulated time from wall-clock deltas, with play/pause
//!   and a speed multiplier
//! - **[`FrictionSim`]**: symplectic Euler integration of a spring-mass
//!   system under Coulomb kinetic friction, with reversal detection and a
//!   static-friction stopping rule
//! - **[`PeakLog`] / [`EquilibriumLog`]**: append-only histories of the
//!   discrete reversal events, for decay envelopes and equilibrium markers
//! - **[`Trail`]**: bounded per-frame sample buffers for plotting
//! - **[`OscillatorPair`]**: two independent oscillators compared at the
//!   same instant
//! - **[`Session`]**: the per-mode bundle a rendering host drives once per
//!   frame
//!
//! ## Example
//!
//! ```rust
//! use oscillab::{Frame, Mode, Session};
//!
//! let mut session = Session::new();
//! session.set_mode(Mode::Friction);
//! session.set_playing(true);
//!
//! // Drive at 60 FPS for two simulated seconds
//! for _ in 0..120 {
//!     let frame = session.update(1.0 / 60.0);
//!     if let Frame::Friction { state, peaks, .. } = frame {
//!         // Amplitude decays linearly under Coulomb friction
//!         assert!(state.x.is_finite());
//!         assert!(!peaks.is_empty());
//!     }
//! }
//! ```
//!
//! ## Threading
//!
//! Sessions are single-owner: exactly one caller mutates a session, once
//! per frame, and every step is synchronous and bounded. Nothing here
//! blocks, spawns, or shares.

mod clock;
mod compare;
mod error;
mod events;
mod friction;
mod phase;
mod session;
mod trail;

pub use clock::{Clock, SPEED_PRESETS};
pub use compare::{OscillatorPair, PairSample};
pub use error::Error;
pub use events::{EquilibriumEvent, EquilibriumLog, PeakLog, ReversalEvent};
pub use friction::{
    FrictionParams, FrictionSim, FrictionState, MAX_SUBSTEPS, PHYS_DT, REVERSAL_EPSILON,
    STOP_MARGIN, VEL_EPSILON,
};
pub use phase::{SpecialForm, format_phase, formula_latex, phase_to_latex};
pub use session::{
    COMPARE_TRAIL_CAP, CircularConfig, CompareConfig, FRICTION_TRAIL_CAP, Frame, FrictionConfig,
    GraphKind, LESSON_TRAIL_CAP, Mode, PhaseConfig, Session, SpringConfig,
};
pub use trail::{Trail, TrailPoint};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::clock::Clock;
    pub use crate::compare::{OscillatorPair, PairSample};
    pub use crate::error::Error;
    pub use crate::events::{EquilibriumEvent, EquilibriumLog, PeakLog, ReversalEvent};
    pub use crate::friction::{FrictionParams, FrictionSim, FrictionState};
    pub use crate::phase::SpecialForm;
    pub use crate::session::{Frame, GraphKind, Mode, Session};
    pub use crate::trail::{Trail, TrailPoint};
}
