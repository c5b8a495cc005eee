//! Simulation sessions: one owned bundle of clock, mode state, trails, and
//! logs, advanced once per rendered frame.
//!
//! A [`Session`] is the boundary handed to rendering hosts. Each frame the
//! host calls [`update`](Session::update) with the measured real-time delta
//! and receives a [`Frame`] snapshot of everything drawable. Control
//! operations (play/pause, speed, reset) act on the session as a whole.
//!
//! Changing any physical parameter discards and recreates the mode state
//! and pauses playback, rather than splicing the new parameter into an
//! in-progress motion. That coupling is deliberate: a parameter change
//! invalidates the simulation a student is watching, so it restarts cleanly
//! from `t = 0`.

use core::f64::consts::FRAC_PI_2;

use kinema::{CircularPoint, Energies, Oscillator, Sample};

use crate::clock::Clock;
use crate::compare::{OscillatorPair, PairSample};
use crate::error::{self, Error};
use crate::events::{EquilibriumEvent, ReversalEvent};
use crate::friction::{FrictionParams, FrictionSim, FrictionState};
use crate::phase::SpecialForm;
use crate::trail::{Trail, TrailPoint};

/// Trail cap for the circular-motion and phase modes.
pub const LESSON_TRAIL_CAP: usize = 2000;
/// Trail cap for each oscillator in the comparison mode.
pub const COMPARE_TRAIL_CAP: usize = 1500;
/// Trail cap for each of the two friction-mode traces.
pub const FRICTION_TRAIL_CAP: usize = 2500;

/// Fixed amplitude of the two lesson modes, in display units.
const LESSON_AMPLITUDE: f64 = 80.0;
/// Fixed angular frequency of the two lesson modes.
const LESSON_OMEGA: f64 = 2.0;
/// Nominal mass of the lesson oscillator (stiffness follows as `mω²`).
const LESSON_MASS: f64 = 1.0;

/// The four pedagogical modes, in increasing order of complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Mode 1: deriving SHM as the projection of uniform circular motion.
    CircularMotion,
    /// Mode 2: exploring the initial phase and the resulting formula.
    PhaseFormula,
    /// Mode 3: comparing two independent oscillators side by side.
    Comparison,
    /// Mode 4: oscillation with Coulomb friction.
    Friction,
}

/// Which kinematic graphs the phase mode displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphKind {
    /// Displacement only.
    Displacement,
    /// Velocity only.
    Velocity,
    /// Acceleration only.
    Acceleration,
    /// All three stacked.
    All,
}

/// Parameters of the circular-motion mode.
///
/// Amplitude, frequency, and phase are fixed for this lesson; only the
/// pedagogy step varies. The step gates which overlays a renderer shows and
/// changing it does not reset the motion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularConfig {
    /// Lesson step index (1, 1.5, 2 … 7).
    pub step: f64,
}

impl Default for CircularConfig {
    fn default() -> Self {
        Self { step: 1.0 }
    }
}

/// Parameters of the phase-exploration mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseConfig {
    /// Initial phase `φ` in radians.
    pub phi: f64,
    /// Which graphs to display; a display concern, changing it does not
    /// reset.
    pub graph: GraphKind,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            phi: FRAC_PI_2,
            graph: GraphKind::Displacement,
        }
    }
}

/// One spring's parameters in the comparison mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Mass in kilograms.
    pub mass: f64,
    /// Spring constant in newtons per meter.
    pub stiffness: f64,
    /// Amplitude in display units.
    pub amplitude: f64,
    /// Initial phase in radians.
    pub phase: f64,
}

impl SpringConfig {
    fn validate(&self) -> Result<(), Error> {
        error::require_positive("mass", self.mass)?;
        error::require_positive("stiffness", self.stiffness)?;
        error::require_non_negative("amplitude", self.amplitude)?;
        error::require_finite("phase", self.phase)?;
        Ok(())
    }

    fn oscillator(&self) -> Oscillator {
        Oscillator::new(self.mass, self.stiffness, self.amplitude, self.phase)
    }
}

/// Parameters of the comparison mode: two springs and an optional phase
/// offset applied to the second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// First spring.
    pub first: SpringConfig,
    /// Second spring.
    pub second: SpringConfig,
    /// Whether the phase offset is applied.
    pub offset_enabled: bool,
    /// Additive phase offset for the second spring, in radians.
    pub phase_offset: f64,
}

impl Default for CompareConfig {
    /// The reference setup: equal springs, double mass on the second.
    fn default() -> Self {
        Self {
            first: SpringConfig {
                mass: 1.0,
                stiffness: 4.0,
                amplitude: 60.0,
                phase: 0.0,
            },
            second: SpringConfig {
                mass: 2.0,
                stiffness: 4.0,
                amplitude: 60.0,
                phase: 0.0,
            },
            offset_enabled: false,
            phase_offset: 0.0,
        }
    }
}

impl CompareConfig {
    fn validate(&self) -> Result<(), Error> {
        self.first.validate()?;
        self.second.validate()?;
        error::require_finite("phase_offset", self.phase_offset)?;
        Ok(())
    }

    fn pair(&self) -> OscillatorPair {
        OscillatorPair {
            first: self.first.oscillator(),
            second: self.second.oscillator(),
            phase_offset: self.phase_offset,
            offset_enabled: self.offset_enabled,
        }
    }
}

/// Parameters of the friction mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrictionConfig {
    /// Physical parameters of the friction oscillator.
    pub params: FrictionParams,
    /// Release amplitude `A0`.
    pub initial_amplitude: f64,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            params: FrictionParams::default(),
            initial_amplitude: 1.0,
        }
    }
}

/// Per-mode owned state, discarded wholesale on reset or mode change.
#[derive(Debug, Clone)]
enum ModeState {
    Circular {
        osc: Oscillator,
        trail: Trail<Sample>,
    },
    Phase {
        osc: Oscillator,
        trail: Trail<Sample>,
    },
    Compare {
        pair: OscillatorPair,
        first_trail: Trail<TrailPoint>,
        second_trail: Trail<TrailPoint>,
    },
    Friction {
        sim: FrictionSim,
        reference_trail: Trail<TrailPoint>,
        friction_trail: Trail<TrailPoint>,
    },
}

/// Everything a renderer needs for one frame, borrowed from the session.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Frame<'a> {
    /// Circular-motion mode output.
    CircularMotion {
        /// Simulated time.
        t: f64,
        /// Current lesson step.
        step: f64,
        /// Analytic kinematics at `t`.
        sample: Sample,
        /// Position on the reference circle.
        circle: CircularPoint,
        /// Energy split at `t`.
        energies: Energies,
        /// Displacement/velocity/acceleration history.
        trail: &'a Trail<Sample>,
    },
    /// Phase-exploration mode output.
    PhaseFormula {
        /// Simulated time.
        t: f64,
        /// Analytic kinematics at `t`.
        sample: Sample,
        /// Position on the reference circle.
        circle: CircularPoint,
        /// Which special form the current phase collapses to.
        form: SpecialForm,
        /// Which graphs to display.
        graph: GraphKind,
        /// Kinematic history.
        trail: &'a Trail<Sample>,
    },
    /// Comparison mode output.
    Comparison {
        /// Simulated time.
        t: f64,
        /// Both oscillators' kinematics and energies.
        sample: PairSample,
        /// First oscillator's displacement history.
        first_trail: &'a Trail<TrailPoint>,
        /// Second oscillator's displacement history.
        second_trail: &'a Trail<TrailPoint>,
    },
    /// Friction mode output.
    Friction {
        /// Simulated time (the integrator's clock).
        t: f64,
        /// Frictionless analytic reference `A0·cos(ωt)`.
        reference_y: f64,
        /// Integrator state snapshot.
        state: FrictionState,
        /// Instantaneous dynamic equilibrium position, if still moving.
        equilibrium: Option<f64>,
        /// Peak log for the decay envelope.
        peaks: &'a [ReversalEvent],
        /// Equilibrium offsets logged at reversals.
        equilibria: &'a [EquilibriumEvent],
        /// Frictionless trace history.
        reference_trail: &'a Trail<TrailPoint>,
        /// Friction trace history.
        friction_trail: &'a Trail<TrailPoint>,
    },
}

/// One simulation session: the single writer of all the state it owns.
///
/// # Example
///
/// ```rust
/// use oscillab::{Frame, Mode, Session};
///
/// let mut session = Session::new();
/// session.set_mode(Mode::Friction);
/// session.set_playing(true);
///
/// for _ in 0..60 {
///     let frame = session.update(1.0 / 60.0);
///     if let Frame::Friction { state, .. } = frame {
///         assert!(state.x.is_finite());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    clock: Clock,
    mode: Mode,
    circular: CircularConfig,
    phase: PhaseConfig,
    compare: CompareConfig,
    friction: FrictionConfig,
    state: ModeState,
}

impl Session {
    /// Creates a paused session in the circular-motion mode with the
    /// reference parameters.
    pub fn new() -> Self {
        let circular = CircularConfig::default();
        let phase = PhaseConfig::default();
        let compare = CompareConfig::default();
        let friction = FrictionConfig::default();
        let state = Self::build_state(Mode::CircularMotion, &phase, &compare, &friction);
        Self {
            clock: Clock::new(),
            mode: Mode::CircularMotion,
            circular,
            phase,
            compare,
            friction,
            state,
        }
    }

    fn build_state(
        mode: Mode,
        phase: &PhaseConfig,
        compare: &CompareConfig,
        friction: &FrictionConfig,
    ) -> ModeState {
        match mode {
            Mode::CircularMotion => ModeState::Circular {
                osc: Oscillator::with_omega(LESSON_MASS, LESSON_OMEGA, LESSON_AMPLITUDE, FRAC_PI_2),
                trail: Trail::new(LESSON_TRAIL_CAP),
            },
            Mode::PhaseFormula => ModeState::Phase {
                osc: Oscillator::with_omega(LESSON_MASS, LESSON_OMEGA, LESSON_AMPLITUDE, phase.phi),
                trail: Trail::new(LESSON_TRAIL_CAP),
            },
            Mode::Comparison => ModeState::Compare {
                pair: compare.pair(),
                first_trail: Trail::new(COMPARE_TRAIL_CAP),
                second_trail: Trail::new(COMPARE_TRAIL_CAP),
            },
            Mode::Friction => ModeState::Friction {
                // Config invariant: only validated parameters are stored
                sim: FrictionSim::new_unchecked(friction.params, friction.initial_amplitude),
                reference_trail: Trail::new(FRICTION_TRAIL_CAP),
                friction_trail: Trail::new(FRICTION_TRAIL_CAP),
            },
        }
    }

    /// Discards all mode state, rewinds to `t = 0`, and pauses.
    ///
    /// Atomic from the caller's perspective: after this returns, trails and
    /// logs are empty (the peak log reseeded) and nothing of the prior run
    /// is observable.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.clock.set_playing(false);
        self.state = Self::build_state(self.mode, &self.phase, &self.compare, &self.friction);
        tracing::debug!(mode = ?self.mode, "session reset");
    }

    /// Like [`reset`](Session::reset) but resumes playback immediately.
    pub fn restart(&mut self) {
        self.reset();
        self.clock.set_playing(true);
    }

    /// Switches mode, discarding the previous mode's state and pausing.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
        tracing::debug!(?mode, "mode selected");
    }

    /// The active mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current simulated time.
    #[inline]
    pub const fn t(&self) -> f64 {
        self.clock.t()
    }

    /// Whether the session is advancing.
    #[inline]
    pub const fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Current speed multiplier.
    #[inline]
    pub const fn speed(&self) -> f64 {
        self.clock.speed()
    }

    /// Starts or pauses playback without touching any state.
    #[inline]
    pub fn set_playing(&mut self, playing: bool) {
        self.clock.set_playing(playing);
    }

    /// Toggles between playing and paused.
    #[inline]
    pub fn toggle_playing(&mut self) {
        self.clock.toggle();
    }

    /// Sets the speed multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-positive or non-finite
    /// multiplier.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), Error> {
        self.clock.set_speed(speed)
    }

    /// Sets the circular-motion lesson step. Display state only: the motion
    /// is not reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-finite step.
    pub fn set_step(&mut self, step: f64) -> Result<(), Error> {
        self.circular.step = error::require_finite("step", step)?;
        Ok(())
    }

    /// Selects which graphs the phase mode shows. Display state only.
    pub fn set_graph(&mut self, graph: GraphKind) {
        self.phase.graph = graph;
    }

    /// Sets the phase mode's initial phase, resetting and pausing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-finite phase; the
    /// session is untouched on error.
    pub fn set_phase(&mut self, phi: f64) -> Result<(), Error> {
        self.phase.phi = error::require_finite("phi", phi)?;
        self.reset();
        Ok(())
    }

    /// Replaces the comparison-mode configuration, resetting and pausing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either spring has non-positive
    /// mass or stiffness, negative amplitude, or any non-finite value; the
    /// session is untouched on error.
    pub fn set_compare(&mut self, config: CompareConfig) -> Result<(), Error> {
        config.validate()?;
        self.compare = config;
        self.reset();
        Ok(())
    }

    /// Sets the friction coefficient `μ'`, resetting and pausing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a negative or non-finite
    /// coefficient; the session is untouched on error.
    pub fn set_mu(&mut self, mu: f64) -> Result<(), Error> {
        self.friction.params.mu = error::require_non_negative("mu", mu)?;
        self.reset();
        Ok(())
    }

    /// Replaces the friction-mode configuration, resetting and pausing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if mass or stiffness is not
    /// strictly positive, gravity or `μ'` is negative, or any value is
    /// non-finite; the session is untouched on error.
    pub fn set_friction(&mut self, config: FrictionConfig) -> Result<(), Error> {
        // Validation lives in FrictionSim::new; the built sim is discarded
        FrictionSim::new(config.params, config.initial_amplitude)?;
        self.friction = config;
        self.reset();
        Ok(())
    }

    /// The active circular-motion configuration.
    #[inline]
    pub const fn circular_config(&self) -> &CircularConfig {
        &self.circular
    }

    /// The active phase-mode configuration.
    #[inline]
    pub const fn phase_config(&self) -> &PhaseConfig {
        &self.phase
    }

    /// The active comparison configuration.
    #[inline]
    pub const fn compare_config(&self) -> &CompareConfig {
        &self.compare
    }

    /// The active friction configuration.
    #[inline]
    pub const fn friction_config(&self) -> &FrictionConfig {
        &self.friction
    }

    /// Advances the session by one frame and returns the drawable snapshot.
    ///
    /// `real_dt` is the wall-clock delta since the previous frame in
    /// seconds; it is scaled by the speed multiplier and ignored while
    /// paused (the frame is still produced so a paused host keeps drawing).
    /// Trails grow only while playing.
    pub fn update(&mut self, real_dt: f64) -> Frame<'_> {
        let dt = self.clock.advance(real_dt);
        let playing = self.clock.is_playing();
        let t = self.clock.t();

        match &mut self.state {
            ModeState::Circular { osc, trail } | ModeState::Phase { osc, trail } => {
                if playing {
                    trail.push(osc.sample(t));
                }
            }
            ModeState::Compare {
                pair,
                first_trail,
                second_trail,
            } => {
                if playing {
                    let s = pair.sample(t);
                    first_trail.push(TrailPoint::new(t, s.first.y));
                    second_trail.push(TrailPoint::new(t, s.second.y));
                }
            }
            ModeState::Friction {
                sim,
                reference_trail,
                friction_trail,
            } => {
                if playing {
                    sim.step(dt);
                    let sim_t = sim.state().t;
                    reference_trail.push(TrailPoint::new(sim_t, sim.analytic_reference()));
                    friction_trail.push(TrailPoint::new(sim_t, sim.state().x));
                }
            }
        }

        self.frame()
    }

    /// The drawable snapshot at the current instant, without advancing.
    pub fn frame(&self) -> Frame<'_> {
        let t = self.clock.t();
        match &self.state {
            ModeState::Circular { osc, trail } => Frame::CircularMotion {
                t,
                step: self.circular.step,
                sample: osc.sample(t),
                circle: osc.circular_position(t),
                energies: osc.energies(t),
                trail,
            },
            ModeState::Phase { osc, trail } => Frame::PhaseFormula {
                t,
                sample: osc.sample(t),
                circle: osc.circular_position(t),
                form: SpecialForm::classify(self.phase.phi),
                graph: self.phase.graph,
                trail,
            },
            ModeState::Compare {
                pair,
                first_trail,
                second_trail,
            } => Frame::Comparison {
                t,
                sample: pair.sample(t),
                first_trail,
                second_trail,
            },
            ModeState::Friction {
                sim,
                reference_trail,
                friction_trail,
            } => Frame::Friction {
                t: sim.state().t,
                reference_y: sim.analytic_reference(),
                state: *sim.state(),
                equilibrium: sim.dynamic_equilibrium(),
                peaks: sim.peaks().as_slice(),
                equilibria: sim.equilibria().as_slice(),
                reference_trail,
                friction_trail,
            },
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
