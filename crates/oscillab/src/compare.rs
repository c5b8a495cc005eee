//! Side-by-side evaluation of two independent oscillators.

use kinema::{Energies, Oscillator, Sample};

/// Two mechanically independent oscillators evaluated at the same instant.
///
/// There is no coupling force between the systems; "comparison" is purely
/// visual and temporal. An optional additive phase offset can be applied to
/// the second oscillator (`φ₂_effective = φ₂ + Δφ` when enabled), which is a
/// pure input transformation.
///
/// # Example
///
/// ```rust
/// use kinema::Oscillator;
/// use oscillab::OscillatorPair;
///
/// let pair = OscillatorPair::new(
///     Oscillator::new(1.0, 4.0, 60.0, 0.0),
///     Oscillator::new(2.0, 4.0, 60.0, 0.0),
/// );
/// let s = pair.sample(1.0);
/// // Same spring, heavier second mass: slower oscillation
/// assert!(pair.second.period() > pair.first.period());
/// let _ = (s.first.y, s.second.y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OscillatorPair {
    /// The first oscillator.
    pub first: Oscillator,
    /// The second oscillator (phase offset not yet applied).
    pub second: Oscillator,
    /// Additive phase offset for the second oscillator, in radians.
    pub phase_offset: f64,
    /// Whether `phase_offset` is applied.
    pub offset_enabled: bool,
}

/// Both oscillators' kinematic samples and energies at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairSample {
    /// Kinematics of the first oscillator.
    pub first: Sample,
    /// Kinematics of the second oscillator.
    pub second: Sample,
    /// Energies of the first oscillator.
    pub first_energies: Energies,
    /// Energies of the second oscillator.
    pub second_energies: Energies,
}

impl OscillatorPair {
    /// Creates a pair with the phase offset disabled.
    #[inline]
    pub const fn new(first: Oscillator, second: Oscillator) -> Self {
        Self {
            first,
            second,
            phase_offset: 0.0,
            offset_enabled: false,
        }
    }

    /// The second oscillator with the phase offset applied when enabled.
    #[inline]
    pub fn effective_second(&self) -> Oscillator {
        let mut osc = self.second;
        if self.offset_enabled {
            osc.phase += self.phase_offset;
        }
        osc
    }

    /// Evaluates both oscillators at simulated time `t`.
    pub fn sample(&self, t: f64) -> PairSample {
        let second = self.effective_second();
        PairSample {
            first: self.first.sample(t),
            second: second.sample(t),
            first_energies: self.first.energies(t),
            second_energies: second.energies(t),
        }
    }
}
