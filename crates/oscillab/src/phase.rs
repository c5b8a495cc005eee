//! Human-readable phase formatting and special-form classification.
//!
//! Phases are displayed as fractions of π ("π/2", "5π/6") rather than raw
//! radians, and a handful of initial phases collapse the general formula
//! `y = A·sin(ωt + φ)` into the pure sin/cos forms students learn first.

use kinema::normalize_phase;

/// Named fractions of π recognized by the formatters, with their plain-text
/// and LaTeX spellings.
const FRACTIONS: [(f64, &str, &str); 17] = [
    (0.0, "0", "0"),
    (1.0 / 6.0, "π/6", "\\frac{\\pi}{6}"),
    (1.0 / 4.0, "π/4", "\\frac{\\pi}{4}"),
    (1.0 / 3.0, "π/3", "\\frac{\\pi}{3}"),
    (1.0 / 2.0, "π/2", "\\frac{\\pi}{2}"),
    (2.0 / 3.0, "2π/3", "\\frac{2\\pi}{3}"),
    (3.0 / 4.0, "3π/4", "\\frac{3\\pi}{4}"),
    (5.0 / 6.0, "5π/6", "\\frac{5\\pi}{6}"),
    (1.0, "π", "\\pi"),
    (7.0 / 6.0, "7π/6", "\\frac{7\\pi}{6}"),
    (5.0 / 4.0, "5π/4", "\\frac{5\\pi}{4}"),
    (4.0 / 3.0, "4π/3", "\\frac{4\\pi}{3}"),
    (3.0 / 2.0, "3π/2", "\\frac{3\\pi}{2}"),
    (5.0 / 3.0, "5π/3", "\\frac{5\\pi}{3}"),
    (7.0 / 4.0, "7π/4", "\\frac{7\\pi}{4}"),
    (11.0 / 6.0, "11π/6", "\\frac{11\\pi}{6}"),
    (2.0, "2π", "2\\pi"),
];

/// Tolerance on the π-fraction when snapping to a named value.
const FRACTION_TOLERANCE: f64 = 0.01;

fn named_fraction(phi: f64) -> Result<&'static (f64, &'static str, &'static str), f64> {
    let fraction = normalize_phase(phi) / core::f64::consts::PI;
    FRACTIONS
        .iter()
        .find(|(value, _, _)| (fraction - value).abs() < FRACTION_TOLERANCE)
        .ok_or(fraction)
}

/// Formats a phase as a fraction of π, e.g. `"π/2"` or `"0.73π"`.
///
/// The phase is normalized into `[0, 2π)` first.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::PI;
/// use oscillab::format_phase;
///
/// assert_eq!(format_phase(PI / 2.0), "π/2");
/// assert_eq!(format_phase(-PI / 2.0), "3π/2");
/// assert_eq!(format_phase(0.73 * PI), "0.73π");
/// ```
pub fn format_phase(phi: f64) -> String {
    match named_fraction(phi) {
        Ok((_, label, _)) => (*label).to_string(),
        Err(fraction) => format!("{fraction:.2}π"),
    }
}

/// Formats a phase as a KaTeX-ready LaTeX fragment, e.g. `\frac{\pi}{2}`.
pub fn phase_to_latex(phi: f64) -> String {
    match named_fraction(phi) {
        Ok((_, _, latex)) => (*latex).to_string(),
        Err(fraction) => format!("{fraction:.2}\\pi"),
    }
}

/// Tolerance in degrees when classifying an initial phase as a special form.
const SPECIAL_FORM_TOLERANCE_DEG: f64 = 3.0;

/// The special shapes `y = A·sin(ωt + φ)` collapses into for particular
/// initial phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialForm {
    /// `φ ≈ 0`: `y = A·sin(ωt)` — starts at the origin moving upward.
    Sin,
    /// `φ ≈ π/2`: `y = A·cos(ωt)` — starts at the positive peak.
    Cos,
    /// `φ ≈ π`: `y = -A·sin(ωt)` — starts at the origin moving downward.
    NegSin,
    /// `φ ≈ 3π/2`: `y = -A·cos(ωt)` — starts at the negative peak.
    NegCos,
    /// Any other phase: the general sin form with an explicit offset.
    General,
}

impl SpecialForm {
    /// Classifies an initial phase, snapping within 3° of the special
    /// values.
    pub fn classify(phi: f64) -> Self {
        let deg = normalize_phase(phi).to_degrees();
        if deg < SPECIAL_FORM_TOLERANCE_DEG || deg > 360.0 - SPECIAL_FORM_TOLERANCE_DEG {
            Self::Sin
        } else if (deg - 90.0).abs() < SPECIAL_FORM_TOLERANCE_DEG {
            Self::Cos
        } else if (deg - 180.0).abs() < SPECIAL_FORM_TOLERANCE_DEG {
            Self::NegSin
        } else if (deg - 270.0).abs() < SPECIAL_FORM_TOLERANCE_DEG {
            Self::NegCos
        } else {
            Self::General
        }
    }
}

/// The displayed formula for an initial phase, as a LaTeX fragment.
///
/// Special phases yield the collapsed forms; anything else yields the
/// general `y = A \sin(\omega t + φ)` with the phase spelled out.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::PI;
/// use oscillab::formula_latex;
///
/// assert_eq!(formula_latex(PI / 2.0), "y = A \\cos(\\omega t)");
/// assert_eq!(
///     formula_latex(PI / 4.0),
///     "y = A \\sin(\\omega t + \\frac{\\pi}{4})"
/// );
/// ```
pub fn formula_latex(phi: f64) -> String {
    match SpecialForm::classify(phi) {
        SpecialForm::Sin => "y = A \\sin(\\omega t)".to_string(),
        SpecialForm::Cos => "y = A \\cos(\\omega t)".to_string(),
        SpecialForm::NegSin => "y = -A \\sin(\\omega t)".to_string(),
        SpecialForm::NegCos => "y = -A \\cos(\\omega t)".to_string(),
        SpecialForm::General => {
            format!("y = A \\sin(\\omega t + {})", phase_to_latex(phi))
        }
    }
}
