//! Error types for the session boundary.

/// Errors surfaced by session and parameter-setting operations.
///
/// The simulation core is a closed numerical system with no I/O, so the only
/// failure mode is programmer error: handing a session a parameter the
/// physics cannot accept. Those are rejected loudly here instead of being
/// allowed to propagate as NaN through every subsequent frame.
///
/// # Example
///
/// ```rust
/// use oscillab::{Error, Session};
///
/// let mut session = Session::new();
/// let err = session.set_speed(-1.0).unwrap_err();
/// assert!(matches!(err, Error::InvalidParameter { name: "speed", .. }));
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A physical or control parameter was out of range or non-finite.
    ///
    /// This typically occurs when:
    /// - mass or stiffness is zero, negative, or NaN
    /// - amplitude or friction coefficient is negative
    /// - the speed multiplier is non-positive or non-finite
    ///
    /// # Recovery
    ///
    /// The session state is untouched when this is returned; correct the
    /// value and call the setter again.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Returns `Ok(value)` when `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejecting non-positive parameter");
        Err(Error::InvalidParameter { name, value })
    }
}

/// Returns `Ok(value)` when `value` is finite and non-negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejecting negative parameter");
        Err(Error::InvalidParameter { name, value })
    }
}

/// Returns `Ok(value)` when `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(name, value, "rejecting non-finite parameter");
        Err(Error::InvalidParameter { name, value })
    }
}
