//! Append-only event logs derived from velocity reversals.
//!
//! Unlike display [`Trail`](crate::Trail)s, these logs are a discrete,
//! irreversible history: entries are appended in strictly increasing
//! simulated time and are never reordered, mutated, or pruned. Consumers
//! read snapshots to draw decay envelopes and equilibrium markers.

/// A displacement peak recorded at a velocity sign reversal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReversalEvent {
    /// Simulated time of the reversal.
    pub t: f64,
    /// Displacement at the reversal, i.e. the peak value.
    pub y: f64,
}

/// A dynamic equilibrium offset recorded at a velocity sign reversal.
///
/// Under Coulomb friction the zero-net-force position sits at `∓μ'mg/k`,
/// with sign opposite the pre-reversal velocity direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilibriumEvent {
    /// Simulated time of the reversal.
    pub t: f64,
    /// Equilibrium offset `∓μ'mg/k`.
    pub offset: f64,
}

/// Monotonic, append-only log of displacement peaks.
///
/// Peak values alternate in sign after the first recorded reversal, since
/// reversals themselves alternate velocity direction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakLog {
    events: Vec<ReversalEvent>,
}

impl PeakLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends a peak. `t` must not be earlier than the latest entry.
    pub(crate) fn record(&mut self, t: f64, y: f64) {
        debug_assert!(
            self.events.last().is_none_or(|last| t >= last.t),
            "peak log time went backwards"
        );
        self.events.push(ReversalEvent { t, y });
    }

    /// All recorded peaks, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[ReversalEvent] {
        &self.events
    }

    /// Number of recorded peaks.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no peaks have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The most recent peak, if any.
    #[inline]
    pub fn last(&self) -> Option<&ReversalEvent> {
        self.events.last()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}

/// Monotonic, append-only log of dynamic equilibrium offsets.
///
/// Receives an entry at the same reversal instants as [`PeakLog`], but only
/// while friction is active (`μ' > 0`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquilibriumLog {
    events: Vec<EquilibriumEvent>,
}

impl EquilibriumLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub(crate) fn record(&mut self, t: f64, offset: f64) {
        debug_assert!(
            self.events.last().is_none_or(|last| t >= last.t),
            "equilibrium log time went backwards"
        );
        self.events.push(EquilibriumEvent { t, offset });
    }

    /// All recorded offsets, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[EquilibriumEvent] {
        &self.events
    }

    /// Number of recorded offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no offsets have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}
