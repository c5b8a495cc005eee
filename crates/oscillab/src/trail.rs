//! Bounded display trails for plotting time series.

use std::collections::VecDeque;

/// A minimal `{t, y}` trail point for modes that only plot displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailPoint {
    /// Simulated time in seconds.
    pub t: f64,
    /// Displacement.
    pub y: f64,
}

impl TrailPoint {
    /// Creates a trail point.
    #[inline]
    pub const fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}

/// A bounded, ordered sequence of per-frame samples, oldest evicted first.
///
/// Trails exist purely for display windowing: one sample is appended per
/// rendered frame while playing, and once the cap is reached the oldest
/// sample is dropped. They are not physically meaningful and, unlike the
/// peak and equilibrium logs, they forget.
///
/// # Example
///
/// ```rust
/// use oscillab::{Trail, TrailPoint};
///
/// let mut trail = Trail::new(3);
/// for i in 0..5 {
///     trail.push(TrailPoint::new(f64::from(i), 0.0));
/// }
/// assert_eq!(trail.len(), 3);
/// assert!((trail.oldest().unwrap().t - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trail<T> {
    points: VecDeque<T>,
    cap: usize,
}

impl<T> Trail<T> {
    /// Creates an empty trail retaining at most `cap` samples.
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap.min(4096)),
            cap,
        }
    }

    /// Appends a sample, evicting the oldest if the trail is full.
    pub fn push(&mut self, point: T) {
        if self.points.len() == self.cap {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trail holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The configured maximum length.
    #[inline]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Oldest retained sample, if any.
    #[inline]
    pub fn oldest(&self) -> Option<&T> {
        self.points.front()
    }

    /// Most recently appended sample, if any.
    #[inline]
    pub fn latest(&self) -> Option<&T> {
        self.points.back()
    }

    /// Iterates samples oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.points.iter()
    }

    /// Drops all samples, keeping the cap.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<'a, T> IntoIterator for &'a Trail<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
